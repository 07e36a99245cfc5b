use crate::scoring::{
    estimate_for_claims, estimate_pricing, pricing::service_multiplier, ClaimsVolume,
    PricingModel,
};

#[test]
fn mid_size_practice_quote_matches_worked_example() {
    let estimate = estimate_pricing(ClaimsVolume::OneToFiveThousand, 3);

    assert_eq!(estimate.fte_model.staff_count, 2);
    assert_eq!(estimate.fte_model.monthly_cost, 8_000);
    assert_eq!(estimate.fte_model.annual_cost, 96_000);
    assert_eq!(estimate.per_claim_model.cost_per_claim, 3.0);
    assert_eq!(estimate.per_claim_model.monthly_cost, 9_000);
    assert_eq!(estimate.hybrid_model.base_cost, 4_800);
    assert_eq!(estimate.hybrid_model.variable_cost, 3_600);
    assert_eq!(estimate.hybrid_model.monthly_cost, 8_400);
    assert_eq!(estimate.recommended_model, PricingModel::PerClaim);
}

#[test]
fn recommendation_boundaries_are_exclusive_at_both_ends() {
    assert_eq!(PricingModel::recommended_for(4_999), PricingModel::PerClaim);
    assert_eq!(PricingModel::recommended_for(5_000), PricingModel::Fte);
    assert_eq!(PricingModel::recommended_for(20_000), PricingModel::Fte);
    assert_eq!(PricingModel::recommended_for(20_001), PricingModel::Hybrid);
}

#[test]
fn buckets_map_to_expected_recommendations() {
    let recommendations: Vec<PricingModel> = ClaimsVolume::KNOWN
        .iter()
        .map(|bucket| estimate_pricing(*bucket, 0).recommended_model)
        .collect();

    assert_eq!(
        recommendations,
        vec![
            PricingModel::PerClaim,
            PricingModel::PerClaim,
            PricingModel::Fte,
            PricingModel::Fte,
            PricingModel::Hybrid,
            PricingModel::Hybrid,
        ]
    );
}

#[test]
fn annual_cost_is_twelve_months_for_every_model() {
    for bucket in ClaimsVolume::KNOWN {
        for services in 0..=20 {
            let estimate = estimate_pricing(*bucket, services);
            assert_eq!(
                estimate.fte_model.annual_cost,
                estimate.fte_model.monthly_cost * 12
            );
            assert_eq!(
                estimate.per_claim_model.annual_cost,
                estimate.per_claim_model.monthly_cost * 12
            );
            assert_eq!(
                estimate.hybrid_model.annual_cost,
                estimate.hybrid_model.monthly_cost * 12
            );
        }
    }
}

#[test]
fn service_multiplier_never_discounts_below_baseline() {
    assert_eq!(service_multiplier(0), 1.0);
    assert_eq!(service_multiplier(3), 1.0);
    assert_eq!(service_multiplier(10), 1.0);
    assert_eq!(service_multiplier(15), 1.5);
}

#[test]
fn cost_per_claim_is_rounded_to_cents() {
    let estimate = estimate_for_claims(3_000, 13);

    assert_eq!(estimate.per_claim_model.cost_per_claim, 3.9);
    assert_eq!(estimate.per_claim_model.monthly_cost, 11_700);
}

#[test]
fn high_volume_quote_recommends_hybrid() {
    let estimate = estimate_pricing(ClaimsVolume::OverFiftyThousand, 0);

    assert_eq!(estimate.fte_model.staff_count, 38);
    assert_eq!(estimate.fte_model.monthly_cost, 152_000);
    assert_eq!(estimate.per_claim_model.monthly_cost, 225_000);
    assert_eq!(estimate.hybrid_model.monthly_cost, 181_200);
    assert_eq!(estimate.recommended_monthly_cost(), 181_200);
}

#[test]
fn unrecognised_bucket_prices_zero_claims() {
    let estimate = estimate_pricing(ClaimsVolume::parse("a lot"), 4);

    assert_eq!(estimate.fte_model.staff_count, 0);
    assert_eq!(estimate.fte_model.monthly_cost, 0);
    assert_eq!(estimate.per_claim_model.monthly_cost, 0);
    assert_eq!(estimate.recommended_model, PricingModel::PerClaim);
}

#[test]
fn estimate_serializes_with_boundary_field_names() {
    let estimate = estimate_pricing(ClaimsVolume::OneToFiveThousand, 3);
    let json = serde_json::to_value(estimate).expect("serializes");

    assert_eq!(json["recommendedModel"], "Per Claim");
    assert_eq!(json["fteModel"]["staffCount"], 2);
    assert_eq!(json["perClaimModel"]["costPerClaim"], 3.0);
    assert_eq!(json["hybridModel"]["annualCost"], 100_800);
}
