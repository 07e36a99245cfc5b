use clap::Args;
use rcm_crm::error::AppError;
use rcm_crm::estimates::score_with_profile;
use rcm_crm::scoring::{
    quote, ClaimsVolume, PricingEstimate, PricingModel, SavingsEstimate, ScoreBreakdown,
    ScoringInput, StaffingProfile, StaffingStatus,
};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Weight profile to apply (contact-scoring or lead-scoring)
    #[arg(long, default_value = "contact-scoring")]
    pub(crate) profile: String,
    /// JSON file holding the prospect's scoring input
    #[arg(long)]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Monthly claims bucket, e.g. 1000-5000 or 50000+
    #[arg(long)]
    pub(crate) claims_per_month: String,
    /// Number of distinct RCM services requested
    #[arg(long, default_value_t = 0)]
    pub(crate) services: usize,
    /// Whether the prospect has in-house billing staff (Yes, No, Partially)
    #[arg(long)]
    pub(crate) in_house_staff: Option<String>,
    /// Size of the in-house billing team
    #[arg(long)]
    pub(crate) staff_count: Option<u32>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let input: ScoringInput = serde_json::from_str(&raw)?;
    let breakdown = score_with_profile(&args.profile, &input)?;
    print!("{}", score_report(&breakdown));
    Ok(())
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        claims_per_month,
        services,
        in_house_staff,
        staff_count,
    } = args;

    let volume = ClaimsVolume::parse(&claims_per_month);
    let staffing = StaffingProfile {
        has_in_house_billing_staff: in_house_staff.as_deref().map(StaffingStatus::parse),
        in_house_staff_count: staff_count,
    };
    let (pricing, savings) = quote(volume, services, &staffing);

    if !volume.is_recognised() {
        println!("Unrecognised claims bucket '{claims_per_month}'; pricing assumes zero claims");
    }
    print!("{}", estimate_report(volume, &pricing, &savings));
    Ok(())
}

fn score_report(breakdown: &ScoreBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Lead score {} / 100 ({} profile)",
        breakdown.lead_score, breakdown.profile
    );
    if breakdown.components.is_empty() {
        let _ = writeln!(out, "- no scoring signals supplied");
    }
    for component in &breakdown.components {
        let _ = writeln!(out, "- {:>5.1}  {}", component.points, component.note);
    }
    if breakdown.raw_total > f32::from(breakdown.lead_score.value()) + 0.5 {
        let _ = writeln!(out, "  raw total {:.1} capped at 100", breakdown.raw_total);
    }
    out
}

fn estimate_report(
    volume: ClaimsVolume,
    pricing: &PricingEstimate,
    savings: &SavingsEstimate,
) -> String {
    let marker = |model: PricingModel| {
        if model == pricing.recommended_model {
            "  <- recommended"
        } else {
            ""
        }
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Pricing for {} claims/month (~{} claims)",
        volume.label(),
        volume.estimated_monthly_claims()
    );
    let _ = writeln!(
        out,
        "- FTE:       ${}/month, ${}/year, {} FTE(s){}",
        pricing.fte_model.monthly_cost,
        pricing.fte_model.annual_cost,
        pricing.fte_model.staff_count,
        marker(PricingModel::Fte)
    );
    let _ = writeln!(
        out,
        "- Per Claim: ${}/month, ${}/year at ${:.2}/claim{}",
        pricing.per_claim_model.monthly_cost,
        pricing.per_claim_model.annual_cost,
        pricing.per_claim_model.cost_per_claim,
        marker(PricingModel::PerClaim)
    );
    let _ = writeln!(
        out,
        "- Hybrid:    ${}/month, ${}/year (base ${} + variable ${}){}",
        pricing.hybrid_model.monthly_cost,
        pricing.hybrid_model.annual_cost,
        pricing.hybrid_model.base_cost,
        pricing.hybrid_model.variable_cost,
        marker(PricingModel::Hybrid)
    );
    let _ = writeln!(out, "Potential savings");
    let _ = writeln!(
        out,
        "- ${}/year ({:.2}% cost reduction)",
        savings.annual_savings, savings.cost_reduction
    );
    let _ = writeln!(
        out,
        "- ~{}% efficiency gain, ~{}% revenue increase (typical outcomes)",
        savings.efficiency_gain, savings.revenue_increase
    );
    out
}
