use chrono::{TimeZone, Utc};

use super::common::{contact_submission, lead_submission, pricing_submission};
use crate::records::{
    Contact, ContactPatch, ContactStatus, CrmRecord, IntakeViolation, Lead, LeadPatch,
    PricingRequest, PricingRequestPatch, PricingRequestStatus, RecordId,
};
use crate::scoring::{ClaimsVolume, PricingModel, QualificationCriteria, StaffingStatus};

fn record_id(raw: &str) -> RecordId {
    RecordId(raw.to_string())
}

#[test]
fn contact_is_scored_and_normalised_on_creation() {
    let now = Utc.with_ymd_and_hms(2024, 3, 4, 9, 30, 0).unwrap();
    let mut submission = contact_submission();
    submission.email = "  Dana.Ortiz@LakeshoreHealth.org ".to_string();
    submission.interested_services = vec!["provider-rcm".to_string(), "Provider-RCM".to_string()];

    let contact = Contact::from_submission(record_id("contact-000001"), submission, now)
        .expect("valid contact");

    assert_eq!(contact.email, "dana.ortiz@lakeshorehealth.org");
    assert_eq!(contact.interested_services, vec!["provider-rcm".to_string()]);
    assert_eq!(contact.status, ContactStatus::New);
    assert_eq!(contact.lead_score.value(), 100);
    assert_eq!(contact.created_at, now);
    assert_eq!(contact.updated_at, now);
}

#[test]
fn contact_requires_a_name() {
    let mut submission = contact_submission();
    submission.name = "   ".to_string();

    let err = Contact::from_submission(record_id("contact-000001"), submission, Utc::now())
        .expect_err("blank name rejected");
    assert_eq!(err, IntakeViolation::MissingName);
}

#[test]
fn contact_status_patch_keeps_score() {
    let created = Utc.with_ymd_and_hms(2024, 3, 4, 9, 30, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2024, 3, 5, 14, 0, 0).unwrap();
    let mut contact =
        Contact::from_submission(record_id("contact-000001"), contact_submission(), created)
            .expect("valid contact");
    let before = contact.lead_score;

    let recomputed = contact
        .apply_patch(
            ContactPatch {
                status: Some(ContactStatus::Contacted),
                ..ContactPatch::default()
            },
            later,
        )
        .expect("patch applies");

    assert!(!recomputed);
    assert_eq!(contact.status, ContactStatus::Contacted);
    assert_eq!(contact.lead_score, before);
    assert_eq!(contact.created_at, created);
    assert_eq!(contact.updated_at, later);
}

#[test]
fn lead_rescored_when_qualification_changes() {
    let mut lead = Lead::from_submission(record_id("lead-000001"), lead_submission(), Utc::now())
        .expect("valid lead");
    assert_eq!(lead.lead_score.value(), 89);

    let recomputed = lead
        .apply_patch(
            LeadPatch {
                qualification: Some(QualificationCriteria {
                    budget: true,
                    authority: true,
                    need: true,
                    timeline: true,
                }),
                ..LeadPatch::default()
            },
            Utc::now(),
        )
        .expect("patch applies");

    assert!(recomputed);
    assert_eq!(lead.lead_score.value(), 94);
}

#[test]
fn rejected_lead_patch_leaves_record_untouched() {
    let mut lead = Lead::from_submission(record_id("lead-000001"), lead_submission(), Utc::now())
        .expect("valid lead");
    let snapshot = lead.clone();

    let err = lead
        .apply_patch(
            LeadPatch {
                email: Some("not-an-email".to_string()),
                company_size: Some(crate::scoring::CompanySize::OneToTen),
                ..LeadPatch::default()
            },
            Utc::now(),
        )
        .expect_err("invalid email rejected");

    assert_eq!(err, IntakeViolation::InvalidEmail("not-an-email".to_string()));
    assert_eq!(lead, snapshot);
}

#[test]
fn pricing_request_carries_quote_and_savings() {
    let request = PricingRequest::from_submission(
        record_id("pricing-000001"),
        pricing_submission(),
        Utc::now(),
    )
    .expect("valid request");

    assert_eq!(request.status, PricingRequestStatus::Pending);
    assert_eq!(
        request.estimated_pricing.recommended_model,
        PricingModel::PerClaim
    );
    assert_eq!(request.estimated_pricing.per_claim_model.monthly_cost, 9_000);
    assert_eq!(request.potential_savings.annual_savings, 132_000);
    assert_eq!(request.potential_savings.cost_reduction, 55.0);

    let highlights = request.highlights();
    assert_eq!(highlights.get("recommendedModel").map(String::as_str), Some("Per Claim"));
    assert_eq!(highlights.get("annualSavings").map(String::as_str), Some("132000"));
}

#[test]
fn pricing_request_counts_repeated_services() {
    let mut submission = pricing_submission();
    submission.rcm_services_needed = (0..15)
        .map(|i| if i % 2 == 0 { "Coding" } else { " coding " }.to_string())
        .chain(std::iter::once("   ".to_string()))
        .collect();
    submission.has_in_house_billing_staff = None;

    let request =
        PricingRequest::from_submission(record_id("pricing-000001"), submission, Utc::now())
            .expect("valid request");

    assert_eq!(request.rcm_services_needed.len(), 15);
    assert_eq!(request.rcm_services_needed[1], "coding");
    assert_eq!(request.estimated_pricing.fte_model.monthly_cost, 12_000);
    assert_eq!(request.estimated_pricing.per_claim_model.cost_per_claim, 4.5);
}

#[test]
fn pricing_request_refreshes_estimates_when_volume_changes() {
    let mut request = PricingRequest::from_submission(
        record_id("pricing-000001"),
        pricing_submission(),
        Utc::now(),
    )
    .expect("valid request");

    let refreshed = request
        .apply_patch(
            PricingRequestPatch {
                claims_per_month: Some(ClaimsVolume::TenToTwentyFiveThousand),
                has_in_house_billing_staff: Some(StaffingStatus::No),
                ..PricingRequestPatch::default()
            },
            Utc::now(),
        )
        .expect("patch applies");

    assert!(refreshed);
    assert_eq!(request.estimated_pricing.recommended_model, PricingModel::Fte);
    assert_eq!(request.estimated_pricing.fte_model.staff_count, 9);
    assert_eq!(request.estimated_pricing.fte_model.monthly_cost, 36_000);
    // 36,000 * 1.3 = 46,800 current against a 36,000 FTE quote.
    assert_eq!(request.potential_savings.annual_savings, 129_600);
    assert_eq!(request.potential_savings.cost_reduction, 23.08);
}

#[test]
fn pricing_status_patch_keeps_estimates() {
    let mut request = PricingRequest::from_submission(
        record_id("pricing-000001"),
        pricing_submission(),
        Utc::now(),
    )
    .expect("valid request");
    let before = request.estimated_pricing;

    let refreshed = request
        .apply_patch(
            PricingRequestPatch {
                status: Some(PricingRequestStatus::Quoted),
                ..PricingRequestPatch::default()
            },
            Utc::now(),
        )
        .expect("patch applies");

    assert!(!refreshed);
    assert_eq!(request.status, PricingRequestStatus::Quoted);
    assert_eq!(request.estimated_pricing, before);
}
