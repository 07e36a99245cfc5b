use crate::scoring::{
    BudgetBand, ClaimsVolume, CompanySize, InquiryType, LeadSource, QualificationCriteria,
    ScoringInput, StaffingProfile, StaffingStatus, Timeframe,
};

/// The fully-loaded enterprise contact that saturates the contact profile.
pub(super) fn enterprise_contact() -> ScoringInput {
    ScoringInput {
        company_size: Some(CompanySize::OverFiveHundred),
        monthly_claims_volume: Some(ClaimsVolume::OverFiftyThousand),
        inquiry_type: Some(InquiryType::PricingRequest),
        timeframe: Some(Timeframe::Immediate),
        budget: Some(BudgetBand::OverFiveHundredThousand),
        interested_services: vec!["provider-rcm".to_string()],
        interested_products: vec!["qms".to_string()],
        ..ScoringInput::default()
    }
}

pub(super) fn clinic_contact() -> ScoringInput {
    ScoringInput {
        company_size: Some(CompanySize::ElevenToFifty),
        monthly_claims_volume: Some(ClaimsVolume::OneToFiveThousand),
        inquiry_type: Some(InquiryType::DemoRequest),
        timeframe: Some(Timeframe::ThreeToSixMonths),
        ..ScoringInput::default()
    }
}

pub(super) fn referral_lead() -> ScoringInput {
    ScoringInput {
        company_size: Some(CompanySize::FiftyOneToTwoHundred),
        monthly_claims_volume: Some(ClaimsVolume::FiveToTenThousand),
        lead_source: Some(LeadSource::Referral),
        timeframe: Some(Timeframe::OneToThreeMonths),
        budget: Some(BudgetBand::FiftyToHundredThousand),
        current_challenges: vec!["denials".to_string(), "aging A/R".to_string()],
        qualification: QualificationCriteria {
            budget: true,
            authority: true,
            need: false,
            timeline: false,
        },
        ..ScoringInput::default()
    }
}

pub(super) fn staffing(status: StaffingStatus, count: Option<u32>) -> StaffingProfile {
    StaffingProfile {
        has_in_house_billing_staff: Some(status),
        in_house_staff_count: count,
    }
}
