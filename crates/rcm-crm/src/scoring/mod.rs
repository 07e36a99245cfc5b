//! Deterministic lead scoring and pricing estimation.
//!
//! Everything here is a pure function of its inputs: callers score a record when it is
//! saved and store the results as denormalized fields.

pub mod categories;
mod lead_score;
pub mod pricing;
pub mod savings;
mod weights;

#[cfg(test)]
mod tests;

pub use categories::{
    BudgetBand, ClaimsVolume, CompanySize, InquiryType, LeadSource, StaffingStatus, Timeframe,
};
pub use lead_score::{
    LeadScore, LeadScoreCalculator, QualificationCriteria, ScoreBreakdown, ScoreComponent,
    ScoringFactor, ScoringInput,
};
pub use pricing::{
    estimate_for_claims, estimate_pricing, FteQuote, HybridQuote, PerClaimQuote, PricingEstimate,
    PricingModel,
};
pub use savings::{estimate_savings, quote, SavingsEstimate, StaffingProfile};
pub use weights::{
    CappedBonus, EngagementBonus, IntentWeights, ScoringProfile, WeightTable, CONTACT_SCORING,
    LEAD_SCORING, MAX_LEAD_SCORE,
};
