//! Stateless scoring and pricing previews, used by the pricing calculator before a
//! prospect submits anything.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::scoring::{
    quote, ClaimsVolume, LeadScoreCalculator, PricingEstimate, SavingsEstimate, ScoreBreakdown,
    ScoringInput, ScoringProfile, StaffingProfile, StaffingStatus,
};

const DEFAULT_PROFILE: &str = "contact-scoring";

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadScoreRequest {
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default)]
    pub input: ScoringInput,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPreviewRequest {
    pub claims_per_month: ClaimsVolume,
    /// Every non-blank entry counts toward the service multiplier, repeats included.
    #[serde(default)]
    pub rcm_services_needed: Vec<String>,
    #[serde(default)]
    pub has_in_house_billing_staff: Option<StaffingStatus>,
    #[serde(default)]
    pub in_house_staff_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPreview {
    pub estimated_pricing: PricingEstimate,
    pub potential_savings: SavingsEstimate,
}

pub fn score_with_profile(profile: &str, input: &ScoringInput) -> Result<ScoreBreakdown, AppError> {
    let profile = ScoringProfile::by_name(profile)
        .ok_or_else(|| AppError::UnknownProfile(profile.to_string()))?;
    Ok(LeadScoreCalculator::new(profile).breakdown(input))
}

pub fn preview_pricing(request: &PricingPreviewRequest) -> PricingPreview {
    let staffing = StaffingProfile {
        has_in_house_billing_staff: request.has_in_house_billing_staff,
        in_house_staff_count: request.in_house_staff_count,
    };
    let (estimated_pricing, potential_savings) = quote(
        request.claims_per_month,
        service_count(&request.rcm_services_needed),
        &staffing,
    );
    PricingPreview {
        estimated_pricing,
        potential_savings,
    }
}

fn service_count(services: &[String]) -> usize {
    services.iter().filter(|service| !service.trim().is_empty()).count()
}

pub fn estimate_router() -> Router {
    Router::new()
        .route("/api/v1/estimates/lead-score", post(lead_score_endpoint))
        .route("/api/v1/estimates/pricing", post(pricing_endpoint))
}

pub(crate) async fn lead_score_endpoint(
    payload: Result<Json<LeadScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    let Json(request) = payload?;
    score_with_profile(&request.profile, &request.input).map(Json)
}

pub(crate) async fn pricing_endpoint(
    payload: Result<Json<PricingPreviewRequest>, JsonRejection>,
) -> Result<Json<PricingPreview>, AppError> {
    let Json(request) = payload?;
    Ok(Json(preview_pricing(&request)))
}
