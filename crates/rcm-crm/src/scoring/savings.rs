use serde::{Deserialize, Serialize};

use super::categories::{ClaimsVolume, StaffingStatus};
use super::pricing::{estimate_pricing, PricingEstimate};

/// Assumed monthly cost of one in-house biller.
pub const IN_HOUSE_MONTHLY_COST_PER_STAFF: f64 = 5_000.0;
/// Headcount assumed when a prospect has in-house staff but did not say how many.
pub const DEFAULT_IN_HOUSE_STAFF: u32 = 3;
/// Outsourced or unstaffed billing is assumed to run 30% above our FTE quote.
pub const EXTERNAL_COST_MARKUP: f64 = 1.3;
/// Placeholder approximation quoted to every prospect; not derived from their inputs.
pub const EFFICIENCY_GAIN_PERCENT: u8 = 25;
/// Placeholder approximation quoted to every prospect; not derived from their inputs.
pub const REVENUE_INCREASE_PERCENT: u8 = 10;

/// What the prospect told us about their current billing staff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffingProfile {
    pub has_in_house_billing_staff: Option<StaffingStatus>,
    pub in_house_staff_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsEstimate {
    pub annual_savings: u64,
    /// Percentage of the current monthly cost saved; zero when the current cost is unknown or zero.
    pub cost_reduction: f64,
    pub efficiency_gain: u8,
    pub revenue_increase: u8,
}

/// Monthly spend the prospect is assumed to carry today.
pub fn current_monthly_cost(pricing: &PricingEstimate, staffing: &StaffingProfile) -> f64 {
    match staffing.has_in_house_billing_staff {
        Some(StaffingStatus::Yes) => {
            let staff = staffing.in_house_staff_count.unwrap_or(DEFAULT_IN_HOUSE_STAFF);
            f64::from(staff) * IN_HOUSE_MONTHLY_COST_PER_STAFF
        }
        _ => pricing.fte_model.monthly_cost as f64 * EXTERNAL_COST_MARKUP,
    }
}

pub fn estimate_savings(pricing: &PricingEstimate, staffing: &StaffingProfile) -> SavingsEstimate {
    let current = current_monthly_cost(pricing, staffing);
    let ours = pricing.recommended_monthly_cost() as f64;
    let monthly_difference = current - ours;

    let annual_savings = (monthly_difference * 12.0).max(0.0).round() as u64;
    let cost_reduction = if current > 0.0 {
        let percent = (monthly_difference / current * 100.0).max(0.0);
        (percent * 100.0).round() / 100.0
    } else {
        0.0
    };

    SavingsEstimate {
        annual_savings,
        cost_reduction,
        efficiency_gain: EFFICIENCY_GAIN_PERCENT,
        revenue_increase: REVENUE_INCREASE_PERCENT,
    }
}

/// Prices the request, then weighs the recommended model against current staffing.
pub fn quote(
    claims_volume: ClaimsVolume,
    service_count: usize,
    staffing: &StaffingProfile,
) -> (PricingEstimate, SavingsEstimate) {
    let pricing = estimate_pricing(claims_volume, service_count);
    let savings = estimate_savings(&pricing, staffing);
    (pricing, savings)
}
