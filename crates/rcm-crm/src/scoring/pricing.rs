use serde::{Deserialize, Serialize};

use super::categories::ClaimsVolume;

/// Claims a single billing FTE is expected to work per month.
pub const CLAIMS_PER_FTE: u32 = 2_000;
pub const FTE_MONTHLY_RATE: f64 = 4_000.0;
pub const BASE_COST_PER_CLAIM: f64 = 3.0;
/// Share of the FTE quote kept as the hybrid model's fixed base.
pub const HYBRID_BASE_SHARE: f64 = 0.6;
/// Share of the per-claim quote billed as the hybrid model's variable part.
pub const HYBRID_VARIABLE_SHARE: f64 = 0.4;
pub const PER_CLAIM_CEILING: u32 = 5_000;
pub const HYBRID_FLOOR: u32 = 20_000;

/// Billing arrangement offered to a prospect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingModel {
    #[serde(rename = "FTE")]
    Fte,
    #[serde(rename = "Per Claim")]
    PerClaim,
    #[serde(rename = "Hybrid")]
    Hybrid,
}

impl PricingModel {
    /// Per-claim below 5,000 claims, hybrid above 20,000, FTE in between (bounds inclusive).
    pub const fn recommended_for(estimated_claims: u32) -> Self {
        if estimated_claims < PER_CLAIM_CEILING {
            Self::PerClaim
        } else if estimated_claims > HYBRID_FLOOR {
            Self::Hybrid
        } else {
            Self::Fte
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fte => "FTE",
            Self::PerClaim => "Per Claim",
            Self::Hybrid => "Hybrid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FteQuote {
    pub monthly_cost: u64,
    pub annual_cost: u64,
    pub staff_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerClaimQuote {
    pub cost_per_claim: f64,
    pub monthly_cost: u64,
    pub annual_cost: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridQuote {
    pub base_cost: u64,
    pub variable_cost: u64,
    pub monthly_cost: u64,
    pub annual_cost: u64,
}

/// Three side-by-side quotes plus the model recommended for the prospect's volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingEstimate {
    pub fte_model: FteQuote,
    pub per_claim_model: PerClaimQuote,
    pub hybrid_model: HybridQuote,
    pub recommended_model: PricingModel,
}

impl PricingEstimate {
    pub fn monthly_cost_of(&self, model: PricingModel) -> u64 {
        match model {
            PricingModel::Fte => self.fte_model.monthly_cost,
            PricingModel::PerClaim => self.per_claim_model.monthly_cost,
            PricingModel::Hybrid => self.hybrid_model.monthly_cost,
        }
    }

    pub fn recommended_monthly_cost(&self) -> u64 {
        self.monthly_cost_of(self.recommended_model)
    }
}

/// More services raise the quote; fewer than ten services never discount below baseline.
pub fn service_multiplier(service_count: usize) -> f64 {
    (service_count as f64 * 0.1).max(1.0)
}

pub fn required_ftes(estimated_claims: u32) -> u32 {
    estimated_claims.div_ceil(CLAIMS_PER_FTE)
}

pub fn estimate_pricing(claims_volume: ClaimsVolume, service_count: usize) -> PricingEstimate {
    estimate_for_claims(claims_volume.estimated_monthly_claims(), service_count)
}

/// Prices an explicit monthly claim count.
pub fn estimate_for_claims(estimated_claims: u32, service_count: usize) -> PricingEstimate {
    let multiplier = service_multiplier(service_count);
    let claims = f64::from(estimated_claims);

    let staff_count = required_ftes(estimated_claims);
    let fte_monthly = f64::from(staff_count) * FTE_MONTHLY_RATE * multiplier;

    let cost_per_claim = BASE_COST_PER_CLAIM * multiplier;
    let per_claim_monthly = claims * cost_per_claim;

    let base_cost = fte_monthly * HYBRID_BASE_SHARE;
    let variable_cost = per_claim_monthly * HYBRID_VARIABLE_SHARE;
    let hybrid_monthly = base_cost + variable_cost;

    let fte_monthly = money(fte_monthly);
    let per_claim_monthly = money(per_claim_monthly);
    let hybrid_monthly = money(hybrid_monthly);

    PricingEstimate {
        fte_model: FteQuote {
            monthly_cost: fte_monthly,
            annual_cost: fte_monthly * 12,
            staff_count,
        },
        per_claim_model: PerClaimQuote {
            cost_per_claim: (cost_per_claim * 100.0).round() / 100.0,
            monthly_cost: per_claim_monthly,
            annual_cost: per_claim_monthly * 12,
        },
        hybrid_model: HybridQuote {
            base_cost: money(base_cost),
            variable_cost: money(variable_cost),
            monthly_cost: hybrid_monthly,
            annual_cost: hybrid_monthly * 12,
        },
        recommended_model: PricingModel::recommended_for(estimated_claims),
    }
}

fn money(amount: f64) -> u64 {
    amount.max(0.0).round() as u64
}
