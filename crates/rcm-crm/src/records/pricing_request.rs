use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CrmRecord, RecordId, RecordKind};
use super::intake::{require_email, require_name, tidy_entries, tidy_text, IntakeViolation};
use crate::scoring::{
    quote, ClaimsVolume, PricingEstimate, SavingsEstimate, StaffingProfile, StaffingStatus,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingRequestStatus {
    #[default]
    Pending,
    Quoted,
    Accepted,
    Declined,
}

/// Pricing-calculator payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequestSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    pub claims_per_month: ClaimsVolume,
    #[serde(default)]
    pub rcm_services_needed: Vec<String>,
    #[serde(default)]
    pub has_in_house_billing_staff: Option<StaffingStatus>,
    #[serde(default)]
    pub in_house_staff_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingRequestPatch {
    pub status: Option<PricingRequestStatus>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub claims_per_month: Option<ClaimsVolume>,
    pub rcm_services_needed: Option<Vec<String>>,
    pub has_in_house_billing_staff: Option<StaffingStatus>,
    pub in_house_staff_count: Option<u32>,
}

impl PricingRequestPatch {
    fn touches_estimates(&self) -> bool {
        self.claims_per_month.is_some()
            || self.rcm_services_needed.is_some()
            || self.has_in_house_billing_staff.is_some()
            || self.in_house_staff_count.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub claims_per_month: ClaimsVolume,
    pub rcm_services_needed: Vec<String>,
    pub has_in_house_billing_staff: Option<StaffingStatus>,
    pub in_house_staff_count: Option<u32>,
    pub status: PricingRequestStatus,
    pub estimated_pricing: PricingEstimate,
    pub potential_savings: SavingsEstimate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PricingRequest {
    pub fn staffing(&self) -> StaffingProfile {
        StaffingProfile {
            has_in_house_billing_staff: self.has_in_house_billing_staff,
            in_house_staff_count: self.in_house_staff_count,
        }
    }

    fn refresh_estimates(&mut self) {
        let (pricing, savings) = quote(
            self.claims_per_month,
            self.rcm_services_needed.len(),
            &self.staffing(),
        );
        self.estimated_pricing = pricing;
        self.potential_savings = savings;
    }
}

impl CrmRecord for PricingRequest {
    type Submission = PricingRequestSubmission;
    type Patch = PricingRequestPatch;

    const KIND: RecordKind = RecordKind::PricingRequest;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_submission(
        id: RecordId,
        submission: PricingRequestSubmission,
        now: DateTime<Utc>,
    ) -> Result<Self, IntakeViolation> {
        let rcm_services_needed = tidy_entries(submission.rcm_services_needed);
        let staffing = StaffingProfile {
            has_in_house_billing_staff: submission.has_in_house_billing_staff,
            in_house_staff_count: submission.in_house_staff_count,
        };
        let (estimated_pricing, potential_savings) = quote(
            submission.claims_per_month,
            rcm_services_needed.len(),
            &staffing,
        );

        Ok(PricingRequest {
            id,
            name: require_name(&submission.name)?,
            email: require_email(&submission.email)?,
            phone: tidy_text(submission.phone),
            organization: tidy_text(submission.organization),
            claims_per_month: submission.claims_per_month,
            rcm_services_needed,
            has_in_house_billing_staff: submission.has_in_house_billing_staff,
            in_house_staff_count: submission.in_house_staff_count,
            status: PricingRequestStatus::Pending,
            estimated_pricing,
            potential_savings,
            created_at: now,
            updated_at: now,
        })
    }

    fn apply_patch(
        &mut self,
        patch: PricingRequestPatch,
        now: DateTime<Utc>,
    ) -> Result<bool, IntakeViolation> {
        let refresh = patch.touches_estimates();
        let PricingRequestPatch {
            status,
            phone,
            organization,
            claims_per_month,
            rcm_services_needed,
            has_in_house_billing_staff,
            in_house_staff_count,
        } = patch;

        if let Some(status) = status {
            self.status = status;
        }
        if phone.is_some() {
            self.phone = tidy_text(phone);
        }
        if organization.is_some() {
            self.organization = tidy_text(organization);
        }
        if let Some(claims_per_month) = claims_per_month {
            self.claims_per_month = claims_per_month;
        }
        if let Some(services) = rcm_services_needed {
            self.rcm_services_needed = tidy_entries(services);
        }
        if has_in_house_billing_staff.is_some() {
            self.has_in_house_billing_staff = has_in_house_billing_staff;
        }
        if in_house_staff_count.is_some() {
            self.in_house_staff_count = in_house_staff_count;
        }

        if refresh {
            self.refresh_estimates();
        }
        self.updated_at = now;
        Ok(refresh)
    }

    fn highlights(&self) -> BTreeMap<String, String> {
        let mut details = BTreeMap::new();
        details.insert("name".to_string(), self.name.clone());
        details.insert("email".to_string(), self.email.clone());
        details.insert(
            "claimsPerMonth".to_string(),
            self.claims_per_month.label().to_string(),
        );
        details.insert(
            "recommendedModel".to_string(),
            self.estimated_pricing.recommended_model.label().to_string(),
        );
        details.insert(
            "recommendedMonthlyCost".to_string(),
            self.estimated_pricing.recommended_monthly_cost().to_string(),
        );
        details.insert(
            "annualSavings".to_string(),
            self.potential_savings.annual_savings.to_string(),
        );
        if let Some(organization) = &self.organization {
            details.insert("organization".to_string(), organization.clone());
        }
        details
    }
}
