use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CrmRecord, RecordId, RecordKind};
use super::intake::{require_email, require_name, tidy_list, tidy_text, IntakeViolation};
use crate::scoring::{
    BudgetBand, ClaimsVolume, CompanySize, InquiryType, LeadScore, LeadScoreCalculator,
    ScoringInput, Timeframe,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Closed,
}

/// Contact-form payload as posted by the marketing site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    pub inquiry_type: InquiryType,
    #[serde(default)]
    pub company_size: Option<CompanySize>,
    #[serde(default)]
    pub monthly_claims_volume: Option<ClaimsVolume>,
    #[serde(default, alias = "projectTimeframe")]
    pub timeframe: Option<Timeframe>,
    #[serde(default)]
    pub budget: Option<BudgetBand>,
    #[serde(default)]
    pub interested_services: Vec<String>,
    #[serde(default)]
    pub interested_products: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPatch {
    pub status: Option<ContactStatus>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub inquiry_type: Option<InquiryType>,
    pub company_size: Option<CompanySize>,
    pub monthly_claims_volume: Option<ClaimsVolume>,
    #[serde(alias = "projectTimeframe")]
    pub timeframe: Option<Timeframe>,
    pub budget: Option<BudgetBand>,
    pub interested_services: Option<Vec<String>>,
    pub interested_products: Option<Vec<String>>,
    pub message: Option<String>,
}

impl ContactPatch {
    fn touches_scoring(&self) -> bool {
        self.inquiry_type.is_some()
            || self.company_size.is_some()
            || self.monthly_claims_volume.is_some()
            || self.timeframe.is_some()
            || self.budget.is_some()
            || self.interested_services.is_some()
            || self.interested_products.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub inquiry_type: InquiryType,
    pub company_size: Option<CompanySize>,
    pub monthly_claims_volume: Option<ClaimsVolume>,
    pub timeframe: Option<Timeframe>,
    pub budget: Option<BudgetBand>,
    pub interested_services: Vec<String>,
    pub interested_products: Vec<String>,
    pub message: Option<String>,
    pub status: ContactStatus,
    pub lead_score: LeadScore,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn scoring_input(&self) -> ScoringInput {
        ScoringInput {
            company_size: self.company_size,
            monthly_claims_volume: self.monthly_claims_volume,
            inquiry_type: Some(self.inquiry_type),
            timeframe: self.timeframe,
            budget: self.budget,
            interested_services: self.interested_services.clone(),
            interested_products: self.interested_products.clone(),
            ..ScoringInput::default()
        }
    }

    fn rescore(&mut self) {
        self.lead_score = LeadScoreCalculator::contact().score(&self.scoring_input());
    }
}

impl CrmRecord for Contact {
    type Submission = ContactSubmission;
    type Patch = ContactPatch;

    const KIND: RecordKind = RecordKind::Contact;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_submission(
        id: RecordId,
        submission: ContactSubmission,
        now: DateTime<Utc>,
    ) -> Result<Self, IntakeViolation> {
        let mut contact = Contact {
            id,
            name: require_name(&submission.name)?,
            email: require_email(&submission.email)?,
            phone: tidy_text(submission.phone),
            organization: tidy_text(submission.organization),
            inquiry_type: submission.inquiry_type,
            company_size: submission.company_size,
            monthly_claims_volume: submission.monthly_claims_volume,
            timeframe: submission.timeframe,
            budget: submission.budget,
            interested_services: tidy_list(submission.interested_services),
            interested_products: tidy_list(submission.interested_products),
            message: tidy_text(submission.message),
            status: ContactStatus::New,
            lead_score: LeadScore::default(),
            created_at: now,
            updated_at: now,
        };
        contact.rescore();
        Ok(contact)
    }

    fn apply_patch(
        &mut self,
        patch: ContactPatch,
        now: DateTime<Utc>,
    ) -> Result<bool, IntakeViolation> {
        let rescore = patch.touches_scoring();
        let ContactPatch {
            status,
            phone,
            organization,
            inquiry_type,
            company_size,
            monthly_claims_volume,
            timeframe,
            budget,
            interested_services,
            interested_products,
            message,
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
        if let Some(inquiry_type) = inquiry_type {
            self.inquiry_type = inquiry_type;
        }
        if company_size.is_some() {
            self.company_size = company_size;
        }
        if monthly_claims_volume.is_some() {
            self.monthly_claims_volume = monthly_claims_volume;
        }
        if timeframe.is_some() {
            self.timeframe = timeframe;
        }
        if budget.is_some() {
            self.budget = budget;
        }
        if let Some(services) = interested_services {
            self.interested_services = tidy_list(services);
        }
        if let Some(products) = interested_products {
            self.interested_products = tidy_list(products);
        }
        if message.is_some() {
            self.message = tidy_text(message);
        }

        if rescore {
            self.rescore();
        }
        self.updated_at = now;
        Ok(rescore)
    }

    fn highlights(&self) -> BTreeMap<String, String> {
        let mut details = BTreeMap::new();
        details.insert("name".to_string(), self.name.clone());
        details.insert("email".to_string(), self.email.clone());
        details.insert(
            "inquiryType".to_string(),
            self.inquiry_type.label().to_string(),
        );
        details.insert("leadScore".to_string(), self.lead_score.to_string());
        if let Some(organization) = &self.organization {
            details.insert("organization".to_string(), organization.clone());
        }
        details
    }
}
