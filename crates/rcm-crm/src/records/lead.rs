use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CrmRecord, RecordId, RecordKind};
use super::intake::{require_email, require_name, tidy_list, tidy_text, IntakeViolation};
use crate::scoring::{
    BudgetBand, ClaimsVolume, CompanySize, LeadScore, LeadScoreCalculator, LeadSource,
    QualificationCriteria, ScoringInput, Timeframe,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Proposal,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub lead_source: Option<LeadSource>,
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
    pub current_challenges: Vec<String>,
    #[serde(default)]
    pub qualification: QualificationCriteria,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadPatch {
    pub status: Option<LeadStatus>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub lead_source: Option<LeadSource>,
    pub company_size: Option<CompanySize>,
    pub monthly_claims_volume: Option<ClaimsVolume>,
    #[serde(alias = "projectTimeframe")]
    pub timeframe: Option<Timeframe>,
    pub budget: Option<BudgetBand>,
    pub interested_services: Option<Vec<String>>,
    pub current_challenges: Option<Vec<String>>,
    pub qualification: Option<QualificationCriteria>,
    pub notes: Option<String>,
}

impl LeadPatch {
    fn touches_scoring(&self) -> bool {
        self.lead_source.is_some()
            || self.company_size.is_some()
            || self.monthly_claims_volume.is_some()
            || self.timeframe.is_some()
            || self.budget.is_some()
            || self.interested_services.is_some()
            || self.current_challenges.is_some()
            || self.qualification.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub lead_source: Option<LeadSource>,
    pub company_size: Option<CompanySize>,
    pub monthly_claims_volume: Option<ClaimsVolume>,
    pub timeframe: Option<Timeframe>,
    pub budget: Option<BudgetBand>,
    pub interested_services: Vec<String>,
    pub current_challenges: Vec<String>,
    pub qualification: QualificationCriteria,
    pub notes: Option<String>,
    pub status: LeadStatus,
    pub lead_score: LeadScore,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    pub fn scoring_input(&self) -> ScoringInput {
        ScoringInput {
            company_size: self.company_size,
            monthly_claims_volume: self.monthly_claims_volume,
            lead_source: self.lead_source,
            timeframe: self.timeframe,
            budget: self.budget,
            interested_services: self.interested_services.clone(),
            current_challenges: self.current_challenges.clone(),
            qualification: self.qualification,
            ..ScoringInput::default()
        }
    }

    fn rescore(&mut self) {
        self.lead_score = LeadScoreCalculator::lead().score(&self.scoring_input());
    }
}

impl CrmRecord for Lead {
    type Submission = LeadSubmission;
    type Patch = LeadPatch;

    const KIND: RecordKind = RecordKind::Lead;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_submission(
        id: RecordId,
        submission: LeadSubmission,
        now: DateTime<Utc>,
    ) -> Result<Self, IntakeViolation> {
        let mut lead = Lead {
            id,
            name: require_name(&submission.name)?,
            email: require_email(&submission.email)?,
            phone: tidy_text(submission.phone),
            company: tidy_text(submission.company),
            lead_source: submission.lead_source,
            company_size: submission.company_size,
            monthly_claims_volume: submission.monthly_claims_volume,
            timeframe: submission.timeframe,
            budget: submission.budget,
            interested_services: tidy_list(submission.interested_services),
            current_challenges: tidy_list(submission.current_challenges),
            qualification: submission.qualification,
            notes: tidy_text(submission.notes),
            status: LeadStatus::New,
            lead_score: LeadScore::default(),
            created_at: now,
            updated_at: now,
        };
        lead.rescore();
        Ok(lead)
    }

    fn apply_patch(&mut self, patch: LeadPatch, now: DateTime<Utc>) -> Result<bool, IntakeViolation> {
        let rescore = patch.touches_scoring();
        let LeadPatch {
            status,
            email,
            phone,
            company,
            lead_source,
            company_size,
            monthly_claims_volume,
            timeframe,
            budget,
            interested_services,
            current_challenges,
            qualification,
            notes,
        } = patch;

        // Validate before mutating so a rejected patch leaves the lead untouched.
        let email = email.as_deref().map(require_email).transpose()?;

        if let Some(status) = status {
            self.status = status;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if phone.is_some() {
            self.phone = tidy_text(phone);
        }
        if company.is_some() {
            self.company = tidy_text(company);
        }
        if lead_source.is_some() {
            self.lead_source = lead_source;
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
        if let Some(challenges) = current_challenges {
            self.current_challenges = tidy_list(challenges);
        }
        if let Some(qualification) = qualification {
            self.qualification = qualification;
        }
        if notes.is_some() {
            self.notes = tidy_text(notes);
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
        details.insert("leadScore".to_string(), self.lead_score.to_string());
        details.insert(
            "qualificationMet".to_string(),
            self.qualification.met().to_string(),
        );
        if let Some(source) = self.lead_source {
            details.insert("leadSource".to_string(), source.label().to_string());
        }
        if let Some(company) = &self.company {
            details.insert("company".to_string(), company.clone());
        }
        details
    }
}
