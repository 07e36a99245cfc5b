use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::records::{
    ContactSubmission, CrmRecord, IntakeService, IntakeViolation, LeadSubmission, ModifyResult,
    NotifyError, PricingRequestSubmission, RecordId, RecordRepository, RepositoryError,
    SalesNotification, SalesNotifier,
};
use crate::scoring::{
    BudgetBand, ClaimsVolume, CompanySize, InquiryType, LeadSource, QualificationCriteria,
    StaffingStatus, Timeframe,
};

pub(super) fn contact_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Dana Ortiz".to_string(),
        email: "dana.ortiz@lakeshorehealth.org".to_string(),
        phone: Some("555-0142".to_string()),
        organization: Some("Lakeshore Health".to_string()),
        inquiry_type: InquiryType::PricingRequest,
        company_size: Some(CompanySize::OverFiveHundred),
        monthly_claims_volume: Some(ClaimsVolume::OverFiftyThousand),
        timeframe: Some(Timeframe::Immediate),
        budget: Some(BudgetBand::OverFiveHundredThousand),
        interested_services: vec!["provider-rcm".to_string()],
        interested_products: vec!["qms".to_string()],
        message: Some("We need help with denials.".to_string()),
    }
}

pub(super) fn small_contact_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Sam Patel".to_string(),
        email: "sam@familypractice.com".to_string(),
        phone: None,
        organization: None,
        inquiry_type: InquiryType::GeneralInquiry,
        company_size: Some(CompanySize::OneToTen),
        monthly_claims_volume: Some(ClaimsVolume::UnderOneThousand),
        timeframe: None,
        budget: None,
        interested_services: Vec::new(),
        interested_products: Vec::new(),
        message: None,
    }
}

pub(super) fn lead_submission() -> LeadSubmission {
    LeadSubmission {
        name: "Morgan Lee".to_string(),
        email: "morgan.lee@valleyortho.com".to_string(),
        phone: None,
        company: Some("Valley Orthopedics".to_string()),
        lead_source: Some(LeadSource::Referral),
        company_size: Some(CompanySize::FiftyOneToTwoHundred),
        monthly_claims_volume: Some(ClaimsVolume::FiveToTenThousand),
        timeframe: Some(Timeframe::OneToThreeMonths),
        budget: Some(BudgetBand::FiftyToHundredThousand),
        interested_services: vec!["coding".to_string()],
        current_challenges: vec!["denials".to_string(), "aging A/R".to_string()],
        qualification: QualificationCriteria {
            budget: true,
            authority: true,
            need: false,
            timeline: false,
        },
        notes: None,
    }
}

pub(super) fn pricing_submission() -> PricingRequestSubmission {
    PricingRequestSubmission {
        name: "Riley Chen".to_string(),
        email: "riley@summitpeds.com".to_string(),
        phone: None,
        organization: Some("Summit Pediatrics".to_string()),
        claims_per_month: ClaimsVolume::OneToFiveThousand,
        rcm_services_needed: vec![
            "billing".to_string(),
            "coding".to_string(),
            "credentialing".to_string(),
        ],
        has_in_house_billing_staff: Some(StaffingStatus::Yes),
        in_house_staff_count: Some(4),
    }
}

pub(super) type MemoryService<T> = IntakeService<T, MemoryRepository<T>, MemoryNotifier>;

pub(super) fn build_service<T: CrmRecord>() -> (
    MemoryService<T>,
    Arc<MemoryRepository<T>>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = IntakeService::new(repository.clone(), notifier.clone());
    (service, repository, notifier)
}

pub(super) struct MemoryRepository<T> {
    records: Mutex<HashMap<RecordId, T>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }
}

impl<T> MemoryRepository<T> {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl<T: CrmRecord> RecordRepository<T> for MemoryRepository<T> {
    fn insert(&self, record: T) -> Result<T, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(record.id()) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id().clone(), record.clone());
        Ok(record)
    }

    fn modify<F>(&self, id: &RecordId, change: F) -> ModifyResult<T>
    where
        F: FnOnce(&mut T) -> Result<(), IntakeViolation>,
    {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let stored = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let mut candidate = stored.clone();
        if let Err(violation) = change(&mut candidate) {
            return Ok(Err(violation));
        }
        *stored = candidate.clone();
        Ok(Ok(candidate))
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<T>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<T>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<T> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.id().cmp(a.id()));
        records.truncate(limit);
        Ok(records)
    }
}

#[derive(Default)]
pub(super) struct MemoryNotifier {
    events: Mutex<Vec<SalesNotification>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<SalesNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl SalesNotifier for MemoryNotifier {
    fn notify(&self, notification: SalesNotification) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct FailingNotifier;

impl SalesNotifier for FailingNotifier {
    fn notify(&self, _notification: SalesNotification) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl<T: CrmRecord> RecordRepository<T> for ConflictRepository {
    fn insert(&self, _record: T) -> Result<T, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn modify<F>(&self, _id: &RecordId, _change: F) -> ModifyResult<T>
    where
        F: FnOnce(&mut T) -> Result<(), IntakeViolation>,
    {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &RecordId) -> Result<Option<T>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<T>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl<T: CrmRecord> RecordRepository<T> for UnavailableRepository {
    fn insert(&self, _record: T) -> Result<T, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn modify<F>(&self, _id: &RecordId, _change: F) -> ModifyResult<T>
    where
        F: FnOnce(&mut T) -> Result<(), IntakeViolation>,
    {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &RecordId) -> Result<Option<T>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<T>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
