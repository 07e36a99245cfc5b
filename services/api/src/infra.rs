use metrics_exporter_prometheus::PrometheusHandle;
use rcm_crm::config::IntakeConfig;
use rcm_crm::records::{
    Contact, CrmRecord, IntakeService, IntakeViolation, Lead, ModifyResult, NotifyError,
    PricingRequest, RecordId, RecordRepository, RepositoryError, SalesNotification,
    SalesNotifier,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store; records are lost on restart.
#[derive(Clone)]
pub(crate) struct InMemoryRecordRepository<T> {
    records: Arc<Mutex<HashMap<RecordId, T>>>,
}

impl<T> Default for InMemoryRecordRepository<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<T: CrmRecord> RecordRepository<T> for InMemoryRecordRepository<T> {
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
        records.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(a.id()))
        });
        records.truncate(limit);
        Ok(records)
    }
}

/// Writes sales notifications to the log. Test builds also keep them for inspection.
#[derive(Default, Clone)]
pub(crate) struct LoggingSalesNotifier {
    #[cfg(test)]
    events: Arc<Mutex<Vec<SalesNotification>>>,
}

impl SalesNotifier for LoggingSalesNotifier {
    fn notify(&self, notification: SalesNotification) -> Result<(), NotifyError> {
        info!(
            template = %notification.template,
            id = %notification.record_id,
            details = ?notification.details,
            "sales team notified"
        );
        #[cfg(test)]
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

#[cfg(test)]
impl LoggingSalesNotifier {
    pub(crate) fn events(&self) -> Vec<SalesNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

pub(crate) type CrmService<T> =
    IntakeService<T, InMemoryRecordRepository<T>, LoggingSalesNotifier>;

/// Intake services for every record kind, sharing one notifier.
#[derive(Clone)]
pub(crate) struct CrmServices {
    pub(crate) contacts: Arc<CrmService<Contact>>,
    pub(crate) leads: Arc<CrmService<Lead>>,
    pub(crate) pricing_requests: Arc<CrmService<PricingRequest>>,
}

impl CrmServices {
    pub(crate) fn in_memory(notifier: Arc<LoggingSalesNotifier>, config: &IntakeConfig) -> Self {
        Self {
            contacts: Arc::new(IntakeService::with_config(
                Arc::new(InMemoryRecordRepository::default()),
                notifier.clone(),
                config,
            )),
            leads: Arc::new(IntakeService::with_config(
                Arc::new(InMemoryRecordRepository::default()),
                notifier.clone(),
                config,
            )),
            pricing_requests: Arc::new(IntakeService::with_config(
                Arc::new(InMemoryRecordRepository::default()),
                notifier,
                config,
            )),
        }
    }
}
