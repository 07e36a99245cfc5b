use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{CrmRecord, RecordId};
use super::intake::IntakeViolation;
use super::repository::{RecordRepository, RepositoryError, SalesNotification, SalesNotifier};
use crate::config::IntakeConfig;

/// Accepts submissions for one record kind, derives their scores, stores them, and tells sales.
pub struct IntakeService<T, R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    sequence: AtomicU64,
    recent_limit: usize,
    _record: PhantomData<fn() -> T>,
}

impl<T, R, N> IntakeService<T, R, N>
where
    T: CrmRecord,
    R: RecordRepository<T> + 'static,
    N: SalesNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self::with_config(repository, notifier, &IntakeConfig::default())
    }

    pub fn with_config(repository: Arc<R>, notifier: Arc<N>, config: &IntakeConfig) -> Self {
        Self {
            repository,
            notifier,
            sequence: AtomicU64::new(1),
            recent_limit: config.recent_limit.max(1),
            _record: PhantomData,
        }
    }

    fn next_id(&self) -> RecordId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        RecordId(format!("{}-{id:06}", T::KIND.id_prefix()))
    }

    /// Validate and store a new record with its derived fields computed.
    pub fn submit(&self, submission: T::Submission) -> Result<T, IntakeError> {
        let record = T::from_submission(self.next_id(), submission, Utc::now())?;
        let stored = self.repository.insert(record)?;
        let highlights = stored.highlights();

        info!(
            kind = T::KIND.label(),
            id = %stored.id(),
            ?highlights,
            "record captured"
        );

        let notification = SalesNotification {
            template: format!("new_{}", T::KIND.label()),
            kind: T::KIND,
            record_id: stored.id().clone(),
            details: highlights,
        };
        if let Err(err) = self.notifier.notify(notification) {
            warn!(kind = T::KIND.label(), id = %stored.id(), error = %err, "sales notification failed");
        }

        Ok(stored)
    }

    /// Apply a partial update, recomputing derived fields when scoring inputs changed.
    pub fn update(&self, id: &RecordId, patch: T::Patch) -> Result<T, IntakeError> {
        let mut recomputed = false;
        let record = self.repository.modify(id, |record| {
            recomputed = record.apply_patch(patch, Utc::now())?;
            Ok(())
        })??;

        debug!(kind = T::KIND.label(), %id, recomputed, "record updated");
        Ok(record)
    }

    pub fn get(&self, id: &RecordId) -> Result<T, IntakeError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Newest records first; `None` uses the configured page size.
    pub fn recent(&self, limit: Option<usize>) -> Result<Vec<T>, IntakeError> {
        let limit = limit.unwrap_or(self.recent_limit).max(1);
        Ok(self.repository.recent(limit)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Violation(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
