use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{CrmRecord, RecordId, RecordKind};
use super::intake::IntakeViolation;

/// Outcome of [`RecordRepository::modify`]: the outer error is storage, the inner one is the
/// change itself being rejected.
pub type ModifyResult<T> = Result<Result<T, IntakeViolation>, RepositoryError>;

/// Storage abstraction so the intake service can be exercised without a database.
pub trait RecordRepository<T: CrmRecord>: Send + Sync {
    fn insert(&self, record: T) -> Result<T, RepositoryError>;
    /// Applies `change` to the stored record and saves it as one step, so concurrent
    /// modifications of the same record never overwrite each other. A rejected change
    /// leaves the stored record untouched.
    fn modify<F>(&self, id: &RecordId, change: F) -> ModifyResult<T>
    where
        F: FnOnce(&mut T) -> Result<(), IntakeViolation>;
    fn fetch(&self, id: &RecordId) -> Result<Option<T>, RepositoryError>;
    /// Newest records first.
    fn recent(&self, limit: usize) -> Result<Vec<T>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook to the sales team (e-mail, chat, CRM sync adapters).
pub trait SalesNotifier: Send + Sync {
    fn notify(&self, notification: SalesNotification) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesNotification {
    pub template: String,
    pub kind: RecordKind,
    pub record_id: RecordId,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
