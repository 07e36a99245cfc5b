//! CRM records (contacts, leads, pricing requests) and the save path that keeps their
//! derived scores and estimates current.

pub mod contact;
pub mod domain;
pub(crate) mod intake;
pub mod lead;
pub mod pricing_request;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use contact::{Contact, ContactPatch, ContactStatus, ContactSubmission};
pub use domain::{CrmRecord, RecordId, RecordKind};
pub use intake::IntakeViolation;
pub use lead::{Lead, LeadPatch, LeadStatus, LeadSubmission};
pub use pricing_request::{
    PricingRequest, PricingRequestPatch, PricingRequestStatus, PricingRequestSubmission,
};
pub use repository::{
    ModifyResult, NotifyError, RecordRepository, RepositoryError, SalesNotification,
    SalesNotifier,
};
pub use router::record_router;
pub use service::{IntakeError, IntakeService};
