use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::intake::IntakeViolation;

/// Identifier wrapper for stored records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Contact,
    Lead,
    PricingRequest,
}

impl RecordKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Lead => "lead",
            Self::PricingRequest => "pricing_request",
        }
    }

    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Lead => "lead",
            Self::PricingRequest => "pricing",
        }
    }

    pub const fn collection_path(self) -> &'static str {
        match self {
            Self::Contact => "/api/v1/contacts",
            Self::Lead => "/api/v1/leads",
            Self::PricingRequest => "/api/v1/pricing-requests",
        }
    }
}

/// A CRM entity whose derived fields are recomputed on every save.
pub trait CrmRecord: Clone + Serialize + Send + Sync + 'static {
    type Submission: DeserializeOwned + Send + 'static;
    type Patch: DeserializeOwned + Send + 'static;

    const KIND: RecordKind;

    fn id(&self) -> &RecordId;

    fn created_at(&self) -> DateTime<Utc>;

    fn from_submission(
        id: RecordId,
        submission: Self::Submission,
        now: DateTime<Utc>,
    ) -> Result<Self, IntakeViolation>;

    /// Applies a partial update. Returns `true` when derived fields were recomputed.
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>)
        -> Result<bool, IntakeViolation>;

    /// Key facts forwarded to the sales team when the record arrives.
    fn highlights(&self) -> BTreeMap<String, String>;
}
