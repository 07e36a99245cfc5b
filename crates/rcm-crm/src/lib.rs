//! Lead scoring, pricing estimation, and record intake for the RCM marketing CRM.

pub mod config;
pub mod error;
pub mod estimates;
pub mod records;
pub mod scoring;
pub mod telemetry;
