//! Stable DTOs and IDs used across the ampguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs for rules
//! - the platform enumeration shared by the classifier, settings and renderers

#![forbid(unsafe_code)]

pub mod ids;
pub mod platform;
pub mod receipt;

pub use platform::{ParsePlatformError, Platform};
pub use receipt::{
    AmpguardData, AmpguardReport, AuditStatus, ExclusionEntry, ExclusionSet, Finding,
    PolicyHeader, ReportEnvelope, SCHEMA_REPORT_V1, Severity, ToolMeta,
};
