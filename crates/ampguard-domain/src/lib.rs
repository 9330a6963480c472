//! Pure policy audit (no IO).
//!
//! Input: a normalized policy tree constructed elsewhere.
//! Output: header, exclusions and findings in a [`report::DomainReport`].

#![forbid(unsafe_code)]

pub mod audit;
pub mod exclusions;
pub mod header;
pub mod model;
pub mod platform;
pub mod policy;
pub mod report;
pub mod rules;

mod engine;
mod fingerprint;

pub use audit::{AuditStage, audit};
pub use engine::{applicable_rules, evaluate, evaluate_rule};
pub use fingerprint::fingerprint_for_finding;
pub use model::ConfigNode;
pub use policy::{AuditConfig, DEFAULT_TTL_CEILING_SECS};
pub use report::DomainReport;

#[cfg(test)]
mod proptest;

#[cfg(test)]
mod test_support;
