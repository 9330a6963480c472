//! Use case orchestration for ampguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, policy
//! loading, settings and render layers. It is intentionally thin and delegates heavy lifting
//! to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod render;
mod report;
mod rules;

pub use audit::{AuditInput, AuditOutput, audit_exit_code, build_report, run_audit};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{OutputFormat, render_report};
pub use report::{parse_report_json, serialize_report, to_renderable};
pub use rules::{RuleRow, format_rule_list, list_rules};
