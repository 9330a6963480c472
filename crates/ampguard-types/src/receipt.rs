use crate::Platform;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for ampguard reports.
pub const SCHEMA_REPORT_V1: &str = "ampguard.report.v1";

/// Findings are advisory; the label is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub rule_id: String,
    pub message: String,

    /// Stable identifier intended for baselining: a hash of `rule_id + message`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Observed values that made the rule fire, keyed by policy path.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

/// Identity metadata read from the policy header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_uuid: Option<String>,

    /// Last update, epoch milliseconds as exported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_ms: Option<i64>,

    /// Whole seconds between the last update and the audit (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExclusionEntry {
    /// Percent-decoded path, issuer or process name.
    pub value: String,
    pub wildcard: bool,
}

/// Exclusions grouped by kind. `None` means the kind is not defined at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExclusionSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<ExclusionEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_issuers: Option<Vec<ExclusionEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processes: Option<Vec<ExclusionEntry>>,
}

impl ExclusionSet {
    pub fn wildcard_count(&self) -> usize {
        [&self.files, &self.cert_issuers, &self.processes]
            .into_iter()
            .flatten()
            .flat_map(|entries| entries.iter())
            .filter(|e| e.wildcard)
            .count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Completed,
    Aborted,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Ampguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct AmpguardData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// True when the platform came from configuration rather than the classifier.
    #[serde(default)]
    pub platform_overridden: bool,

    pub rules_evaluated: u32,
    pub findings_total: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_reason: Option<String>,
}

/// A generic report envelope.
///
/// Keeping this generic allows ampguard to embed tool-specific data while still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = AmpguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    /// Path of the audited policy document.
    pub source: String,
    pub status: AuditStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<PolicyHeader>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<ExclusionSet>,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type AmpguardReport = ReportEnvelope<AmpguardData>;
