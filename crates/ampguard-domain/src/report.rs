use crate::audit::AuditStage;
use crate::fingerprint::fingerprint_for_finding;
use ampguard_types::{ExclusionSet, Finding, Platform, PolicyHeader, Severity};
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct DomainReport {
    /// Final stage: `Done` or `Aborted`.
    pub stage: AuditStage,
    /// `None` only when the run aborted before classification.
    pub platform: Option<Platform>,
    pub platform_overridden: bool,
    pub header: Option<PolicyHeader>,
    pub exclusions: Option<ExclusionSet>,
    pub findings: Vec<Finding>,
    pub rules_evaluated: u32,
    pub abort_reason: Option<String>,
}

impl DomainReport {
    pub fn is_aborted(&self) -> bool {
        self.stage == AuditStage::Aborted
    }
}

pub(crate) fn warning(rule_id: &str, message: String, data: Value) -> Finding {
    Finding {
        severity: Severity::Warning,
        rule_id: rule_id.to_string(),
        fingerprint: Some(fingerprint_for_finding(rule_id, &message)),
        message,
        data,
    }
}
