//! Audit orchestration.
//!
//! One run is a linear walk `Start -> HeaderParsed -> Classified -> RulesEvaluated ->
//! Done`. A missing mandatory container moves the run to `Aborted` instead; whatever
//! was gathered before that point stays in the report.

use crate::engine::{applicable_rules, evaluate};
use crate::exclusions::{parse_exclusions, wildcard_findings};
use crate::header::{last_change_finding, report_header};
use crate::model::ConfigNode;
use crate::platform::classify;
use crate::policy::AuditConfig;
use crate::report::DomainReport;
use time::OffsetDateTime;

/// Location of the settings container in the document tree.
pub const CONFIG_PATH: &[&str] = &["Signature", "Object", "config"];

pub const REASON_NO_CONFIG: &str = "Policy has no settings container (Signature/Object/config)";
pub const REASON_NO_AGENT: &str = "No security settings present (could be a network-only policy)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuditStage {
    Start,
    HeaderParsed,
    Classified,
    RulesEvaluated,
    Done,
    Aborted,
}

impl AuditStage {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditStage::Start => "start",
            AuditStage::HeaderParsed => "header_parsed",
            AuditStage::Classified => "classified",
            AuditStage::RulesEvaluated => "rules_evaluated",
            AuditStage::Done => "done",
            AuditStage::Aborted => "aborted",
        }
    }
}

/// Run the full audit over a loaded document tree.
pub fn audit(tree: &ConfigNode, cfg: &AuditConfig, now: OffsetDateTime) -> DomainReport {
    let mut report = DomainReport {
        stage: AuditStage::Start,
        platform: None,
        platform_overridden: false,
        header: None,
        exclusions: None,
        findings: Vec::new(),
        rules_evaluated: 0,
        abort_reason: None,
    };

    let Some(config) = tree.resolve(CONFIG_PATH) else {
        abort(&mut report, REASON_NO_CONFIG);
        return report;
    };

    report.header = report_header(config.get("janus"), now);
    if let Some(header) = &report.header
        && cfg.rule_enabled(ampguard_types::ids::RULE_HEADER_LAST_CHANGE)
    {
        report.findings.extend(last_change_finding(header));
    }
    advance(&mut report, AuditStage::HeaderParsed);

    let exclusions = config.get("exclusions");
    let agent = config.get("agent");
    let platform = match cfg.platform_override {
        Some(platform) => {
            report.platform_overridden = true;
            platform
        }
        None => classify(exclusions, agent),
    };
    report.platform = Some(platform);
    advance(&mut report, AuditStage::Classified);

    if let Some(node) = exclusions {
        let set = parse_exclusions(node);
        report.findings.extend(
            wildcard_findings(&set)
                .into_iter()
                .filter(|f| cfg.rule_enabled(&f.rule_id)),
        );
        report.exclusions = Some(set);
    }

    let Some(agent) = agent else {
        abort(&mut report, REASON_NO_AGENT);
        return report;
    };

    report.rules_evaluated = applicable_rules(platform, cfg).len() as u32;
    report.findings.extend(evaluate(platform, agent, config, cfg));
    advance(&mut report, AuditStage::RulesEvaluated);
    advance(&mut report, AuditStage::Done);
    report
}

fn advance(report: &mut DomainReport, next: AuditStage) {
    tracing::debug!(from = report.stage.as_str(), to = next.as_str(), "audit stage");
    report.stage = next;
}

fn abort(report: &mut DomainReport, reason: &str) {
    tracing::warn!(stage = report.stage.as_str(), reason, "audit aborted");
    report.stage = AuditStage::Aborted;
    report.abort_reason = Some(reason.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{document, janus_entries, with_entries, with_file_exclusions};
    use ampguard_types::{Platform, ids};
    use time::macros::datetime;

    fn now() -> OffsetDateTime {
        datetime!(2024-01-02 00:00:00 UTC)
    }

    fn rule_ids(report: &DomainReport) -> Vec<&str> {
        report.findings.iter().map(|f| f.rule_id.as_str()).collect()
    }

    #[test]
    fn windows_policy_reports_in_table_order() {
        let tree = with_file_exclusions(
            document(&[
                ("agent/cloud/cache/ttl/malicious", "7200"),
                ("agent/driver/selfprotect/spp_qaction", "0"),
            ]),
            &["1|0|0|CSIDL_WINDOWS|%5CTemp|1|"],
        );
        let report = audit(&tree, &AuditConfig::default(), now());

        assert_eq!(report.stage, AuditStage::Done);
        assert_eq!(report.platform, Some(Platform::Windows));
        assert_eq!(
            rule_ids(&report),
            [
                ids::RULE_CONTROL_PASSWORD_PROTECTION,
                ids::RULE_CLOUD_TTL_MALICIOUS,
                ids::RULE_DRIVER_SPP_AUDIT_MODE,
            ]
        );
        assert!(report.rules_evaluated > 0);
    }

    #[test]
    fn password_finding_survives_a_protected_control_block() {
        let tree = with_file_exclusions(
            document(&[
                ("agent/control/passwordex", "hash"),
                ("agent/cloud/cache/ttl/malicious", "7200"),
            ]),
            &["1|0|0|CSIDL_WINDOWS|%5CTemp|1|"],
        );
        let report = audit(&tree, &AuditConfig::default(), now());
        assert_eq!(rule_ids(&report), [ids::RULE_CLOUD_TTL_MALICIOUS]);
    }

    #[test]
    fn missing_agent_aborts_but_keeps_earlier_findings() {
        let tree = with_entries(
            with_file_exclusions(document(&[]), &["1|0|0||%2Ftmp%2F%2A|1|"]),
            "Signature/Object/config",
            &janus_entries("1704067200000"),
        );
        let report = audit(&tree, &AuditConfig::default(), now());

        assert!(report.is_aborted());
        assert_eq!(report.abort_reason.as_deref(), Some(REASON_NO_AGENT));
        assert_eq!(report.platform, Some(Platform::Linux));
        assert_eq!(
            rule_ids(&report),
            [
                ids::RULE_HEADER_LAST_CHANGE,
                ids::RULE_EXCLUSIONS_WILDCARD_FILE
            ]
        );
        assert_eq!(report.rules_evaluated, 0);
    }

    #[test]
    fn missing_config_container_aborts_immediately() {
        let tree = ConfigNode::mapping([("Signature", ConfigNode::default())]);
        let report = audit(&tree, &AuditConfig::default(), now());
        assert!(report.is_aborted());
        assert_eq!(report.abort_reason.as_deref(), Some(REASON_NO_CONFIG));
        assert!(report.platform.is_none());
        assert!(report.findings.is_empty());
    }

    #[test]
    fn override_replaces_classifier() {
        let tree = with_file_exclusions(
            document(&[("agent/scansettings/clamav/enable", "0")]),
            &["1|0|0|CSIDL_WINDOWS|%5CTemp|1|"],
        );
        let cfg = AuditConfig {
            platform_override: Some(Platform::Linux),
            ..AuditConfig::default()
        };
        let report = audit(&tree, &cfg, now());
        assert_eq!(report.platform, Some(Platform::Linux));
        assert!(report.platform_overridden);
        assert_eq!(rule_ids(&report), [ids::RULE_SCAN_CLAMAV_DISABLED]);
    }

    #[test]
    fn no_exclusions_classifies_from_agent() {
        let tree = document(&[
            ("agent/scansettings/paths", "%2FLibrary%2FCaches"),
            ("agent/driver/protmode/qaction", "0"),
        ]);
        let report = audit(&tree, &AuditConfig::default(), now());
        assert_eq!(report.platform, Some(Platform::Mac));
        assert!(report.exclusions.is_none());
        assert_eq!(rule_ids(&report), [ids::RULE_DRIVER_FILE_BLOCKING_AUDIT_MODE]);
    }

    #[test]
    fn disabled_report_rules_are_filtered() {
        let tree = with_entries(
            document(&[("agent/nfm/enable", "1")]),
            "Signature/Object/config",
            &janus_entries("1704067200000"),
        );
        let mut cfg = AuditConfig::default();
        cfg.disabled_rules
            .insert(ids::RULE_HEADER_LAST_CHANGE.to_string());
        let report = audit(&tree, &cfg, now());
        assert!(report.header.is_some());
        assert!(report.findings.is_empty());
    }

    #[test]
    fn stages_are_ordered() {
        assert!(AuditStage::Start < AuditStage::HeaderParsed);
        assert!(AuditStage::Classified < AuditStage::RulesEvaluated);
        assert!(AuditStage::RulesEvaluated < AuditStage::Done);
    }
}
