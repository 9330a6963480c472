use ampguard_render::{
    RenderableExclusion, RenderableExclusionGroup, RenderableFinding, RenderableHeader,
    RenderableReport, RenderableStatus,
};
use ampguard_types::{AmpguardReport, AuditStatus, ExclusionEntry, SCHEMA_REPORT_V1};
use anyhow::Context;

/// Parse a previously written JSON report (used by `ampguard render`).
pub fn parse_report_json(text: &str) -> anyhow::Result<AmpguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse ampguard report")
}

pub fn serialize_report(report: &AmpguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &AmpguardReport) -> RenderableReport {
    let header = report.header.as_ref().map(|h| RenderableHeader {
        name: h.name.clone(),
        uuid: h.uuid.clone(),
        serial_number: h.serial_number.clone(),
        business_uuid: h.business_uuid.clone(),
    });

    let exclusions = report.exclusions.as_ref().map(|set| {
        vec![
            group("File", "path", set.files.as_deref()),
            group("Certificate", "certificate issuer", set.cert_issuers.as_deref()),
            group("Process", "process", set.processes.as_deref()),
        ]
    });

    RenderableReport {
        source: report.source.clone(),
        platform: report.data.platform.map(|p| p.as_str().to_string()),
        platform_overridden: report.data.platform_overridden,
        status: match report.status {
            AuditStatus::Completed => RenderableStatus::Completed,
            AuditStatus::Aborted => RenderableStatus::Aborted,
        },
        abort_reason: report.data.abort_reason.clone(),
        header,
        exclusions,
        wildcards_total: report
            .exclusions
            .as_ref()
            .map_or(0, |set| set.wildcard_count()),
        findings: report
            .findings
            .iter()
            .map(|f| RenderableFinding {
                severity: f.severity.label().to_string(),
                rule_id: f.rule_id.clone(),
                message: f.message.clone(),
            })
            .collect(),
        findings_total: report.data.findings_total,
    }
}

fn group(
    kind: &str,
    undefined_label: &str,
    entries: Option<&[ExclusionEntry]>,
) -> RenderableExclusionGroup {
    RenderableExclusionGroup {
        kind: kind.to_string(),
        undefined_label: undefined_label.to_string(),
        entries: entries.map(|entries| {
            entries
                .iter()
                .map(|e| RenderableExclusion {
                    value: e.value.clone(),
                    wildcard: e.wildcard,
                })
                .collect()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ampguard_types::{
        AmpguardData, ExclusionSet, Finding, Platform, PolicyHeader, ReportEnvelope, Severity,
        ToolMeta, ids,
    };
    use time::macros::datetime;

    fn sample() -> AmpguardReport {
        ReportEnvelope {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "ampguard".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2025-01-01 00:00:00 UTC),
            finished_at: datetime!(2025-01-01 00:00:01 UTC),
            source: "policy.xml".to_string(),
            status: AuditStatus::Completed,
            header: Some(PolicyHeader {
                name: Some("Servers".to_string()),
                ..PolicyHeader::default()
            }),
            exclusions: Some(ExclusionSet {
                files: Some(vec![ExclusionEntry {
                    value: "C:\\Windows\\*.log".to_string(),
                    wildcard: true,
                }]),
                cert_issuers: None,
                processes: Some(Vec::new()),
            }),
            findings: vec![Finding {
                severity: Severity::Warning,
                rule_id: ids::RULE_ORBITAL_DISABLED.to_string(),
                message: "ORBITAL is disabled.".to_string(),
                fingerprint: None,
                data: serde_json::Value::Null,
            }],
            data: AmpguardData {
                platform: Some(Platform::Windows),
                platform_overridden: false,
                rules_evaluated: 40,
                findings_total: 1,
                abort_reason: None,
            },
        }
    }

    #[test]
    fn json_round_trip_keeps_report() {
        let report = sample();
        let bytes = serialize_report(&report).unwrap();
        let parsed = parse_report_json(std::str::from_utf8(&bytes).unwrap()).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn foreign_schema_is_rejected() {
        let err = parse_report_json(r#"{"schema":"scanner.report.v1"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown report schema"));
    }

    #[test]
    fn renderable_keeps_kind_order_and_absence() {
        let renderable = to_renderable(&sample());
        let groups = renderable.exclusions.unwrap();
        let kinds: Vec<&str> = groups.iter().map(|g| g.kind.as_str()).collect();
        assert_eq!(kinds, ["File", "Certificate", "Process"]);
        assert!(groups[0].entries.as_ref().unwrap()[0].wildcard);
        assert!(groups[1].entries.is_none());
        assert_eq!(groups[0].undefined_label, "path");
        assert_eq!(groups[1].undefined_label, "certificate issuer");
        assert_eq!(groups[2].entries.as_deref(), Some(&[][..]));
        assert_eq!(renderable.platform.as_deref(), Some("windows"));
        assert_eq!(renderable.header.unwrap().name.as_deref(), Some("Servers"));
    }

    #[test]
    fn renderable_carries_severity_and_wildcard_total() {
        let renderable = to_renderable(&sample());
        assert_eq!(renderable.wildcards_total, 1);
        assert_eq!(renderable.findings[0].severity, "WARNING");

        let mut bare = sample();
        bare.exclusions = None;
        assert_eq!(to_renderable(&bare).wildcards_total, 0);
    }
}
