//! The `audit` use case: load a policy export, run the audit and produce a report.

use ampguard_domain::{AuditConfig, ConfigNode, DomainReport};
use ampguard_settings::{Overrides, ResolvedConfig};
use ampguard_types::{
    AmpguardData, AmpguardReport, AuditStatus, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta,
};
use anyhow::Context;
use camino::Utf8Path;
use time::OffsetDateTime;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Policy export to audit.
    pub policy_path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub report: AmpguardReport,
    pub resolved_config: ResolvedConfig,
}

/// Run the audit use case: parse config, load the policy, audit, produce a report.
pub fn run_audit(input: AuditInput<'_>) -> anyhow::Result<AuditOutput> {
    let started_at = OffsetDateTime::now_utc();
    let span = tracing::info_span!("audit", policy = %input.policy_path);
    let _guard = span.enter();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        ampguard_settings::AmpguardConfigV1::default()
    } else {
        ampguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = ampguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let tree = ampguard_policy::load_policy(input.policy_path).context("load policy")?;

    let report = build_report(&tree, input.policy_path.as_str(), &resolved.effective, started_at);
    tracing::info!(
        status = ?report.status,
        platform = ?report.data.platform,
        findings = report.findings.len(),
        "audit finished"
    );

    Ok(AuditOutput {
        report,
        resolved_config: resolved,
    })
}

/// Audit an already loaded tree and wrap the result in the report envelope.
pub fn build_report(
    tree: &ConfigNode,
    source: &str,
    cfg: &AuditConfig,
    started_at: OffsetDateTime,
) -> AmpguardReport {
    let domain_report = ampguard_domain::audit(tree, cfg, started_at);
    let status = if domain_report.is_aborted() {
        AuditStatus::Aborted
    } else {
        AuditStatus::Completed
    };
    let DomainReport {
        platform,
        platform_overridden,
        header,
        exclusions,
        findings,
        rules_evaluated,
        abort_reason,
        ..
    } = domain_report;

    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "ampguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        source: source.to_string(),
        status,
        header,
        exclusions,
        data: AmpguardData {
            platform,
            platform_overridden,
            rules_evaluated,
            findings_total: findings.len() as u32,
            abort_reason,
        },
        findings,
    }
}

/// Map audit status to exit code: 0 = completed (findings or not), 1 = aborted.
pub fn audit_exit_code(status: AuditStatus) -> i32 {
    match status {
        AuditStatus::Completed => 0,
        AuditStatus::Aborted => 1,
    }
}
