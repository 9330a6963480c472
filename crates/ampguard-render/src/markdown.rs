use crate::{RenderableReport, RenderableStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Ampguard report\n\n");
    let status = match report.status {
        RenderableStatus::Completed => "COMPLETED",
        RenderableStatus::Aborted => "ABORTED",
    };
    let platform = report.platform.as_deref().unwrap_or("unknown");
    let overridden = if report.platform_overridden {
        " (configured)"
    } else {
        ""
    };
    out.push_str(&format!(
        "- Source: `{}`\n- Platform: **{}**{}\n- Status: **{}**\n- Findings: {}\n\n",
        report.source, platform, overridden, status, report.findings_total
    ));

    if let Some(reason) = &report.abort_reason {
        out.push_str(&format!("> Aborted: {}\n\n", reason));
    }

    if let Some(header) = &report.header {
        out.push_str("## Policy\n\n| Field | Value |\n|---|---|\n");
        let rows = [
            ("Name", &header.name),
            ("GUID", &header.uuid),
            ("Version", &header.serial_number),
            ("Business GUID", &header.business_uuid),
        ];
        for (label, value) in rows {
            out.push_str(&format!(
                "| {} | {} |\n",
                label,
                escape_cell(value.as_deref().unwrap_or("-"))
            ));
        }
        out.push('\n');
    }

    if let Some(groups) = &report.exclusions {
        out.push_str(&format!(
            "## Exclusions\n\nWildcard entries: {}\n\n",
            report.wildcards_total
        ));
        for group in groups {
            match &group.entries {
                Some(entries) => {
                    let wildcards = entries.iter().filter(|e| e.wildcard).count();
                    out.push_str(&format!(
                        "- {}: {} ({} wildcard)\n",
                        group.kind,
                        entries.len(),
                        wildcards
                    ));
                    for entry in entries {
                        let marker = if entry.wildcard { " **wildcard**" } else { "" };
                        out.push_str(&format!("  - `{}`{}\n", entry.value, marker));
                    }
                }
                None => out.push_str(&format!("- {}: none defined\n", group.kind)),
            }
        }
        out.push('\n');
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");
    for f in &report.findings {
        out.push_str(&format!("- [{}] `{}`: {}\n", f.severity, f.rule_id, f.message));
    }

    out
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
