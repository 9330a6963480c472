use crate::{RenderableFinding, RenderableReport, RenderableStatus};
use ampguard_types::ids;

/// Console report: `[+]` sections, `\t[!]WARNING, ...` finding lines.
///
/// The staleness and wildcard findings are shown inside the header and exclusion
/// sections; everything else is listed under the misconfiguration heading.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    if let Some(header) = &report.header {
        push(&mut out, format!("[+] Policy Name: {}", shown(&header.name)));
        push(&mut out, format!("[+] Policy Product: {}", platform(report)));
        push(&mut out, format!("[+] Policy GUID: {}", shown(&header.uuid)));
        push(
            &mut out,
            format!("[+] Policy Version: {}", shown(&header.serial_number)),
        );
        push(
            &mut out,
            format!("[+] Business GUID: {}", shown(&header.business_uuid)),
        );
    } else if report.platform.is_some() {
        push(&mut out, format!("[+] Policy Product: {}", platform(report)));
    }

    for finding in report
        .findings
        .iter()
        .filter(|f| f.rule_id == ids::RULE_HEADER_LAST_CHANGE)
    {
        push(
            &mut out,
            format!("[!] {}, {}", finding.severity, finding.message),
        );
    }

    for group in report.exclusions.iter().flatten() {
        match &group.entries {
            Some(entries) => {
                push(&mut out, format!("[+] {} Exclusions in policy:", group.kind));
                for entry in entries {
                    if entry.wildcard {
                        push(&mut out, format!("\tWARNING, wildcard : {}", entry.value));
                    } else {
                        push(&mut out, format!("\t{}", entry.value));
                    }
                }
            }
            None => push(
                &mut out,
                format!("[+] No {} exclusions are defined", group.undefined_label),
            ),
        }
    }

    match report.status {
        RenderableStatus::Completed => {
            push(&mut out, "[+] Specific Policy Misconfiguration:".to_string());
            let rule_findings: Vec<&RenderableFinding> =
                report.findings.iter().filter(|f| is_rule_finding(f)).collect();
            if rule_findings.is_empty() {
                push(&mut out, "\tNo misconfiguration found".to_string());
            }
            for finding in rule_findings {
                push(
                    &mut out,
                    format!("\t[!]{}, {}", finding.severity, finding.message),
                );
            }
        }
        RenderableStatus::Aborted => {
            let reason = report.abort_reason.as_deref().unwrap_or("audit aborted");
            push(&mut out, format!("\t[!] {reason}"));
        }
    }

    out
}

fn is_rule_finding(finding: &RenderableFinding) -> bool {
    !(finding.rule_id.starts_with("header.") || finding.rule_id.starts_with("exclusions."))
}

fn platform(report: &RenderableReport) -> &str {
    report.platform.as_deref().unwrap_or("unknown")
}

fn shown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn push(out: &mut String, line: String) {
    out.push_str(&line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableExclusion, RenderableExclusionGroup, RenderableHeader};

    fn finding(rule_id: &str, message: &str) -> RenderableFinding {
        RenderableFinding {
            severity: "WARNING".to_string(),
            rule_id: rule_id.to_string(),
            message: message.to_string(),
        }
    }

    fn report(status: RenderableStatus) -> RenderableReport {
        RenderableReport {
            source: "policy.xml".to_string(),
            platform: Some("windows".to_string()),
            platform_overridden: false,
            status,
            abort_reason: None,
            header: Some(RenderableHeader {
                name: Some("Servers".to_string()),
                uuid: Some("u-1".to_string()),
                serial_number: Some("12".to_string()),
                business_uuid: None,
            }),
            exclusions: Some(vec![
                RenderableExclusionGroup {
                    kind: "File".to_string(),
                    undefined_label: "path".to_string(),
                    entries: Some(vec![
                        RenderableExclusion {
                            value: "\\Temp".to_string(),
                            wildcard: false,
                        },
                        RenderableExclusion {
                            value: "*.log".to_string(),
                            wildcard: true,
                        },
                    ]),
                },
                RenderableExclusionGroup {
                    kind: "Certificate".to_string(),
                    undefined_label: "certificate issuer".to_string(),
                    entries: None,
                },
            ]),
            wildcards_total: 1,
            findings: vec![
                finding(ids::RULE_HEADER_LAST_CHANGE, "Last policy change: 1:00:00 ago"),
                finding(ids::RULE_EXCLUSIONS_WILDCARD_FILE, "File exclusion uses a wildcard : *.log"),
                finding(ids::RULE_ORBITAL_DISABLED, "ORBITAL is disabled."),
            ],
            findings_total: 3,
        }
    }

    #[test]
    fn renders_sections_in_order() {
        let text = render_text(&report(RenderableStatus::Completed));
        let expected = "\
[+] Policy Name: Servers
[+] Policy Product: windows
[+] Policy GUID: u-1
[+] Policy Version: 12
[+] Business GUID: -
[!] WARNING, Last policy change: 1:00:00 ago
[+] File Exclusions in policy:
\t\\Temp
\tWARNING, wildcard : *.log
[+] No certificate issuer exclusions are defined
[+] Specific Policy Misconfiguration:
\t[!]WARNING, ORBITAL is disabled.
";
        assert_eq!(text, expected);
    }

    #[test]
    fn undefined_kinds_use_historical_nouns() {
        let mut r = report(RenderableStatus::Completed);
        if let Some(groups) = r.exclusions.as_mut() {
            groups[0].entries = None;
        }
        let text = render_text(&r);
        assert!(text.contains("[+] No path exclusions are defined\n"));
        assert!(text.contains("[+] No certificate issuer exclusions are defined\n"));
        assert!(!text.contains("No file exclusions"));
    }

    #[test]
    fn aborted_runs_end_with_reason() {
        let mut r = report(RenderableStatus::Aborted);
        r.abort_reason = Some("No security settings present".to_string());
        let text = render_text(&r);
        assert!(text.ends_with("\t[!] No security settings present\n"));
        assert!(!text.contains("Specific Policy Misconfiguration"));
    }

    #[test]
    fn headerless_report_still_names_platform() {
        let mut r = report(RenderableStatus::Completed);
        r.header = None;
        r.exclusions = None;
        r.findings.clear();
        let text = render_text(&r);
        assert_eq!(
            text,
            "[+] Policy Product: windows\n[+] Specific Policy Misconfiguration:\n\tNo misconfiguration found\n"
        );
    }
}
