//! The `explain` use case: look up rule documentation.

use ampguard_domain::rules::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes every id that can be explained.
    NotFound {
        identifier: String,
        available: Vec<&'static str>,
    },
}

/// Look up an explanation for a rule id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match rules::lookup(identifier.trim()) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available: rules::known_rule_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n", exp.title, exp.id));
    out.push_str(&"=".repeat(exp.title.len() + exp.id.len() + 3));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");

    let platforms: Vec<&str> = exp.platforms.iter().map(|p| p.as_str()).collect();
    out.push_str(&format!("Platforms: {}\n", platforms.join(", ")));

    if !exp.conditions.is_empty() {
        out.push_str("\nFires when\n");
        out.push_str("----------\n");
        for condition in &exp.conditions {
            out.push_str(&format!("  - {condition}\n"));
        }
    }

    if let Some(remediation) = exp.remediation {
        out.push_str("\nRemediation\n");
        out.push_str("-----------\n");
        out.push_str(remediation);
        out.push('\n');
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, available: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule id: {}\n\n", identifier));
    out.push_str("Available rule ids:\n");
    for id in available {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}
