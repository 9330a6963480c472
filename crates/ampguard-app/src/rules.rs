//! The `rules` use case: list the rule catalogue, optionally for one platform.

use ampguard_domain::rules::{REPORT_RULES, catalog};
use ampguard_types::Platform;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleRow {
    pub id: &'static str,
    pub title: &'static str,
    pub platforms: Vec<Platform>,
    /// `agent`, `config`, or `report` for header and exclusion checks.
    pub root: &'static str,
}

/// One row per rule id, table rules first in declaration order, then report rules.
///
/// Ids declared more than once (per-platform variants) are merged into a single row.
pub fn list_rules(platform: Option<Platform>) -> Vec<RuleRow> {
    let mut rows: Vec<RuleRow> = Vec::new();
    for rule in catalog(platform) {
        let platforms = rule
            .platforms
            .iter()
            .copied()
            .filter(|p| platform.is_none_or(|only| only == *p));
        match rows.iter().position(|row| row.id == rule.id) {
            Some(index) => {
                let row = &mut rows[index];
                row.platforms.extend(platforms);
                row.platforms.sort();
                row.platforms.dedup();
            }
            None => {
                let mut platforms: Vec<Platform> = platforms.collect();
                platforms.sort();
                rows.push(RuleRow {
                    id: rule.id,
                    title: rule.title,
                    platforms,
                    root: rule.root.as_str(),
                });
            }
        }
    }

    rows.extend(REPORT_RULES.iter().map(|r| RuleRow {
        id: r.id,
        title: r.title,
        platforms: match platform {
            Some(p) => vec![p],
            None => Platform::ALL.to_vec(),
        },
        root: "report",
    }));
    rows
}

pub fn format_rule_list(rows: &[RuleRow]) -> String {
    let width = rows.iter().map(|r| r.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let platforms: Vec<&str> = row.platforms.iter().map(|p| p.as_str()).collect();
        out.push_str(&format!(
            "{:<width$}  {:<7}  {:<19}  {}\n",
            row.id,
            row.root,
            platforms.join(","),
            row.title,
        ));
    }
    out
}
