use ampguard_types::Platform;
use std::collections::BTreeSet;

/// Cloud verdicts cached longer than this (seconds) are reported.
pub const DEFAULT_TTL_CEILING_SECS: i64 = 3600;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditConfig {
    /// When set, replaces the signature heuristic.
    pub platform_override: Option<Platform>,
    pub ttl_ceiling_secs: i64,
    pub disabled_rules: BTreeSet<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            platform_override: None,
            ttl_ceiling_secs: DEFAULT_TTL_CEILING_SECS,
            disabled_rules: BTreeSet::new(),
        }
    }
}

impl AuditConfig {
    pub fn rule_enabled(&self, rule_id: &str) -> bool {
        !self.disabled_rules.contains(rule_id)
    }
}
