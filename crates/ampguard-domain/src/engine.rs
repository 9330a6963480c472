use crate::model::ConfigNode;
use crate::policy::AuditConfig;
use crate::report::warning;
use crate::rules::{Condition, RULES, Root, RuleSpec, Test};
use ampguard_types::{Finding, Platform};
use rayon::prelude::*;
use serde_json::{Map, Value};

/// Table entries that will be evaluated for `platform` under `cfg`, in table order.
pub fn applicable_rules(platform: Platform, cfg: &AuditConfig) -> Vec<&'static RuleSpec> {
    RULES
        .iter()
        .filter(|rule| rule.applies_to(platform) && cfg.rule_enabled(rule.id))
        .collect()
}

/// Evaluate every applicable rule. Output order is table order.
///
/// `agent` is the `config/agent` subtree, `config` the whole settings container.
pub fn evaluate(
    platform: Platform,
    agent: &ConfigNode,
    config: &ConfigNode,
    cfg: &AuditConfig,
) -> Vec<Finding> {
    let rules = applicable_rules(platform, cfg);
    let results: Vec<Option<Finding>> = rules
        .par_iter()
        .map(|rule| evaluate_rule(rule, agent, config, cfg))
        .collect();
    results.into_iter().flatten().collect()
}

/// A rule fires only when every condition resolves and holds.
pub fn evaluate_rule(
    rule: &RuleSpec,
    agent: &ConfigNode,
    config: &ConfigNode,
    cfg: &AuditConfig,
) -> Option<Finding> {
    let root = match rule.root {
        Root::Agent => agent,
        Root::Config => config,
    };

    let mut data = Map::new();
    let mut first_value: Option<Value> = None;
    for condition in rule.conditions {
        let observed = check(condition, root, cfg, rule.id)?;
        if first_value.is_none() {
            first_value = Some(observed.clone());
        }
        data.insert(condition.path_string(), observed);
    }

    let message = match first_value {
        Some(value) if rule.message.contains("{value}") => {
            rule.message.replace("{value}", &display(&value))
        }
        _ => rule.message.to_string(),
    };
    Some(warning(rule.id, message, Value::Object(data)))
}

/// Observed value when the condition holds, `None` when it fails or cannot be resolved.
fn check(condition: &Condition, root: &ConfigNode, cfg: &AuditConfig, rule_id: &str) -> Option<Value> {
    if let Test::Absent = condition.test {
        return root.resolve(condition.path).is_none().then_some(Value::Null);
    }

    let raw = root.resolve(condition.path)?.as_scalar()?;
    match condition.test {
        Test::Equals(lit) => (raw == lit).then(|| Value::String(raw.to_string())),
        Test::AboveTtlCeiling => {
            let Ok(secs) = raw.parse::<i64>() else {
                tracing::debug!(
                    rule_id,
                    path = %condition.path_string(),
                    value = raw,
                    "skipping rule: TTL is not an integer"
                );
                return None;
            };
            (secs > cfg.ttl_ceiling_secs).then(|| Value::from(secs))
        }
        Test::HexEquals(mask) => {
            let Some(parsed) = parse_hex(raw) else {
                tracing::debug!(
                    rule_id,
                    path = %condition.path_string(),
                    value = raw,
                    "skipping rule: value is not a hex number"
                );
                return None;
            };
            (parsed == mask).then(|| Value::String(raw.to_string()))
        }
        Test::Absent => None,
    }
}

pub(crate) fn parse_hex(raw: &str) -> Option<u32> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    u32::from_str_radix(digits, 16).ok()
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{agent_with, config_with};
    use ampguard_types::ids;

    fn ids_of(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.rule_id.as_str()).collect()
    }

    #[test]
    fn ttl_at_ceiling_is_quiet_and_above_fires() {
        let cfg = AuditConfig::default();
        let agent = agent_with(&[("cloud/cache/ttl/malicious", "3600")]);
        let findings = evaluate(Platform::Linux, &agent, &ConfigNode::default(), &cfg);
        assert!(findings.is_empty());

        let agent = agent_with(&[("cloud/cache/ttl/malicious", "3601")]);
        let findings = evaluate(Platform::Linux, &agent, &ConfigNode::default(), &cfg);
        assert_eq!(ids_of(&findings), [ids::RULE_CLOUD_TTL_MALICIOUS]);
        assert_eq!(
            findings[0].message,
            "Potentially long TTL on malicious hash lookup : 3601. Change this in 'Advance Settings > Cache'"
        );
        assert_eq!(findings[0].data["cloud/cache/ttl/malicious"], 3601);
    }

    #[test]
    fn non_numeric_ttl_skips_only_that_rule() {
        let agent = agent_with(&[
            ("cloud/cache/ttl/unknown", "abc"),
            ("cloud/cache/ttl/clean", "7200"),
        ]);
        let findings = evaluate(
            Platform::Mac,
            &agent,
            &ConfigNode::default(),
            &AuditConfig::default(),
        );
        assert_eq!(ids_of(&findings), [ids::RULE_CLOUD_TTL_CLEAN]);
    }

    #[test]
    fn ttl_value_is_normalized_integer() {
        let agent = agent_with(&[("cloud/cache/ttl/block", " 086400 ")]);
        let findings = evaluate(
            Platform::Linux,
            &agent,
            &ConfigNode::default(),
            &AuditConfig::default(),
        );
        assert!(findings[0].message.contains(": 86400."));
    }

    #[test]
    fn custom_ceiling_is_respected() {
        let cfg = AuditConfig {
            ttl_ceiling_secs: 86_400,
            ..AuditConfig::default()
        };
        let agent = agent_with(&[("cloud/cache/ttl/unseen", "7200")]);
        assert!(evaluate(Platform::Linux, &agent, &ConfigNode::default(), &cfg).is_empty());
    }

    #[test]
    fn password_rule_fires_without_control_block() {
        let cfg = AuditConfig::default();
        let config = ConfigNode::default();

        let without_control = agent_with(&[("apde/enable", "1")]);
        let findings = evaluate(Platform::Windows, &without_control, &config, &cfg);
        assert_eq!(ids_of(&findings), [ids::RULE_CONTROL_PASSWORD_PROTECTION]);
        assert_eq!(findings[0].data["control/passwordex"], Value::Null);

        let unprotected = agent_with(&[("control/uninstall", "1")]);
        let findings = evaluate(Platform::Windows, &unprotected, &config, &cfg);
        assert_eq!(ids_of(&findings), [ids::RULE_CONTROL_PASSWORD_PROTECTION]);

        let protected = agent_with(&[("control/passwordex", "hash")]);
        assert!(evaluate(Platform::Windows, &protected, &config, &cfg).is_empty());

        let empty_password = agent_with(&[("control/passwordex", "")]);
        assert!(evaluate(Platform::Windows, &empty_password, &config, &cfg).is_empty());
    }

    #[test]
    fn password_rule_is_windows_only() {
        let cfg = AuditConfig::default();
        let agent = agent_with(&[("apde/enable", "1")]);
        for platform in [Platform::Mac, Platform::Linux] {
            assert!(evaluate(platform, &agent, &ConfigNode::default(), &cfg).is_empty());
        }
    }

    #[test]
    fn exploit_prevention_audit_requires_exact_mask() {
        let cfg = AuditConfig::default();
        let config = ConfigNode::default();

        let audit = agent_with(&[
            ("control/passwordex", "hash"),
            ("exprev/enable", "1"),
            ("exprev/v4/options", "0x0000033B"),
        ]);
        let findings = evaluate(Platform::Windows, &audit, &config, &cfg);
        assert_eq!(ids_of(&findings), [ids::RULE_EXPREV_AUDIT_MODE]);

        let block = agent_with(&[
            ("control/passwordex", "hash"),
            ("exprev/enable", "1"),
            ("exprev/v4/options", "0x0000033A"),
        ]);
        assert!(evaluate(Platform::Windows, &block, &config, &cfg).is_empty());

        let garbage = agent_with(&[
            ("control/passwordex", "hash"),
            ("exprev/enable", "1"),
            ("exprev/v4/options", "audit"),
        ]);
        assert!(evaluate(Platform::Windows, &garbage, &config, &cfg).is_empty());
    }

    #[test]
    fn platform_exclusive_rules_do_not_cross() {
        let cfg = AuditConfig::default();
        let agent = agent_with(&[
            ("control/passwordex", "hash"),
            ("apde/enable", "0"),
            ("scansettings/clamav/enable", "0"),
        ]);
        let config = ConfigNode::default();
        assert_eq!(
            ids_of(&evaluate(Platform::Windows, &agent, &config, &cfg)),
            [ids::RULE_APDE_DISABLED]
        );
        assert_eq!(
            ids_of(&evaluate(Platform::Linux, &agent, &config, &cfg)),
            [ids::RULE_SCAN_CLAMAV_DISABLED]
        );
    }

    #[test]
    fn config_rooted_rules_read_the_settings_container() {
        let cfg = AuditConfig::default();
        let config = config_with(&[("ui/notification/verbose", "1"), ("orbital/enablemsi", "0")]);
        let agent = agent_with(&[("control/passwordex", "hash")]);
        assert_eq!(
            ids_of(&evaluate(Platform::Windows, &agent, &config, &cfg)),
            [ids::RULE_ORBITAL_DISABLED, ids::RULE_UI_VERBOSE]
        );
        assert_eq!(
            ids_of(&evaluate(Platform::Mac, &agent, &config, &cfg)),
            [ids::RULE_UI_VERBOSE]
        );
        assert!(evaluate(Platform::Linux, &agent, &config, &cfg).is_empty());
    }

    #[test]
    fn windows_only_toasts_stay_quiet_on_mac() {
        let cfg = AuditConfig::default();
        let config = config_with(&[
            ("ui/notification/hide_ioc_toast", "0"),
            ("ui/notification/hide_detection_toast", "0"),
            ("ui/notification/hide_heuristic_toast", "0"),
            ("ui/notification/hide_exprev_toast", "0"),
        ]);
        let agent = agent_with(&[("control/passwordex", "hash")]);

        assert!(evaluate(Platform::Mac, &agent, &config, &cfg).is_empty());
        assert_eq!(
            ids_of(&evaluate(Platform::Windows, &agent, &config, &cfg)),
            [
                ids::RULE_UI_IOC_TOAST,
                ids::RULE_UI_DETECTION_TOAST,
                ids::RULE_UI_HEURISTIC_TOAST,
                ids::RULE_UI_EXPREV_TOAST,
            ]
        );
    }

    #[test]
    fn disabled_rules_are_not_evaluated() {
        let mut cfg = AuditConfig::default();
        cfg.disabled_rules.insert(ids::RULE_NFM_DISABLED.to_string());
        let agent = agent_with(&[("nfm/enable", "0"), ("cmdlinecapture/enable", "0")]);
        let findings = evaluate(Platform::Linux, &agent, &ConfigNode::default(), &cfg);
        assert_eq!(ids_of(&findings), [ids::RULE_CMDLINE_CAPTURE_DISABLED]);
        assert!(
            applicable_rules(Platform::Linux, &cfg)
                .iter()
                .all(|r| r.id != ids::RULE_NFM_DISABLED)
        );
    }

    #[test]
    fn all_conditions_must_hold() {
        let cfg = AuditConfig::default();
        let config = ConfigNode::default();
        let partial = agent_with(&[
            ("control/passwordex", "hash"),
            ("driver/selfprotect/spp", "0"),
            ("driver/selfprotect/mkp", "0"),
            ("driver/selfprotect/spp_qaction", "1"),
        ]);
        assert!(evaluate(Platform::Windows, &partial, &config, &cfg).is_empty());
    }

    #[test]
    fn parse_hex_accepts_optional_prefix() {
        assert_eq!(parse_hex("0x0000033B"), Some(0x33B));
        assert_eq!(parse_hex("33b"), Some(0x33B));
        assert_eq!(parse_hex("0X10"), Some(16));
        assert_eq!(parse_hex("zz"), None);
    }
}
