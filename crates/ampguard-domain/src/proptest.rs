//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Path resolution never panicking on arbitrary trees
//! - Classifier precedence
//! - TTL threshold monotonicity
//! - Platform isolation of the rule table

use crate::engine::evaluate;
use crate::model::ConfigNode;
use crate::platform::classify;
use crate::policy::AuditConfig;
use crate::test_support::agent_with;
use ampguard_types::{Platform, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("agent".to_string()),
        Just("cloud".to_string()),
        Just("item".to_string()),
        Just("0".to_string()),
        Just("1".to_string()),
        prop::string::string_regex("[a-z_]{1,8}").unwrap(),
    ]
}

fn arb_node() -> impl Strategy<Value = ConfigNode> {
    let leaf = prop::string::string_regex("[ -~]{0,12}")
        .unwrap()
        .prop_map(ConfigNode::Scalar);
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::btree_map(arb_key(), inner.clone(), 0..6).prop_map(ConfigNode::Mapping),
            prop::collection::vec(inner, 0..6).prop_map(ConfigNode::Sequence),
        ]
    })
}

fn arb_platform() -> impl Strategy<Value = Platform> {
    prop_oneof![
        Just(Platform::Windows),
        Just(Platform::Mac),
        Just(Platform::Linux),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn resolve_never_panics(node in arb_node(), path in prop::collection::vec(arb_key(), 0..6)) {
        let segments: Vec<&str> = path.iter().map(String::as_str).collect();
        let _ = node.resolve(&segments);
        let _ = node.flatten_text();
    }

    #[test]
    fn empty_path_resolves_to_self(node in arb_node()) {
        prop_assert_eq!(node.resolve(&[]), Some(&node));
    }

    #[test]
    fn mac_signature_wins_regardless_of_other_content(
        prefix in "[a-z ]{0,10}",
        windows in any::<bool>(),
    ) {
        let mut text = format!("{prefix} /Library/Logs");
        if windows {
            text.push_str(" CSIDL_WINDOWS");
        }
        let mut node = ConfigNode::default();
        node.set_path("info/item", ConfigNode::scalar(text));
        prop_assert_eq!(classify(Some(&node), None), Platform::Mac);
    }

    #[test]
    fn text_without_signatures_is_linux(text in "[a-z0-9/ ]{0,40}") {
        let mut node = ConfigNode::default();
        node.set_path("info/item", ConfigNode::scalar(text));
        prop_assert_eq!(classify(Some(&node), None), Platform::Linux);
    }

    #[test]
    fn ttl_fires_iff_above_ceiling(ttl in 0i64..200_000, ceiling in 0i64..200_000, platform in arb_platform()) {
        let cfg = AuditConfig { ttl_ceiling_secs: ceiling, ..AuditConfig::default() };
        let ttl_text = ttl.to_string();
        let agent = agent_with(&[("cloud/cache/ttl/unknown", ttl_text.as_str())]);
        let findings = evaluate(platform, &agent, &ConfigNode::default(), &cfg);
        let fired = findings.iter().any(|f| f.rule_id == ids::RULE_CLOUD_TTL_UNKNOWN);
        prop_assert_eq!(fired, ttl > ceiling);
    }

    #[test]
    fn findings_only_come_from_applicable_rules(platform in arb_platform(), value in prop_oneof![Just("0"), Just("1")]) {
        let agent = agent_with(&[
            ("apde/enable", value),
            ("scansettings/clamav/enable", value),
            ("nfm/enable", value),
            ("driver/protmode/qaction", value),
        ]);
        let findings = evaluate(platform, &agent, &ConfigNode::default(), &AuditConfig::default());
        for finding in &findings {
            let applicable = crate::rules::RULES
                .iter()
                .any(|r| r.id == finding.rule_id && r.applies_to(platform));
            prop_assert!(applicable, "{} fired on {}", finding.rule_id, platform);
        }
    }
}
