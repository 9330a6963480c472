//! Policy identity and staleness.

use crate::model::ConfigNode;
use crate::report::warning;
use ampguard_types::{Finding, PolicyHeader, ids};
use serde_json::json;
use time::OffsetDateTime;

/// Read identity metadata from the header subtree.
///
/// Returns `None` unless the header is non-empty and carries a `policy` mapping with at
/// least two fields. The `updated` timestamp is read as epoch milliseconds in UTC.
pub fn report_header(janus: Option<&ConfigNode>, now: OffsetDateTime) -> Option<PolicyHeader> {
    let janus = janus.filter(|node| !node.is_empty())?;
    let policy = janus.get("policy")?;
    if !matches!(policy, ConfigNode::Mapping(_)) || policy.len() < 2 {
        return None;
    }

    let updated_ms = text(policy, "updated").and_then(|raw| raw.parse::<i64>().ok());
    let elapsed_secs = updated_ms.and_then(|ms| elapsed_since(ms, now));

    Some(PolicyHeader {
        name: text(policy, "name"),
        uuid: text(policy, "uuid"),
        serial_number: text(policy, "serial_number"),
        business_uuid: janus
            .resolve(&["business", "uuid"])
            .and_then(ConfigNode::as_scalar)
            .map(str::to_string),
        updated_ms,
        elapsed_secs,
    })
}

/// `Last policy change: ... ago`, when the elapsed time is known.
pub fn last_change_finding(header: &PolicyHeader) -> Option<Finding> {
    let elapsed = header.elapsed_secs?;
    Some(warning(
        ids::RULE_HEADER_LAST_CHANGE,
        format!("Last policy change: {} ago", format_elapsed(elapsed)),
        json!({
            "updated_ms": header.updated_ms,
            "elapsed_secs": elapsed,
        }),
    ))
}

/// Milliseconds to whole seconds, rounding half to even.
pub fn round_millis_to_secs(ms: i64) -> i64 {
    let secs = ms.div_euclid(1000);
    let rem = ms.rem_euclid(1000);
    if rem > 500 || (rem == 500 && secs % 2 != 0) {
        secs + 1
    } else {
        secs
    }
}

fn elapsed_since(updated_ms: i64, now: OffsetDateTime) -> Option<i64> {
    let updated = OffsetDateTime::from_unix_timestamp(round_millis_to_secs(updated_ms)).ok()?;
    Some((now - updated).whole_seconds())
}

/// `D days, H:MM:SS`, or `H:MM:SS` under a day. Negative spans get a leading `-`.
pub fn format_elapsed(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let total = secs.unsigned_abs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    match days {
        0 => format!("{sign}{hours}:{minutes:02}:{seconds:02}"),
        1 => format!("{sign}1 day, {hours}:{minutes:02}:{seconds:02}"),
        d => format!("{sign}{d} days, {hours}:{minutes:02}:{seconds:02}"),
    }
}

fn text(node: &ConfigNode, key: &str) -> Option<String> {
    node.get(key)
        .and_then(ConfigNode::as_scalar)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn janus(updated: &str) -> ConfigNode {
        let mut node = ConfigNode::default();
        node.set_path("policy/name", "Servers".into());
        node.set_path("policy/uuid", "1f0c-uuid".into());
        node.set_path("policy/serial_number", "42".into());
        node.set_path("policy/updated", updated.into());
        node.set_path("business/uuid", "b-uuid".into());
        node
    }

    #[test]
    fn reads_identity_fields() {
        let now = datetime!(2024-01-02 00:00:00 UTC);
        let header = report_header(Some(&janus("1704067200000")), now).unwrap();
        assert_eq!(header.name.as_deref(), Some("Servers"));
        assert_eq!(header.uuid.as_deref(), Some("1f0c-uuid"));
        assert_eq!(header.serial_number.as_deref(), Some("42"));
        assert_eq!(header.business_uuid.as_deref(), Some("b-uuid"));
        assert_eq!(header.updated_ms, Some(1_704_067_200_000));
        assert_eq!(header.elapsed_secs, Some(86_400));
    }

    #[test]
    fn requires_policy_with_two_fields() {
        let now = datetime!(2024-01-02 00:00:00 UTC);
        let mut thin = ConfigNode::default();
        thin.set_path("policy/name", "only".into());
        assert!(report_header(Some(&thin), now).is_none());
        assert!(report_header(Some(&ConfigNode::default()), now).is_none());
        assert!(report_header(None, now).is_none());
    }

    #[test]
    fn non_numeric_timestamp_leaves_elapsed_unset() {
        let now = datetime!(2024-01-02 00:00:00 UTC);
        let header = report_header(Some(&janus("yesterday")), now).unwrap();
        assert_eq!(header.updated_ms, None);
        assert_eq!(header.elapsed_secs, None);
        assert!(last_change_finding(&header).is_none());
    }

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(round_millis_to_secs(1_499), 1);
        assert_eq!(round_millis_to_secs(1_500), 2);
        assert_eq!(round_millis_to_secs(2_500), 2);
        assert_eq!(round_millis_to_secs(2_501), 3);
        assert_eq!(round_millis_to_secs(-1_500), -2);
    }

    #[test]
    fn formats_like_a_timedelta() {
        assert_eq!(format_elapsed(59), "0:00:59");
        assert_eq!(format_elapsed(3_723), "1:02:03");
        assert_eq!(format_elapsed(86_400), "1 day, 0:00:00");
        assert_eq!(format_elapsed(2 * 86_400 + 61), "2 days, 0:01:01");
        assert_eq!(format_elapsed(-61), "-0:01:01");
    }

    #[test]
    fn last_change_finding_renders_elapsed() {
        let now = datetime!(2024-01-03 01:02:03 UTC);
        let header = report_header(Some(&janus("1704067200000")), now).unwrap();
        let finding = last_change_finding(&header).unwrap();
        assert_eq!(finding.rule_id, ids::RULE_HEADER_LAST_CHANGE);
        assert_eq!(finding.message, "Last policy change: 2 days, 1:02:03 ago");
        assert_eq!(finding.data["elapsed_secs"], 176_523);
    }
}
