use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding.
///
/// Identity fields:
/// - rule_id
/// - rendered message (carries the observed values)
pub fn fingerprint_for_finding(rule_id: &str, message: &str) -> String {
    let canonical = [rule_id, message].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_value_sensitive() {
        let a = fingerprint_for_finding("cloud.ttl_malicious", "ttl 7200");
        let b = fingerprint_for_finding("cloud.ttl_malicious", "ttl 7200");
        let c = fingerprint_for_finding("cloud.ttl_malicious", "ttl 7201");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
