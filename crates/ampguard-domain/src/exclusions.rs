//! Exclusion listing and wildcard detection.

use crate::model::ConfigNode;
use crate::report::warning;
use ampguard_types::{ExclusionEntry, ExclusionSet, Finding, ids};
use percent_encoding::percent_decode_str;
use serde_json::json;

const FILE_ITEMS: &[&str] = &["info", "item"];
const CERT_ISSUER_NAMES: &[&str] = &["certissuer", "name"];
const PROCESS_ITEMS: &[&str] = &["process", "item"];

/// A pipe-delimited file exclusion record, e.g. `1|0|0|CSIDL_WINDOWS|%5CTemp%5C*.log|1|`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusionRecord {
    fields: Vec<String>,
}

impl ExclusionRecord {
    /// Positional field holding the percent-encoded path.
    pub const PAYLOAD_FIELD: usize = 4;

    pub fn parse(raw: &str) -> Self {
        Self {
            fields: raw.split('|').map(str::to_string).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Decoded payload, or `None` when the record is too short to carry one.
    pub fn payload(&self) -> Option<String> {
        self.fields
            .get(Self::PAYLOAD_FIELD)
            .map(|field| percent_decode(field))
    }
}

/// Lossy UTF-8 percent-decoding (`%2A.exe` -> `*.exe`). `+` is left alone.
pub fn percent_decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Parse the three exclusion kinds independently.
pub fn parse_exclusions(exclusions: &ConfigNode) -> ExclusionSet {
    ExclusionSet {
        files: collect(exclusions.resolve(FILE_ITEMS), |raw| {
            let record = ExclusionRecord::parse(raw);
            let payload = record.payload();
            if payload.is_none() {
                tracing::debug!(
                    record = raw,
                    fields = record.fields().len(),
                    "skipping file exclusion without a path field"
                );
            }
            payload
        }),
        cert_issuers: collect(exclusions.resolve(CERT_ISSUER_NAMES), |raw| {
            Some(percent_decode(raw))
        }),
        processes: collect(exclusions.resolve(PROCESS_ITEMS), |raw| {
            Some(percent_decode(raw))
        }),
    }
}

fn collect(
    node: Option<&ConfigNode>,
    decode: impl Fn(&str) -> Option<String>,
) -> Option<Vec<ExclusionEntry>> {
    let node = node.filter(|n| !n.is_empty())?;
    let entries = node
        .items()
        .iter()
        .filter_map(ConfigNode::as_scalar)
        .filter(|raw| !raw.is_empty())
        .filter_map(|raw| decode(raw))
        .map(|value| ExclusionEntry {
            wildcard: value.contains('*'),
            value,
        })
        .collect();
    Some(entries)
}

/// One finding per wildcard entry: files, then certificate issuers, then processes.
pub fn wildcard_findings(set: &ExclusionSet) -> Vec<Finding> {
    let kinds = [
        (
            &set.files,
            ids::RULE_EXCLUSIONS_WILDCARD_FILE,
            "File exclusion uses a wildcard",
        ),
        (
            &set.cert_issuers,
            ids::RULE_EXCLUSIONS_WILDCARD_CERT_ISSUER,
            "Certificate issuer exclusion uses a wildcard",
        ),
        (
            &set.processes,
            ids::RULE_EXCLUSIONS_WILDCARD_PROCESS,
            "Process exclusion uses a wildcard",
        ),
    ];

    let mut out = Vec::new();
    for (entries, rule_id, label) in kinds {
        let Some(entries) = entries else { continue };
        for entry in entries.iter().filter(|e| e.wildcard) {
            out.push(warning(
                rule_id,
                format!("{label} : {}", entry.value),
                json!({ "value": entry.value }),
            ));
        }
    }
    out
}
