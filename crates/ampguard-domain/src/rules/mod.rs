//! Declarative rule catalogue.
//!
//! Every policy check is one [`RuleSpec`] entry in [`RULES`]. A rule names the subtree
//! it reads from, the platforms it applies to, and an ordered list of conditions that
//! must all hold for the rule to fire. Adding a check means adding an entry to
//! `table.rs`; the engine never needs to change.

use ampguard_types::{Platform, ids};

mod table;


pub use table::RULES;

pub const ALL: &[Platform] = &Platform::ALL;
pub const WINDOWS: &[Platform] = &[Platform::Windows];
pub const MAC_LINUX: &[Platform] = &[Platform::Mac, Platform::Linux];
pub const MAC_WINDOWS: &[Platform] = &[Platform::Mac, Platform::Windows];

/// Subtree a rule's condition paths are resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Root {
    /// `config/agent`
    Agent,
    /// `config` itself (UI and Orbital settings live beside the agent block).
    Config,
}

impl Root {
    pub fn as_str(self) -> &'static str {
        match self {
            Root::Agent => "agent",
            Root::Config => "config",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Test {
    /// Trimmed scalar equals the literal.
    Equals(&'static str),
    /// Scalar is an integer above the configured TTL ceiling.
    AboveTtlCeiling,
    /// Scalar is a hex number (optional `0x`) equal to the mask.
    HexEquals(u32),
    /// The full path does not resolve under the rule root.
    Absent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Condition {
    pub path: &'static [&'static str],
    pub test: Test,
}

impl Condition {
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    pub fn describe(&self) -> String {
        let path = self.path_string();
        match self.test {
            Test::Equals(lit) => format!("{path} = {lit}"),
            Test::AboveTtlCeiling => format!("{path} > ttl ceiling"),
            Test::HexEquals(mask) => format!("{path} == 0x{mask:08X}"),
            Test::Absent => format!("{path} is missing"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RuleSpec {
    pub id: &'static str,
    pub platforms: &'static [Platform],
    pub root: Root,
    pub conditions: &'static [Condition],
    /// Finding text. `{value}` is replaced by the first condition's observed value.
    pub message: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl RuleSpec {
    pub fn applies_to(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// The `Change this in '...'` tail of the message, if present.
    pub fn remediation(&self) -> Option<&'static str> {
        self.message
            .find("Change this in")
            .map(|at| &self.message[at..])
    }
}

/// Documentation for ids reported outside the rule table.
#[derive(Clone, Copy, Debug)]
pub struct ReportRule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub remediation: &'static str,
}

pub const REPORT_RULES: &[ReportRule] = &[
    ReportRule {
        id: ids::RULE_HEADER_LAST_CHANGE,
        title: "Last Policy Change",
        description: "\
Reports how long ago the policy was last modified, computed from the `updated`
timestamp (epoch milliseconds, UTC) in the policy header.

Old policies are not wrong by themselves, but a policy that has not changed in a
long time has probably not kept up with new engine options.",
        remediation: "Review the policy in the management console and confirm it is still current.",
    },
    ReportRule {
        id: ids::RULE_EXCLUSIONS_WILDCARD_FILE,
        title: "Wildcard File Exclusion",
        description: "\
Reports file or path exclusions whose decoded path contains `*`.

Wildcard exclusions remove whole classes of files from scanning and are a common
hiding place for malware.",
        remediation: "Replace the wildcard with the narrowest explicit path that still works.",
    },
    ReportRule {
        id: ids::RULE_EXCLUSIONS_WILDCARD_CERT_ISSUER,
        title: "Wildcard Certificate Issuer Exclusion",
        description: "\
Reports certificate issuer exclusions containing `*`.

Any binary signed by a matching issuer skips scanning, so a wildcard issuer can
trust far more signers than intended.",
        remediation: "List the exact issuer names instead of a pattern.",
    },
    ReportRule {
        id: ids::RULE_EXCLUSIONS_WILDCARD_PROCESS,
        title: "Wildcard Process Exclusion",
        description: "\
Reports process exclusions whose decoded path contains `*`.

Activity of excluded processes is not monitored; a wildcard lets any process with
a matching path escape monitoring.",
        remediation: "Exclude the full path of each trusted executable.",
    },
];

/// Human-readable documentation for one rule id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explanation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub remediation: Option<&'static str>,
    /// Platforms on which the rule can fire.
    pub platforms: Vec<Platform>,
    /// Conditions per table entry, rendered as text.
    pub conditions: Vec<String>,
}

/// Look up a rule id across the rule table and the report rules.
pub fn lookup(id: &str) -> Option<Explanation> {
    let entries: Vec<&RuleSpec> = RULES.iter().filter(|r| r.id == id).collect();
    if let Some(first) = entries.first() {
        let mut platforms: Vec<Platform> = Vec::new();
        let mut conditions = Vec::new();
        for entry in &entries {
            for p in entry.platforms {
                if !platforms.contains(p) {
                    platforms.push(*p);
                }
            }
            let text: Vec<String> = entry.conditions.iter().map(Condition::describe).collect();
            conditions.push(format!("{}: {}", entry.root.as_str(), text.join(" and ")));
        }
        platforms.sort();
        return Some(Explanation {
            id: first.id,
            title: first.title,
            description: first.description,
            remediation: first.remediation(),
            platforms,
            conditions,
        });
    }

    REPORT_RULES
        .iter()
        .find(|r| r.id == id)
        .map(|r| Explanation {
            id: r.id,
            title: r.title,
            description: r.description,
            remediation: Some(r.remediation),
            platforms: Platform::ALL.to_vec(),
            conditions: Vec::new(),
        })
}

/// All known ids (table rules first, in declaration order, then report rules), deduplicated.
pub fn known_rule_ids() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for id in RULES.iter().map(|r| r.id).chain(REPORT_RULES.iter().map(|r| r.id)) {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

/// Table entries applicable to `platform`, in declaration order.
pub fn catalog(platform: Option<Platform>) -> Vec<&'static RuleSpec> {
    RULES
        .iter()
        .filter(|r| platform.is_none_or(|p| r.applies_to(p)))
        .collect()
}
