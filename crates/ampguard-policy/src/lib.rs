//! Policy document adapters: read an exported policy XML file and normalize it into a
//! [`ConfigNode`] tree for the audit engine.
//!
//! This crate is allowed to do filesystem IO.

#![forbid(unsafe_code)]

mod xml;

use ampguard_domain::ConfigNode;
use anyhow::Context;
use camino::Utf8Path;

pub use xml::{LoadError, TEXT_KEY, parse_policy_xml};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a policy document.
    ///
    /// Returns `Ok(...)` on well-formed XML, `Err(...)` otherwise. **Never panics** on any input.
    pub fn parse_policy(text: &str) -> Result<(), LoadError> {
        let _ = parse_policy_xml(text)?;
        Ok(())
    }

    /// Parse arbitrary text and resolve an arbitrary `/`-separated path in the result.
    ///
    /// **Never panics** on any input.
    pub fn parse_and_resolve(text: &str, path: &str) -> Option<String> {
        let tree = parse_policy_xml(text).ok()?;
        let segments: Vec<&str> = path.split('/').collect();
        tree.resolve(&segments)
            .and_then(ConfigNode::as_scalar)
            .map(str::to_string)
    }
}

/// Read and parse a policy export from disk.
pub fn load_policy(path: &Utf8Path) -> anyhow::Result<ConfigNode> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let tree = parse_policy_xml(&text).with_context(|| format!("parse policy XML {path}"))?;
    tracing::info!(%path, bytes = text.len(), "loaded policy");
    Ok(tree)
}
