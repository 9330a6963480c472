//! Config parsing and audit policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{AmpguardConfigV1, RuleConfig, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `ampguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AmpguardConfigV1> {
    let cfg: AmpguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective audit config (file settings + CLI overrides + per-rule switches).
pub fn resolve_config(
    cfg: AmpguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
