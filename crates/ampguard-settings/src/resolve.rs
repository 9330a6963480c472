use crate::model::{AmpguardConfigV1, SCHEMA_CONFIG_V1};
use ampguard_domain::AuditConfig;
use ampguard_domain::rules::known_rule_ids;
use ampguard_types::Platform;
use anyhow::Context;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub platform: Option<String>,
    pub ttl_ceiling_secs: Option<i64>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: AuditConfig,
}

pub fn resolve_config(
    cfg: AmpguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut effective = AuditConfig::default();

    if let Some(platform) = overrides.platform.as_deref().or(cfg.platform.as_deref()) {
        effective.platform_override = Some(parse_platform(platform)?);
    }

    if let Some(ceiling) = overrides.ttl_ceiling_secs.or(cfg.ttl_ceiling_secs) {
        if ceiling < 0 {
            anyhow::bail!("ttl_ceiling_secs must not be negative (got {ceiling})");
        }
        effective.ttl_ceiling_secs = ceiling;
    }

    let known = known_rule_ids();
    for (rule_id, rc) in cfg.rules.iter() {
        if !known.contains(&rule_id.as_str()) {
            anyhow::bail!("unknown rule id in [rules]: {rule_id}");
        }
        if rc.enabled == Some(false) {
            effective.disabled_rules.insert(rule_id.clone());
        }
    }

    Ok(ResolvedConfig { effective })
}

fn parse_platform(v: &str) -> anyhow::Result<Platform> {
    v.parse::<Platform>()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("invalid platform override")
}
