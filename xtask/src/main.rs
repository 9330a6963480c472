//! Developer tasks (schema generation, fixture checks, rule catalogue coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use ampguard_app::{AuditInput, OutputFormat, render_report, run_audit};
use ampguard_domain::rules::{RULES, known_rule_ids, lookup};
use ampguard_settings::Overrides;
use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use schemars::schema_for;
use std::fs;

/// Project root (parent of the xtask directory).
fn project_root() -> Utf8PathBuf {
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn schemas_dir() -> Utf8PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> Utf8PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(ampguard_types::AmpguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(ampguard_settings::AmpguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "ampguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "ampguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json).with_context(|| format!("Failed to write schema to {path}"))?;
        println!("Wrote {path}");
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that the schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }
        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Rule ids are `<feature>.<condition>`, lowercase with underscores.
fn is_valid_rule_id(id: &str) -> bool {
    let mut parts = id.split('.');
    let (Some(feature), Some(condition), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    [feature, condition].iter().all(|part| {
        part.starts_with(|c: char| c.is_ascii_lowercase())
            && part
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    })
}

fn rule_coverage() -> anyhow::Result<()> {
    let ids = known_rule_ids();
    let mut errors = Vec::new();

    for id in &ids {
        if !is_valid_rule_id(id) {
            errors.push(format!("Rule id '{}' is not <feature>.<condition>", id));
        }
        match lookup(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Rule id '{}' has empty title", id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Rule id '{}' has empty description", id));
                }
                if exp.remediation.is_none() {
                    errors.push(format!("Rule id '{}' has no remediation", id));
                }
                if exp.platforms.is_empty() {
                    errors.push(format!("Rule id '{}' applies to no platform", id));
                }
            }
            None => errors.push(format!("Rule id '{}' has no explanation", id)),
        }
    }

    for rule in RULES {
        if rule.conditions.is_empty() {
            errors.push(format!("Rule '{}' has no conditions", rule.id));
        }
    }

    if errors.is_empty() {
        println!("✓ {} table entries", RULES.len());
        println!("✓ {} rule ids have explanations", ids.len());
        println!("\n✓ All rule coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Rule coverage validation failed with {} errors", errors.len())
    }
}

/// Fixture directories holding a `policy.xml`, sorted by name.
fn fixture_dirs() -> anyhow::Result<Vec<Utf8PathBuf>> {
    let root = fixtures_dir();
    let mut dirs = Vec::new();
    for entry in root
        .read_dir_utf8()
        .with_context(|| format!("Failed to read {root}"))?
    {
        let path = entry?.path().to_path_buf();
        if path.join("policy.xml").is_file() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn render_fixture(dir: &Utf8Path) -> anyhow::Result<String> {
    let policy = dir.join("policy.xml");
    let output = run_audit(AuditInput {
        policy_path: &policy,
        config_text: "",
        overrides: Overrides::default(),
    })
    .with_context(|| format!("audit {policy}"))?;
    render_report(&output.report, OutputFormat::Text)
}

/// Compare (or with `update`, rewrite) each fixture's `expected.txt`.
fn fixtures(update: bool) -> anyhow::Result<()> {
    let mut stale = Vec::new();
    for dir in fixture_dirs()? {
        let actual = render_fixture(&dir)?;
        let expected_path = dir.join("expected.txt");
        if update {
            fs::write(&expected_path, &actual)
                .with_context(|| format!("Failed to write {expected_path}"))?;
            println!("Wrote {expected_path}");
            continue;
        }
        let expected = fs::read_to_string(&expected_path).unwrap_or_default();
        if expected == actual {
            println!("✓ {}", dir.file_name().unwrap_or(dir.as_str()));
        } else {
            stale.push(dir);
        }
    }

    if stale.is_empty() {
        return Ok(());
    }
    eprintln!("Fixtures out of date:");
    for dir in &stale {
        eprintln!("  - {dir}");
    }
    eprintln!("\nRun `cargo xtask update-fixtures` to regenerate.");
    bail!("Fixture check failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  rule-coverage     Validate every rule id has an explanation and remediation");
    eprintln!("  check-fixtures    Compare tests/fixtures/*/expected.txt with current output");
    eprintln!("  update-fixtures   Rewrite tests/fixtures/*/expected.txt");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "rule-coverage" => rule_coverage(),
        "check-fixtures" => fixtures(false),
        "update-fixtures" => fixtures(true),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
