//! CLI entry point for ampguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `ampguard-app` crate.

mod logging;

use ampguard_app::{
    AuditInput, ExplainOutput, OutputFormat, audit_exit_code, format_explanation,
    format_not_found, format_rule_list, list_rules, parse_report_json, render_report, run_audit,
    run_explain, serialize_report,
};
use ampguard_settings::Overrides;
use ampguard_types::{AmpguardReport, Platform};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use logging::{LogConfig, LogFormat};

const DEFAULT_CONFIG: &str = "ampguard.toml";

#[derive(Parser, Debug)]
#[command(
    name = "ampguard",
    version,
    about = "Offline auditor for AMP / Secure Endpoint policy exports"
)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (error|warn|info|debug|trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Diagnostic log format on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit an exported policy XML file.
    Audit {
        /// Policy export to audit.
        #[arg(long, short = 'i')]
        input: Utf8PathBuf,

        /// Path to ampguard config TOML (defaults to ./ampguard.toml when present).
        #[arg(long)]
        config: Option<Utf8PathBuf>,

        /// Skip platform detection (windows|mac|linux).
        #[arg(long)]
        platform: Option<String>,

        /// Report cloud cache TTLs above this many seconds.
        #[arg(long)]
        ttl_ceiling_secs: Option<i64>,

        /// Output format on stdout (text|markdown|json).
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Also write the JSON report to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Render an existing JSON report.
    Render {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Output format (text|markdown|json).
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a rule id with remediation guidance.
    Explain {
        /// The rule id (e.g., "apde.disabled") to explain.
        identifier: String,
    },

    /// List the rule catalogue.
    Rules {
        /// Only rules that apply to this platform.
        #[arg(long)]
        platform: Option<Platform>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(
        LogConfig::default()
            .level(cli.log_level.clone())
            .format(cli.log_format),
    );

    let result = match cli.cmd {
        Commands::Audit {
            input,
            config,
            platform,
            ttl_ceiling_secs,
            format,
            report_out,
        } => cmd_audit(
            &input,
            config.as_deref(),
            Overrides {
                platform,
                ttl_ceiling_secs,
            },
            format,
            report_out.as_deref(),
        ),
        Commands::Render {
            report,
            format,
            output,
        } => cmd_render(&report, format, output.as_deref()),
        Commands::Explain { identifier } => Ok(cmd_explain(&identifier)),
        Commands::Rules { platform } => {
            print!("{}", format_rule_list(&list_rules(platform)));
            Ok(0)
        }
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("ampguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_audit(
    input: &Utf8Path,
    config: Option<&Utf8Path>,
    overrides: Overrides,
    format: OutputFormat,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    if !input.is_file() {
        anyhow::bail!("input file does not exist: {input}");
    }
    let config_text = read_config(config)?;

    let output = run_audit(AuditInput {
        policy_path: input,
        config_text: &config_text,
        overrides,
    })?;

    if let Some(path) = report_out {
        write_report_file(path, &output.report).context("write report json")?;
    }

    print!("{}", render_report(&output.report, format)?);
    Ok(audit_exit_code(output.report.status))
}

/// An explicit `--config` must be readable; the default file is optional.
fn read_config(config: Option<&Utf8Path>) -> anyhow::Result<String> {
    match config {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
        }
        None => {
            let path = Utf8Path::new(DEFAULT_CONFIG);
            if path.is_file() {
                tracing::debug!(%path, "using default config file");
                std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
            } else {
                Ok(String::new())
            }
        }
    }
}

fn cmd_render(
    report_path: &Utf8Path,
    format: OutputFormat,
    output: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let text = render_report(&report, format)?;

    match output {
        Some(out_path) => write_text_file(out_path, &text).context("write rendered output")?,
        None => print!("{}", text),
    }
    Ok(0)
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available,
        } => {
            eprint!("{}", format_not_found(&identifier, &available));
            1
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &AmpguardReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
