//! Render use case: turn an in-memory report into the requested output format.

use crate::report::{serialize_report, to_renderable};
use ampguard_types::AmpguardReport;
use anyhow::Context;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Console report in the `[+]` / `[!]` style.
    #[default]
    Text,
    Markdown,
    /// The serialized report envelope.
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format: {other} (expected text|markdown|json)"),
        }
    }
}

pub fn render_report(report: &AmpguardReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(ampguard_render::render_text(&to_renderable(report))),
        OutputFormat::Markdown => Ok(ampguard_render::render_markdown(&to_renderable(report))),
        OutputFormat::Json => {
            let bytes = serialize_report(report)?;
            let mut text = String::from_utf8(bytes).context("report json is not utf-8")?;
            text.push('\n');
            Ok(text)
        }
    }
}
