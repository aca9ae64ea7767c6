// crates/apiproof-harness/src/args.rs
// ============================================================================
// Module: Harness Arguments
// Description: Command-line argument surface for embedded test binaries.
// Purpose: Give every consumer binary the same flags without boilerplate.
// Dependencies: apiproof-docgen, clap
// ============================================================================

//! ## Overview
//! [`HarnessArgs`] is a `clap` parser a consumer binary invokes directly.
//! Flags deliberately stay small: where the server lives, where config and
//! output go, which document dialect to emit, and whether to emit one at all.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::path::PathBuf;

use apiproof_docgen::OutputFormat;
use clap::Parser;
use clap::ValueEnum;

// ============================================================================
// SECTION: Arguments
// ============================================================================

/// Command-line arguments for a harness binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "apiproof", disable_help_subcommand = true)]
pub struct HarnessArgs {
    /// Base URL of the server under test (overrides the config value).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Document dialect to emit after a fully passing run.
    #[arg(long, value_enum, default_value_t = DocFormat::Json)]
    pub format: DocFormat,
    /// Output path for the generated document (stdout when absent).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Skip document generation and only run the suite.
    #[arg(long)]
    pub no_docs: bool,
}

/// Document dialect selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocFormat {
    /// Aggregate document as compact JSON.
    Json,
    /// Aggregate document as pretty-printed JSON.
    JsonPretty,
    /// Aggregate document as YAML.
    Yaml,
    /// RAML resource-tree dialect.
    Raml,
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::JsonPretty => "json-pretty",
            Self::Yaml => "yaml",
            Self::Raml => "raml",
        })
    }
}

impl DocFormat {
    /// Returns the aggregate-document encoding for non-RAML formats.
    #[must_use]
    pub const fn output_format(self) -> Option<OutputFormat> {
        match self {
            Self::Json => Some(OutputFormat::Json),
            Self::JsonPretty => Some(OutputFormat::JsonPretty),
            Self::Yaml => Some(OutputFormat::Yaml),
            Self::Raml => None,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::missing_docs_in_private_items,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use clap::Parser;

    use super::DocFormat;
    use super::HarnessArgs;

    #[test]
    fn defaults_to_compact_json_on_stdout() {
        let args = HarnessArgs::try_parse_from(["apiproof"]).unwrap();
        assert_eq!(args.format, DocFormat::Json);
        assert!(args.output.is_none());
        assert!(!args.no_docs);
    }

    #[test]
    fn parses_every_flag() {
        let args = HarnessArgs::try_parse_from([
            "apiproof",
            "--base-url",
            "http://localhost:9000",
            "--config",
            "suite.toml",
            "--format",
            "raml",
            "--output",
            "api.raml",
            "--no-docs",
        ])
        .unwrap();
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(args.format, DocFormat::Raml);
        assert!(args.no_docs);
    }

    #[test]
    fn rejects_unknown_formats() {
        let result = HarnessArgs::try_parse_from(["apiproof", "--format", "xml"]);
        assert!(result.is_err());
    }
}
