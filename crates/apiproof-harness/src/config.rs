// crates/apiproof-harness/src/config.rs
// ============================================================================
// Module: Harness Configuration
// Description: TOML configuration for document seed and runner settings.
// Purpose: Keep suite wiring out of code and in one declarative file.
// Dependencies: apiproof-docgen, apiproof-runner, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with a hard size limit; a missing
//! path yields the built-in defaults instead of an error so small suites need
//! no file at all. The `[document]` table seeds the generated document and
//! the `[runner]` table configures transport behavior.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use apiproof_docgen::DocumentSeed;
use apiproof_runner::RunnerConfig;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading harness configuration.
///
/// # Invariants
/// - Invalid configuration fails the harness before any request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("config io error: {0}")]
    Io(String),
    /// The configuration file could not be parsed as TOML.
    #[error("config parse error: {0}")]
    Parse(String),
    /// The configuration file violated a structural limit.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Harness configuration file contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarnessConfig {
    /// Document seed metadata for generation.
    #[serde(default)]
    pub document: DocumentSeed,
    /// Runner transport settings.
    #[serde(default)]
    pub runner: RunnerSettings,
}

/// Runner settings as authored in the `[runner]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    /// Base address of the server under test.
    pub base_url: String,
    /// Headers applied to every request unless a case overrides them.
    pub default_headers: BTreeMap<String, String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        let defaults = RunnerConfig::default();
        Self {
            base_url: defaults.base_url,
            default_headers: defaults.default_headers,
            timeout_ms: defaults.timeout_ms,
            user_agent: defaults.user_agent,
        }
    }
}

impl RunnerSettings {
    /// Builds the runner configuration, applying an optional base override.
    #[must_use]
    pub fn runner_config(&self, base_url_override: Option<&str>) -> RunnerConfig {
        RunnerConfig {
            base_url: base_url_override.map_or_else(|| self.base_url.clone(), str::to_string),
            default_headers: self.default_headers.clone(),
            timeout_ms: self.timeout_ms,
            user_agent: self.user_agent.clone(),
        }
    }
}

impl HarnessConfig {
    /// Loads configuration from disk, or defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
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

    use super::HarnessConfig;

    #[test]
    fn absent_path_yields_defaults() {
        let config = HarnessConfig::load(None).unwrap();
        assert_eq!(config.document.base_path, "/");
        assert_eq!(config.runner.timeout_ms, 30_000);
    }

    #[test]
    fn parses_document_and_runner_tables() {
        let config: HarnessConfig = toml::from_str(
            r#"
            [document]
            title = "Pet Store"
            version = "2.3"
            host = "petstore.example.com"

            [runner]
            base_url = "http://localhost:9000"
            timeout_ms = 1500

            [runner.default_headers]
            "X-Api-Key" = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(config.document.title, "Pet Store");
        assert_eq!(config.document.version, "2.3");
        assert_eq!(config.runner.base_url, "http://localhost:9000");
        assert_eq!(config.runner.default_headers["X-Api-Key"], "secret");
    }

    #[test]
    fn cli_base_url_wins_over_config() {
        let config = HarnessConfig::load(None).unwrap();
        let runner = config.runner.runner_config(Some("http://override:1"));
        assert_eq!(runner.base_url, "http://override:1");
    }

    #[test]
    fn partial_runner_table_keeps_defaults() {
        let config: HarnessConfig = toml::from_str(
            r#"
            [runner]
            base_url = "http://localhost:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.runner.timeout_ms, 30_000);
        assert_eq!(config.runner.user_agent, "apiproof/0.1");
    }
}
