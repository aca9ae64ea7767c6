// crates/apiproof-harness/src/harness.rs
// ============================================================================
// Module: Harness Driver
// Description: End-to-end suite execution and document emission.
// Purpose: Run the suite, report results, and emit docs on full success.
// Dependencies: apiproof-core, apiproof-docgen, apiproof-runner, thiserror
// ============================================================================

//! ## Overview
//! [`Harness`] ties the pieces together: configuration, runner, console
//! observer, and document generation. Documentation is emitted only when
//! every case passed and no lifecycle hook failed, so a published document
//! always describes verified behavior.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::process::ExitCode;

use apiproof_core::Endpoint;
use apiproof_docgen::DocGenError;
use apiproof_docgen::RamlGenerator;
use apiproof_docgen::SwaggerGenerator;
use apiproof_runner::Runner;
use apiproof_runner::RunnerError;
use thiserror::Error;

use crate::args::HarnessArgs;
use crate::config::ConfigError;
use crate::config::HarnessConfig;
use crate::console;
use crate::console::ConsoleObserver;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by the harness outside individual case failures.
///
/// # Invariants
/// - Case and lifecycle failures are report data, never harness errors.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The runner could not be constructed.
    #[error(transparent)]
    Runner(#[from] RunnerError),
    /// Document generation failed.
    #[error(transparent)]
    DocGen(#[from] DocGenError),
    /// The summary or document could not be written.
    #[error("output write error: {0}")]
    Output(String),
}

// ============================================================================
// SECTION: Harness
// ============================================================================

/// Suite driver embedding runner and document generation.
pub struct Harness {
    /// Parsed command-line arguments.
    args: HarnessArgs,
    /// Loaded configuration (defaults when no file was given).
    config: HarnessConfig,
}

impl Harness {
    /// Creates a harness from parsed arguments, loading configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] when the configuration cannot be loaded.
    pub fn new(args: HarnessArgs) -> Result<Self, HarnessError> {
        let config = HarnessConfig::load(args.config.as_deref())?;
        Ok(Self {
            args,
            config,
        })
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs the suite and emits documentation when everything passed.
    ///
    /// Returns `true` when every case passed and no lifecycle hook failed.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] for configuration, transport setup, document
    /// generation, or output failures.
    pub fn run(&self, endpoints: &[Endpoint]) -> Result<bool, HarnessError> {
        let runner_config = self.config.runner.runner_config(self.args.base_url.as_deref());
        let runner = Runner::new(runner_config)?;
        let mut observer = ConsoleObserver;
        let report = runner.run_with_observer(endpoints, &mut observer);

        for line in console::summary_lines(&report) {
            console::write_line(&line).map_err(|err| HarnessError::Output(err.to_string()))?;
        }

        let passed = report.all_passed();
        if passed && !self.args.no_docs {
            self.emit_document(endpoints)?;
        }
        Ok(passed)
    }

    /// Runs the suite and maps the result onto a process exit code.
    ///
    /// # Errors
    ///
    /// Propagates every [`HarnessError`] from [`Self::run`].
    pub fn execute(&self, endpoints: &[Endpoint]) -> Result<ExitCode, HarnessError> {
        let passed = self.run(endpoints)?;
        Ok(if passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }

    /// Generates the selected document dialect and writes it out.
    fn emit_document(&self, endpoints: &[Endpoint]) -> Result<(), HarnessError> {
        let seed = self.config.document.clone();
        let bytes = match self.args.format.output_format() {
            Some(format) => SwaggerGenerator::new(seed, format).generate(endpoints)?,
            None => RamlGenerator::new(seed).generate(endpoints)?,
        };
        match &self.args.output {
            Some(path) => fs::write(path, &bytes).map_err(|err| {
                HarnessError::Output(format!("cannot write {}: {err}", path.display()))
            }),
            None => console::write_bytes_line(&bytes)
                .map_err(|err| HarnessError::Output(err.to_string())),
        }
    }
}
