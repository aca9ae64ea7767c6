// crates/apiproof-harness/src/lib.rs
// ============================================================================
// Module: Apiproof Harness Library
// Description: Command-line surface embedding the runner and doc generators.
// Purpose: Turn an authored suite into a runnable binary with one call.
// Dependencies: apiproof-core, apiproof-docgen, apiproof-runner, clap, toml
// ============================================================================

//! ## Overview
//! The harness is what a downstream test binary embeds: it parses
//! [`HarnessArgs`], loads an optional TOML [`config::HarnessConfig`], runs
//! the authored suite with a console observer, and emits the aggregate API
//! document only when every case passed. A typical consumer is three lines:
//!
//! ```ignore
//! let args = HarnessArgs::parse();
//! let harness = Harness::new(args)?;
//! std::process::exit(harness.execute(&endpoints)?);
//! ```
//!
//! Invariants:
//! - Documentation is never emitted from a failing run.
//! - The exit code is nonzero whenever any case or lifecycle hook failed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod args;
pub mod config;
pub mod console;
pub mod harness;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use args::DocFormat;
pub use args::HarnessArgs;
pub use config::ConfigError;
pub use config::HarnessConfig;
pub use config::RunnerSettings;
pub use console::ConsoleObserver;
pub use harness::Harness;
pub use harness::HarnessError;
