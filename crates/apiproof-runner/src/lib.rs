// crates/apiproof-runner/src/lib.rs
// ============================================================================
// Module: Apiproof Runner Library
// Description: Sequential test execution and response assertion engine.
// Purpose: Drive declarative test cases against a live or mocked server.
// Dependencies: apiproof-core, reqwest, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! The runner executes every [`apiproof_core::TestCase`] of every endpoint
//! strictly in declaration order against a configured base address and
//! records per-case outcomes in a [`apiproof_core::RunReport`]. Execution is
//! deliberately single-threaded: cases of one endpoint commonly share
//! server-side state (create, then update, then delete), so nondeterministic
//! ordering would break correctness.
//!
//! Invariants:
//! - A failing case never prevents later cases or endpoints from running.
//! - Timeout behavior belongs to the underlying transport configuration; the
//!   runner adds no timeout layer of its own.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod assert;
pub mod observer;
pub mod request;
pub mod runner;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use assert::Canonical;
pub use assert::canonical_equal;
pub use assert::decode_expected;
pub use assert::decode_response;
pub use observer::NullObserver;
pub use observer::RunObserver;
pub use runner::Runner;
pub use runner::RunnerConfig;
pub use runner::RunnerError;
