// crates/apiproof-runner/src/observer.rs
// ============================================================================
// Module: Run Observer
// Description: Progress hooks invoked while a suite executes.
// Purpose: Let harnesses report progress without coupling to the runner.
// Dependencies: apiproof-core
// ============================================================================

//! ## Overview
//! A [`RunObserver`] receives progress events as the suite runs. The trait is
//! intentionally dependency-light so downstream harnesses can plug in console
//! output, structured logs, or metrics without redesign; the runner itself
//! stays silent.

// ============================================================================
// SECTION: Imports
// ============================================================================

use apiproof_core::CaseReport;
use apiproof_core::Endpoint;
use apiproof_core::LifecycleFailure;

// ============================================================================
// SECTION: Observer
// ============================================================================

/// Progress hooks for suite execution.
pub trait RunObserver {
    /// Called before an endpoint's lifecycle begins.
    fn endpoint_started(&mut self, _endpoint: &Endpoint) {}

    /// Called after each case finishes, whether it passed or failed.
    fn case_finished(&mut self, _report: &CaseReport) {}

    /// Called when a set-up or tear-down hook fails.
    fn lifecycle_failed(&mut self, _failure: &LifecycleFailure) {}
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RunObserver for NullObserver {}
