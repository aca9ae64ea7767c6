// crates/apiproof-core/src/report.rs
// ============================================================================
// Module: Run Report
// Description: Per-case and per-endpoint outcome records for a suite run.
// Purpose: Carry enough context for reporting without further lookup.
// Dependencies: crate::model, thiserror
// ============================================================================

//! ## Overview
//! A [`RunReport`] records the outcome of every executed (or skipped) test
//! case plus standalone lifecycle failures. Case failures are isolated: a
//! failing case never stops the suite, and each record carries endpoint
//! identity, case index, and description so the invoking harness can report
//! without further lookup.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use crate::model::Method;

// ============================================================================
// SECTION: Assertion Failures
// ============================================================================

/// Subject of a response assertion.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionSubject {
    /// HTTP status code comparison.
    Status,
    /// Named response header comparison.
    Header(String),
    /// Response body comparison.
    Body,
}

impl fmt::Display for AssertionSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => f.write_str("status"),
            Self::Header(name) => write!(f, "header '{name}'"),
            Self::Body => f.write_str("body"),
        }
    }
}

/// A recorded mismatch between expected and actual response data.
///
/// # Invariants
/// - Both sides are rendered eagerly for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    /// What was compared.
    pub subject: AssertionSubject,
    /// Rendered expected value.
    pub expected: String,
    /// Rendered actual value.
    pub actual: String,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mismatch: expected {}, got {}", self.subject, self.expected, self.actual)
    }
}

// ============================================================================
// SECTION: Case Outcome
// ============================================================================

/// Failure recorded for one test case.
///
/// # Invariants
/// - Every variant aborts only the case it belongs to, never the suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseFailure {
    /// The path template could not be expanded into a request URL.
    Url(String),
    /// The request body could not be encoded.
    Body(String),
    /// The request could not be sent or the response not read.
    Transport(String),
    /// The response did not match an expectation.
    Assertion(AssertionFailure),
    /// The endpoint's set-up hook failed before the case could run.
    Lifecycle(String),
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(message) => write!(f, "url construction error: {message}"),
            Self::Body(message) => write!(f, "body encode error: {message}"),
            Self::Transport(message) => write!(f, "transport error: {message}"),
            Self::Assertion(failure) => write!(f, "assertion failure: {failure}"),
            Self::Lifecycle(message) => write!(f, "lifecycle error: {message}"),
        }
    }
}

/// Outcome of one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Every assertion held.
    Passed,
    /// The case failed; the failure describes why.
    Failed(CaseFailure),
}

impl CaseOutcome {
    /// True when the case passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Record of one executed (or skipped) test case.
///
/// # Invariants
/// - `case_index` is the declaration-order index within the endpoint.
#[derive(Debug, Clone)]
pub struct CaseReport {
    /// Endpoint HTTP method.
    pub method: Method,
    /// Endpoint path template as authored.
    pub path: String,
    /// Endpoint description.
    pub endpoint_description: String,
    /// Declaration-order index of the case within its endpoint.
    pub case_index: usize,
    /// Case description.
    pub case_description: String,
    /// Case outcome.
    pub outcome: CaseOutcome,
}

// ============================================================================
// SECTION: Lifecycle Failures
// ============================================================================

/// Lifecycle phase in which a hook failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Endpoint set-up hook.
    SetUp,
    /// Endpoint tear-down hook.
    TearDown,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetUp => f.write_str("set-up"),
            Self::TearDown => f.write_str("tear-down"),
        }
    }
}

/// Standalone record of a failed lifecycle hook.
///
/// # Invariants
/// - A tear-down failure never retroactively invalidates case results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleFailure {
    /// Endpoint HTTP method.
    pub method: Method,
    /// Endpoint path template as authored.
    pub path: String,
    /// Phase in which the hook failed.
    pub phase: LifecyclePhase,
    /// Hook failure message.
    pub message: String,
}

// ============================================================================
// SECTION: Run Report
// ============================================================================

/// Aggregate outcome of one suite run.
///
/// # Invariants
/// - Cases appear in strict declaration order across endpoints.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-case records in execution order.
    pub cases: Vec<CaseReport>,
    /// Standalone lifecycle failures.
    pub lifecycle_failures: Vec<LifecycleFailure>,
}

impl RunReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of failed cases.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.cases.iter().filter(|case| !case.outcome.is_passed()).count()
    }

    /// True when every case passed and no lifecycle hook failed.
    ///
    /// This is the gate a harness uses before emitting documentation.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0 && self.lifecycle_failures.is_empty()
    }
}
