// crates/apiproof-harness/src/console.rs
// ============================================================================
// Module: Console Observer
// Description: Progress and summary output for interactive suite runs.
// Purpose: Report each case as it finishes and summarize the run.
// Dependencies: apiproof-core, apiproof-runner
// ============================================================================

//! ## Overview
//! The console observer prints one line per endpoint and per case as the
//! suite runs. Output goes through explicit stdout writers; a console write
//! failure never aborts a running suite, so observer callbacks are
//! best-effort while the final summary write is checked by the harness.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use apiproof_core::CaseOutcome;
use apiproof_core::CaseReport;
use apiproof_core::Endpoint;
use apiproof_core::LifecycleFailure;
use apiproof_core::RunReport;
use apiproof_runner::RunObserver;

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes one line to stdout.
///
/// # Errors
///
/// Returns the underlying I/O error when stdout is unavailable.
pub fn write_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout with a trailing newline.
///
/// # Errors
///
/// Returns the underlying I/O error when stdout is unavailable.
pub fn write_bytes_line(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)?;
    stdout.write_all(b"\n")
}

// ============================================================================
// SECTION: Observer
// ============================================================================

/// Observer that prints suite progress to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl RunObserver for ConsoleObserver {
    fn endpoint_started(&mut self, endpoint: &Endpoint) {
        let _ = write_line(&format!("=> {} {}", endpoint.method(), endpoint.path()));
    }

    fn case_finished(&mut self, report: &CaseReport) {
        let line = match &report.outcome {
            CaseOutcome::Passed => {
                format!("   pass [{}] {}", report.case_index, report.case_description)
            }
            CaseOutcome::Failed(failure) => {
                format!("   FAIL [{}] {}: {failure}", report.case_index, report.case_description)
            }
        };
        let _ = write_line(&line);
    }

    fn lifecycle_failed(&mut self, failure: &LifecycleFailure) {
        let _ = write_line(&format!(
            "   HOOK FAIL {} {} {}: {}",
            failure.phase, failure.method, failure.path, failure.message
        ));
    }
}

// ============================================================================
// SECTION: Summary
// ============================================================================

/// Renders the end-of-run summary lines.
#[must_use]
pub fn summary_lines(report: &RunReport) -> Vec<String> {
    let total = report.cases.len();
    let failed = report.failure_count();
    let mut lines = vec![format!("{} cases, {} passed, {failed} failed", total, total - failed)];
    if !report.lifecycle_failures.is_empty() {
        lines.push(format!("{} lifecycle hook(s) failed", report.lifecycle_failures.len()));
    }
    lines
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

    use apiproof_core::CaseFailure;
    use apiproof_core::CaseOutcome;
    use apiproof_core::CaseReport;
    use apiproof_core::LifecycleFailure;
    use apiproof_core::LifecyclePhase;
    use apiproof_core::Method;
    use apiproof_core::RunReport;

    use super::summary_lines;

    fn case(outcome: CaseOutcome) -> CaseReport {
        CaseReport {
            method: Method::Get,
            path: "/x".to_string(),
            endpoint_description: String::new(),
            case_index: 0,
            case_description: String::new(),
            outcome,
        }
    }

    #[test]
    fn summary_counts_passes_and_failures() {
        let mut report = RunReport::new();
        report.cases.push(case(CaseOutcome::Passed));
        report.cases.push(case(CaseOutcome::Failed(CaseFailure::Url("bad".to_string()))));
        let lines = summary_lines(&report);
        assert_eq!(lines, vec!["2 cases, 1 passed, 1 failed".to_string()]);
    }

    #[test]
    fn summary_mentions_lifecycle_failures() {
        let mut report = RunReport::new();
        report.lifecycle_failures.push(LifecycleFailure {
            method: Method::Get,
            path: "/x".to_string(),
            phase: LifecyclePhase::TearDown,
            message: "boom".to_string(),
        });
        let lines = summary_lines(&report);
        assert_eq!(lines[1], "1 lifecycle hook(s) failed");
    }
}
