// crates/apiproof-runner/src/runner.rs
// ============================================================================
// Module: Test Runner
// Description: Sequential execution of endpoint test cases over HTTP.
// Purpose: Assert actual server behavior matches declared expectations.
// Dependencies: apiproof-core, reqwest, crate::assert, crate::request
// ============================================================================

//! ## Overview
//! The [`Runner`] drives each endpoint through a fixed lifecycle: set-up,
//! cases in declaration order, tear-down. A set-up failure marks every case
//! of that endpoint failed and skips execution entirely; tear-down is still
//! attempted, and its failure is reported standalone without invalidating
//! recorded case results. Case failures are isolated and never stop the
//! suite.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::time::Duration;

use apiproof_core::AssertionFailure;
use apiproof_core::AssertionSubject;
use apiproof_core::CaseFailure;
use apiproof_core::CaseOutcome;
use apiproof_core::CaseReport;
use apiproof_core::Endpoint;
use apiproof_core::LifecycleFailure;
use apiproof_core::LifecyclePhase;
use apiproof_core::Method;
use apiproof_core::RunReport;
use apiproof_core::TestCase;
use reqwest::blocking::Client;
use reqwest::blocking::RequestBuilder;
use reqwest::redirect::Policy;
use thiserror::Error;

use crate::assert::canonical_equal;
use crate::assert::decode_expected;
use crate::assert::decode_response;
use crate::observer::NullObserver;
use crate::observer::RunObserver;
use crate::request;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the test runner.
///
/// # Invariants
/// - `base_url` addresses the server under test; path templates append to it.
/// - `timeout_ms` is owned by the transport; the runner adds no layer of its
///   own.
/// - Default headers apply to every request and lose to per-case headers on
///   name collision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Base address of the server under test.
    pub base_url: String,
    /// Headers applied to every request unless a case overrides them.
    pub default_headers: BTreeMap<String, String>,
    /// Request timeout in milliseconds, enforced by the transport.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            default_headers: BTreeMap::new(),
            timeout_ms: 30_000,
            user_agent: "apiproof/0.1".to_string(),
        }
    }
}

/// Errors raised while constructing a runner.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The HTTP client could not be built.
    #[error("http client build failed: {0}")]
    Client(String),
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Sequential test-suite runner.
///
/// # Invariants
/// - Endpoints and cases execute strictly in declaration order.
/// - Redirects are not followed; behavior is asserted against the first
///   response.
pub struct Runner {
    /// Runner configuration.
    config: RunnerConfig,
    /// Blocking HTTP client used for all requests.
    client: Client,
}

impl Runner {
    /// Creates a runner for the configured base address.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] when the HTTP client cannot be created.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()
            .map_err(|err| RunnerError::Client(err.to_string()))?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Runs every endpoint and returns the aggregate report.
    #[must_use]
    pub fn run(&self, endpoints: &[Endpoint]) -> RunReport {
        self.run_with_observer(endpoints, &mut NullObserver)
    }

    /// Runs every endpoint, emitting progress events to the observer.
    pub fn run_with_observer(
        &self,
        endpoints: &[Endpoint],
        observer: &mut dyn RunObserver,
    ) -> RunReport {
        let mut report = RunReport::new();
        for endpoint in endpoints {
            observer.endpoint_started(endpoint);
            self.run_endpoint(endpoint, observer, &mut report);
        }
        report
    }

    /// Drives one endpoint through set-up, cases, and tear-down.
    fn run_endpoint(
        &self,
        endpoint: &Endpoint,
        observer: &mut dyn RunObserver,
        report: &mut RunReport,
    ) {
        match endpoint.run_set_up() {
            Ok(()) => {
                for (index, case) in endpoint.cases().iter().enumerate() {
                    let case_report = self.run_case(endpoint, index, case);
                    observer.case_finished(&case_report);
                    report.cases.push(case_report);
                }
            }
            Err(err) => {
                // Set-up failed: every case is marked failed and skipped.
                let failure = LifecycleFailure {
                    method: endpoint.method(),
                    path: endpoint.path().to_string(),
                    phase: LifecyclePhase::SetUp,
                    message: err.to_string(),
                };
                observer.lifecycle_failed(&failure);
                report.lifecycle_failures.push(failure);
                for (index, case) in endpoint.cases().iter().enumerate() {
                    let case_report = case_record(
                        endpoint,
                        index,
                        case,
                        CaseOutcome::Failed(CaseFailure::Lifecycle(err.to_string())),
                    );
                    observer.case_finished(&case_report);
                    report.cases.push(case_report);
                }
            }
        }

        // Tear-down runs even when set-up failed; its failure is standalone
        // and never invalidates recorded case results.
        if let Err(err) = endpoint.run_tear_down() {
            let failure = LifecycleFailure {
                method: endpoint.method(),
                path: endpoint.path().to_string(),
                phase: LifecyclePhase::TearDown,
                message: err.to_string(),
            };
            observer.lifecycle_failed(&failure);
            report.lifecycle_failures.push(failure);
        }
    }

    /// Executes one case and records its outcome.
    fn run_case(&self, endpoint: &Endpoint, index: usize, case: &TestCase) -> CaseReport {
        let outcome = match self.execute_case(endpoint, case) {
            Ok(()) => CaseOutcome::Passed,
            Err(failure) => CaseOutcome::Failed(failure),
        };
        case_record(endpoint, index, case, outcome)
    }

    /// Builds, sends, and asserts one request/response exchange.
    fn execute_case(&self, endpoint: &Endpoint, case: &TestCase) -> Result<(), CaseFailure> {
        let path = request::expand_path(&endpoint.normalized_path(), &case.path_params)
            .map_err(|err| CaseFailure::Url(err.to_string()))?;
        let url = request::build_url(&self.config.base_url, &path, &case.query_params)
            .map_err(|err| CaseFailure::Url(err.to_string()))?;

        let mut builder = self.client.request(wire_method(endpoint.method()), url);
        builder = self.apply_headers(builder, case);
        if let Some(body) = &case.request_body {
            let bytes = body.encode_bytes().map_err(|err| CaseFailure::Body(err.to_string()))?;
            builder = builder.body(bytes);
        }

        let response =
            builder.send().map_err(|err| CaseFailure::Transport(err.to_string()))?;

        let actual_status = response.status().as_u16();
        if actual_status != case.expected_status {
            return Err(assertion(
                AssertionSubject::Status,
                case.expected_status.to_string(),
                actual_status.to_string(),
            ));
        }

        for (name, expected_value) in &case.expected_headers {
            let actual_value = response
                .headers()
                .get(name.as_str())
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
            match actual_value {
                Some(actual) if &actual == expected_value => {}
                Some(actual) => {
                    return Err(assertion(
                        AssertionSubject::Header(name.clone()),
                        expected_value.clone(),
                        actual,
                    ));
                }
                None => {
                    return Err(assertion(
                        AssertionSubject::Header(name.clone()),
                        expected_value.clone(),
                        "<missing>".to_string(),
                    ));
                }
            }
        }

        let body_bytes =
            response.bytes().map_err(|err| CaseFailure::Transport(err.to_string()))?;
        match &case.expected_body {
            Some(expected) => {
                let expected_form = decode_expected(expected);
                let actual_form = decode_response(&body_bytes);
                if !canonical_equal(&expected_form, &actual_form) {
                    return Err(assertion(
                        AssertionSubject::Body,
                        expected_form.to_string(),
                        actual_form.to_string(),
                    ));
                }
            }
            None => {
                if !body_bytes.is_empty() {
                    return Err(assertion(
                        AssertionSubject::Body,
                        "<empty body>".to_string(),
                        String::from_utf8_lossy(&body_bytes).into_owned(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Applies default headers, then per-case overrides.
    fn apply_headers(&self, mut builder: RequestBuilder, case: &TestCase) -> RequestBuilder {
        for (name, value) in &self.config.default_headers {
            if case.headers.contains_key(name) {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }
        for (name, param) in &case.headers {
            builder = builder.header(name.as_str(), request::coerce_text(&param.value));
        }
        builder
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Maps the declarative method onto the wire method.
fn wire_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
        Method::Options => reqwest::Method::OPTIONS,
    }
}

/// Builds an assertion case failure with both sides rendered.
fn assertion(subject: AssertionSubject, expected: String, actual: String) -> CaseFailure {
    CaseFailure::Assertion(AssertionFailure {
        subject,
        expected,
        actual,
    })
}

/// Builds a case report carrying full endpoint identity.
fn case_record(
    endpoint: &Endpoint,
    index: usize,
    case: &TestCase,
    outcome: CaseOutcome,
) -> CaseReport {
    CaseReport {
        method: endpoint.method(),
        path: endpoint.path().to_string(),
        endpoint_description: endpoint.description().to_string(),
        case_index: index,
        case_description: case.description.clone(),
        outcome,
    }
}
