// crates/apiproof-runner/tests/runner_http.rs
// ============================================================================
// Module: Runner HTTP Tests
// Description: End-to-end runner tests against a local mock server.
// Purpose: Verify lifecycle ordering, assertions, and failure isolation.
// Dependencies: apiproof-core, apiproof-runner, serde, serde_json, tiny_http
// ============================================================================

//! ## Overview
//! These tests stand up a local `tiny_http` server per scenario and run real
//! suites against it. They cover the full failure taxonomy: URL construction,
//! transport, status/header/body assertions, and set-up/tear-down hooks, plus
//! strict declaration-order continuation past failing cases.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::thread;

use apiproof_core::AssertionSubject;
use apiproof_core::CaseFailure;
use apiproof_core::CaseOutcome;
use apiproof_core::CaseReport;
use apiproof_core::Endpoint;
use apiproof_core::HookError;
use apiproof_core::LifecycleFailure;
use apiproof_core::LifecyclePhase;
use apiproof_core::Method;
use apiproof_core::Param;
use apiproof_core::Payload;
use apiproof_core::TestCase;
use apiproof_runner::RunObserver;
use apiproof_runner::Runner;
use apiproof_runner::RunnerConfig;
use serde::Serialize;
use serde_json::json;
use tiny_http::Header;
use tiny_http::Request;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Spawns a local server that handles exactly `count` requests.
fn serve<F>(count: usize, handler: F) -> (String, thread::JoinHandle<()>)
where
    F: Fn(Request) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base_url = format!("http://{addr}");
    let handle = thread::spawn(move || {
        for _ in 0..count {
            if let Ok(request) = server.recv() {
                handler(request);
            }
        }
    });
    (base_url, handle)
}

/// Creates a runner pointed at the given base address.
fn runner_for(base_url: &str) -> Runner {
    Runner::new(RunnerConfig {
        base_url: base_url.to_string(),
        timeout_ms: 5000,
        ..RunnerConfig::default()
    })
    .unwrap()
}

/// Responds with a JSON body and content type.
fn respond_json(request: Request, status: u16, body: &str) {
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
    let response = Response::from_string(body).with_status_code(status).with_header(header);
    let _ = request.respond(response);
}

/// Extracts the failure from a report entry, panicking on a pass.
fn failure_of(case: &CaseReport) -> &CaseFailure {
    match &case.outcome {
        CaseOutcome::Failed(failure) => failure,
        CaseOutcome::Passed => panic!("expected a failed case, got a pass"),
    }
}

#[derive(Serialize)]
struct UserRecord {
    login: String,
    followers: u64,
}

// ============================================================================
// SECTION: Happy Paths
// ============================================================================

#[test]
fn plain_text_endpoint_passes() {
    let (base_url, handle) = serve(1, |request| {
        assert_eq!(request.url(), "/hello");
        let _ = request.respond(Response::from_string("Hello World!"));
    });

    let endpoints = vec![Endpoint::new(
        Method::Get,
        "/hello",
        vec![
            TestCase::expecting(200)
                .describe("returns the greeting")
                .expect_body(Payload::text("Hello World!")),
        ],
    )];

    let report = runner_for(&base_url).run(&endpoints);
    handle.join().unwrap();

    assert!(report.all_passed(), "report: {report:?}");
    assert_eq!(report.cases.len(), 1);
}

#[test]
fn path_and_query_parameters_expand_into_the_request_url() {
    let (base_url, handle) = serve(1, |request| {
        assert_eq!(request.url(), "/user/octocat?details=true");
        respond_json(request, 200, r#"{"login":"octocat","followers":42}"#);
    });

    let endpoints = vec![Endpoint::new(
        Method::Get,
        "/user/{username}",
        vec![
            TestCase::expecting(200)
                .describe("returns the requested user")
                .path_param("username", Param::required("octocat"))
                .query_param("details", Param::optional(true))
                .expect_body(Payload::of(&UserRecord {
                    login: "octocat".to_string(),
                    followers: 42,
                })),
        ],
    )];

    let report = runner_for(&base_url).run(&endpoints);
    handle.join().unwrap();

    assert!(report.all_passed(), "report: {report:?}");
}

#[test]
fn request_body_is_sent_and_structured_response_compared() {
    let (base_url, handle) = serve(1, |mut request| {
        let mut body = String::new();
        request.as_reader().read_to_string(&mut body).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["login"], json!("hubot"));
        respond_json(request, 201, r#"{"followers":0,"login":"hubot"}"#);
    });

    let endpoints = vec![Endpoint::new(
        Method::Post,
        "/user",
        vec![
            TestCase::expecting(201)
                .describe("creates a user")
                .body(Payload::of(&UserRecord {
                    login: "hubot".to_string(),
                    followers: 0,
                }))
                .expect_body(Payload::json(json!({"login": "hubot", "followers": 0}))),
        ],
    )];

    let report = runner_for(&base_url).run(&endpoints);
    handle.join().unwrap();

    assert!(report.all_passed(), "report: {report:?}");
}

#[test]
fn nested_object_bodies_compare_independent_of_field_order() {
    let (base_url, handle) = serve(1, |request| {
        respond_json(request, 200, r#"{"b":{"d":[1,2],"c":true},"a":"x"}"#);
    });

    let endpoints = vec![Endpoint::new(
        Method::Get,
        "/nested",
        vec![
            TestCase::expecting(200)
                .expect_body(Payload::json(json!({"a": "x", "b": {"c": true, "d": [1, 2]}}))),
        ],
    )];

    let report = runner_for(&base_url).run(&endpoints);
    handle.join().unwrap();

    assert!(report.all_passed(), "report: {report:?}");
}

// ============================================================================
// SECTION: Assertion Failures
// ============================================================================

#[test]
fn status_mismatch_reports_both_sides() {
    let (base_url, handle) = serve(1, |request| {
        respond_json(request, 404, r#"{"error":"not found"}"#);
    });

    let endpoints =
        vec![Endpoint::new(Method::Get, "/missing", vec![TestCase::expecting(200)])];

    let report = runner_for(&base_url).run(&endpoints);
    handle.join().unwrap();

    assert_eq!(report.failure_count(), 1);
    match failure_of(&report.cases[0]) {
        CaseFailure::Assertion(failure) => {
            assert_eq!(failure.subject, AssertionSubject::Status);
            assert_eq!(failure.expected, "200");
            assert_eq!(failure.actual, "404");
        }
        other => panic!("expected a status assertion failure, got {other:?}"),
    }
}

#[test]
fn expected_headers_check_a_subset_of_the_response() {
    let (base_url, handle) = serve(2, |request| {
        let header = Header::from_bytes(&b"X-Rate-Limit"[..], &b"60"[..]).unwrap();
        let response = Response::from_string("").with_header(header);
        let _ = request.respond(response);
    });

    let endpoints = vec![Endpoint::new(
        Method::Get,
        "/limited",
        vec![
            TestCase::expecting(200).describe("present header passes").expect_header(
                "X-Rate-Limit",
                "60",
            ),
            TestCase::expecting(200)
                .describe("absent header fails")
                .expect_header("X-Other", "1"),
        ],
    )];

    let report = runner_for(&base_url).run(&endpoints);
    handle.join().unwrap();

    assert!(report.cases[0].outcome.is_passed());
    match failure_of(&report.cases[1]) {
        CaseFailure::Assertion(failure) => {
            assert_eq!(failure.subject, AssertionSubject::Header("X-Other".to_string()));
            assert_eq!(failure.actual, "<missing>");
        }
        other => panic!("expected a header assertion failure, got {other:?}"),
    }
}

#[test]
fn absent_expected_body_requires_an_empty_response() {
    let (base_url, handle) = serve(2, |request| {
        if request.url() == "/empty" {
            let _ = request.respond(Response::empty(204));
        } else {
            let _ = request.respond(Response::from_string("surprise"));
        }
    });

    let endpoints = vec![
        Endpoint::new(Method::Delete, "/empty", vec![TestCase::expecting(204)]),
        Endpoint::new(Method::Get, "/chatty", vec![TestCase::expecting(200)]),
    ];

    let report = runner_for(&base_url).run(&endpoints);
    handle.join().unwrap();

    assert!(report.cases[0].outcome.is_passed());
    match failure_of(&report.cases[1]) {
        CaseFailure::Assertion(failure) => {
            assert_eq!(failure.subject, AssertionSubject::Body);
            assert_eq!(failure.expected, "<empty body>");
            assert_eq!(failure.actual, "surprise");
        }
        other => panic!("expected a body assertion failure, got {other:?}"),
    }
}

// ============================================================================
// SECTION: Construction and Transport Failures
// ============================================================================

#[test]
fn unresolved_path_placeholder_fails_without_a_request() {
    // No server: the case must fail before anything is sent.
    let runner = runner_for("http://127.0.0.1:1");
    let endpoints =
        vec![Endpoint::new(Method::Get, "/user/{username}", vec![TestCase::expecting(200)])];

    let report = runner.run(&endpoints);

    assert_eq!(report.failure_count(), 1);
    match failure_of(&report.cases[0]) {
        CaseFailure::Url(message) => {
            assert!(message.contains("username"), "message: {message}");
        }
        other => panic!("expected a url failure, got {other:?}"),
    }
}

#[test]
fn unreachable_server_reports_a_transport_failure() {
    // Port 1 is reserved and nothing listens on it.
    let runner = runner_for("http://127.0.0.1:1");
    let endpoints = vec![Endpoint::new(Method::Get, "/ping", vec![TestCase::expecting(200)])];

    let report = runner.run(&endpoints);

    assert_eq!(report.failure_count(), 1);
    assert!(matches!(failure_of(&report.cases[0]), CaseFailure::Transport(_)));
}

// ============================================================================
// SECTION: Lifecycle Hooks
// ============================================================================

#[test]
fn set_up_failure_skips_cases_and_still_runs_tear_down() {
    let tear_downs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&tear_downs);

    // No server: a skipped case must never touch the network.
    let runner = runner_for("http://127.0.0.1:1");
    let endpoints = vec![
        Endpoint::new(
            Method::Get,
            "/fixture",
            vec![TestCase::expecting(200), TestCase::expecting(404)],
        )
        .with_set_up(|| Err(HookError::new("database seed failed")))
        .with_tear_down(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }),
    ];

    let report = runner.run(&endpoints);

    assert_eq!(report.cases.len(), 2);
    for case in &report.cases {
        match failure_of(case) {
            CaseFailure::Lifecycle(message) => {
                assert!(message.contains("database seed failed"), "message: {message}");
            }
            other => panic!("expected a lifecycle failure, got {other:?}"),
        }
    }
    assert_eq!(
        report.lifecycle_failures,
        vec![LifecycleFailure {
            method: Method::Get,
            path: "/fixture".to_string(),
            phase: LifecyclePhase::SetUp,
            message: "lifecycle hook error: database seed failed".to_string(),
        }]
    );
    assert_eq!(tear_downs.load(Ordering::SeqCst), 1);
}

#[test]
fn tear_down_failure_is_standalone_and_case_results_stand() {
    let (base_url, handle) = serve(1, |request| {
        let _ = request.respond(Response::from_string("ok"));
    });

    let endpoints = vec![
        Endpoint::new(
            Method::Get,
            "/resource",
            vec![TestCase::expecting(200).expect_body(Payload::text("ok"))],
        )
        .with_tear_down(|| Err(HookError::new("cleanup failed"))),
    ];

    let report = runner_for(&base_url).run(&endpoints);
    handle.join().unwrap();

    assert!(report.cases[0].outcome.is_passed());
    assert_eq!(report.lifecycle_failures.len(), 1);
    assert_eq!(report.lifecycle_failures[0].phase, LifecyclePhase::TearDown);
    assert!(!report.all_passed());
}

// ============================================================================
// SECTION: Headers and Ordering
// ============================================================================

#[test]
fn case_headers_override_default_headers() {
    let (base_url, handle) = serve(1, |request| {
        let token = request
            .headers()
            .iter()
            .find(|header| header.field.equiv("x-token"))
            .map(|header| header.value.as_str().to_string());
        assert_eq!(token.as_deref(), Some("case-token"));
        let _ = request.respond(Response::empty(200));
    });

    let runner = Runner::new(RunnerConfig {
        base_url: base_url.clone(),
        default_headers: [("X-Token".to_string(), "default-token".to_string())].into(),
        timeout_ms: 5000,
        ..RunnerConfig::default()
    })
    .unwrap();
    let endpoints = vec![Endpoint::new(
        Method::Get,
        "/guarded",
        vec![TestCase::expecting(200).header("X-Token", Param::required("case-token"))],
    )];

    let report = runner.run(&endpoints);
    handle.join().unwrap();

    assert!(report.all_passed(), "report: {report:?}");
}

#[test]
fn a_failing_case_never_stops_later_cases_or_endpoints() {
    let counter = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&counter);
    let (base_url, handle) = serve(3, move |request| {
        seen.fetch_add(1, Ordering::SeqCst);
        // The middle request gets the wrong status on purpose.
        if request.url() == "/second" {
            let _ = request.respond(Response::empty(500));
        } else {
            let _ = request.respond(Response::empty(200));
        }
    });

    let endpoints = vec![
        Endpoint::new(Method::Get, "/first", vec![TestCase::expecting(200)]),
        Endpoint::new(Method::Get, "/second", vec![TestCase::expecting(200)]),
        Endpoint::new(Method::Get, "/third", vec![TestCase::expecting(200)]),
    ];

    let report = runner_for(&base_url).run(&endpoints);
    handle.join().unwrap();

    assert_eq!(counter.load(Ordering::SeqCst), 3);
    assert_eq!(report.cases.len(), 3);
    assert_eq!(report.failure_count(), 1);
    assert_eq!(report.cases[0].path, "/first");
    assert_eq!(report.cases[1].path, "/second");
    assert_eq!(report.cases[2].path, "/third");
    assert!(!report.cases[1].outcome.is_passed());
}

// ============================================================================
// SECTION: Observer
// ============================================================================

/// Observer that records event counts for verification.
#[derive(Default)]
struct CountingObserver {
    endpoints: usize,
    cases: usize,
    lifecycle: usize,
}

impl RunObserver for CountingObserver {
    fn endpoint_started(&mut self, _endpoint: &Endpoint) {
        self.endpoints += 1;
    }

    fn case_finished(&mut self, _report: &CaseReport) {
        self.cases += 1;
    }

    fn lifecycle_failed(&mut self, _failure: &LifecycleFailure) {
        self.lifecycle += 1;
    }
}

#[test]
fn observer_sees_every_event_including_skipped_cases() {
    let runner = runner_for("http://127.0.0.1:1");
    let endpoints = vec![
        Endpoint::new(
            Method::Get,
            "/skipped",
            vec![TestCase::expecting(200), TestCase::expecting(201)],
        )
        .with_set_up(|| Err(HookError::new("boom"))),
    ];

    let mut observer = CountingObserver::default();
    let report = runner.run_with_observer(&endpoints, &mut observer);

    assert_eq!(observer.endpoints, 1);
    assert_eq!(observer.cases, 2);
    assert_eq!(observer.lifecycle, 1);
    assert_eq!(report.cases.len(), 2);
}
