// crates/apiproof-core/src/model/case.rs
// ============================================================================
// Module: Test Case Model
// Description: One concrete input/expected-output scenario for an endpoint.
// Purpose: Carry request parameters and response expectations as plain data.
// Dependencies: crate::payload, serde_json
// ============================================================================

//! ## Overview
//! A [`TestCase`] knows nothing about the endpoint it belongs to; path and
//! method are provided by the owning [`crate::Endpoint`]. Ideally each
//! distinct success and error behavior of an endpoint is described by its own
//! test case, because every case contributes one response entry to the
//! generated document.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;

use crate::payload::Payload;

// ============================================================================
// SECTION: Parameters
// ============================================================================

/// Map of parameter name to [`Param`], ordered for deterministic output.
pub type ParamMap = BTreeMap<String, Param>;

/// Location of a request parameter.
///
/// # Invariants
/// - Variants match the locations the aggregate document dialect models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParamLocation {
    /// URL query string parameter.
    Query,
    /// Path template placeholder parameter.
    Path,
    /// Request header parameter.
    Header,
}

impl ParamLocation {
    /// Returns the document form of the location (`query`/`path`/`header`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Header => "header",
        }
    }
}

/// A parameter used in the headers, path, or URL query of an API request.
///
/// # Invariants
/// - `value` is the literal sample sent on the wire and documented as the
///   parameter default.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Literal parameter value.
    pub value: Value,
    /// True when the parameter is required by the operation.
    pub required: bool,
    /// Human-readable parameter description.
    pub description: String,
}

impl Param {
    /// Creates a required parameter with the given value and no description.
    #[must_use]
    pub fn required(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            required: true,
            description: String::new(),
        }
    }

    /// Creates an optional parameter with the given value and no description.
    #[must_use]
    pub fn optional(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            required: false,
            description: String::new(),
        }
    }

    /// Attaches a description to the parameter.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// ============================================================================
// SECTION: Test Case
// ============================================================================

/// One concrete usage scenario of an API endpoint: input and expected output.
///
/// # Invariants
/// - Immutable once authored; the runner and docgen treat cases as read-only.
/// - `expected_status` is the exact status code the server must return.
/// - `expected_headers` is a subset check; headers not listed are ignored.
#[derive(Debug, Default)]
pub struct TestCase {
    /// Human-readable scenario description.
    pub description: String,
    /// Header parameters sent with the request.
    pub headers: ParamMap,
    /// Path template placeholder values.
    pub path_params: ParamMap,
    /// Query string parameters.
    pub query_params: ParamMap,
    /// Optional request body.
    pub request_body: Option<Payload>,
    /// Expected HTTP status code.
    pub expected_status: u16,
    /// Expected response header subset.
    pub expected_headers: BTreeMap<String, String>,
    /// Optional expected response body.
    pub expected_body: Option<Payload>,
}

impl TestCase {
    /// Creates a test case expecting the given status code.
    #[must_use]
    pub fn expecting(status: u16) -> Self {
        Self {
            expected_status: status,
            ..Self::default()
        }
    }

    /// Sets the scenario description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a path parameter.
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, param: Param) -> Self {
        self.path_params.insert(name.into(), param);
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn query_param(mut self, name: impl Into<String>, param: Param) -> Self {
        self.query_params.insert(name.into(), param);
        self
    }

    /// Adds a request header parameter.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, param: Param) -> Self {
        self.headers.insert(name.into(), param);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, payload: Payload) -> Self {
        self.request_body = Some(payload);
        self
    }

    /// Adds an expected response header.
    #[must_use]
    pub fn expect_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.expected_headers.insert(name.into(), value.into());
        self
    }

    /// Sets the expected response body.
    #[must_use]
    pub fn expect_body(mut self, payload: Payload) -> Self {
        self.expected_body = Some(payload);
        self
    }

    /// True when the expected status is a success code in `[200, 300)`.
    ///
    /// Only such cases contribute operation-level parameters and the
    /// request-body schema during assembly.
    #[must_use]
    pub const fn expects_success(&self) -> bool {
        self.expected_status >= 200 && self.expected_status < 300
    }
}
