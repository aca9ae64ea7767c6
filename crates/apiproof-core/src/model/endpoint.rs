// crates/apiproof-core/src/model/endpoint.rs
// ============================================================================
// Module: Endpoint Descriptor
// Description: One path+method API operation and its test scenarios.
// Purpose: Bundle test cases with explicit, construction-time capabilities.
// Dependencies: crate::model::case, crate::model::method, thiserror
// ============================================================================

//! ## Overview
//! An [`Endpoint`] describes one API operation: method, path template,
//! description, and an ordered sequence of [`TestCase`] scenarios. Optional
//! capabilities (set-up, tear-down, tag) are explicit fields attached at
//! construction time rather than discovered by runtime capability probing,
//! so the runner and docgen never inspect types to find them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::model::case::TestCase;
use crate::model::method::Method;

// ============================================================================
// SECTION: Lifecycle Hooks
// ============================================================================

/// Error raised by an endpoint set-up or tear-down hook.
///
/// # Invariants
/// - The message is sufficient for reporting; hooks carry no structured state.
#[derive(Debug, Error)]
#[error("lifecycle hook error: {0}")]
pub struct HookError(pub String);

impl HookError {
    /// Creates a hook error from any displayable message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Boxed lifecycle hook invoked around an endpoint's cases.
type Hook = Box<dyn Fn() -> Result<(), HookError> + Send + Sync>;

// ============================================================================
// SECTION: Endpoint
// ============================================================================

/// Descriptor for one path+method API operation and its test scenarios.
///
/// # Invariants
/// - Immutable once authored.
/// - `path` may contain `{name}` placeholders resolved from case path params.
/// - Cases run strictly in declaration order.
pub struct Endpoint {
    /// HTTP method of the operation.
    method: Method,
    /// Path template, optionally containing `{name}` placeholders.
    path: String,
    /// Human-readable endpoint description.
    description: String,
    /// Ordered test scenarios.
    cases: Vec<TestCase>,
    /// Optional set-up hook run before the first case.
    set_up: Option<Hook>,
    /// Optional tear-down hook run after the last case.
    tear_down: Option<Hook>,
    /// Optional documentation tag used to group operations.
    tag: Option<String>,
}

impl Endpoint {
    /// Creates an endpoint with the given method, path template, and cases.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, cases: Vec<TestCase>) -> Self {
        Self {
            method,
            path: path.into(),
            description: String::new(),
            cases,
            set_up: None,
            tear_down: None,
            tag: None,
        }
    }

    /// Sets the endpoint description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attaches a set-up hook run before the endpoint's cases.
    #[must_use]
    pub fn with_set_up(
        mut self,
        hook: impl Fn() -> Result<(), HookError> + Send + Sync + 'static,
    ) -> Self {
        self.set_up = Some(Box::new(hook));
        self
    }

    /// Attaches a tear-down hook run after the endpoint's cases.
    #[must_use]
    pub fn with_tear_down(
        mut self,
        hook: impl Fn() -> Result<(), HookError> + Send + Sync + 'static,
    ) -> Self {
        self.tear_down = Some(Box::new(hook));
        self
    }

    /// Attaches a documentation tag to the operation.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Returns the raw path template as authored.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the path template normalized to begin with `/`.
    #[must_use]
    pub fn normalized_path(&self) -> String {
        if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        }
    }

    /// Returns the endpoint description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the ordered test cases.
    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Returns the documentation tag, when present.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Runs the set-up hook when one is attached.
    ///
    /// # Errors
    ///
    /// Returns [`HookError`] when the hook reports a failure.
    pub fn run_set_up(&self) -> Result<(), HookError> {
        match &self.set_up {
            Some(hook) => hook(),
            None => Ok(()),
        }
    }

    /// Runs the tear-down hook when one is attached.
    ///
    /// # Errors
    ///
    /// Returns [`HookError`] when the hook reports a failure.
    pub fn run_tear_down(&self) -> Result<(), HookError> {
        match &self.tear_down {
            Some(hook) => hook(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("description", &self.description)
            .field("cases", &self.cases.len())
            .field("set_up", &self.set_up.is_some())
            .field("tear_down", &self.tear_down.is_some())
            .field("tag", &self.tag)
            .finish()
    }
}
