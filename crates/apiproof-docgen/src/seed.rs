// crates/apiproof-docgen/src/seed.rs
// ============================================================================
// Module: Document Seed
// Description: Caller-supplied metadata for generated documents.
// Purpose: Carry API info fields the test definitions cannot derive.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`DocumentSeed`] holds the document metadata that does not live in test
//! definitions: title, version, host, base path, schemes, and media types.
//! Both document dialects share one seed so a harness configures them once.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Seed
// ============================================================================

/// Caller-supplied metadata merged into generated documents.
///
/// # Invariants
/// - `base_path` begins with `/`.
/// - `schemes` is non-empty; the first entry builds the resource-tree base URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSeed {
    /// API title.
    pub title: String,
    /// API description.
    pub description: String,
    /// API version string.
    pub version: String,
    /// Host name serving the API.
    pub host: String,
    /// Base path prefix for all operations.
    pub base_path: String,
    /// Transfer schemes, e.g. `http`, `https`.
    pub schemes: Vec<String>,
    /// Media types the API consumes.
    pub consumes: Vec<String>,
    /// Media types the API produces.
    pub produces: Vec<String>,
}

impl Default for DocumentSeed {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            version: "0.1".to_string(),
            host: String::new(),
            base_path: "/".to_string(),
            schemes: vec!["http".to_string()],
            consumes: vec!["application/json".to_string()],
            produces: vec!["application/json".to_string()],
        }
    }
}

impl DocumentSeed {
    /// Returns the base URI used by the resource-tree dialect.
    #[must_use]
    pub fn base_uri(&self) -> String {
        let scheme = self.schemes.first().map_or("http", String::as_str);
        format!("{scheme}://{}{}", self.host, self.base_path)
    }
}
