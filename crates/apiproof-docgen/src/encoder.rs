// crates/apiproof-docgen/src/encoder.rs
// ============================================================================
// Module: Document Encoder
// Description: Pure serialization of assembled documents to bytes.
// Purpose: Encode document values as JSON, pretty JSON, or YAML.
// Dependencies: apiproof-core, serde_json, serde_yaml, thiserror
// ============================================================================

//! ## Overview
//! The encoder is the only serialization seam of the docgen crate: generators
//! assemble a document value, the encoder turns it into bytes. There are no
//! I/O side effects here; writing to files or stdout is a harness concern.

// ============================================================================
// SECTION: Imports
// ============================================================================

use apiproof_core::SchemaError;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised during document generation.
///
/// # Invariants
/// - `Schema` aborts the whole generation call; no partial document exists.
#[derive(Debug, Error)]
pub enum DocGenError {
    /// Introspection hit an unsupported value or complex parameter.
    #[error("schema generation error: {0}")]
    Schema(#[from] SchemaError),
    /// The assembled document could not be serialized.
    #[error("document encode error: {0}")]
    Encode(String),
}

// ============================================================================
// SECTION: Output Format
// ============================================================================

/// Serialization format for generated documents.
///
/// # Invariants
/// - Variants are closed; format selection never falls back silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Compact JSON.
    Json,
    /// Indented JSON.
    JsonPretty,
    /// YAML.
    Yaml,
}

/// Encodes a document value into bytes in the requested format.
///
/// # Errors
///
/// Returns [`DocGenError::Encode`] when serialization fails.
pub fn encode(format: OutputFormat, document: &Value) -> Result<Vec<u8>, DocGenError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_vec(document).map_err(|err| DocGenError::Encode(err.to_string()))
        }
        OutputFormat::JsonPretty => {
            serde_json::to_vec_pretty(document).map_err(|err| DocGenError::Encode(err.to_string()))
        }
        OutputFormat::Yaml => serde_yaml::to_string(document)
            .map(String::into_bytes)
            .map_err(|err| DocGenError::Encode(err.to_string())),
    }
}
