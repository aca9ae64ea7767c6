// crates/apiproof-runner/src/assert.rs
// ============================================================================
// Module: Assertion Normalization
// Description: Canonical comparable forms for expected and actual bodies.
// Purpose: Compare payloads structurally, independent of field order.
// Dependencies: apiproof-core, serde_json
// ============================================================================

//! ## Overview
//! Expected and actual bodies are normalized into a canonical comparable
//! form before assertion. Response bytes that decode into a JSON key-value
//! structure compare structurally (field order is insignificant); everything
//! else compares as text. Plain-string expectations compare against raw
//! response bodies by content.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use apiproof_core::Payload;
use serde_json::Value;

// ============================================================================
// SECTION: Canonical Form
// ============================================================================

/// Canonical comparable form of a body.
///
/// # Invariants
/// - `Json` holds fully decoded structural values; `Text` holds raw bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum Canonical {
    /// Structural JSON value compared deeply.
    Json(Value),
    /// Raw textual body.
    Text(String),
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Normalizes an expected payload into its canonical form.
#[must_use]
pub fn decode_expected(payload: &Payload) -> Canonical {
    if let Some(value) = payload.json_value() {
        return Canonical::Json(value.clone());
    }
    if let Some(bytes) = payload.raw() {
        return Canonical::Text(String::from_utf8_lossy(bytes).into_owned());
    }
    // Unsupported payloads surface their construction failure in diagnostics.
    Canonical::Text(payload.unsupported_reason().unwrap_or("<unsupported>").to_string())
}

/// Normalizes actual response bytes into their canonical form.
///
/// Only key-value structures are promoted to the structural form; any other
/// body, including JSON scalars and arrays, compares as text.
#[must_use]
pub fn decode_response(bytes: &[u8]) -> Canonical {
    if let Ok(value) = serde_json::from_slice::<Value>(bytes)
        && value.is_object()
    {
        return Canonical::Json(value);
    }
    Canonical::Text(String::from_utf8_lossy(bytes).into_owned())
}

/// Deep structural equality over canonical forms.
///
/// A string expectation held as JSON compares against a raw text body by
/// content; all other cross-form combinations are unequal.
#[must_use]
pub fn canonical_equal(expected: &Canonical, actual: &Canonical) -> bool {
    match (expected, actual) {
        (Canonical::Json(left), Canonical::Json(right)) => left == right,
        (Canonical::Text(left), Canonical::Text(right)) => left == right,
        (Canonical::Json(Value::String(json)), Canonical::Text(text))
        | (Canonical::Text(text), Canonical::Json(Value::String(json))) => json == text,
        (Canonical::Json(_), Canonical::Text(_)) | (Canonical::Text(_), Canonical::Json(_)) => {
            false
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
