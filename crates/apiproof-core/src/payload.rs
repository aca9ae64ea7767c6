// crates/apiproof-core/src/payload.rs
// ============================================================================
// Module: Opaque Payload Wrapper
// Description: Body values for requests and response expectations.
// Purpose: Capture structural shape and type identity at construction time.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`Payload`] carries an opaque body value together with everything the
//! schema engine needs later: the serialized structural shape and, for named
//! composite types, the type identity used to key the shared definitions
//! table. Serialization happens eagerly at construction; a value serde cannot
//! represent is recorded as an unsupported marker that fails the whole
//! document generation rather than producing a partial schema.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error raised when a payload cannot be encoded into request bytes.
///
/// # Invariants
/// - The message names the original construction failure.
#[derive(Debug, Error)]
#[error("payload encode error: {0}")]
pub struct EncodeError(pub String);

// ============================================================================
// SECTION: Payload
// ============================================================================

/// Internal payload representation.
///
/// # Invariants
/// - `Json` values are fully serialized; no lazy serialization happens later.
/// - `Unsupported` is only constructed by [`Payload::of`] on serde failure.
#[derive(Debug, Clone, PartialEq)]
enum Repr {
    /// Structured JSON value, optionally carrying a composite type name.
    Json {
        /// Short type name of the source composite, when known.
        type_name: Option<String>,
        /// Serialized structural value.
        value: Value,
    },
    /// Raw bytes compared and documented textually.
    Raw(Vec<u8>),
    /// Marker for a value serde could not serialize.
    Unsupported(String),
}

/// Opaque body value for requests and response expectations.
///
/// # Invariants
/// - Immutable once constructed.
/// - Named composite identity is captured only by [`Payload::of`].
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    /// Internal representation.
    repr: Repr,
}

impl Payload {
    /// Wraps a named composite value, capturing its type identity.
    ///
    /// The short type name (final path segment, generics stripped) keys the
    /// shared definitions table during document generation. Use this for
    /// struct-like types; use [`Payload::json`] for ad-hoc values.
    #[must_use]
    pub fn of<T: Serialize>(value: &T) -> Self {
        let repr = match serde_json::to_value(value) {
            Ok(serialized) => Repr::Json {
                type_name: Some(short_type_name::<T>()),
                value: serialized,
            },
            Err(err) => Repr::Unsupported(err.to_string()),
        };
        Self {
            repr,
        }
    }

    /// Wraps an anonymous JSON value with no definition name.
    #[must_use]
    pub const fn json(value: Value) -> Self {
        Self {
            repr: Repr::Json {
                type_name: None,
                value,
            },
        }
    }

    /// Wraps plain text compared and documented as a string.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            repr: Repr::Raw(text.into().into_bytes()),
        }
    }

    /// Wraps raw bytes compared and documented as a string.
    #[must_use]
    pub const fn bytes(bytes: Vec<u8>) -> Self {
        Self {
            repr: Repr::Raw(bytes),
        }
    }

    /// Returns the structural JSON value, when the payload holds one.
    #[must_use]
    pub const fn json_value(&self) -> Option<&Value> {
        match &self.repr {
            Repr::Json {
                value, ..
            } => Some(value),
            Repr::Raw(_) | Repr::Unsupported(_) => None,
        }
    }

    /// Returns the raw bytes, when the payload holds them.
    #[must_use]
    pub fn raw(&self) -> Option<&[u8]> {
        match &self.repr {
            Repr::Raw(bytes) => Some(bytes),
            Repr::Json {
                ..
            }
            | Repr::Unsupported(_) => None,
        }
    }

    /// Returns the captured composite type name, when present.
    #[must_use]
    pub fn definition_name(&self) -> Option<&str> {
        match &self.repr {
            Repr::Json {
                type_name, ..
            } => type_name.as_deref(),
            Repr::Raw(_) | Repr::Unsupported(_) => None,
        }
    }

    /// Returns the construction failure message for unsupported values.
    #[must_use]
    pub fn unsupported_reason(&self) -> Option<&str> {
        match &self.repr {
            Repr::Unsupported(reason) => Some(reason),
            Repr::Json {
                ..
            }
            | Repr::Raw(_) => None,
        }
    }

    /// Returns the literal value used as a document example.
    ///
    /// Raw payloads render as strings via lossy UTF-8; unsupported payloads
    /// never reach example rendering because generation aborts first.
    #[must_use]
    pub fn example_value(&self) -> Value {
        match &self.repr {
            Repr::Json {
                value, ..
            } => value.clone(),
            Repr::Raw(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
            Repr::Unsupported(reason) => Value::String(reason.clone()),
        }
    }

    /// Encodes the payload into request body bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] when the payload was constructed from a value
    /// serde could not serialize, or when JSON encoding fails.
    pub fn encode_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        match &self.repr {
            Repr::Json {
                value, ..
            } => serde_json::to_vec(value).map_err(|err| EncodeError(err.to_string())),
            Repr::Raw(bytes) => Ok(bytes.clone()),
            Repr::Unsupported(reason) => Err(EncodeError(reason.clone())),
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the short name of `T`: final path segment, generics stripped.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let short = base.rsplit("::").next().unwrap_or(base);
    short.to_string()
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

    use serde::Serialize;
    use serde_json::json;

    use super::Payload;
    use super::short_type_name;

    #[derive(Serialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn of_captures_short_type_name() {
        let payload = Payload::of(&Sample {
            name: "x".to_string(),
        });
        assert_eq!(payload.definition_name(), Some("Sample"));
    }

    #[test]
    fn json_payload_has_no_definition_name() {
        let payload = Payload::json(json!({"a": 1}));
        assert_eq!(payload.definition_name(), None);
    }

    #[test]
    fn text_payload_encodes_verbatim() {
        let payload = Payload::text("Hello World!");
        assert_eq!(payload.encode_bytes().unwrap(), b"Hello World!".to_vec());
    }

    #[test]
    fn short_name_strips_generics_and_path() {
        assert_eq!(short_type_name::<Vec<Sample>>(), "Vec");
        assert_eq!(short_type_name::<Sample>(), "Sample");
    }
}
