// crates/apiproof-core/src/schema/introspect.rs
// ============================================================================
// Module: Value Introspection
// Description: Structural schema derivation with cycle-safe definitions.
// Purpose: Map runtime values to schema nodes for document assembly.
// Dependencies: crate::payload, crate::schema::node, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Introspection dispatches on the structural shape of a serialized value:
//! a closed, total match over null, boolean, number, string, array, and
//! object. Named composites are routed through the [`DefinitionRegistry`]:
//! the first encounter expands and registers the full schema, every later
//! encounter returns a [`SchemaNode::Reference`]. Unsupported values abort
//! the whole generation call; a partial schema is not a trustworthy contract
//! artifact.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::payload::Payload;
use crate::schema::node::PrimitiveKind;
use crate::schema::node::SchemaNode;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised during schema generation.
///
/// # Invariants
/// - Any variant aborts the entire document-generation call.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A payload value could not be serialized into a structural shape.
    #[error("unsupported value for schema generation: {0}")]
    UnsupportedValue(String),
    /// A parameter value is not a simple type.
    #[error("parameter '{name}' has a complex value, simple type expected")]
    ComplexParameter {
        /// Parameter name as declared in the test case.
        name: String,
    },
}

// ============================================================================
// SECTION: Definition Registry
// ============================================================================

/// Generation-scoped accumulator for named composite definitions.
///
/// # Invariants
/// - A name is expanded at most once; re-encounters return references.
/// - Scoped to one generation call and discarded afterwards; never global.
#[derive(Debug, Default)]
pub struct DefinitionRegistry {
    /// Definition name to expanded schema.
    definitions: BTreeMap<String, SchemaNode>,
}

impl DefinitionRegistry {
    /// Creates an empty registry for one generation call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named composite and returns a reference to it.
    ///
    /// The first encounter expands `value` into the table; later encounters
    /// return a reference without re-expansion. A placeholder is registered
    /// before expansion so re-entrant encounters of the same name reference
    /// it instead of recursing.
    pub fn define(&mut self, name: &str, value: &Value) -> SchemaNode {
        if !self.definitions.contains_key(name) {
            self.definitions.insert(name.to_string(), SchemaNode::Null);
            let expanded = introspect_value(value);
            self.definitions.insert(name.to_string(), expanded);
        }
        SchemaNode::Reference(name.to_string())
    }

    /// Returns the accumulated definitions.
    #[must_use]
    pub const fn definitions(&self) -> &BTreeMap<String, SchemaNode> {
        &self.definitions
    }

    /// Consumes the registry, yielding the definitions table.
    #[must_use]
    pub fn into_definitions(self) -> BTreeMap<String, SchemaNode> {
        self.definitions
    }
}

// ============================================================================
// SECTION: Introspection
// ============================================================================

/// Maps a structural value onto a schema node.
///
/// Dispatch is total over the closed set of JSON shapes. Array item schemas
/// are sampled from the first element; an empty array yields a null item.
/// Object properties whose sampled value is non-null are listed as required,
/// which is the value-level rendering of the source's optionality convention:
/// omitted-when-empty fields never appear, optional fields serialize to null.
#[must_use]
pub fn introspect_value(value: &Value) -> SchemaNode {
    match value {
        Value::Null => SchemaNode::Null,
        Value::Bool(_) => SchemaNode::Primitive(PrimitiveKind::Boolean),
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                SchemaNode::Primitive(PrimitiveKind::Integer)
            } else {
                SchemaNode::Primitive(PrimitiveKind::Number)
            }
        }
        Value::String(_) => SchemaNode::Primitive(PrimitiveKind::String),
        Value::Array(items) => {
            let item = items.first().map_or(SchemaNode::Null, introspect_value);
            SchemaNode::Array(Box::new(item))
        }
        Value::Object(map) => {
            let mut properties = BTreeMap::new();
            let mut required = Vec::new();
            for (name, property) in map {
                if !property.is_null() {
                    required.push(name.clone());
                }
                properties.insert(name.clone(), introspect_value(property));
            }
            SchemaNode::Object {
                properties,
                required,
            }
        }
    }
}

/// Maps a payload onto a schema node, extracting named composites.
///
/// Raw text/bytes payloads document as strings. Named composites whose
/// serialized form is an object go through the registry and come back as
/// references; anything else introspects inline.
///
/// # Errors
///
/// Returns [`SchemaError::UnsupportedValue`] when the payload carries an
/// unsupported-value marker; the caller must abort the generation call.
pub fn introspect_payload(
    payload: &Payload,
    registry: &mut DefinitionRegistry,
) -> Result<SchemaNode, SchemaError> {
    if let Some(reason) = payload.unsupported_reason() {
        return Err(SchemaError::UnsupportedValue(reason.to_string()));
    }
    let Some(value) = payload.json_value() else {
        return Ok(SchemaNode::Primitive(PrimitiveKind::String));
    };
    match payload.definition_name() {
        Some(name) if value.is_object() => Ok(registry.define(name, value)),
        _ => Ok(introspect_value(value)),
    }
}

/// Derives the simple document type of a parameter value.
///
/// # Errors
///
/// Returns [`SchemaError::ComplexParameter`] for null, array, or object
/// values; parameters must carry simple types.
pub fn param_type_name(name: &str, value: &Value) -> Result<&'static str, SchemaError> {
    match value {
        Value::Bool(_) => Ok("boolean"),
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                Ok("integer")
            } else {
                Ok("number")
            }
        }
        Value::String(_) => Ok("string"),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(SchemaError::ComplexParameter {
            name: name.to_string(),
        }),
    }
}
