// crates/apiproof-core/src/schema/node.rs
// ============================================================================
// Module: Schema Node
// Description: Closed tagged variant describing a structural type.
// Purpose: Represent the schema subset the aggregate document populates.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! [`SchemaNode`] models only the schema subset the generated documents
//! actually populate: primitives, objects with required-property lists,
//! arrays, references into the shared definitions table, and null. Rendering
//! to a JSON-schema fragment happens through [`SchemaNode::to_value`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Primitive Kinds
// ============================================================================

/// Primitive schema kind.
///
/// # Invariants
/// - Variants match the simple types of the aggregate document dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// UTF-8 string.
    String,
    /// Whole number.
    Integer,
    /// Floating-point number.
    Number,
    /// Boolean.
    Boolean,
}

impl PrimitiveKind {
    /// Returns the document form of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

// ============================================================================
// SECTION: Schema Node
// ============================================================================

/// Structural type descriptor inside an aggregate document.
///
/// # Invariants
/// - `Object.required` only names keys present in `Object.properties`.
/// - `Reference` names an entry of the generation's definitions table.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Primitive value of the given kind.
    Primitive(PrimitiveKind),
    /// Key-value object with recursively described properties.
    Object {
        /// Property name to schema, ordered for deterministic rendering.
        properties: BTreeMap<String, SchemaNode>,
        /// Names of required properties.
        required: Vec<String>,
    },
    /// Ordered sequence with a single item schema.
    Array(Box<SchemaNode>),
    /// Reference to a named entry in the definitions table.
    Reference(String),
    /// Absent value.
    Null,
}

impl SchemaNode {
    /// Renders the node as a JSON-schema fragment.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Primitive(kind) => json!({ "type": kind.as_str() }),
            Self::Object {
                properties,
                required,
            } => {
                let mut object = Map::new();
                object.insert("type".to_string(), Value::String("object".to_string()));
                if !properties.is_empty() {
                    let props: Map<String, Value> = properties
                        .iter()
                        .map(|(name, node)| (name.clone(), node.to_value()))
                        .collect();
                    object.insert("properties".to_string(), Value::Object(props));
                }
                if !required.is_empty() {
                    let names =
                        required.iter().map(|name| Value::String(name.clone())).collect::<Vec<_>>();
                    object.insert("required".to_string(), Value::Array(names));
                }
                Value::Object(object)
            }
            Self::Array(item) => json!({ "type": "array", "items": item.to_value() }),
            Self::Reference(name) => json!({ "$ref": format!("#/definitions/{name}") }),
            Self::Null => json!({ "type": "null" }),
        }
    }
}
