// crates/apiproof-core/src/schema.rs
// ============================================================================
// Module: Structural Schema Engine
// Description: Schema nodes and value introspection with cycle-safe defs.
// Purpose: Derive structural schemas from runtime values for docgen.
// Dependencies: crate::payload, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The schema engine maps arbitrary runtime values onto a closed tagged
//! variant, [`SchemaNode`], and extracts named composite types into a
//! generation-scoped [`DefinitionRegistry`]. A composite expands at most once
//! per generation run; every later encounter yields a reference, which caps
//! recursion for self- and mutually-referential shapes.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod introspect;
pub mod node;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use introspect::DefinitionRegistry;
pub use introspect::SchemaError;
pub use introspect::introspect_payload;
pub use introspect::introspect_value;
pub use introspect::param_type_name;
pub use node::PrimitiveKind;
pub use node::SchemaNode;
