// crates/apiproof-core/src/lib.rs
// ============================================================================
// Module: Apiproof Core Library
// Description: Endpoint/TestCase model, payload wrapper, and schema engine.
// Purpose: Define the shared contract surfaces consumed by runner and docgen.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Apiproof Core holds the declarative test model ([`Endpoint`], [`TestCase`],
//! [`Param`]), the opaque body wrapper ([`Payload`]), and the structural
//! schema engine ([`SchemaNode`], [`DefinitionRegistry`]) shared by the test
//! runner and the documentation generators.
//!
//! Invariants:
//! - Endpoints and test cases are immutable once authored.
//! - Schema definitions are generation-scoped; a named composite expands at
//!   most once per [`DefinitionRegistry`] and later encounters reference it.
//! - Schema errors abort an entire generation call; a partial contract
//!   document is never produced.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod model;
pub mod payload;
pub mod report;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use model::Endpoint;
pub use model::HookError;
pub use model::Method;
pub use model::Param;
pub use model::ParamLocation;
pub use model::ParamMap;
pub use model::TestCase;
pub use payload::Payload;
pub use report::AssertionFailure;
pub use report::AssertionSubject;
pub use report::CaseFailure;
pub use report::CaseOutcome;
pub use report::CaseReport;
pub use report::LifecycleFailure;
pub use report::LifecyclePhase;
pub use report::RunReport;
pub use schema::DefinitionRegistry;
pub use schema::PrimitiveKind;
pub use schema::SchemaError;
pub use schema::SchemaNode;
pub use schema::introspect_payload;
pub use schema::introspect_value;
pub use schema::param_type_name;
