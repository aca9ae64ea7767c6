// crates/apiproof-core/src/model.rs
// ============================================================================
// Module: Declarative Test Model
// Description: Immutable endpoint and test case descriptors.
// Purpose: Provide the authored inputs consumed by runner and docgen.
// Dependencies: crate::payload, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The model module defines the authored, read-only inputs of the framework:
//! an [`Endpoint`] describes one path+method API operation together with its
//! optional lifecycle hooks, and each [`TestCase`] describes one concrete
//! input/expected-output scenario for that endpoint.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod case;
pub mod endpoint;
pub mod method;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use case::Param;
pub use case::ParamLocation;
pub use case::ParamMap;
pub use case::TestCase;
pub use endpoint::Endpoint;
pub use endpoint::HookError;
pub use method::Method;
