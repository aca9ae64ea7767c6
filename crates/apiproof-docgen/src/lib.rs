// crates/apiproof-docgen/src/lib.rs
// ============================================================================
// Module: Apiproof Docgen Library
// Description: Specification assembly and encoding from test definitions.
// Purpose: Fold endpoints into API documents in two dialects.
// Dependencies: apiproof-core, serde, serde_json, serde_yaml, thiserror
// ============================================================================

//! ## Overview
//! Apiproof Docgen walks the same [`apiproof_core::Endpoint`] definitions the
//! test runner executes and folds them into machine-readable API documents:
//! a flat path→method→operation aggregate ([`SwaggerGenerator`]) and a nested
//! resource tree keyed by URI segment ([`RamlGenerator`]). Encoding is pure;
//! no generator performs I/O.
//!
//! Invariants:
//! - A generation call either yields a complete document or an error; schema
//!   failures never produce partial output.
//! - Output bytes are deterministic for a fixed endpoint list and seed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod encoder;
pub mod raml;
pub mod seed;
pub mod swagger;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use encoder::DocGenError;
pub use encoder::OutputFormat;
pub use raml::RamlGenerator;
pub use seed::DocumentSeed;
pub use swagger::SwaggerGenerator;
