// crates/apiproof-docgen/src/swagger.rs
// ============================================================================
// Module: Aggregate Document Assembly
// Description: Folds endpoints into an OpenAPI-2.0-like document.
// Purpose: Keep implementation, tests, and documentation synchronized.
// Dependencies: apiproof-core, serde_json
// ============================================================================

//! ## Overview
//! The [`SwaggerGenerator`] walks every endpoint in one linear pass and folds
//! its test cases into a flat path→method→operation tree. Parameters and the
//! request-body schema come only from cases expecting a 2xx status; every
//! case contributes one response entry keyed by its expected status code.
//! Named composite payloads land in the shared `definitions` table through a
//! generation-scoped [`DefinitionRegistry`].
//!
//! Documented ambiguities (undefined behavior, not detected): two cases of
//! one endpoint with the same expected status overwrite each other's
//! response entry, and two endpoints with the same (path, method) overwrite
//! each other's operation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use apiproof_core::DefinitionRegistry;
use apiproof_core::Endpoint;
use apiproof_core::Param;
use apiproof_core::ParamLocation;
use apiproof_core::ParamMap;
use apiproof_core::Payload;
use apiproof_core::introspect_payload;
use apiproof_core::param_type_name;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::encoder;
use crate::encoder::DocGenError;
use crate::encoder::OutputFormat;
use crate::seed::DocumentSeed;

// ============================================================================
// SECTION: Generator
// ============================================================================

/// Generator for the flat aggregate-document dialect.
///
/// # Invariants
/// - Each generation call builds a fresh definitions table.
/// - Output bytes are deterministic for a fixed seed and endpoint list.
#[derive(Debug, Clone)]
pub struct SwaggerGenerator {
    /// Document metadata seed.
    seed: DocumentSeed,
    /// Serialization format for the encoded document.
    format: OutputFormat,
}

impl SwaggerGenerator {
    /// Creates a generator with the given seed and output format.
    #[must_use]
    pub const fn new(seed: DocumentSeed, format: OutputFormat) -> Self {
        Self {
            seed,
            format,
        }
    }

    /// Generates the encoded aggregate document from the endpoint list.
    ///
    /// # Errors
    ///
    /// Returns [`DocGenError`] when introspection hits an unsupported value
    /// or encoding fails; no partial document is returned.
    pub fn generate(&self, endpoints: &[Endpoint]) -> Result<Vec<u8>, DocGenError> {
        let document = self.build_document(endpoints)?;
        encoder::encode(self.format, &document)
    }

    /// Assembles the document value without encoding it.
    ///
    /// # Errors
    ///
    /// Returns [`DocGenError::Schema`] when introspection fails.
    pub fn build_document(&self, endpoints: &[Endpoint]) -> Result<Value, DocGenError> {
        let mut registry = DefinitionRegistry::new();
        let mut paths: BTreeMap<String, BTreeMap<&'static str, Value>> = BTreeMap::new();

        for endpoint in endpoints {
            let operation = build_operation(endpoint, &mut registry)?;
            // Duplicate (path, method) pairs silently overwrite; see module docs.
            paths
                .entry(endpoint.normalized_path())
                .or_default()
                .insert(endpoint.method().lowercase(), operation);
        }

        let paths_value: Map<String, Value> = paths
            .into_iter()
            .map(|(path, operations)| {
                let by_method: Map<String, Value> =
                    operations.into_iter().map(|(method, op)| (method.to_string(), op)).collect();
                (path, Value::Object(by_method))
            })
            .collect();

        let definitions: Map<String, Value> = registry
            .into_definitions()
            .into_iter()
            .map(|(name, node)| (name, node.to_value()))
            .collect();

        Ok(json!({
            "swagger": "2.0",
            "info": {
                "title": self.seed.title,
                "description": self.seed.description,
                "version": self.seed.version,
            },
            "host": self.seed.host,
            "basePath": self.seed.base_path,
            "schemes": self.seed.schemes,
            "consumes": self.seed.consumes,
            "produces": self.seed.produces,
            "paths": paths_value,
            "definitions": definitions,
        }))
    }
}

// ============================================================================
// SECTION: Operation Assembly
// ============================================================================

/// Parameter identity: document location plus name.
type ParamKey = (&'static str, String);

/// Builds one operation from an endpoint's test cases.
fn build_operation(
    endpoint: &Endpoint,
    registry: &mut DefinitionRegistry,
) -> Result<Value, DocGenError> {
    let mut parameters: BTreeMap<ParamKey, Value> = BTreeMap::new();
    let mut responses: BTreeMap<String, Value> = BTreeMap::new();
    let mut summary: Option<&str> = None;
    let mut body_documented = false;

    for case in endpoint.cases() {
        // Parameter definitions are collected from 2xx cases only.
        if case.expects_success() {
            if summary.is_none() {
                summary = Some(case.description.as_str());
            }
            merge_params(&mut parameters, &case.headers, ParamLocation::Header)?;
            merge_params(&mut parameters, &case.path_params, ParamLocation::Path)?;
            merge_params(&mut parameters, &case.query_params, ParamLocation::Query)?;

            if let Some(body) = &case.request_body
                && !body_documented
            {
                // Request bodies across one endpoint's cases are assumed
                // shape-compatible; only the first is introspected.
                parameters.insert(("body", "body".to_string()), body_parameter(body, registry)?);
                body_documented = true;
            }
        }

        // Every case contributes one response entry; a repeated expected
        // status overwrites the earlier entry (documented ambiguity).
        responses.insert(
            case.expected_status.to_string(),
            build_response(&case.description, case.expected_body.as_ref(), registry)?,
        );
    }

    let mut operation = Map::new();
    operation.insert("summary".to_string(), Value::String(summary.unwrap_or("").to_string()));
    if let Some(tag) = endpoint.tag() {
        operation.insert("tags".to_string(), json!([tag]));
    }
    if !parameters.is_empty() {
        let ordered = parameters.into_values().collect::<Vec<_>>();
        operation.insert("parameters".to_string(), Value::Array(ordered));
    }
    let responses_value: Map<String, Value> = responses.into_iter().collect();
    operation.insert("responses".to_string(), Value::Object(responses_value));
    Ok(Value::Object(operation))
}

/// Merges one parameter map into the operation's deduplicated set.
///
/// Parameter identity is name plus location; the first-declared entry wins
/// for value, required flag, and description.
fn merge_params(
    parameters: &mut BTreeMap<ParamKey, Value>,
    params: &ParamMap,
    location: ParamLocation,
) -> Result<(), DocGenError> {
    for (name, param) in params {
        let key = (location.as_str(), name.clone());
        if parameters.contains_key(&key) {
            continue;
        }
        parameters.insert(key, build_param(name, param, location)?);
    }
    Ok(())
}

/// Builds a simple-typed parameter entry.
fn build_param(name: &str, param: &Param, location: ParamLocation) -> Result<Value, DocGenError> {
    let type_name = param_type_name(name, &param.value)?;
    Ok(json!({
        "name": name,
        "in": location.as_str(),
        "required": param.required,
        "type": type_name,
        "default": param.value,
        "description": param.description,
    }))
}

/// Builds the body parameter from the first request body of an endpoint.
fn body_parameter(
    body: &Payload,
    registry: &mut DefinitionRegistry,
) -> Result<Value, DocGenError> {
    let schema = introspect_payload(body, registry)?;
    Ok(json!({
        "name": "body",
        "in": "body",
        "required": true,
        "schema": schema.to_value(),
        "default": body.example_value(),
    }))
}

/// Builds one response entry for a test case.
fn build_response(
    description: &str,
    expected_body: Option<&Payload>,
    registry: &mut DefinitionRegistry,
) -> Result<Value, DocGenError> {
    let mut response = Map::new();
    response.insert("description".to_string(), Value::String(description.to_string()));
    if let Some(body) = expected_body {
        let schema = introspect_payload(body, registry)?;
        response.insert("schema".to_string(), schema.to_value());
        response.insert("examples".to_string(), json!({ "application/json": body.example_value() }));
    }
    Ok(Value::Object(response))
}
