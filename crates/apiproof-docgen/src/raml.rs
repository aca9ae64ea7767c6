// crates/apiproof-docgen/src/raml.rs
// ============================================================================
// Module: Resource-Tree Document Assembly
// Description: Builds a RAML-style resource tree from raw endpoints.
// Purpose: Emit the nested URI-segment dialect the flat tree cannot express.
// Dependencies: apiproof-core, serde_json, serde_yaml
// ============================================================================

//! ## Overview
//! The resource-tree dialect nests operations by URI segment and declares
//! `uriParameters` on the node whose segment carries the placeholder, so it
//! is built independently from the raw endpoint list rather than from the
//! flat aggregate document. Embedded schema and example blocks are rendered
//! as pretty-printed JSON text produced by the same introspection machinery.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use apiproof_core::Endpoint;
use apiproof_core::ParamMap;
use apiproof_core::Payload;
use apiproof_core::PrimitiveKind;
use apiproof_core::SchemaError;
use apiproof_core::SchemaNode;
use apiproof_core::TestCase;
use apiproof_core::introspect_value;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::encoder::DocGenError;
use crate::seed::DocumentSeed;

// ============================================================================
// SECTION: Generator
// ============================================================================

/// Generator for the nested resource-tree dialect.
///
/// # Invariants
/// - Schema/example blocks are self-contained text; no definitions table.
/// - Output is YAML prefixed with the RAML version comment.
#[derive(Debug, Clone)]
pub struct RamlGenerator {
    /// Document metadata seed.
    seed: DocumentSeed,
}

impl RamlGenerator {
    /// Creates a generator with the given seed.
    #[must_use]
    pub const fn new(seed: DocumentSeed) -> Self {
        Self {
            seed,
        }
    }

    /// Generates the encoded resource-tree document from the endpoint list.
    ///
    /// # Errors
    ///
    /// Returns [`DocGenError`] when introspection hits an unsupported value
    /// or YAML encoding fails.
    pub fn generate(&self, endpoints: &[Endpoint]) -> Result<Vec<u8>, DocGenError> {
        let tree = self.build_tree(endpoints)?;
        let yaml =
            serde_yaml::to_string(&tree).map_err(|err| DocGenError::Encode(err.to_string()))?;
        let mut bytes = b"#%RAML 1.0\n".to_vec();
        bytes.extend_from_slice(yaml.as_bytes());
        Ok(bytes)
    }

    /// Assembles the resource-tree value without encoding it.
    ///
    /// # Errors
    ///
    /// Returns [`DocGenError::Schema`] when introspection fails.
    pub fn build_tree(&self, endpoints: &[Endpoint]) -> Result<Value, DocGenError> {
        let mut root = ResourceNode::default();
        for endpoint in endpoints {
            let normalized = endpoint.normalized_path();
            let segments =
                normalized.split('/').filter(|s| !s.is_empty()).collect::<Vec<&str>>();
            insert_endpoint(&mut root, &segments, endpoint)?;
        }

        let mut document = Map::new();
        document.insert("title".to_string(), Value::String(self.seed.title.clone()));
        document.insert("version".to_string(), Value::String(self.seed.version.clone()));
        document.insert("baseUri".to_string(), Value::String(self.seed.base_uri()));
        for (segment, node) in &root.children {
            document.insert(segment.clone(), node.render());
        }
        Ok(Value::Object(document))
    }
}

// ============================================================================
// SECTION: Resource Tree
// ============================================================================

/// One node of the resource tree, keyed by URI segment.
///
/// # Invariants
/// - `uri_parameters` declares only placeholders carried by this segment;
///   children inherit them per the dialect's semantics.
#[derive(Debug, Default)]
struct ResourceNode {
    /// URI parameter declarations for this segment.
    uri_parameters: BTreeMap<String, Value>,
    /// Method key (lowercase) to method sub-node.
    methods: BTreeMap<String, Value>,
    /// Child nodes keyed by `/segment`.
    children: BTreeMap<String, ResourceNode>,
}

impl ResourceNode {
    /// Renders the node and its children into a document value.
    fn render(&self) -> Value {
        let mut out = Map::new();
        if !self.uri_parameters.is_empty() {
            let params: Map<String, Value> =
                self.uri_parameters.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            out.insert("uriParameters".to_string(), Value::Object(params));
        }
        for (method, node) in &self.methods {
            out.insert(method.clone(), node.clone());
        }
        for (segment, child) in &self.children {
            out.insert(segment.clone(), child.render());
        }
        Value::Object(out)
    }
}

/// Inserts one endpoint into the tree, creating nodes along its path.
fn insert_endpoint(
    root: &mut ResourceNode,
    segments: &[&str],
    endpoint: &Endpoint,
) -> Result<(), DocGenError> {
    let mut node = root;
    for segment in segments {
        node = node.children.entry(format!("/{segment}")).or_default();
        attach_uri_parameters(node, segment, endpoint)?;
    }
    node.methods
        .insert(endpoint.method().lowercase().to_string(), method_node(endpoint)?);
    Ok(())
}

/// Declares URI parameters on the node owning the `{name}` placeholder.
fn attach_uri_parameters(
    node: &mut ResourceNode,
    segment: &str,
    endpoint: &Endpoint,
) -> Result<(), DocGenError> {
    let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) else {
        return Ok(());
    };
    for case in endpoint.cases() {
        if !case.expects_success() {
            continue;
        }
        if let Some(param) = case.path_params.get(name)
            && !node.uri_parameters.contains_key(name)
        {
            node.uri_parameters.insert(
                name.to_string(),
                json!({
                    "description": param.description,
                    "required": param.required,
                    "example": param.value,
                }),
            );
        }
    }
    Ok(())
}

/// Builds one HTTP method sub-node from an endpoint's cases.
fn method_node(endpoint: &Endpoint) -> Result<Value, DocGenError> {
    let mut headers: BTreeMap<String, Value> = BTreeMap::new();
    let mut query_parameters: BTreeMap<String, Value> = BTreeMap::new();
    let mut responses: BTreeMap<String, Value> = BTreeMap::new();

    for case in endpoint.cases() {
        if case.expects_success() {
            merge_named_params(&mut headers, &case.headers);
            merge_named_params(&mut query_parameters, &case.query_params);
        }
        responses.insert(case.expected_status.to_string(), response_node(case)?);
    }

    let mut out = Map::new();
    out.insert("description".to_string(), Value::String(endpoint.description().to_string()));
    if !headers.is_empty() {
        out.insert("headers".to_string(), to_object(headers));
    }
    if !query_parameters.is_empty() {
        out.insert("queryParameters".to_string(), to_object(query_parameters));
    }
    out.insert("responses".to_string(), to_object(responses));
    Ok(Value::Object(out))
}

/// Merges named parameter declarations, first-declared wins.
fn merge_named_params(target: &mut BTreeMap<String, Value>, params: &ParamMap) {
    for (name, param) in params {
        if target.contains_key(name) {
            continue;
        }
        target.insert(
            name.clone(),
            json!({
                "description": param.description,
                "required": param.required,
                "example": param.value,
            }),
        );
    }
}

/// Builds one response sub-node with embedded schema/example text blocks.
fn response_node(case: &TestCase) -> Result<Value, DocGenError> {
    let mut out = Map::new();
    out.insert("description".to_string(), Value::String(case.description.clone()));
    if let Some(body) = &case.expected_body {
        let schema = inline_schema(body)?;
        let mut body_node = Map::new();
        body_node.insert("schema".to_string(), Value::String(pretty_text(&schema.to_value())?));
        body_node
            .insert("example".to_string(), Value::String(pretty_text(&body.example_value())?));
        out.insert("body".to_string(), Value::Object(body_node));
    }
    Ok(Value::Object(out))
}

/// Introspects a payload into a self-contained schema with no references.
fn inline_schema(payload: &Payload) -> Result<SchemaNode, DocGenError> {
    if let Some(reason) = payload.unsupported_reason() {
        return Err(DocGenError::Schema(SchemaError::UnsupportedValue(reason.to_string())));
    }
    Ok(payload
        .json_value()
        .map_or(SchemaNode::Primitive(PrimitiveKind::String), introspect_value))
}

/// Pretty-prints a value as embedded document text.
fn pretty_text(value: &Value) -> Result<String, DocGenError> {
    serde_json::to_string_pretty(value).map_err(|err| DocGenError::Encode(err.to_string()))
}

/// Converts an ordered map into a document object.
fn to_object(map: BTreeMap<String, Value>) -> Value {
    Value::Object(map.into_iter().collect())
}
