// crates/apiproof-docgen/tests/raml_generation.rs
// ============================================================================
// Module: Resource-Tree Document Tests
// Description: Nesting and parameter inheritance of the resource dialect.
// Purpose: Verify URI-segment nesting, uriParameters, and text blocks.
// ============================================================================

//! ## Overview
//! Covers the resource-tree generator: nesting by URI segment, uriParameter
//! declarations on the owning segment, method sub-nodes with headers and
//! query parameters, and embedded schema/example text blocks.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use apiproof_core::Endpoint;
use apiproof_core::Method;
use apiproof_core::Param;
use apiproof_core::Payload;
use apiproof_core::TestCase;
use apiproof_docgen::DocumentSeed;
use apiproof_docgen::RamlGenerator;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

fn seed() -> DocumentSeed {
    DocumentSeed {
        title: "Example API".to_string(),
        host: "testapi.my".to_string(),
        ..DocumentSeed::default()
    }
}

fn get_user_endpoint() -> Endpoint {
    Endpoint::new(
        Method::Get,
        "user/{username}",
        vec![
            TestCase::expecting(200)
                .describe("gets user details")
                .path_param("username", Param::required("octocat").describe("login name"))
                .query_param("full", Param::optional(true))
                .header("X-Api-Key", Param::required("secret"))
                .expect_body(Payload::json(json!({"login": "octocat"}))),
            TestCase::expecting(404)
                .describe("user not found")
                .path_param("username", Param::required("ghost"))
                .expect_body(Payload::text("not found")),
        ],
    )
    .describe("User details endpoint")
}

// ============================================================================
// SECTION: Tree Shape
// ============================================================================

#[test]
fn resources_nest_by_uri_segment() {
    let generator = RamlGenerator::new(seed());
    let tree = generator.build_tree(&[get_user_endpoint()]).unwrap();

    assert_eq!(tree["title"], json!("Example API"));
    assert_eq!(tree["baseUri"], json!("http://testapi.my/"));

    let user_node = &tree["/user"];
    assert!(user_node.is_object());
    let username_node = &user_node["/{username}"];
    assert!(username_node.is_object());
    assert!(username_node.get("get").is_some());
}

#[test]
fn uri_parameters_attach_to_owning_segment() {
    let generator = RamlGenerator::new(seed());
    let tree = generator.build_tree(&[get_user_endpoint()]).unwrap();

    let username_node = &tree["/user"]["/{username}"];
    let declared = &username_node["uriParameters"]["username"];
    assert_eq!(declared["required"], json!(true));
    assert_eq!(declared["example"], json!("octocat"));
    assert_eq!(declared["description"], json!("login name"));

    // The parent segment declares nothing.
    assert!(tree["/user"].get("uriParameters").is_none());
}

#[test]
fn method_nodes_carry_headers_queries_and_responses() {
    let generator = RamlGenerator::new(seed());
    let tree = generator.build_tree(&[get_user_endpoint()]).unwrap();

    let get_node = &tree["/user"]["/{username}"]["get"];
    assert_eq!(get_node["description"], json!("User details endpoint"));
    assert_eq!(get_node["headers"]["X-Api-Key"]["example"], json!("secret"));
    assert_eq!(get_node["queryParameters"]["full"]["required"], json!(false));

    let responses = get_node["responses"].as_object().unwrap();
    assert_eq!(responses.keys().collect::<Vec<_>>(), vec!["200", "404"]);

    let ok_body = &responses["200"]["body"];
    let schema: Value = serde_json::from_str(ok_body["schema"].as_str().unwrap()).unwrap();
    assert_eq!(schema["type"], json!("object"));
    let example: Value = serde_json::from_str(ok_body["example"].as_str().unwrap()).unwrap();
    assert_eq!(example, json!({"login": "octocat"}));
}

// ============================================================================
// SECTION: Encoding
// ============================================================================

#[test]
fn encoded_output_carries_raml_version_header() {
    let generator = RamlGenerator::new(seed());
    let bytes = generator.generate(&[get_user_endpoint()]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("#%RAML 1.0\n"));
    assert!(text.contains("/user"));
    assert!(text.contains("uriParameters"));
}
