// crates/apiproof-runner/src/request.rs
// ============================================================================
// Module: Request Construction
// Description: Path template expansion and URL building for test cases.
// Purpose: Turn declarative case parameters into a concrete request URL.
// Dependencies: apiproof-core, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! Request construction expands `{name}` placeholders in the endpoint path
//! template with the case's path-parameter values coerced to text, then
//! appends query parameters. An unresolved placeholder or a non-primitive
//! path value fails only the case it belongs to.

// ============================================================================
// SECTION: Imports
// ============================================================================

use apiproof_core::ParamMap;
use serde_json::Value;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error raised while constructing a request URL.
///
/// # Invariants
/// - Aborts only the test case being constructed.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UrlError(pub String);

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Expands `{name}` placeholders with path-parameter values.
///
/// Only string, number, and boolean values have a textual wire form; an
/// object, array, or null path parameter fails the case.
///
/// # Errors
///
/// Returns [`UrlError`] when a placeholder has no matching path parameter,
/// the template nests braces, or a matched value is not a primitive.
pub fn expand_path(template: &str, params: &ParamMap) -> Result<String, UrlError> {
    let mut expanded = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let (literal, tail) = rest.split_at(start);
        expanded.push_str(literal);
        let Some(end) = tail.find('}') else {
            return Err(UrlError(format!("unterminated placeholder in template '{template}'")));
        };
        let name = &tail[1..end];
        if name.contains('{') {
            return Err(UrlError(format!("malformed placeholder in template '{template}'")));
        }
        let Some(param) = params.get(name) else {
            return Err(UrlError(format!("unresolved path placeholder '{name}'")));
        };
        if !matches!(param.value, Value::String(_) | Value::Number(_) | Value::Bool(_)) {
            return Err(UrlError(format!("non-primitive path parameter '{name}'")));
        }
        expanded.push_str(&coerce_text(&param.value));
        rest = &tail[end + 1..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}

/// Builds the full request URL from base address, expanded path, and query.
///
/// Query parameter order is not significant; parameters append in map order
/// for deterministic URLs.
///
/// # Errors
///
/// Returns [`UrlError`] when the combined address does not parse.
pub fn build_url(base: &str, path: &str, query: &ParamMap) -> Result<Url, UrlError> {
    let joined = format!("{}{path}", base.trim_end_matches('/'));
    let mut url = Url::parse(&joined)
        .map_err(|err| UrlError(format!("invalid request url '{joined}': {err}")))?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, param) in query {
            pairs.append_pair(name, &coerce_text(&param.value));
        }
    }
    Ok(url)
}

/// Coerces a parameter value to its textual wire form.
///
/// Strings pass through unchanged; every other value renders via its
/// canonical JSON text, which covers numbers and booleans naturally.
#[must_use]
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
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

    use apiproof_core::Param;
    use apiproof_core::ParamMap;
    use serde_json::json;

    use super::build_url;
    use super::coerce_text;
    use super::expand_path;

    fn params(entries: &[(&str, Param)]) -> ParamMap {
        entries.iter().map(|(name, param)| ((*name).to_string(), param.clone())).collect()
    }

    #[test]
    fn expands_placeholders_with_coerced_values() {
        let map = params(&[("id", Param::required(42)), ("name", Param::required("octocat"))]);
        let expanded = expand_path("/user/{name}/item/{id}", &map).unwrap();
        assert_eq!(expanded, "/user/octocat/item/42");
    }

    #[test]
    fn unresolved_placeholder_fails() {
        let err = expand_path("/user/{name}", &ParamMap::new()).unwrap_err();
        assert!(err.0.contains("unresolved path placeholder 'name'"));
    }

    #[test]
    fn non_primitive_path_values_fail() {
        let map = params(&[("id", Param::required(json!({ "a": 1 })))]);
        let err = expand_path("/user/{id}", &map).unwrap_err();
        assert!(err.0.contains("non-primitive path parameter 'id'"));

        let map = params(&[("id", Param::required(json!([1, 2])))]);
        assert!(expand_path("/user/{id}", &map).is_err());

        let map = params(&[("id", Param::required(json!(null)))]);
        assert!(expand_path("/user/{id}", &map).is_err());
    }

    #[test]
    fn query_parameters_append_in_map_order() {
        let map = params(&[("b", Param::required(2)), ("a", Param::required("x"))]);
        let url = build_url("http://host/", "/search", &map).unwrap();
        assert_eq!(url.as_str(), "http://host/search?a=x&b=2");
    }

    #[test]
    fn coercion_renders_simple_values() {
        assert_eq!(coerce_text(&json!("text")), "text");
        assert_eq!(coerce_text(&json!(7)), "7");
        assert_eq!(coerce_text(&json!(true)), "true");
    }
}
