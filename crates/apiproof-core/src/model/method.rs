// crates/apiproof-core/src/model/method.rs
// ============================================================================
// Module: HTTP Method
// Description: Closed enumeration of supported HTTP methods.
// Purpose: Keep method handling total across runner and docgen.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`Method`] is a closed enum over the HTTP methods an [`crate::Endpoint`]
//! may declare. Both the uppercase wire form and the lowercase document key
//! form are exposed so callers never hand-format method names.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Method
// ============================================================================

/// HTTP method of an endpoint operation.
///
/// # Invariants
/// - Variants are exhaustive for the methods the framework supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Method {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP PATCH.
    Patch,
    /// HTTP DELETE.
    Delete,
    /// HTTP HEAD.
    Head,
    /// HTTP OPTIONS.
    Options,
}

impl Method {
    /// Returns the uppercase wire form of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }

    /// Returns the lowercase form used as an operation key in documents.
    #[must_use]
    pub const fn lowercase(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Head => "head",
            Self::Options => "options",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
