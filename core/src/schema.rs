//! Normalized schema form and the document translator.
//!
//! A schema is a four-level tree: path, method, status code, response
//! detail. Field names follow the persisted layout (`paths`, `operations`,
//! `responses`) so the same types serialize straight to disk.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::http::Headers;
use crate::types::HttpDocument;

/// Description attached to every translated response.
pub const GENERATED_DESCRIPTION: &str = "Auto-generated response";

/// Method used when a document leaves its request method empty.
pub const DEFAULT_METHOD: &str = "get";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub paths: BTreeMap<String, PathItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathItem {
    pub operations: BTreeMap<String, Operation>,
}

/// Responses keyed by status code rendered in decimal, e.g. `"200"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub responses: BTreeMap<String, ResponseDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDetail {
    pub description: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub body: String,
}

/// Derive the schema for a single document.
///
/// The result always holds exactly one path, one method and one status.
/// An empty method becomes `"get"`; any other method is kept verbatim.
pub fn translate(doc: &HttpDocument) -> Schema {
    let method = if doc.request.method.is_empty() {
        DEFAULT_METHOD.to_string()
    } else {
        doc.request.method.clone()
    };

    let detail = ResponseDetail {
        description: GENERATED_DESCRIPTION.to_string(),
        headers: doc.response.headers.clone(),
        body: doc.response.body.clone(),
    };
    let operation = Operation {
        responses: BTreeMap::from([(doc.response.status_code.to_string(), detail)]),
    };
    let item = PathItem {
        operations: BTreeMap::from([(method, operation)]),
    };

    Schema {
        paths: BTreeMap::from([(doc.request.url.clone(), item)]),
    }
}

/// Translate every document, keeping its identifier.
pub fn translate_all(docs: &BTreeMap<String, HttpDocument>) -> BTreeMap<String, Schema> {
    docs.iter()
        .map(|(name, doc)| (name.clone(), translate(doc)))
        .collect()
}

impl From<&HttpDocument> for Schema {
    fn from(doc: &HttpDocument) -> Self {
        translate(doc)
    }
}

impl Schema {
    /// Iterate `(path, method, status, detail)` for every response in the tree.
    pub fn responses(&self) -> impl Iterator<Item = (&str, &str, &str, &ResponseDetail)> {
        self.paths.iter().flat_map(|(path, item)| {
            item.operations.iter().flat_map(move |(method, op)| {
                op.responses.iter().map(move |(code, detail)| {
                    (path.as_str(), method.as_str(), code.as_str(), detail)
                })
            })
        })
    }
}
