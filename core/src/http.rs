//! HTTP exchange types for recorded traffic.
//!
//! # Design
//! Requests and responses are plain data. Nothing in this crate executes
//! them; a host (fixture loader, replay server, traffic recorder) fills them
//! in and hands them over. The method is kept as the caller supplied it so
//! the translator can apply its own normalization rules.
//!
//! Headers use `BTreeMap` so two recordings of the same exchange render
//! identically regardless of the order headers arrived in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Header name to value mapping.
pub type Headers = BTreeMap<String, String>;

/// The request half of a recorded exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    /// Method exactly as supplied, e.g. `"get"`. May be empty.
    #[serde(default)]
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub body: String,
}

/// The expected response half of a recorded exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub body: String,
}

/// Build a `Headers` map from borrowed pairs.
pub fn headers<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Headers {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
