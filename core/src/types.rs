//! Sample documents: a named request paired with its expected response.

use serde::{Deserialize, Serialize};

use crate::http::{HttpRequest, HttpResponse};

/// A recorded or hand-written HTTP exchange.
///
/// Documents are the raw input of the pipeline. They are never mutated
/// downstream; the translator reads them to derive a [`crate::Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpDocument {
    /// Display label, e.g. `"Get Products"`.
    pub name: String,
    pub request: HttpRequest,
    pub response: HttpResponse,
}

impl HttpDocument {
    pub fn new(name: &str, request: HttpRequest, response: HttpResponse) -> Self {
        Self {
            name: name.to_string(),
            request,
            response,
        }
    }
}
