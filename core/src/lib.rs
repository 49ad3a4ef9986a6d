//! Contract testing core: schemas from recorded HTTP traffic.
//!
//! # Overview
//! Sample exchanges ([`HttpDocument`]) are translated into a normalized
//! [`Schema`] tree (path, method, status, response detail). Pairs of
//! schemas are scored by [`compare`], and [`validate`] runs that comparison
//! over every provider test and consumer mock in the chosen direction.
//!
//! # Design
//! - Translation and matching are pure and total; mismatches are values.
//! - All I/O lives at the edges: [`store`] persists schemas as YAML and
//!   [`report`] renders results. Callers decide what to do with failures.
//! - Maps are ordered so reports and persisted files are deterministic.

pub mod error;
pub mod fixtures;
pub mod http;
pub mod matching;
pub mod report;
pub mod schema;
pub mod store;
pub mod types;
pub mod validation;

pub use error::ContractError;
pub use http::{headers, Headers, HttpRequest, HttpResponse};
pub use matching::{compare, Mismatch, ValidationOutcome};
pub use report::{JsonRenderer, Render, TableRenderer};
pub use schema::{translate, translate_all, Operation, PathItem, ResponseDetail, Schema};
pub use store::ContractLayout;
pub use types::HttpDocument;
pub use validation::{validate, Catalog, Mode, ValidationReport, ValidationRow};
