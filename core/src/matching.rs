//! Weighted comparison of two schemas.
//!
//! # Design
//! `compare` walks the reference schema top-down and credits a fixed weight
//! for every element the candidate also has. Weights are additive per
//! matched element and never normalized, so a schema with more matching
//! responses scores above 1.0. Structural gaps (path count, missing path,
//! missing method) stop the walk at the first gap; a missing status code
//! or a differing header set or body is recorded and the walk continues.
//!
//! Every gap, structural or not, fails the pair. The mismatch list is
//! authoritative; the score is only a similarity hint.

use std::fmt;

use serde::Serialize;

use crate::http::Headers;
use crate::schema::Schema;

/// Credit for a method present on both sides.
pub const METHOD_WEIGHT: f64 = 0.2;
/// Credit for a status code present on both sides.
pub const STATUS_WEIGHT: f64 = 0.3;
/// Credit for identical response headers.
pub const HEADERS_WEIGHT: f64 = 0.3;
/// Credit for an identical response body.
pub const BODY_WEIGHT: f64 = 0.2;

/// One discrepancy between a reference and a candidate schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Mismatch {
    PathCount,
    PathNotFound {
        path: String,
    },
    MethodNotFound {
        method: String,
        path: String,
    },
    StatusNotFound {
        code: String,
        method: String,
        path: String,
    },
    Headers {
        method: String,
        path: String,
        code: String,
    },
    Body {
        method: String,
        path: String,
        code: String,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::PathCount => write!(f, "Different number of paths"),
            Mismatch::PathNotFound { path } => write!(f, "Path {path} not found"),
            Mismatch::MethodNotFound { method, path } => {
                write!(f, "Method {method} for path {path} not found")
            }
            Mismatch::StatusNotFound { code, method, path } => {
                write!(f, "Status code {code} not found for {method} {path}")
            }
            Mismatch::Headers { method, path, code } => {
                write!(f, "Headers mismatch for {method} {path} {code}")
            }
            Mismatch::Body { method, path, code } => {
                write!(f, "Body mismatch for {method} {path} {code}")
            }
        }
    }
}

impl From<Mismatch> for String {
    fn from(mismatch: Mismatch) -> Self {
        mismatch.to_string()
    }
}

/// Result of comparing one pair of schemas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
    pub score: f64,
    pub pass: bool,
    /// In discovery order.
    pub mismatches: Vec<Mismatch>,
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self {
            score: 0.0,
            pass: true,
            mismatches: Vec::new(),
        }
    }
}

impl ValidationOutcome {
    fn fail(&mut self, mismatch: Mismatch) {
        self.mismatches.push(mismatch);
        self.pass = false;
    }

    /// Mismatch messages in discovery order.
    pub fn messages(&self) -> Vec<String> {
        self.mismatches.iter().map(ToString::to_string).collect()
    }
}

/// Score `candidate` against `reference` and list what differs.
pub fn compare(reference: &Schema, candidate: &Schema) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    if reference.paths.len() != candidate.paths.len() {
        outcome.fail(Mismatch::PathCount);
        return outcome;
    }

    for (path, ref_item) in &reference.paths {
        let Some(cand_item) = candidate.paths.get(path) else {
            outcome.fail(Mismatch::PathNotFound { path: path.clone() });
            return outcome;
        };

        for (method, ref_op) in &ref_item.operations {
            let Some(cand_op) = cand_item.operations.get(method) else {
                outcome.fail(Mismatch::MethodNotFound {
                    method: method.clone(),
                    path: path.clone(),
                });
                return outcome;
            };
            outcome.score += METHOD_WEIGHT;

            for (code, ref_detail) in &ref_op.responses {
                let Some(cand_detail) = cand_op.responses.get(code) else {
                    outcome.fail(Mismatch::StatusNotFound {
                        code: code.clone(),
                        method: method.clone(),
                        path: path.clone(),
                    });
                    continue;
                };
                outcome.score += STATUS_WEIGHT;

                if render_headers(&ref_detail.headers) != render_headers(&cand_detail.headers) {
                    outcome.fail(Mismatch::Headers {
                        method: method.clone(),
                        path: path.clone(),
                        code: code.clone(),
                    });
                } else {
                    outcome.score += HEADERS_WEIGHT;
                }

                if ref_detail.body != cand_detail.body {
                    outcome.fail(Mismatch::Body {
                        method: method.clone(),
                        path: path.clone(),
                        code: code.clone(),
                    });
                } else {
                    outcome.score += BODY_WEIGHT;
                }
            }
        }
    }

    tracing::trace!(
        score = outcome.score,
        pass = outcome.pass,
        mismatches = outcome.mismatches.len(),
        "compared schemas"
    );
    outcome
}

/// Textual form used for header comparison. Keys are sorted.
fn render_headers(headers: &Headers) -> String {
    format!("{headers:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::headers;
    use crate::schema::{Operation, PathItem, ResponseDetail};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn detail(body: &str) -> ResponseDetail {
        ResponseDetail {
            description: "Auto-generated response".to_string(),
            headers: headers([("Content-Type", "application/json")]),
            body: body.to_string(),
        }
    }

    fn schema(entries: &[(&str, &str, &str, ResponseDetail)]) -> Schema {
        let mut schema = Schema::default();
        for (path, method, code, d) in entries {
            schema
                .paths
                .entry(path.to_string())
                .or_insert_with(PathItem::default)
                .operations
                .entry(method.to_string())
                .or_insert_with(Operation::default)
                .responses
                .insert(code.to_string(), d.clone());
        }
        schema
    }

    fn products(body: &str) -> Schema {
        schema(&[("/api/products", "get", "200", detail(body))])
    }

    #[test]
    fn identical_schemas_pass_with_full_score() {
        let s = products(r#"{"a":1}"#);
        let outcome = compare(&s, &s);
        assert!(outcome.pass);
        assert!(outcome.mismatches.is_empty());
        assert!(approx(outcome.score, 1.0));
    }

    #[test]
    fn body_mismatch_credits_everything_else() {
        let outcome = compare(&products(r#"{"a":1}"#), &products(r#"{"a":2}"#));
        assert!(!outcome.pass);
        assert!(approx(outcome.score, 0.8));
        assert_eq!(
            outcome.messages(),
            vec!["Body mismatch for get /api/products 200"]
        );
    }

    #[test]
    fn header_mismatch_withholds_header_weight() {
        let mut other = detail("{}");
        other.headers = headers([("Content-Type", "text/plain")]);
        let reference = schema(&[("/p", "get", "200", detail("{}"))]);
        let candidate = schema(&[("/p", "get", "200", other)]);

        let outcome = compare(&reference, &candidate);
        assert!(!outcome.pass);
        assert!(approx(outcome.score, 0.7));
        assert_eq!(outcome.messages(), vec!["Headers mismatch for get /p 200"]);
    }

    #[test]
    fn header_order_does_not_matter() {
        let mut a = detail("{}");
        a.headers = headers([("A", "1"), ("B", "2")]);
        let mut b = detail("{}");
        b.headers = headers([("B", "2"), ("A", "1")]);
        let outcome = compare(
            &schema(&[("/p", "get", "200", a)]),
            &schema(&[("/p", "get", "200", b)]),
        );
        assert!(outcome.pass);
    }

    #[test]
    fn different_path_count_short_circuits() {
        let reference = schema(&[
            ("/a", "get", "200", detail("{}")),
            ("/b", "get", "200", detail("{}")),
        ]);
        let candidate = schema(&[("/a", "get", "200", detail("{}"))]);

        let outcome = compare(&reference, &candidate);
        assert_eq!(outcome.messages(), vec!["Different number of paths"]);
        assert_eq!(outcome.score, 0.0);
        assert!(!outcome.pass);
    }

    #[test]
    fn missing_path_stops_walk() {
        let reference = schema(&[
            ("/a", "get", "200", detail("{}")),
            ("/b", "get", "200", detail("{}")),
        ]);
        let candidate = schema(&[
            ("/a", "get", "200", detail("{}")),
            ("/c", "get", "200", detail("{}")),
        ]);

        let outcome = compare(&reference, &candidate);
        assert_eq!(outcome.messages(), vec!["Path /b not found"]);
        assert!(approx(outcome.score, 1.0));
        assert!(!outcome.pass);
    }

    #[test]
    fn missing_method_stops_walk() {
        let reference = schema(&[("/api/orders", "post", "201", detail("{}"))]);
        let candidate = schema(&[("/api/orders", "get", "201", detail("{}"))]);

        let outcome = compare(&reference, &candidate);
        assert_eq!(
            outcome.messages(),
            vec!["Method post for path /api/orders not found"]
        );
        assert_eq!(outcome.score, 0.0);
        assert!(!outcome.pass);
    }

    #[test]
    fn missing_status_continues_with_other_codes() {
        let reference = schema(&[
            ("/p", "get", "200", detail("{}")),
            ("/p", "get", "404", detail("{}")),
        ]);
        let candidate = schema(&[
            ("/p", "get", "200", detail("{}")),
            ("/p", "get", "500", detail("{}")),
        ]);

        let outcome = compare(&reference, &candidate);
        assert_eq!(
            outcome.messages(),
            vec!["Status code 404 not found for get /p"]
        );
        assert!(!outcome.pass);
        assert!(approx(outcome.score, 1.0));
    }

    #[test]
    fn score_accumulates_beyond_one() {
        let s = schema(&[
            ("/a", "get", "200", detail("{}")),
            ("/b", "get", "200", detail("{}")),
        ]);
        let outcome = compare(&s, &s);
        assert!(outcome.pass);
        assert!(approx(outcome.score, 2.0));
    }

    #[test]
    fn comparison_is_directional() {
        let reference = schema(&[
            ("/p", "get", "200", detail("{}")),
            ("/p", "get", "404", detail("{}")),
        ]);
        let candidate = schema(&[("/p", "get", "200", detail("{}"))]);

        assert!(!compare(&reference, &candidate).pass);
        assert!(compare(&candidate, &reference).pass);
    }

    #[test]
    fn empty_schemas_pass_with_zero_score() {
        let outcome = compare(&Schema::default(), &Schema::default());
        assert!(outcome.pass);
        assert_eq!(outcome.score, 0.0);
    }

    #[test]
    fn mismatches_serialize_as_messages() {
        let outcome = compare(&products("1"), &products("2"));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json["mismatches"],
            serde_json::json!(["Body mismatch for get /api/products 200"])
        );
        assert_eq!(json["pass"], false);
    }
}
