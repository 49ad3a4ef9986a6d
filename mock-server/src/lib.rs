//! Replay server for consumer mock schemas.
//!
//! Every response in every mock schema becomes a stub keyed by
//! `(path, method)`. Requests that hit a stub get its status, headers and
//! body back; anything else is a 404. Stubs can be listed and added at
//! runtime under `/__admin/stubs`, which lets a recorder capture live
//! exchanges as documents and validate them against provider tests.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use contract_core::{translate, Catalog, Headers, HttpDocument, ResponseDetail, Schema};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stub {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
}

/// What the admin endpoints report for each registered stub.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubSummary {
    pub path: String,
    pub method: String,
    pub status: u16,
}

pub type Stubs = Arc<RwLock<BTreeMap<(String, String), Stub>>>;

pub fn app(mocks: &Catalog) -> Router {
    let mut table = BTreeMap::new();
    for schema in mocks.values() {
        register(&mut table, schema);
    }
    tracing::info!(stubs = table.len(), "loaded mock stubs");

    let stubs: Stubs = Arc::new(RwLock::new(table));
    Router::new()
        .route("/__admin/stubs", get(list_stubs).post(create_stub))
        .fallback(replay)
        .with_state(stubs)
}

pub async fn run(listener: TcpListener, mocks: &Catalog) -> Result<(), std::io::Error> {
    axum::serve(listener, app(mocks)).await
}

/// Insert one stub per `(path, method)` of `schema`, returning what was added.
///
/// When an operation lists several status codes, the numerically lowest
/// valid one wins. Codes that are not an HTTP status are skipped.
fn register(table: &mut BTreeMap<(String, String), Stub>, schema: &Schema) -> Vec<StubSummary> {
    let mut chosen: BTreeMap<(String, String), (u16, &ResponseDetail)> = BTreeMap::new();
    for (path, method, code, detail) in schema.responses() {
        let Some(status) = code
            .parse::<u16>()
            .ok()
            .filter(|s| StatusCode::from_u16(*s).is_ok())
        else {
            tracing::warn!(%path, %method, %code, "not an HTTP status code, skipping");
            continue;
        };
        let key = (path.to_string(), method.to_ascii_lowercase());
        match chosen.get(&key) {
            Some((current, _)) if *current <= status => {}
            _ => {
                chosen.insert(key, (status, detail));
            }
        }
    }

    let mut added = Vec::with_capacity(chosen.len());
    for ((path, method), (status, detail)) in chosen {
        table.insert(
            (path.clone(), method.clone()),
            Stub {
                status,
                headers: detail.headers.clone(),
                body: detail.body.clone(),
            },
        );
        added.push(StubSummary {
            path,
            method,
            status,
        });
    }
    added
}

async fn list_stubs(State(stubs): State<Stubs>) -> Json<Vec<StubSummary>> {
    let stubs = stubs.read().await;
    Json(
        stubs
            .iter()
            .map(|((path, method), stub)| StubSummary {
                path: path.clone(),
                method: method.clone(),
                status: stub.status,
            })
            .collect(),
    )
}

async fn create_stub(
    State(stubs): State<Stubs>,
    Json(doc): Json<HttpDocument>,
) -> (StatusCode, Json<Vec<StubSummary>>) {
    let schema = translate(&doc);
    let added = register(&mut *stubs.write().await, &schema);
    tracing::info!(name = %doc.name, added = added.len(), "registered stub");
    (StatusCode::CREATED, Json(added))
}

async fn replay(State(stubs): State<Stubs>, method: Method, uri: Uri) -> Response {
    let key = (uri.path().to_string(), method.as_str().to_ascii_lowercase());
    let stubs = stubs.read().await;

    let Some(stub) = stubs.get(&key) else {
        tracing::debug!(method = %method, path = %uri.path(), "no stub");
        let error = serde_json::json!({ "error": format!("no stub for {method} {}", uri.path()) });
        return (StatusCode::NOT_FOUND, Json(error)).into_response();
    };

    let mut response = Response::new(Body::from(stub.body.clone()));
    // `register` only admits codes `StatusCode` accepts.
    *response.status_mut() =
        StatusCode::from_u16(stub.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    for (name, value) in &stub.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().insert(name, value);
            }
            _ => tracing::warn!(header = %name, "skipping invalid stub header"),
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_core::fixtures::sample_mocks;
    use contract_core::translate_all;

    #[test]
    fn register_lower_cases_methods() {
        let mut doc = sample_mocks()["mock-get-products"].clone();
        doc.request.method = "GET".to_string();

        let mut table = BTreeMap::new();
        let added = register(&mut table, &translate(&doc));
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].method, "get");
        assert!(table.contains_key(&("/api/products".to_string(), "get".to_string())));
    }

    #[test]
    fn register_skips_unparseable_status() {
        let mut schema = translate(&sample_mocks()["mock-get-cart-extra"]);
        let op = schema
            .paths
            .get_mut("/api/cart")
            .unwrap()
            .operations
            .get_mut("get")
            .unwrap();
        let detail = op.responses.remove("200").unwrap();
        op.responses.insert("2xx".to_string(), detail);

        let mut table = BTreeMap::new();
        assert!(register(&mut table, &schema).is_empty());
        assert!(table.is_empty());
    }

    fn schema_with_codes(codes: &[&str]) -> Schema {
        let mut schema = translate(&sample_mocks()["mock-get-cart-extra"]);
        let op = schema
            .paths
            .get_mut("/api/cart")
            .unwrap()
            .operations
            .get_mut("get")
            .unwrap();
        let detail = op.responses.remove("200").unwrap();
        for code in codes {
            let mut d = detail.clone();
            d.body = format!("body {code}");
            op.responses.insert(code.to_string(), d);
        }
        schema
    }

    #[test]
    fn register_picks_numerically_lowest_status() {
        let mut table = BTreeMap::new();
        let added = register(&mut table, &schema_with_codes(&["404", "200", "1000"]));
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].status, 200);
        let stub = &table[&("/api/cart".to_string(), "get".to_string())];
        assert_eq!(stub.body, "body 200");
    }

    #[test]
    fn register_skips_out_of_range_status() {
        let mut table = BTreeMap::new();
        assert!(register(&mut table, &schema_with_codes(&["1000", "42"])).is_empty());
        assert!(table.is_empty());

        let added = register(&mut table, &schema_with_codes(&["1000", "503"]));
        assert_eq!(added[0].status, 503);
    }

    #[test]
    fn fixtures_register_one_stub_each() {
        let mut table = BTreeMap::new();
        for schema in translate_all(&sample_mocks()).values() {
            register(&mut table, schema);
        }
        assert_eq!(table.len(), 3);
        assert_eq!(
            table[&("/api/orders".to_string(), "post".to_string())].status,
            200
        );
    }

    #[test]
    fn stub_summary_roundtrips_through_json() {
        let summary = StubSummary {
            path: "/api/cart".to_string(),
            method: "get".to_string(),
            status: 200,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: StubSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
