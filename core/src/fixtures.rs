//! Built-in sample documents for the e-commerce service.
//!
//! Provider tests describe what the service actually returns; consumer mocks
//! describe what its clients expect. Two mocks drift on purpose: the order
//! mock expects `200` instead of `201` with a trimmed body, and the cart mock
//! carries an extra `price` field.

use std::collections::BTreeMap;

use crate::http::{headers, Headers, HttpRequest, HttpResponse};
use crate::types::HttpDocument;

const PRODUCTS_BODY: &str = r#"{"products": [{"id": 1, "name": "Laptop", "price": 999.99}]}"#;
const ORDER_REQUEST_BODY: &str = r#"{"product_id": 1, "quantity": 2}"#;

fn json_headers() -> Headers {
    headers([("Content-Type", "application/json")])
}

fn document(name: &str, method: &str, url: &str, request_body: &str, status: u16, body: &str) -> HttpDocument {
    HttpDocument::new(
        name,
        HttpRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: json_headers(),
            body: request_body.to_string(),
        },
        HttpResponse {
            status_code: status,
            headers: json_headers(),
            body: body.to_string(),
        },
    )
}

/// Provider-side documents keyed by identifier.
pub fn sample_tests() -> BTreeMap<String, HttpDocument> {
    BTreeMap::from([
        (
            "test-get-products".to_string(),
            document("Get Products", "get", "/api/products", "", 200, PRODUCTS_BODY),
        ),
        (
            "test-post-order".to_string(),
            document(
                "Create Order",
                "post",
                "/api/orders",
                ORDER_REQUEST_BODY,
                201,
                r#"{"order_id": 100, "product_id": 1, "quantity": 2, "total": 1999.98}"#,
            ),
        ),
        (
            "test-get-cart".to_string(),
            document(
                "Get Cart",
                "get",
                "/api/cart",
                "",
                200,
                r#"{"cart": [{"product_id": 1, "quantity": 1}]}"#,
            ),
        ),
    ])
}

/// Consumer-side documents keyed by identifier.
pub fn sample_mocks() -> BTreeMap<String, HttpDocument> {
    BTreeMap::from([
        (
            "mock-get-products".to_string(),
            document("Mock Get Products", "get", "/api/products", "", 200, PRODUCTS_BODY),
        ),
        (
            "mock-post-order-mismatch".to_string(),
            document(
                "Mock Create Order (Mismatch)",
                "post",
                "/api/orders",
                ORDER_REQUEST_BODY,
                200,
                r#"{"order_id": 100, "total": 1999.98}"#,
            ),
        ),
        (
            "mock-get-cart-extra".to_string(),
            document(
                "Mock Get Cart (Extra Data)",
                "get",
                "/api/cart",
                "",
                200,
                r#"{"cart": [{"product_id": 1, "quantity": 1, "price": 999.99}]}"#,
            ),
        ),
    ])
}
