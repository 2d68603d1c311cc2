//! Integration tests for the full router: health check, echo binding,
//! fallback envelope and the middleware stack.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get, request, send};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 inside the standard envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_envelope() {
    let response = get(build_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["statusCode"], 200);
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["version"].is_string());
    assert!(json.get("message").is_none());
}

// ---------------------------------------------------------------------------
// Test: unknown routes still answer with a 404 envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404_envelope() {
    let response = send(
        build_test_app(),
        request(Method::GET, "/this-route-does-not-exist", None, Some("abc123")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["statusCode"], 404);
    assert_eq!(json["message"], "route not found");
    assert_eq!(json["csrf"], "abc123");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(build_test_app(), "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight allows clients to send X-CSRF-Token
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_csrf_header() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/echo")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type,x-csrf-token")
        .body(Body::empty())
        .unwrap();

    let response = build_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("missing access-control-allow-origin")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_headers = response
        .headers()
        .get("access-control-allow-headers")
        .expect("missing access-control-allow-headers")
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allow_headers.contains("x-csrf-token"), "{allow_headers}");
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/echo binds, validates and replies 201
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_returns_created_with_bound_body() {
    let response = send(
        build_test_app(),
        request(
            Method::POST,
            "/api/v1/echo",
            Some(r#"{"message": "Hello", "replyTo": "ada@example.com"}"#),
            Some("abc123"),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["statusCode"], 201);
    assert_eq!(json["data"]["message"], "Hello");
    assert_eq!(json["data"]["replyTo"], "ada@example.com");
    assert_eq!(json["csrf"], "abc123");
}

#[tokio::test]
async fn echo_rejects_empty_message() {
    let response = send(
        build_test_app(),
        request(Method::POST, "/api/v1/echo", Some(r#"{"message": ""}"#), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "message: failed length check");
}
