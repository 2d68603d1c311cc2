#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use parcel_api::config::ServerConfig;
use parcel_api::router::build_app_router;
use parcel_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a deliberately small body limit so oversized bodies are cheap to build.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 10,
        max_body_bytes: 1024,
    }
}

pub fn test_state() -> AppState {
    AppState::new(test_config())
}

/// Test state with a custom binder body limit.
pub fn test_state_with_limit(max_body_bytes: usize) -> AppState {
    AppState::new(ServerConfig {
        max_body_bytes,
        ..test_config()
    })
}

/// Build the full application router exactly as `main.rs` does.
pub fn build_test_app() -> Router {
    build_app_router(test_state())
}

/// Build a request, optionally with a JSON body and an `X-CSRF-Token` header.
pub fn request(method: Method, uri: &str, body: Option<&str>, csrf: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = csrf {
        builder = builder.header("X-CSRF-Token", token);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
