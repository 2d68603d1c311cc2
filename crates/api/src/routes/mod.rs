pub mod echo;
pub mod health;

use axum::response::Response;
use axum::Router;

use crate::reply::Reply;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST /echo      bind a validated body and return it
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(echo::router())
}

/// Unmatched paths still answer with an envelope.
pub async fn fallback(reply: Reply) -> Response {
    reply.not_found("Route Not Found")
}

/// Known path, unsupported method.
pub async fn method_not_allowed(reply: Reply) -> Response {
    reply.method_not_allowed()
}
