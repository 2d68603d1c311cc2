use axum::response::Response;
use axum::{routing::post, Router};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::binder::Validated;
use crate::reply::Reply;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EchoRequest {
    #[validate(length(min = 1, max = 256))]
    pub message: String,
    #[validate(email)]
    pub reply_to: Option<String>,
}

/// POST /api/v1/echo -- returns the bound body with 201.
async fn echo(reply: Reply, Validated(body): Validated<EchoRequest>) -> Response {
    tracing::info!(len = body.message.len(), "Echoing request body");
    reply.created(body)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/echo", post(echo))
}
