//! Middleware that answers on the server's behalf: the request deadline and
//! panic recovery. Both respond through [`Reply`], so these responses carry
//! the same envelope as handler responses.

use std::any::Any;
use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::reply::Reply;
use crate::state::AppState;

/// Fail the request with a 408 envelope once `request_timeout_secs` elapses.
///
/// Handlers, the emitter and the binder never observe the deadline.
pub async fn enforce_deadline(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let reply = Reply::from_headers(req.headers());
    let deadline = Duration::from_secs(state.config.request_timeout_secs);

    match tokio::time::timeout(deadline, next.run(req)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(?deadline, "Request exceeded deadline");
            reply.request_timeout()
        }
    }
}

/// Response for a panicking handler, used with `CatchPanicLayer::custom`.
///
/// The request headers are gone by the time a panic is caught, so the
/// envelope carries no CSRF token. The panic payload is logged, never sent.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    Reply::default().internal("internal server error")
}
