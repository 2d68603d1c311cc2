//! The response emitter.
//!
//! [`Reply`] is extracted once per request and captures the inbound
//! `X-CSRF-Token` header. Every operation on it funnels through
//! [`Reply::emit`], so every response body has the same envelope shape:
//!
//! ```ignore
//! async fn get_user(reply: Reply, Path(id): Path<u64>) -> Response {
//!     match lookup(id) {
//!         Some(user) => reply.ok(user),
//!         None => reply.not_found("User Not Found"),
//!     }
//! }
//! ```

use std::convert::Infallible;
use std::fmt::Display;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use parcel_core::envelope::Envelope;
use parcel_core::error::CoreError;
use parcel_core::outcome::Outcome;
use serde::Serialize;

use crate::error::AppError;

/// Inbound header whose value is echoed as the envelope's `csrf` field.
pub const CSRF_HEADER: HeaderName = HeaderName::from_static("x-csrf-token");

/// Per-request response emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    csrf_token: Option<String>,
}

impl Reply {
    pub fn new(csrf_token: Option<String>) -> Self {
        Self { csrf_token }
    }

    /// Build from request headers. The `X-CSRF-Token` value is echoed as
    /// sent; bytes that are not UTF-8 are replaced with U+FFFD. An empty
    /// value is treated as absent.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let csrf_token = headers
            .get(&CSRF_HEADER)
            .filter(|v| !v.is_empty())
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

        Self { csrf_token }
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    /// The only place a response is built. Lower-cases `message`, attaches
    /// the CSRF token and serializes the envelope with `status`.
    pub fn emit<T: Serialize>(
        &self,
        status: StatusCode,
        message: impl AsRef<str>,
        data: Option<T>,
    ) -> Response {
        let envelope = Envelope::new(status.as_u16(), message, data)
            .with_csrf(self.csrf_token.clone());

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), message = %envelope.message, "Emitting error envelope");
        } else {
            tracing::debug!(status = status.as_u16(), message = %envelope.message, "Emitting envelope");
        }

        (status, Json(envelope)).into_response()
    }

    /// Emit an arbitrary [`Outcome`].
    pub fn outcome<T: Serialize>(&self, outcome: Outcome<T>) -> Response {
        let (status, message, data) = outcome.into_parts();
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.emit(status, message, data)
    }

    /// Emit the envelope for a terminal [`CoreError`].
    pub fn error(&self, err: CoreError) -> Response {
        self.outcome(Outcome::<()>::from(err))
    }

    /// Bind `err` to this request so a handler can return it with `?`.
    pub fn reject(&self, err: impl Into<CoreError>) -> AppError {
        AppError::new(err.into(), self.clone())
    }

    // --- 2xx / 3xx ---

    /// 200 with `data`.
    pub fn ok<T: Serialize>(&self, data: T) -> Response {
        self.outcome(Outcome::Success(data))
    }

    /// 201 with `data`.
    pub fn created<T: Serialize>(&self, data: T) -> Response {
        self.outcome(Outcome::Created(data))
    }

    /// 202 with `data`, for work that continues asynchronously.
    pub fn accepted<T: Serialize>(&self, data: T) -> Response {
        self.outcome(Outcome::Accepted(data))
    }

    /// 204 with a message and no payload.
    pub fn no_content(&self, message: impl Into<String>) -> Response {
        self.outcome(Outcome::<()>::NoContent(message.into()))
    }

    /// 307 with a message and an optional payload.
    pub fn redirect<T: Serialize>(&self, message: impl Into<String>, data: Option<T>) -> Response {
        self.outcome(Outcome::Redirect {
            message: message.into(),
            data,
        })
    }

    // --- 4xx ---

    /// 400 carrying the error detail of a malformed input.
    pub fn bad_request(&self, err: impl Display) -> Response {
        self.outcome(Outcome::<()>::BadRequest(err.to_string()))
    }

    /// 400 carrying the error detail of a constraint violation.
    pub fn validation_error(&self, err: impl Display) -> Response {
        self.error(CoreError::Validation(err.to_string()))
    }

    pub fn unauthorized(&self, message: impl Into<String>) -> Response {
        self.outcome(Outcome::<()>::Unauthorized(message.into()))
    }

    /// 403 with the fixed message `forbidden access`.
    pub fn forbidden(&self) -> Response {
        self.outcome(Outcome::<()>::Forbidden)
    }

    pub fn not_found(&self, message: impl Into<String>) -> Response {
        self.outcome(Outcome::<()>::NotFound(message.into()))
    }

    /// 405 with the fixed message `method not allowed`.
    pub fn method_not_allowed(&self) -> Response {
        self.outcome(Outcome::<()>::MethodNotAllowed)
    }

    /// 408 with the fixed message `request timed out`.
    pub fn request_timeout(&self) -> Response {
        self.outcome(Outcome::<()>::RequestTimeout)
    }

    pub fn expectation_failed(&self, message: impl Into<String>) -> Response {
        self.outcome(Outcome::<()>::ExpectationFailed(message.into()))
    }

    pub fn locked(&self, message: impl Into<String>) -> Response {
        self.outcome(Outcome::<()>::Locked(message.into()))
    }

    pub fn precondition_required(&self, message: impl Into<String>) -> Response {
        self.outcome(Outcome::<()>::PreconditionRequired(message.into()))
    }

    // --- 5xx ---

    /// 500 carrying the error detail.
    pub fn internal(&self, err: impl Display) -> Response {
        self.error(CoreError::handler(err))
    }

    /// 503 with `"{dependency} unavailable: {err}"`.
    pub fn service_unavailable(&self, dependency: impl Into<String>, err: impl Display) -> Response {
        self.error(CoreError::dependency(dependency, err))
    }
}

impl<S> FromRequestParts<S> for Reply
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
