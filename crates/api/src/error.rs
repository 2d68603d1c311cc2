use axum::response::{IntoResponse, Response};
use parcel_core::error::CoreError;

use crate::reply::Reply;

/// Application-level error type for HTTP handlers.
///
/// Pairs a [`CoreError`] with the [`Reply`] of the request it ended, so the
/// error envelope still echoes that request's CSRF token. Built with
/// [`Reply::reject`]; a bare `CoreError` converts with no token.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct AppError {
    error: CoreError,
    reply: Reply,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(error: CoreError, reply: Reply) -> Self {
        Self { error, reply }
    }

    pub fn core(&self) -> &CoreError {
        &self.error
    }
}

impl From<CoreError> for AppError {
    fn from(error: CoreError) -> Self {
        Self::new(error, Reply::default())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.reply.error(self.error)
    }
}
