//! Semantic outcomes of a request and the HTTP status each one maps to.

use crate::error::CoreError;

/// Fixed message of [`Outcome::Forbidden`].
pub const FORBIDDEN_MESSAGE: &str = "forbidden access";

/// Fixed message of [`Outcome::MethodNotAllowed`].
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "method not allowed";

/// Fixed message of [`Outcome::RequestTimeout`].
pub const REQUEST_TIMEOUT_MESSAGE: &str = "request timed out";

/// What a handler wants to tell the client.
///
/// | Variant                | Status | Message             | Data     |
/// |------------------------|--------|---------------------|----------|
/// | `Success`              | 200    | none                | payload  |
/// | `Created`              | 201    | none                | payload  |
/// | `Accepted`             | 202    | none                | payload  |
/// | `NoContent`            | 204    | caller text         | none     |
/// | `Redirect`             | 307    | caller text         | optional |
/// | `BadRequest`           | 400    | error detail        | none     |
/// | `Unauthorized`         | 401    | caller text         | none     |
/// | `Forbidden`            | 403    | `"forbidden access"`| none     |
/// | `NotFound`             | 404    | caller text         | none     |
/// | `MethodNotAllowed`     | 405    | `"method not allowed"` | none  |
/// | `RequestTimeout`       | 408    | `"request timed out"` | none   |
/// | `ExpectationFailed`    | 417    | caller text         | none     |
/// | `Locked`               | 423    | caller text         | none     |
/// | `PreconditionRequired` | 428    | caller text         | none     |
/// | `Internal`             | 500    | error detail        | none     |
/// | `ServiceUnavailable`   | 503    | `"{dependency} unavailable: {error}"` | none |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Created(T),
    Accepted(T),
    NoContent(String),
    Redirect { message: String, data: Option<T> },
    BadRequest(String),
    Unauthorized(String),
    Forbidden,
    NotFound(String),
    MethodNotAllowed,
    RequestTimeout,
    ExpectationFailed(String),
    Locked(String),
    PreconditionRequired(String),
    Internal(String),
    ServiceUnavailable { dependency: String, error: String },
}

impl<T> Outcome<T> {
    /// HTTP status code of this outcome.
    pub fn status(&self) -> u16 {
        match self {
            Outcome::Success(_) => 200,
            Outcome::Created(_) => 201,
            Outcome::Accepted(_) => 202,
            Outcome::NoContent(_) => 204,
            Outcome::Redirect { .. } => 307,
            Outcome::BadRequest(_) => 400,
            Outcome::Unauthorized(_) => 401,
            Outcome::Forbidden => 403,
            Outcome::NotFound(_) => 404,
            Outcome::MethodNotAllowed => 405,
            Outcome::RequestTimeout => 408,
            Outcome::ExpectationFailed(_) => 417,
            Outcome::Locked(_) => 423,
            Outcome::PreconditionRequired(_) => 428,
            Outcome::Internal(_) => 500,
            Outcome::ServiceUnavailable { .. } => 503,
        }
    }

    /// Split into `(status, message, data)`. The message is returned as
    /// given; lower-casing happens when the envelope is built.
    pub fn into_parts(self) -> (u16, String, Option<T>) {
        let status = self.status();
        match self {
            Outcome::Success(data) | Outcome::Created(data) | Outcome::Accepted(data) => {
                (status, String::new(), Some(data))
            }
            Outcome::Redirect { message, data } => (status, message, data),
            Outcome::Forbidden => (status, FORBIDDEN_MESSAGE.to_string(), None),
            Outcome::MethodNotAllowed => (status, METHOD_NOT_ALLOWED_MESSAGE.to_string(), None),
            Outcome::RequestTimeout => (status, REQUEST_TIMEOUT_MESSAGE.to_string(), None),
            Outcome::ServiceUnavailable { dependency, error } => {
                (status, format!("{dependency} unavailable: {error}"), None)
            }
            Outcome::NoContent(message)
            | Outcome::BadRequest(message)
            | Outcome::Unauthorized(message)
            | Outcome::NotFound(message)
            | Outcome::ExpectationFailed(message)
            | Outcome::Locked(message)
            | Outcome::PreconditionRequired(message)
            | Outcome::Internal(message) => (status, message, None),
        }
    }
}

impl<T> From<CoreError> for Outcome<T> {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Decode(detail) | CoreError::Validation(detail) => {
                Outcome::BadRequest(detail)
            }
            CoreError::Handler(detail) => Outcome::Internal(detail),
            CoreError::Dependency { service, error } => Outcome::ServiceUnavailable {
                dependency: service,
                error,
            },
        }
    }
}
