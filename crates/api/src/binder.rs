//! Two-stage request gate: structural decode, then field-level validation.
//!
//! [`Binder`] is constructed once at startup and shared read-only through
//! [`AppState`](crate::state::AppState). Handlers usually go through the
//! [`Validated`] extractor; when either stage fails the extractor rejects
//! with a 400 envelope and the handler never runs.
//!
//! The body is buffered under the binder's own limit, so axum's default
//! `DefaultBodyLimit` does not apply to this extractor.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::{FromRef, FromRequest, Request};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use parcel_core::error::CoreError;
use parcel_core::validation;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::reply::Reply;

/// Default upper bound on a request body (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Decodes JSON bodies and runs the constraints declared on the target type.
#[derive(Debug, Clone)]
pub struct Binder {
    max_body_bytes: usize,
}

impl Binder {
    pub fn new(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.max_body_bytes)
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    /// Buffer a request body, stopping once it exceeds `max_body_bytes`.
    pub async fn read_body(&self, body: Body) -> Result<Bytes, CoreError> {
        match Limited::new(body, self.max_body_bytes).collect().await {
            Ok(collected) => Ok(collected.to_bytes()),
            Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => Err(self.too_large()),
            Err(err) => Err(CoreError::decode(err)),
        }
    }

    /// Stage one: structural decode.
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, CoreError> {
        if body.len() > self.max_body_bytes {
            return Err(self.too_large());
        }
        Ok(serde_json::from_slice(body)?)
    }

    /// Both stages. `Ok` means the handler may continue with the value.
    pub fn bind<T>(&self, body: &[u8]) -> Result<T, CoreError>
    where
        T: DeserializeOwned + Validate,
    {
        let value: T = self.decode(body)?;
        validation::check(&value)?;
        Ok(value)
    }

    fn too_large(&self) -> CoreError {
        CoreError::Decode(format!(
            "request body exceeds {} bytes",
            self.max_body_bytes
        ))
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BODY_BYTES)
    }
}

/// Extractor for a decoded and validated JSON body.
///
/// Must be the last extractor of a handler since it consumes the body.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
    Arc<Binder>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let reply = Reply::from_headers(req.headers());
        let binder = Arc::<Binder>::from_ref(state);

        let body = binder
            .read_body(req.into_body())
            .await
            .map_err(|err| reply.reject(err))?;

        match binder.bind(&body) {
            Ok(value) => Ok(Validated(value)),
            Err(err) => {
                tracing::debug!(error = %err, "Rejected request body");
                Err(reply.reject(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Login {
        #[validate(length(min = 3))]
        username: String,
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = Binder::default().bind::<Login>(b"{\"username\":").unwrap_err();
        assert_matches!(err, CoreError::Decode(_));
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let err = Binder::default().bind::<Login>(b"{}").unwrap_err();
        assert_matches!(err, CoreError::Decode(ref m) if m.contains("username"));
    }

    #[test]
    fn constraint_violation_is_a_validation_error() {
        let err = Binder::default()
            .bind::<Login>(br#"{"username":"al"}"#)
            .unwrap_err();
        assert_eq!(err, CoreError::Validation("username: failed length check".into()));
    }

    #[test]
    fn oversized_body_is_rejected_before_decoding() {
        let err = Binder::new(8)
            .bind::<Login>(br#"{"username":"alice"}"#)
            .unwrap_err();
        assert_eq!(err, CoreError::Decode("request body exceeds 8 bytes".into()));
    }

    #[tokio::test]
    async fn read_body_stops_at_the_limit() {
        let err = Binder::new(16)
            .read_body(Body::from("x".repeat(64)))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::Decode("request body exceeds 16 bytes".into()));
    }

    #[tokio::test]
    async fn read_body_allows_more_than_two_mebibytes() {
        let payload = "x".repeat(3 * 1024 * 1024);
        let bytes = Binder::new(4 * 1024 * 1024)
            .read_body(Body::from(payload.clone()))
            .await
            .unwrap();
        assert_eq!(bytes.len(), payload.len());
    }

    #[test]
    fn valid_body_binds() {
        let login: Login = Binder::default()
            .bind(br#"{"username":"alice"}"#)
            .unwrap();
        assert_eq!(login.username, "alice");
    }
}
