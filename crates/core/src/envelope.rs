//! The uniform JSON envelope wrapped around every response body.
//!
//! Wire shape:
//!
//! ```json
//! { "statusCode": 404, "message": "user not found", "data": null, "csrf": "abc123" }
//! ```
//!
//! `message` is omitted when empty and `csrf` when absent. `data` is always
//! present and is `null` for outcomes that carry no payload.

use serde::Serialize;

use crate::outcome::Outcome;

/// A single response envelope. Built and serialized within one handler
/// invocation, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    /// HTTP status of the response this envelope is sent with.
    #[serde(rename = "statusCode")]
    pub status: u16,
    /// Lower-cased human-readable description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    pub data: Option<T>,
    /// Token echoed from the inbound `X-CSRF-Token` header.
    #[serde(rename = "csrf", skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

impl<T> Envelope<T> {
    /// Build an envelope, lower-casing `message`.
    ///
    /// ```
    /// use parcel_core::envelope::Envelope;
    ///
    /// let envelope = Envelope::<()>::new(404, "User Not Found", None);
    /// assert_eq!(envelope.message, "user not found");
    /// ```
    pub fn new(status: u16, message: impl AsRef<str>, data: Option<T>) -> Self {
        Self {
            status,
            message: message.as_ref().to_lowercase(),
            data,
            csrf_token: None,
        }
    }

    /// Attach the CSRF token read from the inbound request, if any.
    pub fn with_csrf(mut self, csrf_token: Option<String>) -> Self {
        self.csrf_token = csrf_token;
        self
    }
}

impl<T> From<Outcome<T>> for Envelope<T> {
    fn from(outcome: Outcome<T>) -> Self {
        let (status, message, data) = outcome.into_parts();
        Self::new(status, message, data)
    }
}
