use std::fmt::Display;

use crate::validation;

/// Terminal failures of a request. Each one becomes exactly one envelope and
/// ends the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The body is not valid structured data.
    #[error("{0}")]
    Decode(String),

    /// The body decoded but violates declared constraints.
    #[error("{0}")]
    Validation(String),

    /// A business-logic failure surfaced by the handler.
    #[error("{0}")]
    Handler(String),

    /// A named downstream service is unavailable.
    #[error("{service} unavailable: {error}")]
    Dependency { service: String, error: String },
}

impl CoreError {
    pub fn decode(err: impl Display) -> Self {
        CoreError::Decode(err.to_string())
    }

    pub fn handler(err: impl Display) -> Self {
        CoreError::Handler(err.to_string())
    }

    pub fn dependency(service: impl Into<String>, err: impl Display) -> Self {
        CoreError::Dependency {
            service: service.into(),
            error: err.to_string(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> u16 {
        match self {
            CoreError::Decode(_) | CoreError::Validation(_) => 400,
            CoreError::Handler(_) => 500,
            CoreError::Dependency { .. } => 503,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::decode(err)
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(validation::describe(&errors))
    }
}
