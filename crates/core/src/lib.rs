//! Shared primitives for all Rust crates in PermitDesk.

#![forbid(unsafe_code)]

/// Authentication primitives shared across services.
pub mod auth;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::AuthToken;

/// Result type used across PermitDesk crates.
pub type AppResult<T> = Result<T, AppError>;

/// Status code the backend uses for an invalidated session.
pub const HTTP_UNAUTHORIZED: u16 = 401;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(field: &str, value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "{field} must not be empty or whitespace"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common client error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input, arguments or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A local operation needs a stored session and none exists.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The backend answered with a non-2xx status.
    ///
    /// Displays the server-supplied message verbatim.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message extracted from the error envelope.
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body diverges from the declared contract.
    #[error("decode error: {0}")]
    Decode(String),

    /// Credential persistence failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status for API errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns whether the backend rejected the session token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(HTTP_UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, NonEmptyString};

    #[test]
    fn non_empty_string_rejects_whitespace() {
        let result = NonEmptyString::new("username", "   ");
        assert!(matches!(result, Err(AppError::Validation(message)) if message.starts_with("username")));
    }

    #[test]
    fn api_error_displays_server_message_verbatim() {
        let error = AppError::Api {
            status: 400,
            message: "invalid code".to_owned(),
        };

        assert_eq!(error.to_string(), "invalid code");
        assert_eq!(error.status(), Some(400));
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn only_api_401_counts_as_unauthorized() {
        let api = AppError::Api {
            status: 401,
            message: "token expired".to_owned(),
        };
        let local = AppError::Unauthorized("no session".to_owned());

        assert!(api.is_unauthorized());
        assert!(!local.is_unauthorized());
    }
}
