//! # Auth Errors
//!
//! Error types for the identity module.

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Identity errors
///
/// None of these reach the client directly: an unauthenticated caller is
/// redirected to the login flow instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No token on the request
    #[error("Authentication required")]
    AuthenticationRequired,

    /// JWT token is malformed
    #[error("Malformed token")]
    MalformedToken,

    /// JWT token has expired
    #[error("Token expired")]
    TokenExpired,

    /// JWT signature is invalid
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token generation failed
    #[error("Internal error: token generation failed")]
    TokenGenerationFailed,
}

impl AuthError {
    /// Whether the caller sent something bad, as opposed to a failure on
    /// our side. Picks the log level when the caller is sent to login.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AuthError::TokenGenerationFailed)
    }
}
