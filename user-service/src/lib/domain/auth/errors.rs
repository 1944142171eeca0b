use auth::TokenError;
use thiserror::Error;

/// Authentication and request-gating errors.
///
/// Every variant except `Internal` is a terminal authentication outcome for
/// the current request. `Internal` means the service itself failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown key or wrong password; the two cases are indistinguishable.
    #[error("Invalid credentials")]
    BadCredentials,

    #[error("Email already registered: {0}")]
    DuplicateKey(String),

    #[error("Role does not exist: {0}")]
    RoleMissing(String),

    #[error("Missing Authorization header")]
    MissingToken,

    #[error("Invalid Authorization header format. Expected: Bearer <token>")]
    InvalidAuthorizationHeader,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    /// The token is valid but its subject no longer exists.
    #[error("Principal not found: {0}")]
    PrincipalNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
