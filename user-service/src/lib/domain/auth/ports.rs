use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Admission;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::Session;

/// Port for credential verification and account registration.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a token.
    ///
    /// Only reads from the credential store.
    ///
    /// # Errors
    /// * `BadCredentials` - No account with this email, or wrong password
    /// * `Internal` - Store or token failure
    async fn login(&self, command: LoginCommand) -> Result<Session, AuthError>;

    /// Create an account and issue a token for it.
    ///
    /// # Errors
    /// * `DuplicateKey` - Email already registered
    /// * `RoleMissing` - Requested or default role does not exist
    /// * `Internal` - Store, hashing or token failure
    async fn register(&self, command: RegisterCommand) -> Result<Session, AuthError>;
}

/// Port for the per-request authentication decision.
#[async_trait]
pub trait RequestGatePort: Send + Sync + 'static {
    /// Decide whether a request for `path` carrying the raw `authorization`
    /// header value may proceed, and as whom.
    ///
    /// # Errors
    /// * `MissingToken` - No header on a protected route
    /// * `InvalidAuthorizationHeader` - Header is not `Bearer <token>`
    /// * `InvalidToken` - Token is malformed, forged or expired
    /// * `PrincipalNotFound` - Token subject no longer exists
    /// * `Internal` - Store failure
    async fn admit(&self, path: &str, authorization: Option<&str>)
        -> Result<Admission, AuthError>;
}
