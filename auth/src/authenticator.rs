use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::principal::Principal;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and token handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Identifying key the token was issued for
    pub subject: String,

    /// Role name of the authenticated principal
    pub role: String,

    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    /// * `token_ttl` - Lifetime of issued tokens
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(token_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(token_secret, token_ttl),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify a principal's password and issue a token for it.
    ///
    /// # Arguments
    /// * `principal` - Stored account record
    /// * `password` - Plaintext password to verify
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Token` - Token generation failed
    pub fn authenticate<P>(
        &self,
        principal: &P,
        password: &str,
    ) -> Result<AuthenticationResult, AuthenticationError>
    where
        P: Principal + ?Sized,
    {
        if !self.verify_password(password, principal.password_hash()) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(principal)?)
    }

    /// Issue a token without password verification.
    ///
    /// Used right after registration, when the credential has just been set.
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn issue_token<P>(&self, principal: &P) -> Result<AuthenticationResult, TokenError>
    where
        P: Principal + ?Sized,
    {
        let access_token = self.token_codec.mint(principal.key())?;

        Ok(AuthenticationResult {
            subject: principal.key().to_string(),
            role: principal.role().to_string(),
            access_token,
        })
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - Token is malformed, forged or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_codec.parse_and_verify(token)
    }

    /// Underlying token codec.
    pub fn token_codec(&self) -> &TokenCodec {
        &self.token_codec
    }
}
