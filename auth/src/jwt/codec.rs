use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signed, time-bounded access token codec.
///
/// The only holder of the signing secret. Tokens are compact JWS strings
/// (base64url header, claims and signature) signed with HS256. Nothing is
/// stored server-side: every verification recomputes the signature and checks
/// the expiration against the current time.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a new token codec with a secret key and token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl` - Lifetime given to tokens minted with [`TokenCodec::mint`]
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a token for `subject` valid from `issued_at` for `ttl`.
    ///
    /// # Errors
    /// * `NonPositiveTtl` - `ttl` is zero or negative
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: &str,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        if ttl.num_seconds() <= 0 {
            return Err(TokenError::NonPositiveTtl);
        }

        let claims = Claims::new(subject, issued_at, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Issue a token for `subject` starting now, with the configured lifetime.
    pub fn mint(&self, subject: &str) -> Result<String, TokenError> {
        self.issue(subject, Utc::now(), self.ttl)
    }

    /// Verify a token against the current time and return its claims.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match header and claims
    /// * `Malformed` - Token structure, header or claims cannot be decoded
    /// * `Expired` - Current time is at or past the expiration claim
    pub fn parse_and_verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.parse_and_verify_at(token, Utc::now())
    }

    /// Verify a token as of `now` and return its claims.
    ///
    /// The signature is checked before the claims are trusted, so a tampered
    /// token never reports `Expired`.
    pub fn parse_and_verify_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiration is checked below with a strict boundary and no leeway
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)?.claims;

        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Verify a token and return its subject.
    pub fn subject_of(&self, token: &str) -> Result<String, TokenError> {
        self.parse_and_verify(token).map(|claims| claims.sub)
    }
}
