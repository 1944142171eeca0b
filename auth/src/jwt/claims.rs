use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims carried by an access token.
///
/// Timestamps are RFC 7519 NumericDate values (seconds since the Unix epoch).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the principal's identifying key)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// JWT ID, unique per issued token
    pub jti: String,
}

impl Claims {
    /// Create claims for a subject, expiring `ttl` after `issued_at`.
    ///
    /// `issued_at` is truncated to whole seconds before the expiration is
    /// derived from it.
    ///
    /// # Arguments
    /// * `subject` - Identifying key of the principal
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with sub, iat, exp and a fresh jti set
    pub fn new(subject: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();

        Self {
            sub: subject.to_string(),
            iat,
            exp: iat + ttl.num_seconds(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Get subject.
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Expiration instant.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check if token is expired.
    ///
    /// A token is no longer usable from the expiration second onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
