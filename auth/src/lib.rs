//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the user service:
//! - Password hashing (Argon2id)
//! - Signed, time-bounded access tokens (HS256 JWT)
//! - Authentication coordination over any [`Principal`]
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(10));
//! let token = codec.mint("alice@example.com").unwrap();
//! assert_eq!(codec.subject_of(&token).unwrap(), "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod principal;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use principal::Principal;
