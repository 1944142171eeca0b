use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Login attempt as received, without format validation.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Registration request with validated credentials.
///
/// Carries no role: self-registered accounts always get the configured default.
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: Password,
}

/// Outcome of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub role: String,
    pub token: String,
}

impl From<auth::AuthenticationResult> for Session {
    fn from(result: auth::AuthenticationResult) -> Self {
        Self {
            email: result.subject,
            role: result.role,
            token: result.access_token,
        }
    }
}

/// Identity attached to a request that passed the gate.
///
/// Lives for one request only; downstream handlers read it from the request
/// extensions and never look at the token themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    pub user_id: UserId,
    pub email: String,
    pub role: String,
}

impl From<&User> for AuthenticatedPrincipal {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.as_str().to_string(),
            role: user.role.name.as_str().to_string(),
        }
    }
}

/// Gate decision for a request that may proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Allowlisted route; no identity attached.
    Public,
    /// Valid bearer token for an existing principal.
    Authenticated(AuthenticatedPrincipal),
}

/// Allowlist of routes reachable without a token.
///
/// Patterns are exact paths (`/health`) or prefixes ending in `/**`
/// (`/auth/**` matches `/auth`, `/auth/login`, `/auth/a/b`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicRoutes {
    patterns: Vec<RoutePattern>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RoutePattern {
    Exact(String),
    Prefix(String),
}

impl PublicRoutes {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                match pattern.strip_suffix("/**") {
                    Some(prefix) => RoutePattern::Prefix(prefix.to_string()),
                    None => RoutePattern::Exact(pattern.to_string()),
                }
            })
            .collect();

        Self { patterns }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| match pattern {
            RoutePattern::Exact(exact) => path == exact,
            RoutePattern::Prefix(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_pattern() {
        let routes = PublicRoutes::new(["/auth/**"]);

        assert!(routes.matches("/auth"));
        assert!(routes.matches("/auth/login"));
        assert!(routes.matches("/auth/register"));
        assert!(routes.matches("/auth/a/b"));
        assert!(!routes.matches("/authx"));
        assert!(!routes.matches("/users"));
        assert!(!routes.matches("/"));
    }

    #[test]
    fn test_exact_pattern() {
        let routes = PublicRoutes::new(["/health"]);

        assert!(routes.matches("/health"));
        assert!(!routes.matches("/health/live"));
        assert!(!routes.matches("/healthz"));
    }

    #[test]
    fn test_empty_allowlist_matches_nothing() {
        let routes = PublicRoutes::default();

        assert!(!routes.matches("/auth/login"));
    }
}
