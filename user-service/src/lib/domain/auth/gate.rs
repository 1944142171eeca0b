use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Admission;
use crate::domain::auth::models::AuthenticatedPrincipal;
use crate::domain::auth::models::PublicRoutes;
use crate::domain::auth::ports::RequestGatePort;
use crate::user::ports::UserRepository;

const BEARER_PREFIX: &str = "Bearer ";

/// Single chokepoint where token validity is judged.
///
/// Holds no per-session state: every call re-verifies the token signature and
/// expiration, then re-resolves the subject in the credential store.
pub struct RequestGate<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
    authenticator: Arc<Authenticator>,
    public_routes: PublicRoutes,
}

impl<UR> RequestGate<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>, authenticator: Arc<Authenticator>, public_routes: PublicRoutes) -> Self {
        Self {
            users,
            authenticator,
            public_routes,
        }
    }
}

#[async_trait]
impl<UR> RequestGatePort for RequestGate<UR>
where
    UR: UserRepository,
{
    async fn admit(
        &self,
        path: &str,
        authorization: Option<&str>,
    ) -> Result<Admission, AuthError> {
        if self.public_routes.matches(path) {
            return Ok(Admission::Public);
        }

        let token = bearer_token(authorization.ok_or(AuthError::MissingToken)?)?;

        let claims = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!(path = %path, error = %e, "Token rejected");
            AuthError::from(e)
        })?;

        let user = self
            .users
            .find_by_email(claims.subject())
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or_else(|| {
                tracing::warn!(subject = %claims.sub, "Token subject no longer exists");
                AuthError::PrincipalNotFound(claims.sub.clone())
            })?;

        tracing::debug!(
            subject = %claims.sub,
            expires_at = ?claims.expires_at(),
            "Token accepted"
        );

        Ok(Admission::Authenticated(AuthenticatedPrincipal::from(&user)))
    }
}

fn bearer_token(header: &str) -> Result<&str, AuthError> {
    header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::InvalidAuthorizationHeader)
}
