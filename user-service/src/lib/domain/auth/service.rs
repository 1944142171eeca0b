use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::Session;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::role::ports::RoleRepository;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Login and registration over the credential store.
pub struct AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RoleRepository,
{
    users: Arc<UR>,
    roles: Arc<RR>,
    authenticator: Arc<Authenticator>,
    default_role: String,
}

impl<UR, RR> AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RoleRepository,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `users` - Credential store
    /// * `roles` - Role lookup for registration
    /// * `authenticator` - Password hasher and token codec
    /// * `default_role` - Role name assigned to every self-registered account
    pub fn new(
        users: Arc<UR>,
        roles: Arc<RR>,
        authenticator: Arc<Authenticator>,
        default_role: impl Into<String>,
    ) -> Self {
        Self {
            users,
            roles,
            authenticator,
            default_role: default_role.into(),
        }
    }
}

#[async_trait]
impl<UR, RR> AuthServicePort for AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RoleRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<Session, AuthError> {
        let user = self
            .users
            .find_by_email(&command.email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let Some(user) = user else {
            tracing::warn!(email = %command.email, "Login rejected");
            return Err(AuthError::BadCredentials);
        };

        let result = self
            .authenticator
            .authenticate(&user, &command.password)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(email = %command.email, "Login rejected");
                    AuthError::BadCredentials
                }
                AuthenticationError::Token(err) => AuthError::Internal(err.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Login succeeded");

        Ok(result.into())
    }

    async fn register(&self, command: RegisterCommand) -> Result<Session, AuthError> {
        let email = command.email;

        if self
            .users
            .find_by_email(email.as_str())
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .is_some()
        {
            return Err(AuthError::DuplicateKey(email.to_string()));
        }

        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Self-registration always lands on the default role.
        let role_name = &self.default_role;
        let role = self
            .roles
            .find_by_name(role_name)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or_else(|| {
                tracing::error!(role = %role_name, "Registration role is not provisioned");
                AuthError::RoleMissing(role_name.clone())
            })?;

        let user = User {
            id: UserId::new(),
            email,
            password_hash,
            role,
        };

        let user = self.users.create(user).await.map_err(|e| match e {
            UserError::EmailAlreadyExists(email) => AuthError::DuplicateKey(email),
            other => AuthError::Internal(other.to_string()),
        })?;

        tracing::info!(user_id = %user.id, role = %user.role.name, "User registered");

        self.authenticator
            .issue_token(&user)
            .map(Session::from)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}
