use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::role::models::Role;
use crate::role::models::RoleId;
use crate::role::ports::RoleRepository;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR, RR>
where
    UR: UserRepository,
    RR: RoleRepository,
{
    repository: Arc<UR>,
    roles: Arc<RR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR, RR> UserService<UR, RR>
where
    UR: UserRepository,
    RR: RoleRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `roles` - Role lookup used to resolve role references
    pub fn new(repository: Arc<UR>, roles: Arc<RR>) -> Self {
        Self {
            repository,
            roles,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    async fn resolve_role(&self, id: &RoleId) -> Result<Role, UserError> {
        self.roles
            .find_by_id(id)
            .await?
            .ok_or(UserError::RoleNotFound(id.to_string()))
    }

    fn hash(&self, password: &Password) -> Result<String, UserError> {
        self.password_hasher
            .hash(password.expose())
            .map_err(|e| UserError::PasswordHashing(e.to_string()))
    }
}

#[async_trait]
impl<UR, RR> UserServicePort for UserService<UR, RR>
where
    UR: UserRepository,
    RR: RoleRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let role = self.resolve_role(&command.role_id).await?;

        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash: self.hash(&command.password)?,
            role,
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(
            user_id = %created_user.id,
            role = %created_user.role.name,
            "User created"
        );

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_email) = command.email {
            if let Some(owner) = self.repository.find_by_email(new_email.as_str()).await? {
                if owner.id != user.id {
                    return Err(UserError::EmailAlreadyExists(new_email.to_string()));
                }
            }
            user.email = new_email;
        }

        if let Some(role_id) = command.role_id {
            user.role = self.resolve_role(&role_id).await?;
        }

        if let Some(new_password) = command.password {
            user.password_hash = self.hash(&new_password)?;
        }

        self.repository.update(user).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
