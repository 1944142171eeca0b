use async_trait::async_trait;

use crate::domain::role::models::CreateRoleCommand;
use crate::domain::role::models::Role;
use crate::domain::role::models::RoleId;
use crate::domain::role::models::UpdateRoleCommand;
use crate::role::errors::RoleError;

/// Port for role domain service operations.
#[async_trait]
pub trait RoleServicePort: Send + Sync + 'static {
    /// Create a new role.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Another role has this name
    /// * `DatabaseError` - Database operation failed
    async fn create_role(&self, command: CreateRoleCommand) -> Result<Role, RoleError>;

    /// Retrieve role by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Role does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_role(&self, id: &RoleId) -> Result<Role, RoleError>;

    /// Retrieve all roles.
    async fn list_roles(&self) -> Result<Vec<Role>, RoleError>;

    /// Rename an existing role.
    ///
    /// # Errors
    /// * `NotFound` - Role does not exist
    /// * `NameAlreadyExists` - Another role has the new name
    /// * `DatabaseError` - Database operation failed
    async fn update_role(&self, id: &RoleId, command: UpdateRoleCommand)
        -> Result<Role, RoleError>;
}

/// Persistence operations for roles.
#[async_trait]
pub trait RoleRepository: Send + Sync + 'static {
    /// Persist new role to storage.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, role: Role) -> Result<Role, RoleError>;

    /// Retrieve role by identifier (None if not found).
    async fn find_by_id(&self, id: &RoleId) -> Result<Option<Role>, RoleError>;

    /// Retrieve role by exact name (None if not found).
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RoleError>;

    /// Retrieve all roles ordered by name.
    async fn list_all(&self) -> Result<Vec<Role>, RoleError>;

    /// Update existing role in storage.
    ///
    /// # Errors
    /// * `NotFound` - Role does not exist
    /// * `NameAlreadyExists` - New name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, role: Role) -> Result<Role, RoleError>;
}
