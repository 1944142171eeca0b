use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::role::models::CreateRoleCommand;
use crate::domain::role::models::Role;
use crate::domain::role::models::RoleId;
use crate::domain::role::models::UpdateRoleCommand;
use crate::role::errors::RoleError;
use crate::role::ports::RoleRepository;
use crate::role::ports::RoleServicePort;

/// Domain service implementation for role operations.
pub struct RoleService<RR>
where
    RR: RoleRepository,
{
    repository: Arc<RR>,
}

impl<RR> RoleService<RR>
where
    RR: RoleRepository,
{
    pub fn new(repository: Arc<RR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<RR> RoleServicePort for RoleService<RR>
where
    RR: RoleRepository,
{
    async fn create_role(&self, command: CreateRoleCommand) -> Result<Role, RoleError> {
        if self
            .repository
            .find_by_name(command.name.as_str())
            .await?
            .is_some()
        {
            return Err(RoleError::NameAlreadyExists(command.name.to_string()));
        }

        let role = Role {
            id: RoleId::new(),
            name: command.name,
        };

        let created = self.repository.create(role).await?;
        tracing::info!(role_id = %created.id, role = %created.name, "Role created");

        Ok(created)
    }

    async fn get_role(&self, id: &RoleId) -> Result<Role, RoleError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(RoleError::NotFound(id.to_string()))
    }

    async fn list_roles(&self) -> Result<Vec<Role>, RoleError> {
        self.repository.list_all().await
    }

    async fn update_role(
        &self,
        id: &RoleId,
        command: UpdateRoleCommand,
    ) -> Result<Role, RoleError> {
        let mut role = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(RoleError::NotFound(id.to_string()))?;

        if let Some(existing) = self.repository.find_by_name(command.name.as_str()).await? {
            if existing.id != role.id {
                return Err(RoleError::NameAlreadyExists(command.name.to_string()));
            }
        }

        role.name = command.name;
        self.repository.update(role).await
    }
}
