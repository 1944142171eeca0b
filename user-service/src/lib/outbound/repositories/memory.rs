//! In-process repositories used when no database URL is configured.
//!
//! Users keep a reference to their role by id and are joined on read, so a
//! renamed role is visible through every user holding it.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::role::errors::RoleError;
use crate::role::models::Role;
use crate::role::models::RoleId;
use crate::role::ports::RoleRepository;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

#[derive(Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<HashMap<RoleId, Role>>,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with the given roles.
    pub fn with_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        let roles = roles.into_iter().map(|role| (role.id, role)).collect();
        Self {
            roles: RwLock::new(roles),
        }
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn create(&self, role: Role) -> Result<Role, RoleError> {
        let mut roles = self.roles.write().await;
        if roles.values().any(|r| r.name == role.name) {
            return Err(RoleError::NameAlreadyExists(role.name.to_string()));
        }
        roles.insert(role.id, role.clone());
        Ok(role)
    }

    async fn find_by_id(&self, id: &RoleId) -> Result<Option<Role>, RoleError> {
        Ok(self.roles.read().await.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RoleError> {
        Ok(self
            .roles
            .read()
            .await
            .values()
            .find(|r| r.name.as_str() == name)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Role>, RoleError> {
        let mut roles: Vec<Role> = self.roles.read().await.values().cloned().collect();
        roles.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(roles)
    }

    async fn update(&self, role: Role) -> Result<Role, RoleError> {
        let mut roles = self.roles.write().await;
        if !roles.contains_key(&role.id) {
            return Err(RoleError::NotFound(role.id.to_string()));
        }
        if roles.values().any(|r| r.name == role.name && r.id != role.id) {
            return Err(RoleError::NameAlreadyExists(role.name.to_string()));
        }
        roles.insert(role.id, role.clone());
        Ok(role)
    }
}

#[derive(Clone)]
struct UserRecord {
    id: UserId,
    email: EmailAddress,
    password_hash: String,
    role_id: RoleId,
}

impl UserRecord {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            role_id: user.role.id,
        }
    }
}

pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, UserRecord>>,
    roles: Arc<InMemoryRoleRepository>,
}

impl InMemoryUserRepository {
    pub fn new(roles: Arc<InMemoryRoleRepository>) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            roles,
        }
    }

    async fn resolve(&self, record: UserRecord) -> Result<User, UserError> {
        let role = self
            .roles
            .find_by_id(&record.role_id)
            .await?
            .ok_or_else(|| UserError::RoleNotFound(record.role_id.to_string()))?;

        Ok(User {
            id: record.id,
            email: record.email,
            password_hash: record.password_hash,
            role,
        })
    }

    async fn ensure_role_exists(&self, role_id: &RoleId) -> Result<(), UserError> {
        match self.roles.find_by_id(role_id).await? {
            Some(_) => Ok(()),
            None => Err(UserError::RoleNotFound(role_id.to_string())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        self.ensure_role_exists(&user.role.id).await?;

        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, UserRecord::from_user(&user));
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let record = self.users.read().await.get(id).cloned();
        match record {
            Some(record) => self.resolve(record).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let record = self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned();
        match record {
            Some(record) => self.resolve(record).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let mut records: Vec<UserRecord> = self.users.read().await.values().cloned().collect();
        records.sort_by(|a, b| a.email.as_str().cmp(b.email.as_str()));

        let mut users = Vec::with_capacity(records.len());
        for record in records {
            users.push(self.resolve(record).await?);
        }
        Ok(users)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        self.ensure_role_exists(&user.role.id).await?;

        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if users
            .values()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, UserRecord::from_user(&user));
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        match self.users.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(UserError::NotFound(id.to_string())),
        }
    }
}
