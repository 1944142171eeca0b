//! Repository mocks shared by the domain service tests.

use async_trait::async_trait;
use mockall::mock;

use crate::role::errors::RoleError;
use crate::role::models::Role;
use crate::role::models::RoleId;
use crate::role::ports::RoleRepository;
use crate::user::errors::UserError;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

mock! {
    pub TestUserRepository {}

    #[async_trait]
    impl UserRepository for TestUserRepository {
        async fn create(&self, user: User) -> Result<User, UserError>;
        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
        async fn list_all(&self) -> Result<Vec<User>, UserError>;
        async fn update(&self, user: User) -> Result<User, UserError>;
        async fn delete(&self, id: &UserId) -> Result<(), UserError>;
    }
}

mock! {
    pub TestRoleRepository {}

    #[async_trait]
    impl RoleRepository for TestRoleRepository {
        async fn create(&self, role: Role) -> Result<Role, RoleError>;
        async fn find_by_id(&self, id: &RoleId) -> Result<Option<Role>, RoleError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RoleError>;
        async fn list_all(&self) -> Result<Vec<Role>, RoleError>;
        async fn update(&self, role: Role) -> Result<Role, RoleError>;
    }
}
