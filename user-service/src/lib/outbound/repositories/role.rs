use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::role::errors::RoleError;
use crate::role::models::Role;
use crate::role::models::RoleId;
use crate::role::models::RoleName;
use crate::role::ports::RoleRepository;

#[derive(sqlx::FromRow)]
struct RoleRow {
    id: Uuid,
    name: String,
}

impl TryFrom<RoleRow> for Role {
    type Error = RoleError;

    fn try_from(row: RoleRow) -> Result<Self, Self::Error> {
        Ok(Role {
            id: RoleId(row.id),
            name: RoleName::new(row.name)?,
        })
    }
}

pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_write_error(e: sqlx::Error, role: &Role) -> RoleError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() && db_err.constraint() == Some("roles_name_key") {
                return RoleError::NameAlreadyExists(role.name.to_string());
            }
        }
        RoleError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn create(&self, role: Role) -> Result<Role, RoleError> {
        sqlx::query("INSERT INTO roles (id, name) VALUES ($1, $2)")
            .bind(role.id.0)
            .bind(role.name.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, &role))?;

        Ok(role)
    }

    async fn find_by_id(&self, id: &RoleId) -> Result<Option<Role>, RoleError> {
        sqlx::query_as::<_, RoleRow>("SELECT id, name FROM roles WHERE id = $1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RoleError::DatabaseError(e.to_string()))?
            .map(Role::try_from)
            .transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RoleError> {
        sqlx::query_as::<_, RoleRow>("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RoleError::DatabaseError(e.to_string()))?
            .map(Role::try_from)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Role>, RoleError> {
        sqlx::query_as::<_, RoleRow>("SELECT id, name FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RoleError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(Role::try_from)
            .collect()
    }

    async fn update(&self, role: Role) -> Result<Role, RoleError> {
        let result = sqlx::query("UPDATE roles SET name = $2 WHERE id = $1")
            .bind(role.id.0)
            .bind(role.name.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, &role))?;

        if result.rows_affected() == 0 {
            return Err(RoleError::NotFound(role.id.to_string()));
        }

        Ok(role)
    }
}
