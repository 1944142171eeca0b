use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::RoleData;
use crate::domain::auth::models::AuthenticatedPrincipal;
use crate::domain::role::models::CreateRoleCommand;
use crate::domain::role::models::RoleName;
use crate::domain::role::ports::RoleServicePort;
use crate::inbound::http::router::AppState;
use crate::role::errors::RoleError;

pub async fn create_role(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    body: Result<Json<RoleRequest>, JsonRejection>,
) -> Result<ApiSuccess<RoleData>, ApiError> {
    let Json(body) = body?;
    let name = RoleName::new(body.name).map_err(RoleError::from)?;

    let role = state
        .role_service
        .create_role(CreateRoleCommand { name })
        .await?;
    tracing::info!(actor = %principal.email, role = %role.name, "Role created");

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        "Role created",
        (&role).into(),
    ))
}

/// HTTP request body for creating or renaming a role (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoleRequest {
    pub name: String,
}
