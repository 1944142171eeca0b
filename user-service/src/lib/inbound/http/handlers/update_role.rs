use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::create_role::RoleRequest;
use super::ApiError;
use super::ApiSuccess;
use super::RoleData;
use crate::domain::auth::models::AuthenticatedPrincipal;
use crate::domain::role::models::RoleId;
use crate::domain::role::models::RoleName;
use crate::domain::role::models::UpdateRoleCommand;
use crate::domain::role::ports::RoleServicePort;
use crate::inbound::http::router::AppState;
use crate::role::errors::RoleError;

pub async fn update_role(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Path(id): Path<String>,
    body: Result<Json<RoleRequest>, JsonRejection>,
) -> Result<ApiSuccess<RoleData>, ApiError> {
    let Json(body) = body?;
    let role_id = RoleId::from_string(&id).map_err(RoleError::from)?;
    let name = RoleName::new(body.name).map_err(RoleError::from)?;

    let role = state
        .role_service
        .update_role(&role_id, UpdateRoleCommand { name })
        .await?;
    tracing::info!(actor = %principal.email, role_id = %role.id, "Role updated");

    Ok(ApiSuccess::new(StatusCode::OK, "Role updated", (&role).into()))
}
