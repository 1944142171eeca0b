use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::RoleData;
use crate::domain::role::models::RoleId;
use crate::domain::role::ports::RoleServicePort;
use crate::inbound::http::router::AppState;
use crate::role::errors::RoleError;

pub async fn get_role(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> Result<ApiSuccess<RoleData>, ApiError> {
    let role_id = RoleId::from_string(&role_id).map_err(RoleError::from)?;

    state
        .role_service
        .get_role(&role_id)
        .await
        .map_err(ApiError::from)
        .map(|ref role| ApiSuccess::new(StatusCode::OK, "Role found", role.into()))
}
