use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::RoleData;
use crate::domain::role::ports::RoleServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_roles(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<RoleData>>, ApiError> {
    state
        .role_service
        .list_roles()
        .await
        .map_err(ApiError::from)
        .map(|roles| {
            ApiSuccess::new(
                StatusCode::OK,
                "Role list",
                roles.iter().map(RoleData::from).collect(),
            )
        })
}
