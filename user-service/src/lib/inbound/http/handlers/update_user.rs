use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::auth::models::AuthenticatedPrincipal;
use crate::domain::role::models::RoleId;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;
use crate::role::errors::RoleError;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body for updating a user (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role_id: Option<String>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, ApiError> {
        let email = self
            .email
            .map(EmailAddress::new)
            .transpose()
            .map_err(UserError::from)?;
        let password = self
            .password
            .map(Password::new)
            .transpose()
            .map_err(UserError::from)?;
        let role_id = self
            .role_id
            .as_deref()
            .map(RoleId::from_string)
            .transpose()
            .map_err(RoleError::from)?;

        Ok(UpdateUserCommand {
            email,
            password,
            role_id,
        })
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Path(id): Path<String>,
    req: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let Json(req) = req?;
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    let command = req.try_into_command()?;

    let user = state.user_service.update_user(&user_id, command).await?;
    tracing::info!(actor = %principal.email, user_id = %user.id, "User updated");

    Ok(ApiSuccess::new(StatusCode::OK, "User updated", (&user).into()))
}
