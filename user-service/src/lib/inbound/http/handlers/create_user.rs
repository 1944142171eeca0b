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
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::role::errors::RoleError;
use crate::user::errors::UserError;

pub async fn create_user(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;

    let user = state.user_service.create_user(command).await?;
    tracing::info!(actor = %principal.email, user_id = %user.id, "User created");

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        "User created",
        (&user).into(),
    ))
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    email: String,
    password: String,
    role_id: String,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ApiError> {
        let email = EmailAddress::new(self.email).map_err(UserError::from)?;
        let password = Password::new(self.password).map_err(UserError::from)?;
        let role_id = RoleId::from_string(&self.role_id).map_err(RoleError::from)?;
        Ok(CreateUserCommand::new(email, password, role_id))
    }
}
