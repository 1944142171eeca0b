use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::register::SessionData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<SessionData>, ApiError> {
    // No format validation: an unreadable body or unknown email is bad credentials.
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "Login rejected");
        AuthError::BadCredentials
    })?;
    let command = LoginCommand {
        email: body.email,
        password: body.password,
    };

    state
        .auth_service
        .login(command)
        .await
        .map_err(ApiError::from)
        .map(|session| ApiSuccess::new(StatusCode::OK, "Token generated", session.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(alias = "key")]
    email: String,
    password: String,
}
