use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::auth::errors::AuthError;
use crate::role::errors::RoleError;
use crate::role::models::Role;
use crate::user::errors::UserError;
use crate::user::models::User;

pub mod create_role;
pub mod create_user;
pub mod delete_user;
pub mod get_role;
pub mod get_user;
pub mod list_roles;
pub mod list_users;
pub mod login;
pub mod register;
pub mod update_role;
pub mod update_user;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(message, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl ApiError {
    /// Log the failure and hide its detail from the caller.
    fn internal(detail: impl std::fmt::Display) -> Self {
        tracing::error!(error = %detail, "Request failed");
        ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::<()>::new_error(message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_)
            | UserError::RoleNotFound(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_)
            | UserError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            UserError::PasswordHashing(_) | UserError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<RoleError> for ApiError {
    fn from(err: RoleError) -> Self {
        match err {
            RoleError::NotFound(_) => ApiError::NotFound(err.to_string()),
            RoleError::NameAlreadyExists(_)
            | RoleError::InvalidName(_)
            | RoleError::InvalidRoleId(_) => ApiError::BadRequest(err.to_string()),
            RoleError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::BadCredentials
            | AuthError::MissingToken
            | AuthError::InvalidAuthorizationHeader => ApiError::Unauthorized(err.to_string()),
            // Verification details stay in the log.
            AuthError::InvalidToken(_) | AuthError::PrincipalNotFound(_) => {
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
            AuthError::DuplicateKey(_) | AuthError::RoleMissing(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AuthError::Internal(_) => ApiError::internal(err),
        }
    }
}

/// JSON envelope shared by every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    success: bool,
    message: String,
    data: Option<T>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn new_error(message: String) -> Self {
        Self {
            success: false,
            message,
            data: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleData {
    pub id: String,
    pub name: String,
}

impl From<&Role> for RoleData {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.to_string(),
            name: role.name.as_str().to_string(),
        }
    }
}

/// User as exposed over HTTP; the password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub email: String,
    pub role: RoleData,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            role: (&user.role).into(),
        }
    }
}
