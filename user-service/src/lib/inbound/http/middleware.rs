use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Admission;
use crate::domain::auth::ports::RequestGatePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub const API_VERSION_HEADER: &str = "api-version";
pub const API_VERSION: &str = "1";

/// Middleware that asks the request gate whether the request may proceed.
///
/// Authenticated requests carry an `AuthenticatedPrincipal` in their
/// extensions; public routes pass through untouched.
pub async fn gate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = match req.headers().get(header::AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| AuthError::InvalidAuthorizationHeader)?,
        ),
        None => None,
    };

    let admission = state
        .request_gate
        .admit(req.uri().path(), authorization)
        .await?;

    if let Admission::Authenticated(principal) = admission {
        tracing::debug!(email = %principal.email, role = %principal.role, "Request authenticated");
        req.extensions_mut().insert(principal);
    }

    Ok(next.run(req).await)
}

/// Only requests addressed to the served API version reach a route.
pub async fn require_api_version(req: Request, next: Next) -> Result<Response, ApiError> {
    let version = req
        .headers()
        .get(API_VERSION_HEADER)
        .and_then(|value| value.to_str().ok());

    if version != Some(API_VERSION) {
        return Err(ApiError::NotFound(format!(
            "No route for this API version, expected header {}: {}",
            API_VERSION_HEADER, API_VERSION
        )));
    }

    Ok(next.run(req).await)
}
