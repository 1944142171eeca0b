use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_role::create_role;
use super::handlers::create_user::create_user;
use super::handlers::delete_user::delete_user;
use super::handlers::get_role::get_role;
use super::handlers::get_user::get_user;
use super::handlers::list_roles::list_roles;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_role::update_role;
use super::handlers::update_user::update_user;
use super::middleware::gate;
use super::middleware::require_api_version;
use crate::config::AuthConfig;
use crate::domain::auth::gate::RequestGate;
use crate::domain::auth::models::PublicRoutes;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::RequestGatePort;
use crate::domain::auth::service::AuthService;
use crate::domain::role::ports::RoleRepository;
use crate::domain::role::ports::RoleServicePort;
use crate::domain::role::service::RoleService;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::domain::user::service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub role_service: Arc<dyn RoleServicePort>,
    pub request_gate: Arc<dyn RequestGatePort>,
}

/// Wire the domain services over the given repositories and build the router.
pub fn create_app<UR, RR>(
    users: Arc<UR>,
    roles: Arc<RR>,
    authenticator: Arc<Authenticator>,
    config: &AuthConfig,
) -> Router
where
    UR: UserRepository,
    RR: RoleRepository,
{
    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&roles),
            Arc::clone(&authenticator),
            config.default_role.clone(),
        )),
        user_service: Arc::new(UserService::new(Arc::clone(&users), Arc::clone(&roles))),
        role_service: Arc::new(RoleService::new(roles)),
        request_gate: Arc::new(RequestGate::new(
            users,
            authenticator,
            PublicRoutes::new(&config.public_routes),
        )),
    };

    create_router(state)
}

pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // Every route goes through the gate; the allowlist decides which are public.
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/roles", get(list_roles).post(create_role))
        .route("/roles/:role_id", get(get_role).put(update_role))
        .layer(middleware::from_fn_with_state(state.clone(), gate))
        .layer(middleware::from_fn(require_api_version))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
