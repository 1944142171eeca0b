use std::sync::Arc;

use auth::Authenticator;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_service::config::Config;
use user_service::inbound::http::router::create_app;
use user_service::outbound::repositories::InMemoryRoleRepository;
use user_service::outbound::repositories::InMemoryUserRepository;
use user_service::outbound::repositories::PostgresRoleRepository;
use user_service::outbound::repositories::PostgresUserRepository;
use user_service::role::models::Role;
use user_service::role::models::RoleId;
use user_service::role::models::RoleName;

const MAX_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "user-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        default_role = %config.auth.default_role,
        public_routes = ?config.auth.public_routes,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        chrono::Duration::minutes(config.jwt.expiration_minutes),
    ));

    let application = if config.database.url.is_empty() {
        in_memory_app(&config, authenticator)?
    } else {
        postgres_app(&config, authenticator).await?
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, application).await?;

    Ok(())
}

async fn postgres_app(
    config: &Config,
    authenticator: Arc<Authenticator>,
) -> Result<Router, anyhow::Error> {
    let pg_pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = MAX_CONNECTIONS,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let roles = Arc::new(PostgresRoleRepository::new(pg_pool.clone()));
    let users = Arc::new(PostgresUserRepository::new(pg_pool));

    Ok(create_app(users, roles, authenticator, &config.auth))
}

fn in_memory_app(
    config: &Config,
    authenticator: Arc<Authenticator>,
) -> Result<Router, anyhow::Error> {
    let default_role = Role {
        id: RoleId::new(),
        name: RoleName::new(config.auth.default_role.clone())?,
    };
    tracing::warn!(
        default_role = %default_role.name,
        "No database configured, using in-memory store"
    );

    let roles = Arc::new(InMemoryRoleRepository::with_roles([default_role]));
    let users = Arc::new(InMemoryUserRepository::new(Arc::clone(&roles)));

    Ok(create_app(users, roles, authenticator, &config.auth))
}
