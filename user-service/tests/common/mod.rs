use std::sync::Arc;

use auth::Authenticator;
use auth::TokenCodec;
use chrono::Duration;
use serde_json::json;
use serde_json::Value;
use user_service::config::AuthConfig;
use user_service::inbound::http::middleware::API_VERSION;
use user_service::inbound::http::middleware::API_VERSION_HEADER;
use user_service::inbound::http::router::create_app;
use user_service::outbound::repositories::InMemoryRoleRepository;
use user_service::outbound::repositories::InMemoryUserRepository;
use user_service::role::models::Role;
use user_service::role::models::RoleId;
use user_service::role::models::RoleName;

pub const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const DEFAULT_ROLE: &str = "Cliente";

/// Test application that spawns a real server over the in-memory store
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Codec sharing the server's secret, for crafting tokens directly.
    pub token_codec: TokenCodec,
    pub default_role_id: RoleId,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let default_role = Role {
            id: RoleId::new(),
            name: RoleName::new(DEFAULT_ROLE.to_string()).unwrap(),
        };
        let default_role_id = default_role.id;

        let roles = Arc::new(InMemoryRoleRepository::with_roles([default_role]));
        let users = Arc::new(InMemoryUserRepository::new(Arc::clone(&roles)));
        let authenticator = Arc::new(Authenticator::new(SECRET, Duration::minutes(10)));

        let router = create_app(users, roles, authenticator, &AuthConfig::default());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: api_client(),
            token_codec: TokenCodec::new(SECRET, Duration::minutes(10)),
            default_role_id,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register an account and return the response body.
    pub async fn register(&self, email: &str, password: &str) -> Value {
        let response = self
            .post("/auth/register")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Register an account and return its bearer token.
    pub async fn register_token(&self, email: &str) -> String {
        let body = self.register(email, "pass_word").await;
        body["data"]["token"]
            .as_str()
            .expect("token in response")
            .to_string()
    }
}

/// Client that addresses every request to the served API version.
fn api_client() -> reqwest::Client {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        API_VERSION_HEADER,
        reqwest::header::HeaderValue::from_static(API_VERSION),
    );
    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .expect("Failed to create reqwest client")
}
