mod common;

use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use common::DEFAULT_ROLE;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

async fn json_body(response: reqwest::Response) -> Value {
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_login_unknown_user_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "email": "ghost@example.com", "password": "whatever" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_register_issues_token_for_new_account() {
    let app = TestApp::spawn().await;

    let body = app.register("alice@example.com", "s3cret!").await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered");
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert_eq!(body["data"]["role"], DEFAULT_ROLE);

    let token = body["data"]["token"].as_str().unwrap();
    assert_eq!(app.token_codec.subject_of(token).unwrap(), "alice@example.com");
}

#[tokio::test]
async fn test_register_duplicate_email_is_bad_request() {
    let app = TestApp::spawn().await;
    app.register("alice@example.com", "s3cret!").await;

    let response = app
        .post("/auth/register")
        .json(&json!({ "email": "alice@example.com", "password": "other1!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("already registered"));
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    let app = TestApp::spawn().await;

    let short_password = app
        .post("/auth/register")
        .json(&json!({ "email": "bob@example.com", "password": "12345" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(short_password.status(), StatusCode::BAD_REQUEST);

    let bad_email = app
        .post("/auth/register")
        .json(&json!({ "email": "not-an-email", "password": "pass_word" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(bad_email.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_after_register_issues_fresh_token() {
    let app = TestApp::spawn().await;
    let registered = app.register("alice@example.com", "s3cret!").await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "key": "alice@example.com", "password": "s3cret!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Token generated");
    assert_eq!(body["data"]["role"], DEFAULT_ROLE);

    let login_token = body["data"]["token"].as_str().unwrap();
    let register_token = registered["data"]["token"].as_str().unwrap();
    assert_ne!(login_token, register_token);
    assert_eq!(
        app.token_codec.subject_of(login_token).unwrap(),
        app.token_codec.subject_of(register_token).unwrap()
    );
}

#[tokio::test]
async fn test_login_wrong_password_matches_unknown_user() {
    let app = TestApp::spawn().await;
    app.register("alice@example.com", "s3cret!").await;

    let wrong_password = app
        .post("/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "nope!!" }))
        .send()
        .await
        .expect("Failed to execute request");
    let unknown_user = app
        .post("/auth/login")
        .json(&json!({ "email": "bob@example.com", "password": "nope!!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(wrong_password).await, json_body(unknown_user).await);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_non_bearer_header_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/users")
        .header("Authorization", "Basic YWxpY2U6c2VjcmV0")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::spawn().await;
    app.register("alice@example.com", "s3cret!").await;

    let expired = app
        .token_codec
        .issue(
            "alice@example.com",
            Utc::now() - Duration::minutes(20),
            Duration::minutes(10),
        )
        .unwrap();

    let response = app
        .get_authenticated("/users", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_forged_token_is_unauthorized() {
    let app = TestApp::spawn().await;
    app.register("alice@example.com", "s3cret!").await;

    let forger = auth::TokenCodec::new(
        b"another-secret-key-that-is-not-the-servers",
        Duration::minutes(10),
    );
    let forged = forger.mint("alice@example.com").unwrap();

    let response = app
        .get_authenticated("/users", &forged)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_deleted_user_is_unauthorized() {
    let app = TestApp::spawn().await;
    let admin = app.register_token("admin@example.com").await;
    let doomed = app.register("doomed@example.com", "pass_word").await;
    let doomed_token = doomed["data"]["token"].as_str().unwrap().to_string();

    let users = json_body(
        app.get_authenticated("/users", &admin)
            .send()
            .await
            .expect("Failed to execute request"),
    )
    .await;
    let doomed_id = users["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"] == "doomed@example.com")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let deleted = app
        .delete_authenticated(&format!("/users/{}", doomed_id), &admin)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted.status(), StatusCode::OK);

    let response = app
        .get_authenticated("/users", &doomed_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_crud_flow() {
    let app = TestApp::spawn().await;
    let token = app.register_token("admin@example.com").await;

    let created = app
        .post_authenticated("/users", &token)
        .json(&json!({
            "email": "carol@example.com",
            "password": "pass_word",
            "role_id": app.default_role_id.to_string(),
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json_body(created).await;
    assert_eq!(created["data"]["email"], "carol@example.com");
    assert_eq!(created["data"]["role"]["name"], DEFAULT_ROLE);
    assert!(created["data"].get("password_hash").is_none());
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let fetched = app
        .get_authenticated(&format!("/users/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(fetched.status(), StatusCode::OK);

    let updated = app
        .put_authenticated(&format!("/users/{}", id), &token)
        .json(&json!({ "email": "carol2@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(json_body(updated).await["data"]["email"], "carol2@example.com");

    let deleted = app
        .delete_authenticated(&format!("/users/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted.status(), StatusCode::OK);
    assert!(json_body(deleted).await["data"].is_null());

    let missing = app
        .get_authenticated(&format!("/users/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_user_with_unknown_role_is_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.register_token("admin@example.com").await;

    let response = app
        .post_authenticated("/users", &token)
        .json(&json!({
            "email": "carol@example.com",
            "password": "pass_word",
            "role_id": uuid::Uuid::new_v4().to_string(),
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user_malformed_id_is_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.register_token("admin@example.com").await;

    let response = app
        .get_authenticated("/users/not-a-uuid", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_role_crud_flow() {
    let app = TestApp::spawn().await;
    let token = app.register_token("admin@example.com").await;

    let created = app
        .post_authenticated("/roles", &token)
        .json(&json!({ "name": "Administrador" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(created.status(), StatusCode::CREATED);
    let id = json_body(created).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let duplicate = app
        .post_authenticated("/roles", &token)
        .json(&json!({ "name": "Administrador" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

    let renamed = app
        .put_authenticated(&format!("/roles/{}", id), &token)
        .json(&json!({ "name": "Gerente" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(renamed.status(), StatusCode::OK);
    assert_eq!(json_body(renamed).await["data"]["name"], "Gerente");

    let clash = app
        .put_authenticated(&format!("/roles/{}", id), &token)
        .json(&json!({ "name": DEFAULT_ROLE }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(clash.status(), StatusCode::BAD_REQUEST);

    let listed = app
        .get_authenticated("/roles", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(listed.status(), StatusCode::OK);
    let names: Vec<String> = json_body(listed).await["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec![DEFAULT_ROLE.to_string(), "Gerente".to_string()]);

    let missing = app
        .get_authenticated(&format!("/roles/{}", uuid::Uuid::new_v4()), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_ignores_requested_role() {
    let app = TestApp::spawn().await;
    let token = app.register_token("admin@example.com").await;

    app.post_authenticated("/roles", &token)
        .json(&json!({ "name": "Administrador" }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/auth/register")
        .json(&json!({
            "email": "eve@example.com",
            "password": "pass_word",
            "role": "Administrador"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["data"]["role"], DEFAULT_ROLE);
}

#[tokio::test]
async fn test_register_missing_field_is_enveloped_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({ "email": "bob@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("password"));
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_login_missing_field_is_enveloped_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "email": "bob@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid credentials");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_create_role_malformed_body_is_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.register_token("admin@example.com").await;

    let response = app
        .post_authenticated("/roles", &token)
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["success"], false);
}

#[tokio::test]
async fn test_requests_without_api_version_are_not_routed() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let missing = client
        .post(format!("{}/auth/login", app.address))
        .json(&json!({ "email": "bob@example.com", "password": "pass_word" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let body = json_body(missing).await;
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());

    let wrong = client
        .post(format!("{}/auth/login", app.address))
        .header("Api-Version", "2")
        .json(&json!({ "email": "bob@example.com", "password": "pass_word" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(wrong.status(), StatusCode::NOT_FOUND);
}
