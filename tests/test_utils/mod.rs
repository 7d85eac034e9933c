//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tempfile::TempDir;
use tokio_rusqlite::Connection;
use tower::util::ServiceExt;

use museum::api::{AppState, app};
use museum::core::AppConfig;
use museum::core::db::{async_db, initialize_db, seed_db};

/// Nothing listens here so requests to it fail fast
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

pub struct TestApp {
    pub db: Connection,
    pub config: AppConfig,
    router: Router,
    // Removed along with the database when the test ends
    _dir: TempDir,
}

impl TestApp {
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Send a request and return the status and JSON body
    pub async fn request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = body_to_string(response.into_body()).await;
        let json = serde_json::from_str(&body).unwrap_or(Value::Null);
        (status, json)
    }

    /// Register a member and return a bearer token for them
    pub async fn member_token(&self, email: &str, password: &str) -> String {
        let (status, _) = self
            .request(json_request(
                Method::POST,
                "/api/register",
                serde_json::json!({"email": email, "password": password}),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = self.request(login_request(email, password)).await;
        assert_eq!(status, StatusCode::OK);
        body["access_token"].as_str().unwrap().to_string()
    }
}

fn test_config(dir: &TempDir) -> AppConfig {
    let storage_path = dir.path().display().to_string();
    AppConfig {
        db_path: format!("{}/db", storage_path),
        storage_path,
        api_url: format!("{}/api", UNREACHABLE),
        llm_host: String::from(UNREACHABLE),
        llm_model: String::from("llama3.2"),
        email_relay_url: String::from(UNREACHABLE),
        admin_password: String::from("admin123"),
        token_ttl_minutes: 30,
        // Lowest cost bcrypt allows
        password_cost: 4,
    }
}

/// Creates a test application router backed by a fresh seeded
/// database in a temporary directory.
pub async fn test_app() -> TestApp {
    test_app_with(|_| {}).await
}

pub async fn test_app_with<F>(configure: F) -> TestApp
where
    F: FnOnce(&mut AppConfig),
{
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut config = test_config(&dir);
    configure(&mut config);

    let db = async_db(&config.db_path)
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to migrate db");
        seed_db(conn).expect("Failed to seed db");
        Ok(())
    })
    .await
    .unwrap();

    let app_state = AppState::new(db.clone(), config.clone());
    let router = app(Arc::new(RwLock::new(app_state)));
    TestApp {
        db,
        config,
        router,
        _dir: dir,
    }
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn login_request(username: &str, password: &str) -> Request<Body> {
    let form = format!(
        "username={}&password={}",
        username.replace('@', "%40").replace(' ', "+"),
        password
    );
    Request::builder()
        .method(Method::POST)
        .uri("/api/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap()
}

pub fn bearer_request(method: Method, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}
