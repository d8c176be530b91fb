#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use blackstyles_api::auth::jwt::JwtConfig;
use blackstyles_api::config::{ServerConfig, StorageConfig};
use blackstyles_api::router::build_app_router;
use blackstyles_api::state::AppState;
use blackstyles_db::Storage;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults, storing data under `data_dir`.
pub fn test_config(data_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        storage: StorageConfig::File {
            data_dir: data_dir.to_path_buf(),
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiry_hours: 24,
        },
    }
}

/// Build the full application router over a fresh flat-file store.
///
/// The returned [`TempDir`] owns the data directory; keep it alive for the
/// duration of the test.
pub async fn build_test_app() -> (Router, TempDir) {
    let dir = TempDir::new().expect("tempdir should be created");
    let config = test_config(dir.path());

    let storage = Storage::json_file(dir.path())
        .await
        .expect("flat-file storage should open");

    let state = AppState {
        storage,
        config: Arc::new(config.clone()),
    };

    (build_app_router(state, &config), dir)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router should respond")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Save an outfit through the API and return the stored entry.
pub async fn save_outfit(app: Router, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(app, "/api/outfits/save", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["entry"].clone()
}

/// Register and log in a user, returning a bearer token.
pub async fn register_and_login(app: Router, email: &str) -> String {
    let credentials = serde_json::json!({ "email": email, "password": "hunter2hunter2" });

    let response = post_json(app.clone(), "/api/auth/register", credentials.clone()).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let response = post_json(app, "/api/auth/login", credentials).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["token"]
        .as_str()
        .expect("login should return a token")
        .to_string()
}
