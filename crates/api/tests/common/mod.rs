#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use refmaster_api::config::ServerConfig;
use refmaster_api::router::build_app_router;
use refmaster_api::state::AppState;

const BOUNDARY: &str = "refmaster-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
///
/// Chunks are small so multi-chunk commits are cheap to exercise.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        import_chunk_size: 2,
        import_cancel_check_rows: 1,
        import_max_upload_bytes: 1024 * 1024,
    }
}

/// Build the full application router using the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_shutdown(pool, CancellationToken::new())
}

/// Like [`build_test_app`], with a caller-controlled shutdown token.
pub fn build_test_app_with_shutdown(pool: PgPool, shutdown: CancellationToken) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        shutdown,
    };
    build_app_router(state, &config)
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Encode one file part as a `multipart/form-data` body.
pub fn multipart_body(field: &str, file_name: &str, contents: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: text/plain\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST a multipart body built by [`multipart_body`].
pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Upload `contents` as the `file` field of an import for `kind`.
pub async fn import_file(app: Router, kind: &str, contents: &str) -> Response {
    let body = multipart_body("file", &format!("{kind}.txt"), contents.as_bytes());
    post_multipart(app, &format!("/api/v1/reference/{kind}/import"), body).await
}
