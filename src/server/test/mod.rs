//! End-to-end tests driving the application router over an in-memory database.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{config::Config, router::router, state::AppState};


async fn app() -> Router {
    let test = TestBuilder::new().with_campus_tables().build().await.unwrap();
    let db = test.db.unwrap();

    router(AppState::new(
        db,
        Config {
            database_url: "sqlite::memory:".to_string(),
            port: 0,
            default_user_pass: "default-pass".to_string(),
            env: "production".to_string(),
        },
    ))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}
