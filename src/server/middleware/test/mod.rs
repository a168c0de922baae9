use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::{from_fn, from_fn_with_state},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{
    config::Config,
    middleware::{boundary::async_boundary, terminal::terminal_handler},
};


fn config(production: bool) -> Arc<Config> {
    Arc::new(Config {
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        default_user_pass: "password".to_string(),
        env: if production { "production" } else { "development" }.to_string(),
    })
}

/// Wraps `routes` in the boundary and terminal layers the application router uses.
fn pipeline(routes: Router, production: bool) -> Router {
    routes
        .layer(from_fn(async_boundary))
        .layer(from_fn_with_state(config(production), terminal_handler))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_bytes(response).await)
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}
