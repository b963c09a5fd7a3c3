//! Common test utilities for integration tests.
//!
//! The router is wired to the in-memory store, so these tests need no
//! database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use domain::services::InMemoryGameNightStore;
use game_night_api::{app::create_app, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Test configuration using the in-memory storage backend.
pub fn test_config() -> Config {
    Config::load_with_overrides(&[
        ("storage.backend", "memory"),
        ("server.host", "127.0.0.1"),
        ("logging.format", "pretty"),
    ])
    .expect("Failed to build test config")
}

/// Create a test application router together with its store.
pub fn create_test_app() -> (Router, Arc<InMemoryGameNightStore>) {
    create_test_app_with_store(InMemoryGameNightStore::new())
}

/// Create a test application router over a specific store.
pub fn create_test_app_with_store(
    store: InMemoryGameNightStore,
) -> (Router, Arc<InMemoryGameNightStore>) {
    let store = Arc::new(store);
    let app = create_app(test_config(), store.clone());
    (app, store)
}

/// Build a request with a JSON body.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a DELETE request.
pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a request through a clone of the router.
pub async fn send(app: &Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

/// Parse a response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Create a game night via the API and return the response body.
pub async fn create_game_night(app: &Router, minimum_number_of_players: i32) -> Value {
    let response = send(
        app,
        json_request(
            Method::POST,
            "/api/v1/game-nights",
            json!({ "minimumNumberOfPlayers": minimum_number_of_players }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await
}
