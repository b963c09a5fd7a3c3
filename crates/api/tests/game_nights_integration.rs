//! Integration tests for game night endpoints.
//!
//! Run with: cargo test --test game_nights_integration

mod common;

use axum::http::{header, Method, StatusCode};
use common::{
    create_game_night, create_test_app, delete_request, get_request, json_request,
    parse_response_body, send,
};
use serde_json::json;

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_game_night_success() {
    let (app, _store) = create_test_app();

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/game-nights",
            json!({ "id": 555, "minimumNumberOfPlayers": 4 }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();

    let body = parse_response_body(response).await;
    let id = body["id"].as_i64().unwrap();
    assert_ne!(id, 555);
    assert_eq!(body["minimumNumberOfPlayers"], 4);
    assert_eq!(body["version"], 1);
    assert_eq!(location, format!("/api/v1/game-nights/{}", id));

    // The locator resolves to the created record.
    let response = send(&app, get_request(&location)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = parse_response_body(response).await;
    assert_eq!(fetched["minimumNumberOfPlayers"], 4);
}

#[tokio::test]
async fn test_create_game_night_too_few_players() {
    let (app, store) = create_test_app();

    for minimum in [1, 0, -2] {
        let response = send(
            &app,
            json_request(
                Method::POST,
                "/api/v1/game-nights",
                json!({ "minimumNumberOfPlayers": minimum }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = parse_response_body(response).await;
        assert_eq!(body["error"], "minimum-players-violation");
    }

    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_create_game_night_malformed_body() {
    let (app, store) = create_test_app();

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/game-nights",
            json!({ "minimumNumberOfPlayers": "lots" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(store.write_count(), 0);
}

// ============================================================================
// Read
// ============================================================================

#[tokio::test]
async fn test_get_game_night_not_found() {
    let (app, _store) = create_test_app();

    for id in ["1", "0", "-5", "9223372036854775807"] {
        let response = send(&app, get_request(&format!("/api/v1/game-nights/{}", id))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = parse_response_body(response).await;
        assert_eq!(body["error"], "not_found");
    }
}

#[tokio::test]
async fn test_get_game_night_omits_players() {
    let (app, _store) = create_test_app();
    let created = create_game_night(&app, 3).await;
    let id = created["id"].as_i64().unwrap();

    send(
        &app,
        json_request(
            Method::POST,
            &format!("/api/v1/game-nights/{}/players", id),
            json!({ "name": "Ann" }),
        ),
    )
    .await;

    let response = send(&app, get_request(&format!("/api/v1/game-nights/{}", id))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert!(body.get("players").is_none());
}

#[tokio::test]
async fn test_list_game_nights_ordered_with_players() {
    let (app, _store) = create_test_app();

    let response = send(&app, get_request("/api/v1/game-nights")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await, json!([]));

    for minimum in [6, 2, 4] {
        create_game_night(&app, minimum).await;
    }
    send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/game-nights/2/players",
            json!({ "name": "Ann" }),
        ),
    )
    .await;

    let response = send(&app, get_request("/api/v1/game-nights")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    let list = body.as_array().unwrap();

    let ids: Vec<i64> = list.iter().map(|g| g["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(list[0]["players"], json!([]));
    assert_eq!(list[1]["players"][0]["name"], "Ann");
}

// ============================================================================
// Replace
// ============================================================================

#[tokio::test]
async fn test_replace_game_night_success() {
    let (app, _store) = create_test_app();
    let created = create_game_night(&app, 2).await;
    let id = created["id"].as_i64().unwrap();

    let response = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/v1/game-nights/{}", id),
            json!({ "id": id, "minimumNumberOfPlayers": 5, "version": created["version"] }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["minimumNumberOfPlayers"], 5);
    // The submitted token is echoed back, not the new one.
    assert_eq!(body["version"], created["version"]);

    let response = send(&app, get_request(&format!("/api/v1/game-nights/{}", id))).await;
    let stored = parse_response_body(response).await;
    assert_eq!(stored["minimumNumberOfPlayers"], 5);
    assert_eq!(stored["version"], 2);
}

#[tokio::test]
async fn test_replace_game_night_id_mismatch() {
    let (app, store) = create_test_app();
    let created = create_game_night(&app, 2).await;
    let id = created["id"].as_i64().unwrap();
    let writes_before = store.write_count();

    let response = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/v1/game-nights/{}", id),
            json!({ "id": id + 1, "minimumNumberOfPlayers": 5, "version": 1 }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "id-mismatch");
    assert_eq!(store.write_count(), writes_before);
}

#[tokio::test]
async fn test_replace_game_night_too_few_players() {
    let (app, store) = create_test_app();
    let created = create_game_night(&app, 2).await;
    let id = created["id"].as_i64().unwrap();
    let writes_before = store.write_count();

    let response = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/v1/game-nights/{}", id),
            json!({ "id": id, "minimumNumberOfPlayers": 1, "version": 1 }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "minimum-players-violation");
    assert_eq!(store.write_count(), writes_before);
}

#[tokio::test]
async fn test_replace_game_night_stale_version_conflict() {
    let (app, _store) = create_test_app();
    let created = create_game_night(&app, 2).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/v1/game-nights/{}", id);

    // Writer A and writer B both hold version 1.
    let response = send(
        &app,
        json_request(
            Method::PUT,
            &uri,
            json!({ "id": id, "minimumNumberOfPlayers": 3, "version": 1 }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        json_request(
            Method::PUT,
            &uri,
            json!({ "id": id, "minimumNumberOfPlayers": 8, "version": 1 }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "concurrency_conflict");

    // A's write survives.
    let response = send(&app, get_request(&uri)).await;
    let stored = parse_response_body(response).await;
    assert_eq!(stored["minimumNumberOfPlayers"], 3);
}

#[tokio::test]
async fn test_replace_deleted_game_night_not_found() {
    let (app, _store) = create_test_app();
    let created = create_game_night(&app, 2).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/v1/game-nights/{}", id);

    send(&app, delete_request(&uri)).await;

    let response = send(
        &app,
        json_request(
            Method::PUT,
            &uri,
            json!({ "id": id, "minimumNumberOfPlayers": 3, "version": 1 }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_game_night_twice() {
    let (app, _store) = create_test_app();
    let created = create_game_night(&app, 7).await;
    let uri = format!("/api/v1/game-nights/{}", created["id"]);

    let response = send(&app, delete_request(&uri)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let snapshot = parse_response_body(response).await;
    assert_eq!(snapshot["id"], created["id"]);
    assert_eq!(snapshot["minimumNumberOfPlayers"], 7);

    let response = send(&app, delete_request(&uri)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, get_request(&uri)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
