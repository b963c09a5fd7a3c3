//! Game night endpoint handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    Json,
};
use domain::models::{GameNight, GameNightPayload};
use domain::services;
use domain::DomainError;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{record_concurrency_conflict, record_game_night_mutation};

/// Base path of the game night resource.
pub const GAME_NIGHTS_PATH: &str = "/api/v1/game-nights";

/// Locator of a single game night, served by `get_game_night`.
pub fn game_night_location(id: i64) -> String {
    format!("{}/{}", GAME_NIGHTS_PATH, id)
}

/// List all game nights with their players.
///
/// GET /api/v1/game-nights
pub async fn list_game_nights(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameNight>>, ApiError> {
    let game_nights = services::list_game_nights(state.store.as_ref()).await?;
    Ok(Json(game_nights))
}

/// Get a single game night. Players are not included.
///
/// GET /api/v1/game-nights/:id
pub async fn get_game_night(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GameNight>, ApiError> {
    let game_night = services::get_game_night(state.store.as_ref(), id).await?;
    Ok(Json(game_night))
}

/// Replace a game night (full update, optimistic concurrency).
///
/// PUT /api/v1/game-nights/:id
pub async fn replace_game_night(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<GameNightPayload>, JsonRejection>,
) -> Result<Json<GameNight>, ApiError> {
    let Json(payload) = payload?;
    match services::replace_game_night(state.store.as_ref(), id, payload).await {
        Ok(game_night) => {
            record_game_night_mutation("replaced");
            Ok(Json(game_night))
        }
        Err(err @ DomainError::ConcurrencyConflict { .. }) => {
            record_concurrency_conflict();
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Create a new game night.
///
/// POST /api/v1/game-nights
pub async fn create_game_night(
    State(state): State<AppState>,
    payload: Result<Json<GameNightPayload>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<GameNight>), ApiError> {
    let Json(payload) = payload?;
    let game_night = services::create_game_night(state.store.as_ref(), payload).await?;
    record_game_night_mutation("created");

    let location = game_night_location(game_night.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(game_night),
    ))
}

/// Delete a game night, returning the deleted record.
///
/// DELETE /api/v1/game-nights/:id
pub async fn delete_game_night(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GameNight>, ApiError> {
    let snapshot = services::delete_game_night(state.store.as_ref(), id).await?;
    record_game_night_mutation("deleted");
    Ok(Json(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_night_location() {
        assert_eq!(game_night_location(42), "/api/v1/game-nights/42");
    }

    #[test]
    fn test_replace_payload_deserialization() {
        let json = r#"{"id": 7, "minimumNumberOfPlayers": 3, "version": 2}"#;
        let payload: GameNightPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.id, 7);
        assert_eq!(payload.minimum_number_of_players, 3);
        assert_eq!(payload.version, 2);
    }
}
