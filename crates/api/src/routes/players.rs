//! Player endpoint handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use domain::models::{CreatePlayerRequest, Player};
use domain::services;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_player_created;

/// Add a player to a game night.
///
/// POST /api/v1/game-nights/:game_night_id/players
///
/// Responds 200 (not 201); the parent id from the path replaces any
/// `gameNightId` in the body.
pub async fn create_player(
    State(state): State<AppState>,
    Path(game_night_id): Path<i64>,
    request: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(request) = request?;
    let player =
        services::create_player_for_game_night(state.store.as_ref(), game_night_id, request)
            .await?;

    record_player_created();
    Ok(Json(player))
}
