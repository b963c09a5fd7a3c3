//! Game night operations.
//!
//! Mutations pass the aggregate validator before touching the store. Replace
//! relies on the store's version check to detect lost updates:
//! - a conflict on a deleted record becomes `NotFound`
//! - a conflict on a live record becomes `ConcurrencyConflict` and is not retried

use tracing::{info, warn};

use crate::error::{DomainError, Rejection};
use crate::models::{GameNight, GameNightPayload, GameNightUpdate, NewGameNight};
use crate::services::store::{GameNightStore, UpdateOutcome};
use crate::services::validation::validate_game_night;

/// All game nights in ascending id order, players included.
pub async fn list_game_nights(store: &dyn GameNightStore) -> Result<Vec<GameNight>, DomainError> {
    Ok(store.scan_game_nights(true).await?)
}

/// A single game night, without its players.
pub async fn get_game_night(store: &dyn GameNightStore, id: i64) -> Result<GameNight, DomainError> {
    store
        .find_game_night(id, false)
        .await?
        .ok_or_else(|| DomainError::game_night_not_found(id))
}

/// Replace the game night `id` with `payload`.
///
/// Returns the payload as submitted; the version the store moved to is not
/// reported back.
pub async fn replace_game_night(
    store: &dyn GameNightStore,
    id: i64,
    payload: GameNightPayload,
) -> Result<GameNight, DomainError> {
    if payload.id != id {
        return Err(DomainError::Rejected(Rejection::IdMismatch));
    }
    validate_game_night(&payload)?;

    let update = GameNightUpdate {
        id,
        minimum_number_of_players: payload.minimum_number_of_players,
        expected_version: payload.version,
    };

    match store.update_game_night(update).await? {
        UpdateOutcome::Updated => {
            info!(
                game_night_id = id,
                minimum_number_of_players = payload.minimum_number_of_players,
                "Game night replaced"
            );
            Ok(payload.into())
        }
        UpdateOutcome::Conflict {
            still_exists: false,
        } => Err(DomainError::game_night_not_found(id)),
        UpdateOutcome::Conflict { still_exists: true } => {
            warn!(
                game_night_id = id,
                expected_version = payload.version,
                "Game night was modified concurrently"
            );
            Err(DomainError::ConcurrencyConflict { id })
        }
    }
}

/// Create a game night. Any id or version in the payload is ignored.
pub async fn create_game_night(
    store: &dyn GameNightStore,
    payload: GameNightPayload,
) -> Result<GameNight, DomainError> {
    validate_game_night(&payload)?;

    let game_night = store
        .insert_game_night(NewGameNight {
            minimum_number_of_players: payload.minimum_number_of_players,
        })
        .await?;

    info!(
        game_night_id = game_night.id,
        minimum_number_of_players = game_night.minimum_number_of_players,
        "Game night created"
    );

    Ok(game_night)
}

/// Delete a game night, returning the record as it was before removal.
pub async fn delete_game_night(
    store: &dyn GameNightStore,
    id: i64,
) -> Result<GameNight, DomainError> {
    let snapshot = store
        .find_game_night(id, false)
        .await?
        .ok_or_else(|| DomainError::game_night_not_found(id))?;

    // A concurrent delete may win between the lookup and this call.
    if !store.delete_game_night(id).await? {
        return Err(DomainError::game_night_not_found(id));
    }

    info!(game_night_id = id, "Game night deleted");
    Ok(snapshot)
}
