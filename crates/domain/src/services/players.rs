//! Player operations scoped to a parent game night.

use tracing::info;

use crate::error::{DomainError, StoreError};
use crate::models::{CreatePlayerRequest, NewPlayer, Player};
use crate::services::store::GameNightStore;

/// Add a player to an existing game night.
///
/// The parent id always comes from `game_night_id`; whatever the request
/// carries is discarded.
pub async fn create_player_for_game_night(
    store: &dyn GameNightStore,
    game_night_id: i64,
    request: CreatePlayerRequest,
) -> Result<Player, DomainError> {
    if store.find_game_night(game_night_id, false).await?.is_none() {
        return Err(DomainError::game_night_not_found(game_night_id));
    }

    let new_player = NewPlayer {
        name: request.name,
        game_night_id,
    };

    // The parent can still vanish between the lookup and the insert.
    let player = match store.insert_player(new_player).await {
        Ok(player) => player,
        Err(StoreError::MissingParent(id)) => return Err(DomainError::game_night_not_found(id)),
        Err(e) => return Err(e.into()),
    };

    info!(
        player_id = player.id,
        game_night_id = player.game_night_id,
        "Player added to game night"
    );

    Ok(player)
}
