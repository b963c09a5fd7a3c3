//! Player domain model.

use serde::{Deserialize, Serialize};

/// A player attending a game night.
///
/// `game_night_id` is a plain foreign key; the parent is reached by looking it
/// up in the store, the player never owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub game_night_id: i64,
}

/// Request payload for adding a player to a game night.
///
/// Any `game_night_id` sent by the caller is replaced by the one in the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub name: String,

    #[serde(default)]
    pub game_night_id: Option<i64>,
}

/// Values for a player that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub game_night_id: i64,
}
