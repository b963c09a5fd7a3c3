//! GameNight domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::player::Player;

/// A planned game night, the aggregate root owning its players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameNight {
    pub id: i64,
    pub minimum_number_of_players: i32,
    /// Concurrency token; bumped by the store on every successful replace.
    pub version: i64,
    /// Only loaded when the caller asks for players to be included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
}

/// Request payload for creating or replacing a game night.
///
/// `id` and `version` are ignored on create. On replace, `id` must match the
/// path and `version` is the token the caller last read.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GameNightPayload {
    #[serde(default)]
    pub id: i64,

    #[validate(custom(function = "shared::validation::validate_minimum_players"))]
    pub minimum_number_of_players: i32,

    #[serde(default)]
    pub version: i64,
}

impl From<GameNightPayload> for GameNight {
    fn from(payload: GameNightPayload) -> Self {
        Self {
            id: payload.id,
            minimum_number_of_players: payload.minimum_number_of_players,
            version: payload.version,
            players: None,
        }
    }
}

/// Values for a game night that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameNight {
    pub minimum_number_of_players: i32,
}

/// A full replacement of a game night, conditional on `expected_version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameNightUpdate {
    pub id: i64,
    pub minimum_number_of_players: i32,
    pub expected_version: i64,
}
