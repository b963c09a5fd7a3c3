//! GameNight entity (database row mapping).

use sqlx::FromRow;

use domain::models::GameNight;

/// Database row mapping for the game_nights table.
#[derive(Debug, Clone, FromRow)]
pub struct GameNightEntity {
    pub id: i64,
    pub minimum_number_of_players: i32,
    pub version: i64,
}

impl From<GameNightEntity> for GameNight {
    fn from(entity: GameNightEntity) -> Self {
        Self {
            id: entity.id,
            minimum_number_of_players: entity.minimum_number_of_players,
            version: entity.version,
            players: None,
        }
    }
}
