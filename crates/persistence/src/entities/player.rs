//! Player entity (database row mapping).

use sqlx::FromRow;

use domain::models::Player;

/// Database row mapping for the players table.
#[derive(Debug, Clone, FromRow)]
pub struct PlayerEntity {
    pub id: i64,
    pub name: String,
    pub game_night_id: i64,
}

impl From<PlayerEntity> for Player {
    fn from(entity: PlayerEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            game_night_id: entity.game_night_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_entity_to_domain() {
        let entity = PlayerEntity {
            id: 12,
            name: "Ann".to_string(),
            game_night_id: 3,
        };
        let player: Player = entity.into();

        assert_eq!(player.id, 12);
        assert_eq!(player.name, "Ann");
        assert_eq!(player.game_night_id, 3);
    }
}
