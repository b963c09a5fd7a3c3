//! Player repository for database operations.

use sqlx::PgPool;

use crate::entities::PlayerEntity;
use crate::metrics::QueryTimer;

/// Repository for player-related database operations.
#[derive(Clone)]
pub struct PlayerRepository {
    pool: PgPool,
}

impl PlayerRepository {
    /// Creates a new PlayerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new player under a game night.
    pub async fn create(&self, name: &str, game_night_id: i64) -> Result<PlayerEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_player");
        let result = sqlx::query_as::<_, PlayerEntity>(
            r#"
            INSERT INTO players (name, game_night_id)
            VALUES ($1, $2)
            RETURNING id, name, game_night_id
            "#,
        )
        .bind(name)
        .bind(game_night_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find the players of one game night.
    pub async fn find_by_game_night_id(
        &self,
        game_night_id: i64,
    ) -> Result<Vec<PlayerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_players_by_game_night");
        let result = sqlx::query_as::<_, PlayerEntity>(
            r#"
            SELECT id, name, game_night_id
            FROM players
            WHERE game_night_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(game_night_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find the players of several game nights in one round trip.
    pub async fn find_by_game_night_ids(
        &self,
        game_night_ids: &[i64],
    ) -> Result<Vec<PlayerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_players_by_game_nights");
        let result = sqlx::query_as::<_, PlayerEntity>(
            r#"
            SELECT id, name, game_night_id
            FROM players
            WHERE game_night_id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(game_night_ids)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
