//! GameNight repository for database operations.

use sqlx::PgPool;

use crate::entities::GameNightEntity;
use crate::metrics::QueryTimer;

/// Repository for game-night-related database operations.
#[derive(Clone)]
pub struct GameNightRepository {
    pool: PgPool,
}

impl GameNightRepository {
    /// Creates a new GameNightRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new game night. The database assigns id and initial version.
    pub async fn create(
        &self,
        minimum_number_of_players: i32,
    ) -> Result<GameNightEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_game_night");
        let result = sqlx::query_as::<_, GameNightEntity>(
            r#"
            INSERT INTO game_nights (minimum_number_of_players)
            VALUES ($1)
            RETURNING id, minimum_number_of_players, version
            "#,
        )
        .bind(minimum_number_of_players)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find all game nights ordered by id.
    pub async fn find_all(&self) -> Result<Vec<GameNightEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_game_nights");
        let result = sqlx::query_as::<_, GameNightEntity>(
            r#"
            SELECT id, minimum_number_of_players, version
            FROM game_nights
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find game night by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<GameNightEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_game_night_by_id");
        let result = sqlx::query_as::<_, GameNightEntity>(
            r#"
            SELECT id, minimum_number_of_players, version
            FROM game_nights
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Replace a game night if its version still equals `expected_version`.
    /// Returns `None` when no row matched (missing or stale).
    pub async fn update_if_version(
        &self,
        id: i64,
        minimum_number_of_players: i32,
        expected_version: i64,
    ) -> Result<Option<GameNightEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_game_night_if_version");
        let result = sqlx::query_as::<_, GameNightEntity>(
            r#"
            UPDATE game_nights SET
                minimum_number_of_players = $2,
                version = version + 1,
                updated_at = NOW()
            WHERE id = $1 AND version = $3
            RETURNING id, minimum_number_of_players, version
            "#,
        )
        .bind(id)
        .bind(minimum_number_of_players)
        .bind(expected_version)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Check whether a game night exists.
    pub async fn exists(&self, id: i64) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("game_night_exists");
        let result: Result<(bool,), sqlx::Error> = sqlx::query_as(
            r#"
            SELECT EXISTS(SELECT 1 FROM game_nights WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        Ok(result?.0)
    }

    /// Delete a game night; its players are removed by the foreign key cascade.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_game_night");
        let result = sqlx::query(
            r#"
            DELETE FROM game_nights WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
