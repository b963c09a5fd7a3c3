//! Postgres-backed implementation of the game night store.

use std::collections::HashMap;

use domain::models::{GameNight, GameNightUpdate, NewGameNight, NewPlayer, Player};
use domain::services::store::{GameNightStore, UpdateOutcome};
use domain::StoreError;
use sqlx::PgPool;
use tracing::debug;

use crate::repositories::{GameNightRepository, PlayerRepository};

/// Postgres error code for a foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// `GameNightStore` over the game_nights and players tables.
#[derive(Clone)]
pub struct PgGameNightStore {
    pool: PgPool,
    game_nights: GameNightRepository,
    players: PlayerRepository,
}

impl PgGameNightStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            game_nights: GameNightRepository::new(pool.clone()),
            players: PlayerRepository::new(pool.clone()),
            pool,
        }
    }
}

fn group_players(players: Vec<Player>) -> HashMap<i64, Vec<Player>> {
    let mut grouped: HashMap<i64, Vec<Player>> = HashMap::new();
    for player in players {
        grouped.entry(player.game_night_id).or_default().push(player);
    }
    grouped
}

#[async_trait::async_trait]
impl GameNightStore for PgGameNightStore {
    async fn scan_game_nights(
        &self,
        include_players: bool,
    ) -> Result<Vec<GameNight>, StoreError> {
        let mut game_nights: Vec<GameNight> = self
            .game_nights
            .find_all()
            .await?
            .into_iter()
            .map(GameNight::from)
            .collect();

        if include_players {
            let ids: Vec<i64> = game_nights.iter().map(|g| g.id).collect();
            let players = self
                .players
                .find_by_game_night_ids(&ids)
                .await?
                .into_iter()
                .map(Player::from)
                .collect();
            let mut grouped = group_players(players);
            for game_night in &mut game_nights {
                game_night.players = Some(grouped.remove(&game_night.id).unwrap_or_default());
            }
        }

        Ok(game_nights)
    }

    async fn find_game_night(
        &self,
        id: i64,
        include_players: bool,
    ) -> Result<Option<GameNight>, StoreError> {
        let Some(entity) = self.game_nights.find_by_id(id).await? else {
            return Ok(None);
        };
        let mut game_night = GameNight::from(entity);

        if include_players {
            let players = self
                .players
                .find_by_game_night_id(id)
                .await?
                .into_iter()
                .map(Player::from)
                .collect();
            game_night.players = Some(players);
        }

        Ok(Some(game_night))
    }

    async fn insert_game_night(
        &self,
        new_game_night: NewGameNight,
    ) -> Result<GameNight, StoreError> {
        let entity = self
            .game_nights
            .create(new_game_night.minimum_number_of_players)
            .await?;
        Ok(entity.into())
    }

    async fn update_game_night(
        &self,
        update: GameNightUpdate,
    ) -> Result<UpdateOutcome, StoreError> {
        let updated = self
            .game_nights
            .update_if_version(
                update.id,
                update.minimum_number_of_players,
                update.expected_version,
            )
            .await?;

        if let Some(entity) = updated {
            debug!(
                game_night_id = entity.id,
                version = entity.version,
                "Game night version advanced"
            );
            return Ok(UpdateOutcome::Updated);
        }

        // No row matched: either the record is gone or its version moved on.
        let still_exists = self.game_nights.exists(update.id).await?;
        Ok(UpdateOutcome::Conflict { still_exists })
    }

    async fn delete_game_night(&self, id: i64) -> Result<bool, StoreError> {
        let rows_affected = self.game_nights.delete(id).await?;
        debug!(game_night_id = id, rows_affected, "Game night delete executed");
        Ok(rows_affected > 0)
    }

    async fn insert_player(&self, new_player: NewPlayer) -> Result<Player, StoreError> {
        match self
            .players
            .create(&new_player.name, new_player.game_night_id)
            .await
        {
            Ok(entity) => Ok(entity.into()),
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
            {
                Err(StoreError::MissingParent(new_player.game_night_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
