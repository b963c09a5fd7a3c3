//! Storage port for game nights and players.
//!
//! Provides the abstraction the services persist through, plus an in-memory
//! implementation for development and testing.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::{GameNight, GameNightUpdate, NewGameNight, NewPlayer, Player};

/// Result of a version-checked update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// No row matched the expected version. `still_exists` tells a concurrent
    /// write apart from a concurrent delete.
    Conflict { still_exists: bool },
}

/// Storage operations for game nights and their players.
#[async_trait::async_trait]
pub trait GameNightStore: Send + Sync {
    /// All game nights in ascending id order.
    async fn scan_game_nights(&self, include_players: bool)
        -> Result<Vec<GameNight>, StoreError>;

    async fn find_game_night(
        &self,
        id: i64,
        include_players: bool,
    ) -> Result<Option<GameNight>, StoreError>;

    /// Persist a new game night; the store assigns id and initial version.
    async fn insert_game_night(&self, new_game_night: NewGameNight)
        -> Result<GameNight, StoreError>;

    /// Replace a game night if its stored version equals `expected_version`.
    /// Compare and write happen as one atomic step.
    async fn update_game_night(&self, update: GameNightUpdate)
        -> Result<UpdateOutcome, StoreError>;

    /// Remove a game night together with its players. Returns `false` when
    /// there was nothing to remove.
    async fn delete_game_night(&self, id: i64) -> Result<bool, StoreError>;

    /// Persist a new player. Fails with `StoreError::MissingParent` when the
    /// referenced game night is gone.
    async fn insert_player(&self, new_player: NewPlayer) -> Result<Player, StoreError>;

    /// Cheap connectivity probe for health checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Version assigned to freshly inserted game nights.
pub const INITIAL_VERSION: i64 = 1;

#[derive(Debug, Default)]
struct InMemoryState {
    game_nights: BTreeMap<i64, GameNight>,
    players: BTreeMap<i64, Player>,
    last_game_night_id: i64,
    last_player_id: i64,
}

impl InMemoryState {
    fn players_of(&self, game_night_id: i64) -> Vec<Player> {
        self.players
            .values()
            .filter(|p| p.game_night_id == game_night_id)
            .cloned()
            .collect()
    }

    fn load(&self, game_night: &GameNight, include_players: bool) -> GameNight {
        GameNight {
            players: include_players.then(|| self.players_of(game_night.id)),
            ..game_night.clone()
        }
    }
}

/// Process-local store.
///
/// Ids are never reused, matching a database sequence. Counts write calls so
/// tests can assert that rejected requests never reach the write path.
#[derive(Debug, Default)]
pub struct InMemoryGameNightStore {
    state: RwLock<InMemoryState>,
    writes: AtomicUsize,
    /// Whether to simulate an unreachable backend.
    simulate_failure: bool,
}

impl InMemoryGameNightStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every call fails as if the backend were down.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Number of insert, update and delete calls received so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.simulate_failure {
            tracing::warn!("In-memory store simulating failure");
            return Err(StoreError::Unavailable("Simulated failure".to_string()));
        }
        Ok(())
    }

    fn record_write(&self) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check_available()
    }
}

#[async_trait::async_trait]
impl GameNightStore for InMemoryGameNightStore {
    async fn scan_game_nights(
        &self,
        include_players: bool,
    ) -> Result<Vec<GameNight>, StoreError> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state
            .game_nights
            .values()
            .map(|g| state.load(g, include_players))
            .collect())
    }

    async fn find_game_night(
        &self,
        id: i64,
        include_players: bool,
    ) -> Result<Option<GameNight>, StoreError> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state
            .game_nights
            .get(&id)
            .map(|g| state.load(g, include_players)))
    }

    async fn insert_game_night(
        &self,
        new_game_night: NewGameNight,
    ) -> Result<GameNight, StoreError> {
        self.record_write()?;
        let mut state = self.state.write().await;
        state.last_game_night_id += 1;
        let game_night = GameNight {
            id: state.last_game_night_id,
            minimum_number_of_players: new_game_night.minimum_number_of_players,
            version: INITIAL_VERSION,
            players: None,
        };
        state.game_nights.insert(game_night.id, game_night.clone());
        Ok(game_night)
    }

    async fn update_game_night(
        &self,
        update: GameNightUpdate,
    ) -> Result<UpdateOutcome, StoreError> {
        self.record_write()?;
        let mut state = self.state.write().await;
        let Some(stored) = state.game_nights.get_mut(&update.id) else {
            return Ok(UpdateOutcome::Conflict {
                still_exists: false,
            });
        };
        if stored.version != update.expected_version {
            return Ok(UpdateOutcome::Conflict { still_exists: true });
        }
        stored.minimum_number_of_players = update.minimum_number_of_players;
        stored.version += 1;
        Ok(UpdateOutcome::Updated)
    }

    async fn delete_game_night(&self, id: i64) -> Result<bool, StoreError> {
        self.record_write()?;
        let mut state = self.state.write().await;
        if state.game_nights.remove(&id).is_none() {
            return Ok(false);
        }
        state.players.retain(|_, p| p.game_night_id != id);
        Ok(true)
    }

    async fn insert_player(&self, new_player: NewPlayer) -> Result<Player, StoreError> {
        self.record_write()?;
        let mut state = self.state.write().await;
        if !state.game_nights.contains_key(&new_player.game_night_id) {
            return Err(StoreError::MissingParent(new_player.game_night_id));
        }
        state.last_player_id += 1;
        let player = Player {
            id: state.last_player_id,
            name: new_player.name,
            game_night_id: new_player.game_night_id,
        };
        state.players.insert(player.id, player.clone());
        Ok(player)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
