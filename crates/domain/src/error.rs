//! Domain error types.

use std::fmt;

use shared::validation::{MINIMUM_PLAYERS_VIOLATION, MIN_PLAYERS_PER_GAME_NIGHT};
use thiserror::Error;

/// A caller-correctable reason for refusing a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The payload asks for fewer than two players.
    MinimumPlayers,
    /// The payload id differs from the id addressed by the request.
    IdMismatch,
}

impl Rejection {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::MinimumPlayers => MINIMUM_PLAYERS_VIOLATION,
            Rejection::IdMismatch => "id-mismatch",
        }
    }

    /// Human-readable explanation.
    pub fn message(&self) -> String {
        match self {
            Rejection::MinimumPlayers => format!(
                "A game night needs a minimum of at least {} players",
                MIN_PLAYERS_PER_GAME_NIGHT
            ),
            Rejection::IdMismatch => {
                "The id in the payload does not match the id in the path".to_string()
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// Failures reported by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Game night {0} does not exist")]
    MissingParent(i64),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors produced by game night and player operations.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Rejected: {0}")]
    Rejected(Rejection),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The record still exists but another writer replaced it first.
    /// Never retried; the caller has to re-read and resubmit.
    #[error("Game night {id} was modified by another writer")]
    ConcurrencyConflict { id: i64 },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl DomainError {
    pub fn game_night_not_found(id: i64) -> Self {
        DomainError::NotFound(format!("Game night {} not found", id))
    }
}
