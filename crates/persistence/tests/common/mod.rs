//! Common test utilities for Postgres-backed integration tests.
//!
//! Tests run only when `TEST_DATABASE_URL` points at a disposable database;
//! otherwise they return early.

#![allow(dead_code)]

use std::time::Duration;

use domain::models::{GameNight, NewGameNight};
use domain::services::GameNightStore;
use persistence::PgGameNightStore;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Create a test database pool with migrations applied, if a test database
/// is configured.
pub async fn create_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    persistence::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Store over the test database, or `None` when no database is configured.
pub async fn create_test_store() -> Option<PgGameNightStore> {
    match create_test_pool().await {
        Some(pool) => Some(PgGameNightStore::new(pool)),
        None => {
            eprintln!("TEST_DATABASE_URL not set; skipping Postgres test");
            None
        }
    }
}

/// Insert a game night with the given minimum.
pub async fn insert_game_night(store: &PgGameNightStore, minimum: i32) -> GameNight {
    store
        .insert_game_night(NewGameNight {
            minimum_number_of_players: minimum,
        })
        .await
        .expect("Failed to insert game night")
}
