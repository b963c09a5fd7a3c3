//! Persistence layer for the Game Night backend.
//!
//! This crate contains:
//! - Database connection management and migrations
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - The Postgres-backed `GameNightStore`

pub mod db;
pub mod entities;
mod metrics;
pub mod repositories;
pub mod store;

pub use store::PgGameNightStore;
