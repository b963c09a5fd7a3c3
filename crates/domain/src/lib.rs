//! Domain layer for the Game Night backend.
//!
//! This crate contains:
//! - Domain models (GameNight, Player)
//! - The storage port and its in-memory implementation
//! - Business logic services (validation, game night and player operations)
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;

pub use error::{DomainError, Rejection, StoreError};
