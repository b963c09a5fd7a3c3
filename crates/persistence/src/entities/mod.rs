//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod game_night;
pub mod player;

pub use game_night::GameNightEntity;
pub use player::PlayerEntity;
