//! HTTP route handlers.

pub mod game_nights;
pub mod health;
pub mod players;
