//! Repository implementations for database operations.

pub mod game_night;
pub mod player;

pub use game_night::GameNightRepository;
pub use player::PlayerRepository;
