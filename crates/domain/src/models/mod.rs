//! Domain models for Game Night.

pub mod game_night;
pub mod player;

pub use game_night::{GameNight, GameNightPayload, GameNightUpdate, NewGameNight};
pub use player::{CreatePlayerRequest, NewPlayer, Player};
