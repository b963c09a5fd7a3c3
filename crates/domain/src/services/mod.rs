//! Domain services for Game Night.
//!
//! Services contain business logic that operates on domain models. Every
//! operation receives the store it persists through explicitly.

pub mod game_nights;
pub mod players;
pub mod store;
pub mod validation;

pub use game_nights::{
    create_game_night, delete_game_night, get_game_night, list_game_nights, replace_game_night,
};
pub use players::create_player_for_game_night;
pub use store::{GameNightStore, InMemoryGameNightStore, UpdateOutcome, INITIAL_VERSION};
pub use validation::validate_game_night;
