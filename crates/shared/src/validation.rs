//! Common validation utilities.

use validator::ValidationError;

/// Smallest number of players a game night may be planned for.
pub const MIN_PLAYERS_PER_GAME_NIGHT: i32 = 2;

/// Error code attached to a minimum-players violation.
pub const MINIMUM_PLAYERS_VIOLATION: &str = "minimum-players-violation";

/// Validates that a game night requires at least two players.
pub fn validate_minimum_players(minimum: i32) -> Result<(), ValidationError> {
    if minimum >= MIN_PLAYERS_PER_GAME_NIGHT {
        Ok(())
    } else {
        let mut err = ValidationError::new(MINIMUM_PLAYERS_VIOLATION);
        err.message = Some(
            format!(
                "A game night needs a minimum of at least {} players",
                MIN_PLAYERS_PER_GAME_NIGHT
            )
            .into(),
        );
        Err(err)
    }
}
