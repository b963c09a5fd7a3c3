//! Aggregate validation for game night payloads.

use validator::Validate;

use crate::error::{DomainError, Rejection};
use crate::models::GameNightPayload;

/// Checks a candidate game night against the minimum-players invariant.
///
/// Pure: the outcome depends only on the payload.
pub fn validate_game_night(candidate: &GameNightPayload) -> Result<(), DomainError> {
    candidate
        .validate()
        .map_err(|_| DomainError::Rejected(Rejection::MinimumPlayers))
}
