use crate::error::{BalanceError, Result};
use crate::models::Player;

/// Smallest roster that still yields two real teams.
pub const MIN_PLAYERS: usize = 4;

/// Only the roster size is checked here. Duplicate ids and odd ratings are
/// the caller's business.
pub fn validate_roster(roster: &[Player]) -> Result<()> {
    if roster.len() < MIN_PLAYERS {
        return Err(BalanceError::InsufficientPlayers {
            required: MIN_PLAYERS,
            found: roster.len(),
        });
    }
    Ok(())
}

/// Strict-mode check: every rating must be a finite number.
pub fn validate_ratings(roster: &[Player]) -> Result<()> {
    match roster.iter().find(|p| !p.rating.is_finite()) {
        Some(player) => Err(BalanceError::NonFiniteRating {
            player_id: player.id.clone(),
            rating: player.rating,
        }),
        None => Ok(()),
    }
}
