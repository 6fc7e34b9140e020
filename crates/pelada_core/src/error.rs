use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalanceError {
    #[error("Minimum {required} players required (found {found})")]
    InsufficientPlayers { required: usize, found: usize },

    #[error("Player {player_id} has a non-finite rating: {rating}")]
    NonFiniteRating { player_id: String, rating: f64 },

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid balancer config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BalanceError {
    /// Stable code used in JSON error responses.
    pub fn code(&self) -> &'static str {
        match self {
            BalanceError::InsufficientPlayers { .. } => "INSUFFICIENT_PLAYERS",
            BalanceError::NonFiniteRating { .. } => "NON_FINITE_RATING",
            BalanceError::UnknownAlgorithm(_) => "UNKNOWN_ALGORITHM",
            BalanceError::InvalidConfig(_) => "INVALID_CONFIG",
            BalanceError::Io(_) => "IO_ERROR",
            BalanceError::Json(_) => "INVALID_JSON",
        }
    }

    /// HTTP-equivalent status for request handlers.
    pub fn http_status(&self) -> u16 {
        match self {
            BalanceError::InsufficientPlayers { .. } => 400,
            BalanceError::NonFiniteRating { .. } => 400,
            BalanceError::UnknownAlgorithm(_) => 400,
            BalanceError::Json(_) => 400,
            BalanceError::InvalidConfig(_) => 500,
            BalanceError::Io(_) => 500,
        }
    }

    /// Message shown to the person who submitted the roster.
    pub fn user_message(&self) -> String {
        match self {
            BalanceError::InsufficientPlayers { required, .. } => {
                format!("Minimum {} players required.", required)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BalanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_players_is_client_error() {
        let err = BalanceError::InsufficientPlayers { required: 4, found: 3 };
        assert_eq!(err.http_status(), 400);
        assert_eq!(err.code(), "INSUFFICIENT_PLAYERS");
        assert_eq!(err.user_message(), "Minimum 4 players required.");
        assert_eq!(err.to_string(), "Minimum 4 players required (found 3)");
    }

    #[test]
    fn test_config_error_is_server_error() {
        let err = BalanceError::InvalidConfig("iterations must be > 0".to_string());
        assert_eq!(err.http_status(), 500);
        assert_eq!(err.code(), "INVALID_CONFIG");
    }
}
