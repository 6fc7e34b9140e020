use super::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const TEAM_NAMES: [&str; 2] = ["Team 1", "Team 2"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
    pub total_rating: f64,
    pub average_rating: f64,
}

impl Team {
    /// Builds a team and derives its rating totals from the members.
    pub fn from_players(name: impl Into<String>, players: Vec<Player>) -> Self {
        let total_rating = total_rating(&players);
        let average_rating =
            if players.is_empty() { 0.0 } else { total_rating / players.len() as f64 };

        Self { name: name.into(), players, total_rating, average_rating }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

pub(crate) fn total_rating(players: &[Player]) -> f64 {
    players.iter().map(|p| p.rating).sum()
}
