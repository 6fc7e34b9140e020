//! # Team Balancer
//!
//! Validates the roster, runs the selected split algorithm and scores the
//! result.
//!
//! ```rust
//! use pelada_core::{Algorithm, Player, TeamBalancer};
//!
//! let roster: Vec<Player> = [1000.0, 900.0, 800.0, 700.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &r)| Player::new(i.to_string(), format!("P{}", i), r))
//!     .collect();
//!
//! let result = TeamBalancer::default()
//!     .balance_seeded(&roster, Algorithm::GreedySplit, 7)
//!     .unwrap();
//! assert_eq!(result.quality, 80.0);
//! ```

pub mod annealing;
pub mod greedy;
pub mod quality;
pub mod roster;


pub use annealing::{refine, AnnealingState};
pub use greedy::greedy_split;
pub use quality::{quality_score, MAX_QUALITY};
pub use roster::{validate_ratings, validate_roster, MIN_PLAYERS};

use crate::config::BalancerConfig;
use crate::error::{BalanceError, Result};
use crate::models::{Player, Team};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Split strategy requested by the caller.
///
/// The wire label of the greedy split is `GENETIC` for compatibility with
/// existing clients, although no population search is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "GENETIC", alias = "GREEDY")]
    GreedySplit,
    #[serde(rename = "SIMULATED_ANNEALING")]
    StochasticRefine,
}

impl Algorithm {
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::GreedySplit => "GENETIC",
            Algorithm::StochasticRefine => "SIMULATED_ANNEALING",
        }
    }

    /// Whether the outcome depends on the random source.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, Algorithm::StochasticRefine)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "GENETIC" | "GREEDY" => Ok(Algorithm::GreedySplit),
            "SIMULATED_ANNEALING" | "ANNEALING" => Ok(Algorithm::StochasticRefine),
            _ => Err(BalanceError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Two teams plus how evenly they are matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResult {
    pub teams: [Team; 2],
    pub algorithm: Algorithm,
    /// 0-100, higher is more even.
    pub quality: f64,
    pub rating_gap: f64,
}

impl BalanceResult {
    fn from_teams(teams: [Team; 2], algorithm: Algorithm, config: &BalancerConfig) -> Self {
        let rating_gap = (teams[0].total_rating - teams[1].total_rating).abs();
        let quality = quality_score(rating_gap, config.quality_divisor);
        Self { teams, algorithm, quality, rating_gap }
    }
}

/// Stateless between calls; holds only the tuning parameters.
#[derive(Debug, Clone, Default)]
pub struct TeamBalancer {
    config: BalancerConfig,
}

impl TeamBalancer {
    pub fn new(config: BalancerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    /// Balances `roster` into two teams using `rng` for any random choice.
    pub fn balance<R: Rng>(
        &self,
        roster: &[Player],
        algorithm: Algorithm,
        rng: &mut R,
    ) -> Result<BalanceResult> {
        validate_roster(roster)?;
        if self.config.strict_ratings {
            validate_ratings(roster)?;
        }

        debug!("Balancing {} players with {}", roster.len(), algorithm);

        let teams = match algorithm {
            Algorithm::GreedySplit => greedy_split(roster),
            Algorithm::StochasticRefine => refine(roster, &self.config, rng).best_teams(roster),
        };

        let result = BalanceResult::from_teams(teams, algorithm, &self.config);
        debug!("Balanced teams: gap {}, quality {}", result.rating_gap, result.quality);
        Ok(result)
    }

    /// Same as [`TeamBalancer::balance`] with a ChaCha8 stream seeded from `seed`,
    /// so a draw can be replayed.
    pub fn balance_seeded(
        &self,
        roster: &[Player],
        algorithm: Algorithm,
        seed: u64,
    ) -> Result<BalanceResult> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.balance(roster, algorithm, &mut rng)
    }
}
