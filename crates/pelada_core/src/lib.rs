//! # pelada_core - Team Balancing Engine
//!
//! Splits a roster of rated players into two teams for a pickup match.
//!
//! ## Features
//! - Greedy split (rating-sorted, alternating picks), fully deterministic
//! - Simulated-annealing refinement with an injected, seedable RNG
//! - Bounded 0-100 balance quality score
//! - JSON API for request handlers

pub mod api;
pub mod balance;
pub mod config;
pub mod error;
pub mod models;

pub use api::{balance_teams_json, balance_teams_json_with_config, BalanceRequest, BalanceResponse};
pub use balance::{Algorithm, BalanceResult, TeamBalancer, MIN_PLAYERS};
pub use config::BalancerConfig;
pub use error::{BalanceError, Result};
pub use models::{Player, Team};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generate_test_roster() -> serde_json::Value {
        json!([
            { "id": "p1", "name": "Ana", "email": "ana@pelada.test", "rating": 1000.0 },
            { "id": "p2", "name": "Bruno", "email": "bruno@pelada.test", "rating": 900.0 },
            { "id": "p3", "name": "Caio", "email": "caio@pelada.test", "rating": 800.0, "position": "GK" },
            { "id": "p4", "name": "Davi", "email": "davi@pelada.test", "rating": 700.0 }
        ])
    }

    #[test]
    fn test_basic_balance() {
        let request = json!({ "players": generate_test_roster() });

        let response = balance_teams_json(&request.to_string());
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["data"]["algorithm"], "GENETIC");
        assert_eq!(parsed["data"]["quality"], 80.0);
        assert_eq!(parsed["data"]["teams"][0]["totalRating"], 1800.0);
        assert_eq!(parsed["data"]["teams"][1]["totalRating"], 1600.0);
    }

    #[test]
    fn test_determinism() {
        let request = json!({
            "players": generate_test_roster(),
            "algorithm": "SIMULATED_ANNEALING",
            "seed": 999
        })
        .to_string();

        let first: serde_json::Value =
            serde_json::from_str(&balance_teams_json(&request)).unwrap();
        let second: serde_json::Value =
            serde_json::from_str(&balance_teams_json(&request)).unwrap();

        assert_eq!(first["data"], second["data"], "Same seed should produce same teams");
    }
}
