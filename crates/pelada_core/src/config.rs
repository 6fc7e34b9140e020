//! Balancer tuning parameters.
//!
//! ```rust
//! use pelada_core::BalancerConfig;
//!
//! let config = BalancerConfig::default();
//! assert_eq!(config.iterations, 1000);
//! ```

use crate::error::{BalanceError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_ITERATIONS: u32 = 1000;
pub const MAX_ITERATIONS: u32 = 1_000_000;
pub const DEFAULT_TEMPERATURE_OFFSET: f64 = 0.01;
pub const DEFAULT_QUALITY_DIVISOR: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancerConfig {
    // === Simulated Annealing ===
    /// Fixed swap budget per run (default: 1000)
    pub iterations: u32,
    /// Added to the temperature in the acceptance exponent (default: 0.01)
    pub temperature_offset: f64,

    // === Quality Score ===
    /// Rating points of imbalance that cost one quality point (default: 10.0)
    pub quality_divisor: f64,

    // === Validation ===
    /// Reject NaN/infinite ratings instead of letting them through (default: false)
    pub strict_ratings: bool,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            temperature_offset: DEFAULT_TEMPERATURE_OFFSET,
            quality_divisor: DEFAULT_QUALITY_DIVISOR,
            strict_ratings: false,
        }
    }
}

impl BalancerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(BalanceError::InvalidConfig(format!(
                "iterations must be within 1..={}, got {}",
                MAX_ITERATIONS, self.iterations
            )));
        }
        if !(self.temperature_offset.is_finite() && self.temperature_offset > 0.0) {
            return Err(BalanceError::InvalidConfig(format!(
                "temperature_offset must be a positive number, got {}",
                self.temperature_offset
            )));
        }
        if !(self.quality_divisor.is_finite() && self.quality_divisor > 0.0) {
            return Err(BalanceError::InvalidConfig(format!(
                "quality_divisor must be a positive number, got {}",
                self.quality_divisor
            )));
        }
        Ok(())
    }

    /// Strict preset: rejects rosters carrying NaN or infinite ratings.
    pub fn strict() -> Self {
        Self { strict_ratings: true, ..Self::default() }
    }
}

// ========== Tests ==========
