//! Simulated-annealing refinement of a two-team split.
//!
//! The search starts from the roster cut in half (input order, Team 1 gets
//! the extra player) and tries one-for-one swaps across teams. Team sizes
//! therefore never change during a run.

use crate::config::BalancerConfig;
use crate::models::{Player, Team, TEAM_NAMES};
use rand::Rng;
use tracing::{debug, warn};

/// Working partition plus the best partition seen so far.
///
/// Teams are stored as indices into the roster so that snapshots stay cheap.
#[derive(Debug, Clone)]
pub struct AnnealingState {
    pub team1: Vec<usize>,
    pub team2: Vec<usize>,
    pub current_diff: f64,

    pub best_team1: Vec<usize>,
    pub best_team2: Vec<usize>,
    pub best_diff: f64,

    pub initial_diff: f64,
    pub improvements: u32,
    /// Swaps kept although they did not beat the best diff.
    pub accepted_non_improving: u32,
}

impl AnnealingState {
    /// First `ceil(n/2)` players to Team 1, the rest to Team 2.
    pub fn initial(roster: &[Player]) -> Self {
        let split = roster.len().div_ceil(2);
        let team1: Vec<usize> = (0..split).collect();
        let team2: Vec<usize> = (split..roster.len()).collect();

        let diff = side_gap(roster, &team1, &team2);

        Self {
            best_team1: team1.clone(),
            best_team2: team2.clone(),
            team1,
            team2,
            current_diff: diff,
            best_diff: diff,
            initial_diff: diff,
            improvements: 0,
            accepted_non_improving: 0,
        }
    }

    /// One swap attempt at the given temperature.
    ///
    /// The candidate gap is summed from the members of both sides in team
    /// order, the same way `Team` totals are, so `best_diff` always equals the
    /// gap reported for the best teams. A rejected move is swapped back.
    pub fn step<R: Rng>(
        &mut self,
        roster: &[Player],
        temperature: f64,
        temperature_offset: f64,
        rng: &mut R,
    ) {
        if self.team1.is_empty() || self.team2.is_empty() {
            return;
        }

        let i = rng.gen_range(0..self.team1.len());
        let j = rng.gen_range(0..self.team2.len());

        std::mem::swap(&mut self.team1[i], &mut self.team2[j]);
        let new_diff = side_gap(roster, &self.team1, &self.team2);

        let improves = new_diff < self.best_diff;
        let accepted = improves
            || rng.gen::<f64>() < (-new_diff / (temperature + temperature_offset)).exp();
        if !accepted {
            std::mem::swap(&mut self.team1[i], &mut self.team2[j]);
            return;
        }

        self.current_diff = new_diff;

        if improves {
            self.best_team1.clone_from(&self.team1);
            self.best_team2.clone_from(&self.team2);
            self.best_diff = new_diff;
            self.improvements += 1;
        } else {
            self.accepted_non_improving += 1;
        }
    }

    /// Materializes the best-known partition as teams.
    pub fn best_teams(&self, roster: &[Player]) -> [Team; 2] {
        let pick = |indices: &[usize]| -> Vec<Player> {
            indices.iter().map(|&i| roster[i].clone()).collect()
        };
        [
            Team::from_players(TEAM_NAMES[0], pick(&self.best_team1)),
            Team::from_players(TEAM_NAMES[1], pick(&self.best_team2)),
        ]
    }
}

fn side_gap(roster: &[Player], team1: &[usize], team2: &[usize]) -> f64 {
    let total = |side: &[usize]| -> f64 { side.iter().map(|&i| roster[i].rating).sum() };
    (total(team1) - total(team2)).abs()
}

/// Runs the full annealing schedule over `roster`.
///
/// Iteration `t` runs at temperature `1 - t / iterations`, decaying linearly
/// from 1 towards 0.
pub fn refine<R: Rng>(roster: &[Player], config: &BalancerConfig, rng: &mut R) -> AnnealingState {
    let mut state = AnnealingState::initial(roster);

    if state.team1.is_empty() || state.team2.is_empty() {
        warn!("Annealing skipped: one side of the initial split is empty ({} players)", roster.len());
        return state;
    }

    let iterations = config.iterations;
    for t in 0..iterations {
        let temperature = 1.0 - t as f64 / iterations as f64;
        state.step(roster, temperature, config.temperature_offset, rng);
    }

    debug!(
        "Annealing finished: {} iterations, gap {} -> {} (working {}), {} improvements, {} non-improving accepts",
        iterations,
        state.initial_diff,
        state.best_diff,
        state.current_diff,
        state.improvements,
        state.accepted_non_improving
    );

    state
}
