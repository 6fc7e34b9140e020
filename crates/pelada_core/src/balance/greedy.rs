use crate::models::{Player, Team, TEAM_NAMES};

/// Rating-sorted alternating split.
///
/// Players are stable-sorted by rating (highest first), then dealt out like
/// cards: even positions to Team 1, odd positions to Team 2. Equal ratings,
/// including `0.0` and `-0.0`, keep their input order; `total_cmp` only breaks
/// the comparisons that involve NaN.
pub fn greedy_split(roster: &[Player]) -> [Team; 2] {
    let mut sorted: Vec<&Player> = roster.iter().collect();
    sorted.sort_by(|a, b| {
        b.rating.partial_cmp(&a.rating).unwrap_or_else(|| b.rating.total_cmp(&a.rating))
    });

    let mut team1 = Vec::with_capacity(roster.len().div_ceil(2));
    let mut team2 = Vec::with_capacity(roster.len() / 2);

    for (idx, player) in sorted.into_iter().enumerate() {
        if idx % 2 == 0 {
            team1.push(player.clone());
        } else {
            team2.push(player.clone());
        }
    }

    [Team::from_players(TEAM_NAMES[0], team1), Team::from_players(TEAM_NAMES[1], team2)]
}
