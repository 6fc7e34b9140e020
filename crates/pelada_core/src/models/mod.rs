pub mod player;
pub mod team;

pub use player::Player;
pub use team::{Team, TEAM_NAMES};
