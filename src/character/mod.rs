//! The player and the stats derived from their equipment.

pub mod derived_stats;
pub mod player;

pub use derived_stats::PlayerStats;
pub use player::Player;
