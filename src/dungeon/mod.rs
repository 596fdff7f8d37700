//! Tile-map dungeons: types, generation and grid exploration.

pub mod generation;
pub mod logic;
pub mod types;

pub use generation::generate_dungeon;
pub use logic::explore_dungeon;
pub use types::*;
