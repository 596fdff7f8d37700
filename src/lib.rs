//! Sigil Delve - signature-driven dungeons and run resolution.
//!
//! Every item, tile, enemy and dungeon carries a small [`Signature`] vector.
//! Dungeons are generated from an item's signature, and runs through them are
//! resolved either as a plain list of fights ([`simulate_dungeon_run`]) or by
//! walking the tile grid ([`explore_dungeon`]). All randomness is passed in
//! explicitly, so a seeded RNG replays a run exactly.

pub mod character;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod items;
pub mod signature;
pub mod simulator;

pub use character::{Player, PlayerStats};
pub use combat::{DungeonResult, RunDuration, RunOutcome};
pub use core::{BalanceConfig, GameState};
pub use dungeon::{explore_dungeon, generate_dungeon, Dungeon};
pub use signature::Signature;
pub use simulator::simulate_dungeon_run;
