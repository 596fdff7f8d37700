//! Enemies, the shared fight primitive and run result types.

pub mod affinity;
pub mod logic;
pub mod types;

pub use affinity::affinity_bonus;
pub use logic::resolve_fight;
pub use types::*;
