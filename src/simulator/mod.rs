//! Headless dungeon resolution and batch balance runs.
//!
//! `simulate_dungeon_run` resolves a dungeon as a plain list of fights. The
//! batch runner generates many dungeons and resolves each with either that
//! or the grid explorer, then aggregates the outcomes.

mod config;
mod dungeon_run;
mod report;
mod runner;

pub use config::{SimConfig, Strategy};
pub use dungeon_run::{roll_run_loot, simulate_dungeon_run};
pub use report::{RunSummary, SimReport};
pub use runner::run_batch;
