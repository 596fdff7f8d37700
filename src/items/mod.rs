//! Item system: types, naming, generation, equipment and inventory.

pub mod equipment;
pub mod generation;
pub mod inventory;
pub mod names;
pub mod types;

pub use equipment::*;
pub use generation::*;
pub use inventory::*;
pub use types::*;
