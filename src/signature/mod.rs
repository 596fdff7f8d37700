//! Signature vectors and their dimension catalog.

pub mod catalog;
pub mod types;

pub use catalog::{Dimension, DIMENSIONS};
pub use types::Signature;
