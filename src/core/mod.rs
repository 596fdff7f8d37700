//! Shared tunables, configuration, errors and the play session.

pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;

pub use config::BalanceConfig;
pub use error::{ConfigError, SessionError, SignatureError};
pub use game_state::GameState;
