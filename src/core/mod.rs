//! Core engine types: sides, match state, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. Variants of the game are
//! expressed through `MatchConfig` rather than separate code paths.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;
pub mod state;

pub use config::{Capabilities, MatchConfig, Progression};
pub use error::{BattleError, BattleResult};
pub use rng::{GameRng, GameRngState};
pub use side::{Side, Sides};
pub use state::{BattlePhase, MatchState};
