//! Characters: health, combat stats, card piles and leveling.
//!
//! - `Character`: one combatant, player or enemy
//! - `Progress`: level and XP state
//! - `LevelUp`: notification produced when a level is gained

pub mod combatant;
pub mod progression;

pub use combatant::Character;
pub use progression::{LevelUp, Progress};
