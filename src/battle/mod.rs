//! Battle rules: damage, turn resolution, rewards and round progression.
//!
//! ## Key Types
//!
//! - `BattleEngine`: resolves plays and advances rounds on a `MatchState`
//! - `TurnOutcome`: what a single play led to
//! - `TurnRecord`: history entry for one play
//! - `CardPolicy`: how an automated side picks its card
//!
//! ## Damage
//!
//! `damage = card.damage * multiplier * target.damage_resistance`, where the
//! multiplier depends on the card kind (see `damage_multiplier`).

pub mod damage;
pub mod engine;
pub mod policy;
pub mod record;

pub use damage::{damage_dealt, damage_multiplier};
pub use engine::BattleEngine;
pub use policy::{CardPolicy, HighestDamagePolicy, UniformPolicy};
pub use record::{MatchOutcome, TurnOutcome, TurnRecord, VictoryReport};
