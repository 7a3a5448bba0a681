//! Turn records and outcomes.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::character::LevelUp;
use crate::core::side::Side;

/// One resolved play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub round: u32,
    /// Match-wide play counter, starting at 1.
    pub turn: u32,
    pub side: Side,
    pub card: Card,
    pub multiplier: f64,
    pub damage_dealt: f64,
    /// Target health after the hit.
    pub target_health: f64,
}

/// What a player victory granted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VictoryReport {
    /// The round that was won.
    pub round: u32,
    pub xp_gained: f64,
    pub level_ups: Vec<LevelUp>,
    pub reward: u64,
}

/// How a match ended, or how a round ended for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    PlayerWon,
    PlayerLost,
}

/// Result of `BattleEngine::resolve_turn`.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnOutcome {
    /// The actor had no cards; nothing happened.
    NoCards,
    /// The target survived and the turn passed to `next`.
    Continue { next: Side, record: TurnRecord },
    /// The player killed the enemy. Reward and next round are already applied.
    PlayerWon {
        record: TurnRecord,
        victory: VictoryReport,
    },
    /// The enemy killed the player. The match is over.
    EnemyWon { record: TurnRecord },
}

impl TurnOutcome {
    /// The record of the play, if a card was played.
    #[must_use]
    pub fn record(&self) -> Option<&TurnRecord> {
        match self {
            Self::NoCards => None,
            Self::Continue { record, .. }
            | Self::PlayerWon { record, .. }
            | Self::EnemyWon { record } => Some(record),
        }
    }
}
