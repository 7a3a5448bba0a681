//! Match state.
//!
//! ## MatchState
//!
//! Everything one match owns:
//! - Both characters and whose turn it is
//! - Battle phase, round and turn counters
//! - Currency, inventory and shop
//! - Turn history
//!
//! The history is an `im::Vector`, so cloning a state (for snapshots or
//! what-if simulation) shares it instead of copying.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::rng::GameRng;
use super::side::{Side, Sides};
use crate::battle::TurnRecord;
use crate::character::Character;
use crate::shop::{Inventory, Shop};

/// Where the battle stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    PlayerTurn,
    EnemyTurn,
    /// The round's enemy fell. Transient: reward, shop and next round follow
    /// within the same operation.
    PlayerWon,
    /// The player fell. Terminal.
    EnemyWon,
}

impl BattlePhase {
    /// The turn phase for a side.
    #[must_use]
    pub const fn turn_of(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerTurn,
            Side::Enemy => Self::EnemyTurn,
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::EnemyWon)
    }
}

/// Complete state of one match.
#[derive(Clone, Debug)]
pub struct MatchState {
    pub characters: Sides<Character>,

    /// Side holding the turn.
    pub current: Side,

    pub phase: BattlePhase,

    pub currency: u64,

    /// Round number, starting at 1.
    pub round: u32,

    /// Plays resolved so far in this match.
    pub turn: u32,

    pub inventory: Inventory,

    pub shop: Shop,

    pub history: Vector<TurnRecord>,
}

impl MatchState {
    /// Round 1, player to act, fresh decks on both sides.
    pub fn new(config: &MatchConfig, rng: &mut GameRng) -> Self {
        let player = Character::new(
            config.player_name.clone(),
            config.starting_health,
            1.0,
            config,
            rng,
        );
        let enemy = Character::new(
            config.enemy_name.clone(),
            config.enemy_starting_health,
            1.0,
            config,
            rng,
        );
        Self {
            characters: Sides::from_pair(player, enemy),
            current: Side::Player,
            phase: BattlePhase::PlayerTurn,
            currency: 0,
            round: 1,
            turn: 0,
            inventory: Inventory::new(),
            shop: Shop::new(),
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn player(&self) -> &Character {
        &self.characters[Side::Player]
    }

    pub fn player_mut(&mut self) -> &mut Character {
        &mut self.characters[Side::Player]
    }

    #[must_use]
    pub fn enemy(&self) -> &Character {
        &self.characters[Side::Enemy]
    }

    pub fn enemy_mut(&mut self) -> &mut Character {
        &mut self.characters[Side::Enemy]
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }
}
