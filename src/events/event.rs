//! Outbound match events.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::snapshot::MatchSnapshot;
use crate::battle::{MatchOutcome, TurnRecord};
use crate::items::{EquipSlot, Item, ItemId};

/// Something the presentation layer may want to show.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Emitted after every mutating operation.
    StateChanged(Box<MatchSnapshot>),

    CardPlayed(TurnRecord),

    LevelUp { level: u32, max_health: u32 },

    RewardGranted { amount: u64, currency: u64 },

    ItemPurchased { item: Item, price: u64 },

    PurchaseRejected { item: String, cost: u64, available: u64 },

    /// A consumable was applied and removed.
    ItemUsed { item: Item },

    ItemEquipped { id: ItemId, name: String, slot: EquipSlot },

    RoundStarted { round: u32 },

    /// The enemy will act once the caller redeems the ticket.
    EnemyTurnScheduled { delay_ms: u64 },

    /// A battle ended. `PlayerWon` is followed by the shop and the next
    /// round; `PlayerLost` ends the match.
    MatchOver { outcome: MatchOutcome, round: u32 },
}

impl MatchEvent {
    /// Short tag for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StateChanged(_) => "state_changed",
            Self::CardPlayed(_) => "card_played",
            Self::LevelUp { .. } => "level_up",
            Self::RewardGranted { .. } => "reward_granted",
            Self::ItemPurchased { .. } => "item_purchased",
            Self::PurchaseRejected { .. } => "purchase_rejected",
            Self::ItemUsed { .. } => "item_used",
            Self::ItemEquipped { .. } => "item_equipped",
            Self::RoundStarted { .. } => "round_started",
            Self::EnemyTurnScheduled { .. } => "enemy_turn_scheduled",
            Self::MatchOver { .. } => "match_over",
        }
    }
}

/// FIFO of events waiting to be drained.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<MatchEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: MatchEvent) {
        self.events.push_back(event);
    }

    /// Remove and return every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<MatchEvent> {
        self.events.drain(..).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
