//! Error taxonomy for engine operations.
//!
//! Every condition here is recoverable: the rejected operation leaves the
//! match untouched and the caller decides how to surface it. Running out of
//! cards is deliberately not an error; draws just come back short.

use thiserror::Error;

use super::side::Side;
use crate::items::{EquipSlot, ItemId};

/// Errors surfaced by match operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("hand index {index} out of range (hand holds {hand_size} cards)")]
    InvalidHandIndex { index: usize, hand_size: usize },

    #[error("{item} costs {cost}, only {available} available")]
    InsufficientCurrency {
        item: String,
        cost: u64,
        available: u64,
    },

    #[error("the match is over")]
    MatchOver,

    #[error("it is not the {0}'s turn")]
    OutOfTurn(Side),

    #[error("the shop is closed")]
    ShopClosed,

    #[error("no shop offer at index {0}")]
    UnknownOffer(usize),

    #[error("no inventory item {0}")]
    UnknownItem(ItemId),

    #[error("{slot} slot already holds {occupant}")]
    SlotOccupied { slot: EquipSlot, occupant: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type BattleResult<T> = Result<T, BattleError>;
