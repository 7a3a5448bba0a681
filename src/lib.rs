//! # card-battler
//!
//! A turn-based card battler engine. A player and an enemy take turns
//! playing damage cards from hands drawn out of shuffled decks; between
//! rounds the player spends winnings in a shop on items that change their
//! stats or deck.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine only transitions state. A presentation layer
//!    calls into `Session` and drains `MatchEvent`s to draw the result.
//!
//! 2. **Configuration Over Variants**: Optional systems (leveling, staff,
//!    regeneration ring, exclusive slots) are switched by `Capabilities`,
//!    not by separate code paths.
//!
//! 3. **Deterministic**: One seeded `GameRng` drives every random decision,
//!    so a seed plus an input sequence replays a match exactly.
//!
//! ## Architecture
//!
//! - **No timers**: The enemy's "thinking" delay is an `EnemyTurnTicket`
//!   the caller redeems when it likes. Tickets are tied to a match
//!   generation, so restarts and round changes strand stale ones.
//!
//! - **Persistent Data Structures**: Turn history is an `im::Vector`, so
//!   cloning a `MatchState` is cheap.
//!
//! ## Modules
//!
//! - `core`: Sides, match state, RNG, configuration, errors
//! - `cards`: The card type
//! - `zones`: Deck, hand and discard mechanics
//! - `character`: Health, multipliers, leveling
//! - `effects`: Item effects and their resolution
//! - `items`: Items and equip slots
//! - `shop`: Catalog, offers, purchases and the inventory
//! - `battle`: Damage formula, turn resolution, round progression
//! - `events`: Outbound events and snapshots
//! - `session`: The facade a presentation layer talks to

pub mod core;
pub mod cards;
pub mod zones;
pub mod character;
pub mod effects;
pub mod items;
pub mod shop;
pub mod battle;
pub mod events;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BattleError, BattlePhase, BattleResult, Capabilities, GameRng, GameRngState, MatchConfig,
    MatchState, Progression, Side, Sides,
};

pub use crate::cards::{Card, CardId, CardKind};

pub use crate::zones::{CardPiles, Zone};

pub use crate::character::{Character, LevelUp, Progress};

pub use crate::effects::{Effect, EffectResolver, Resolution};

pub use crate::items::{EquipSlot, Item, ItemCategory, ItemId};

pub use crate::shop::{EquipOutcome, Inventory, Pricing, Shop, ShopOffer};

pub use crate::battle::{
    BattleEngine, CardPolicy, HighestDamagePolicy, MatchOutcome, TurnOutcome, TurnRecord,
    UniformPolicy, VictoryReport,
};

pub use crate::events::{EventQueue, MatchEvent, MatchSnapshot};

pub use crate::session::{
    EnemyTurnResult, EnemyTurnTicket, PlayReport, PurchaseReport, Session,
};
