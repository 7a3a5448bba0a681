//! Card system.
//!
//! ## Key Types
//!
//! - `CardId`: Per-character card identity
//! - `CardKind`: Melee or spell scaling
//! - `Card`: Name, kind and damage of one card

pub mod card;

pub use card::{Card, CardId, CardKind, PUNCH, SLASH};
