//! Items and equip slots.
//!
//! ## Key Types
//!
//! - `Item`: name, `ItemCategory` and one `Effect`
//! - `ItemId`: identity of an owned item in the inventory
//! - `EquipSlot`: right-hand, left-hand, chest or finger

pub mod item;

pub use item::{names, EquipSlot, Item, ItemCategory, ItemId};
