//! Outbound events and state snapshots.
//!
//! ## Key Types
//!
//! - `MatchEvent`: one notification for the presentation layer
//! - `EventQueue`: ordered buffer drained by the host
//! - `MatchSnapshot`: serializable view of the whole match

pub mod event;
pub mod snapshot;

pub use event::{EventQueue, MatchEvent};
pub use snapshot::{CharacterSnapshot, InventoryEntry, MatchSnapshot};
