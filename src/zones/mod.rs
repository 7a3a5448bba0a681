//! Card zones: deck, hand and discard.
//!
//! ## Key Types
//!
//! - `Zone`: Which pile a card is in
//! - `CardPiles`: The three piles of one character and the draw/play/
//!   reshuffle mechanics between them

pub mod piles;

pub use piles::{CardPiles, Hand, Zone};
