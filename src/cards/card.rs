//! Cards: the single damage-dealing unit.
//!
//! A `Card` is owned by exactly one pile at a time (see `zones`). Weapon
//! effects may rename and sharpen melee cards in place; nothing else changes
//! a card after creation.

use serde::{Deserialize, Serialize};

/// Name of a starting melee card.
pub const PUNCH: &str = "punch";

/// Name of a melee card after a weapon upgrade.
pub const SLASH: &str = "slash";

/// Identifier unique within one character's card piles.
///
/// Allocated from a counter when the card is created, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// How a card's damage is scaled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Scaled by the attacker's damage multiplier.
    Melee,
    /// Scaled by the staff multiplier when a staff is held.
    Spell,
}

/// A playable card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub name: String,
    pub damage: u32,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(id: CardId, kind: CardKind, name: impl Into<String>, damage: u32) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            damage,
        }
    }

    #[must_use]
    pub fn is_melee(&self) -> bool {
        self.kind == CardKind::Melee
    }

    #[must_use]
    pub fn is_spell(&self) -> bool {
        self.kind == CardKind::Spell
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name.to_uppercase(), self.damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_kinds() {
        let punch = Card::new(CardId::new(0), CardKind::Melee, PUNCH, 2);
        let fireball = Card::new(CardId::new(1), CardKind::Spell, "Fireball", 7);

        assert!(punch.is_melee());
        assert!(!punch.is_spell());
        assert!(fireball.is_spell());
    }

    #[test]
    fn test_display() {
        let card = Card::new(CardId::new(3), CardKind::Melee, SLASH, 4);
        assert_eq!(card.to_string(), "SLASH: 4");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId::new(9), CardKind::Spell, "Lightning", 6);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
