//! Items: a name, a category tag and one effect.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// Identifier of an owned item in the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// Item category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Ring,
    SpellCard,
    Potion,
}

impl ItemCategory {
    /// Weapons and armor: the categories tracked by name so the shop stops
    /// offering duplicates.
    #[must_use]
    pub fn is_equipable(self) -> bool {
        matches!(self, Self::Weapon | Self::Armor)
    }

    /// Applied on purchase rather than stored.
    #[must_use]
    pub fn applies_on_purchase(self) -> bool {
        self == Self::SpellCard
    }
}

/// Where an equipped item sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    RightHand,
    LeftHand,
    Chest,
    Finger,
}

impl std::fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::RightHand => "right-hand",
            Self::LeftHand => "left-hand",
            Self::Chest => "chest",
            Self::Finger => "finger",
        };
        f.write_str(name)
    }
}

/// Catalog item names.
pub mod names {
    pub const SWORD: &str = "Sword";
    pub const STAFF: &str = "Staff";
    pub const ARMOR: &str = "Armor";
    pub const REGENERATION_RING: &str = "Regeneration Ring";
    pub const FIREBALL: &str = "Fireball";
    pub const LIGHTNING: &str = "Lightning";
    pub const HEALTH_POTION: &str = "Health Potion";
}

/// Slot by item name, for the named catalog items.
const SLOT_BY_NAME: &[(&str, EquipSlot)] = &[
    (names::SWORD, EquipSlot::RightHand),
    (names::STAFF, EquipSlot::LeftHand),
    (names::ARMOR, EquipSlot::Chest),
    (names::REGENERATION_RING, EquipSlot::Finger),
];

/// A purchasable item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: ItemCategory,
    pub effect: Effect,
}

impl Item {
    /// Create an item.
    #[must_use]
    pub fn new(name: impl Into<String>, category: ItemCategory, effect: Effect) -> Self {
        Self {
            name: name.into(),
            category,
            effect,
        }
    }

    /// Sword: melee cards in the deck become "slash" with extra damage.
    #[must_use]
    pub fn sword(damage_increase: u32) -> Self {
        Self::new(
            names::SWORD,
            ItemCategory::Weapon,
            Effect::sharpen(damage_increase),
        )
    }

    /// Staff: enables the spell multiplier.
    #[must_use]
    pub fn staff(spell_damage_multiplier: f64) -> Self {
        Self::new(
            names::STAFF,
            ItemCategory::Weapon,
            Effect::staff(spell_damage_multiplier),
        )
    }

    #[must_use]
    pub fn armor(factor: f64) -> Self {
        Self::new(names::ARMOR, ItemCategory::Armor, Effect::resistance(factor))
    }

    #[must_use]
    pub fn regeneration_ring(rate: f64) -> Self {
        Self::new(
            names::REGENERATION_RING,
            ItemCategory::Ring,
            Effect::regeneration(rate),
        )
    }

    /// A spell card with fixed damage.
    #[must_use]
    pub fn spell_card(name: impl Into<String>, damage: u32) -> Self {
        let name = name.into();
        let effect = Effect::spell_card(name.clone(), damage);
        Self::new(name, ItemCategory::SpellCard, effect)
    }

    #[must_use]
    pub fn health_potion(amount: f64) -> Self {
        Self::new(names::HEALTH_POTION, ItemCategory::Potion, Effect::heal(amount))
    }

    /// The slot this item occupies when equipped.
    ///
    /// Named catalog items use their fixed slot; anything else falls back on
    /// its category. Spell cards and potions have no slot.
    #[must_use]
    pub fn slot(&self) -> Option<EquipSlot> {
        if let Some((_, slot)) = SLOT_BY_NAME.iter().find(|(name, _)| *name == self.name) {
            return Some(*slot);
        }
        match self.category {
            ItemCategory::Weapon => Some(EquipSlot::RightHand),
            ItemCategory::Armor => Some(EquipSlot::Chest),
            ItemCategory::Ring => Some(EquipSlot::Finger),
            ItemCategory::SpellCard | ItemCategory::Potion => None,
        }
    }

    /// Consumed on use instead of equipped.
    #[must_use]
    pub fn is_consumable(&self) -> bool {
        self.category == ItemCategory::Potion
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
