//! The item catalog, prices and offer generation.

use serde::{Deserialize, Serialize};

use super::inventory::Inventory;
use crate::core::config::Capabilities;
use crate::core::rng::GameRng;
use crate::items::{names, Item, ItemCategory};

/// Damage added to melee cards by the sword.
pub const SWORD_DAMAGE_INCREASE: u32 = 1;
/// Spell multiplier set by the staff.
pub const STAFF_SPELL_MULTIPLIER: f64 = 0.2;
/// Resistance factor set by the armor.
pub const ARMOR_FACTOR: f64 = 0.1;
/// Health per turn granted by the regeneration ring.
pub const RING_REGENERATION_RATE: f64 = 0.1;
/// Health restored by a potion.
pub const POTION_HEAL_AMOUNT: f64 = 10.0;

/// Damage range rolled for spell cards when the catalog is built.
const SPELL_DAMAGE: std::ops::RangeInclusive<u32> = 5..=9;

/// Item prices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub weapon: u64,
    pub staff: u64,
    pub armor: u64,
    pub spell_card: u64,
    pub ring: u64,
    pub potion: u64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            weapon: 20,
            staff: 200,
            armor: 20,
            spell_card: 10,
            ring: 1000,
            potion: 20,
        }
    }
}

impl Pricing {
    /// Price of an item.
    #[must_use]
    pub fn price_of(&self, item: &Item) -> u64 {
        match item.category {
            ItemCategory::Weapon if item.name == names::STAFF => self.staff,
            ItemCategory::Weapon => self.weapon,
            ItemCategory::Armor => self.armor,
            ItemCategory::Ring => self.ring,
            ItemCategory::SpellCard => self.spell_card,
            ItemCategory::Potion => self.potion,
        }
    }
}

/// An item on sale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShopOffer {
    pub item: Item,
    pub price: u64,
    /// Offered on every visit regardless of what the player owns.
    pub always_available: bool,
}

/// Build the full catalog for a capability set.
///
/// Spell card damage is rolled here, so each visit's spells differ.
pub fn build_catalog(capabilities: &Capabilities, rng: &mut GameRng) -> Vec<Item> {
    let mut catalog = vec![Item::sword(SWORD_DAMAGE_INCREASE)];
    if capabilities.staff {
        catalog.push(Item::staff(STAFF_SPELL_MULTIPLIER));
    }
    catalog.push(Item::armor(ARMOR_FACTOR));
    catalog.push(Item::spell_card(
        names::FIREBALL,
        rng.gen_damage(SPELL_DAMAGE),
    ));
    catalog.push(Item::spell_card(
        names::LIGHTNING,
        rng.gen_damage(SPELL_DAMAGE),
    ));
    if capabilities.regeneration_ring {
        catalog.push(Item::regeneration_ring(RING_REGENERATION_RATE));
    }
    catalog
}

/// Generate one visit's offers.
///
/// Weapons and armor the player already owns are left out. The rest are put
/// in random order and cut to `count`; a health potion is always appended.
pub fn generate_offers(
    capabilities: &Capabilities,
    inventory: &Inventory,
    pricing: &Pricing,
    count: usize,
    rng: &mut GameRng,
) -> Vec<ShopOffer> {
    let mut candidates: Vec<Item> = build_catalog(capabilities, rng)
        .into_iter()
        .filter(|item| !(item.category.is_equipable() && inventory.owns_equipable(&item.name)))
        .collect();
    rng.shuffle(&mut candidates);
    candidates.truncate(count);

    let mut offers: Vec<ShopOffer> = candidates
        .into_iter()
        .map(|item| ShopOffer {
            price: pricing.price_of(&item),
            item,
            always_available: false,
        })
        .collect();

    let potion = Item::health_potion(POTION_HEAL_AMOUNT);
    offers.push(ShopOffer {
        price: pricing.price_of(&potion),
        item: potion,
        always_available: true,
    });
    offers
}
