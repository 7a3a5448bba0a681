//! Read-only views of match state for presentation.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::character::Character;
use crate::core::side::Side;
use crate::core::state::{BattlePhase, MatchState};
use crate::items::{EquipSlot, ItemCategory, ItemId};
use crate::shop::ShopOffer;

/// What a presentation layer needs to draw one character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub name: String,
    pub health: f64,
    pub max_health: u32,
    /// Health at or below a tenth of max.
    pub critical: bool,
    pub damage_multiplier: f64,
    pub spell_damage_multiplier: f64,
    pub damage_resistance: f64,
    pub regeneration_rate: f64,
    pub has_staff: bool,
    pub level: u32,
    pub xp: f64,
    pub xp_to_next_level: u32,
    pub hand: Vec<Card>,
    pub deck_size: usize,
    pub discard_size: usize,
}

impl CharacterSnapshot {
    #[must_use]
    pub fn capture(character: &Character) -> Self {
        let piles = character.piles();
        let progress = character.progress();
        Self {
            name: character.name.clone(),
            health: character.health(),
            max_health: character.max_health(),
            critical: character.is_critical(),
            damage_multiplier: character.damage_multiplier,
            spell_damage_multiplier: character.spell_damage_multiplier,
            damage_resistance: character.damage_resistance,
            regeneration_rate: character.regeneration_rate,
            has_staff: character.has_staff,
            level: progress.level,
            xp: progress.xp,
            xp_to_next_level: progress.xp_to_next_level,
            hand: piles.hand().to_vec(),
            deck_size: piles.deck().len(),
            discard_size: piles.discard().len(),
        }
    }
}

/// One inventory line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub id: ItemId,
    pub name: String,
    pub category: ItemCategory,
    pub equipped: bool,
    pub slot: Option<EquipSlot>,
}

/// Whole-match view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Match generation the snapshot was taken in.
    pub generation: u64,
    pub round: u32,
    pub turn: u32,
    pub current: Side,
    pub phase: BattlePhase,
    pub currency: u64,
    pub player: CharacterSnapshot,
    pub enemy: CharacterSnapshot,
    pub inventory: Vec<InventoryEntry>,
    pub shop_open: bool,
    pub offers: Vec<ShopOffer>,
}

impl MatchSnapshot {
    #[must_use]
    pub fn capture(state: &MatchState, generation: u64) -> Self {
        let inventory = state
            .inventory
            .items()
            .iter()
            .map(|owned| InventoryEntry {
                id: owned.id,
                name: owned.item.name.clone(),
                category: owned.item.category,
                equipped: owned.equipped,
                slot: owned.item.slot(),
            })
            .collect();

        Self {
            generation,
            round: state.round,
            turn: state.turn,
            current: state.current,
            phase: state.phase,
            currency: state.currency,
            player: CharacterSnapshot::capture(state.player()),
            enemy: CharacterSnapshot::capture(state.enemy()),
            inventory,
            shop_open: state.shop.is_open(),
            offers: state.shop.offers().to_vec(),
        }
    }
}
