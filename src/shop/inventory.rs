//! The player's inventory and equipped-slot table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::character::Character;
use crate::core::error::{BattleError, BattleResult};
use crate::effects::{EffectResolver, Resolution};
use crate::items::{EquipSlot, Item, ItemId};

/// An item the player owns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OwnedItem {
    pub id: ItemId,
    pub item: Item,
    /// Set once the item's effect has been applied by equipping.
    pub equipped: bool,
}

/// What an equip request did.
#[derive(Clone, Debug, PartialEq)]
pub enum EquipOutcome {
    /// The item's effect was applied and it now holds `slot`.
    Equipped {
        slot: EquipSlot,
        /// Previous holder of the slot when slots are not exclusive.
        displaced: Option<ItemId>,
    },
    /// The item was already equipped; nothing happened.
    AlreadyEquipped,
    /// The item was used up and removed from the inventory.
    Consumed(Item),
}

/// Items owned by the player.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    items: Vec<OwnedItem>,
    /// Names of every weapon and armor ever bought, used to filter offers.
    equipable_names: Vec<String>,
    slots: FxHashMap<EquipSlot, ItemId>,
    next_id: u32,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an item and return its id.
    pub fn add(&mut self, item: Item) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        if item.category.is_equipable() && !self.owns_equipable(&item.name) {
            self.equipable_names.push(item.name.clone());
        }
        self.items.push(OwnedItem {
            id,
            item,
            equipped: false,
        });
        id
    }

    #[must_use]
    pub fn items(&self) -> &[OwnedItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&OwnedItem> {
        self.items.iter().find(|owned| owned.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a weapon or armor with this name was ever bought.
    #[must_use]
    pub fn owns_equipable(&self, name: &str) -> bool {
        self.equipable_names.iter().any(|owned| owned == name)
    }

    #[must_use]
    pub fn equipable_names(&self) -> &[String] {
        &self.equipable_names
    }

    /// The item currently recorded in a slot.
    #[must_use]
    pub fn equipped_in(&self, slot: EquipSlot) -> Option<&OwnedItem> {
        self.slots.get(&slot).and_then(|id| self.get(*id))
    }

    /// Equip or use an item on `target`.
    ///
    /// Potions (and anything without a slot) are applied and removed.
    /// Equipment applies its effect once and records the slot. With
    /// `exclusive` slots an occupied slot rejects the request; otherwise the
    /// new item simply takes the slot over.
    pub fn equip(
        &mut self,
        id: ItemId,
        target: &mut Character,
        exclusive: bool,
    ) -> BattleResult<EquipOutcome> {
        let position = self
            .items
            .iter()
            .position(|owned| owned.id == id)
            .ok_or(BattleError::UnknownItem(id))?;

        let slot = match self.items[position].item.slot() {
            Some(slot) if !self.items[position].item.is_consumable() => slot,
            _ => {
                let owned = self.items.remove(position);
                EffectResolver::resolve(&owned.item.effect, target);
                debug!(item = %owned.item, "consumed item");
                return Ok(EquipOutcome::Consumed(owned.item));
            }
        };

        if self.items[position].equipped {
            return Ok(EquipOutcome::AlreadyEquipped);
        }

        let occupant = self.slots.get(&slot).copied();
        if exclusive {
            if let Some(occupant) = occupant.and_then(|other| self.get(other)) {
                return Err(BattleError::SlotOccupied {
                    slot,
                    occupant: occupant.item.name.clone(),
                });
            }
        }

        let owned = &mut self.items[position];
        if EffectResolver::resolve(&owned.item.effect, target) == Resolution::NoChange {
            debug!(item = %owned.item, "equipped item had nothing to change");
        }
        owned.equipped = true;
        self.slots.insert(slot, id);

        Ok(EquipOutcome::Equipped {
            slot,
            displaced: occupant,
        })
    }
}
