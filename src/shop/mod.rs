//! The between-rounds shop.
//!
//! ## Key Types
//!
//! - `Shop`: open/closed flag and the current offers
//! - `ShopOffer`: an item with its price
//! - `Pricing`: price table
//! - `Inventory`: owned items and the equipped-slot table
//!
//! The shop opens after a won round and closes when the player plays their
//! next card. Offers are regenerated on opening and after every purchase.

pub mod catalog;
pub mod inventory;

pub use catalog::{build_catalog, generate_offers, Pricing, ShopOffer};
pub use inventory::{EquipOutcome, Inventory, OwnedItem};

use tracing::{debug, warn};

use crate::core::config::MatchConfig;
use crate::core::error::{BattleError, BattleResult};
use crate::core::rng::GameRng;

/// Shop state for one match.
#[derive(Clone, Debug, Default)]
pub struct Shop {
    open: bool,
    offers: Vec<ShopOffer>,
}

impl Shop {
    /// A closed shop with no offers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn offers(&self) -> &[ShopOffer] {
        &self.offers
    }

    /// Open the shop with fresh offers.
    pub fn open(&mut self, config: &MatchConfig, inventory: &Inventory, rng: &mut GameRng) {
        self.open = true;
        self.restock(config, inventory, rng);
    }

    /// Close the shop. Offers are kept for display but cannot be bought.
    pub fn close(&mut self) {
        if self.open {
            debug!("shop closed");
        }
        self.open = false;
    }

    /// Regenerate the offers.
    pub fn restock(&mut self, config: &MatchConfig, inventory: &Inventory, rng: &mut GameRng) {
        self.offers = generate_offers(
            &config.capabilities,
            inventory,
            &config.pricing,
            config.shop_offer_count,
            rng,
        );
        debug!(offers = self.offers.len(), "shop restocked");
    }

    /// Pay for the offer at `index` out of `wallet`.
    ///
    /// On any error the wallet and offers are untouched. The caller applies
    /// the returned offer and restocks.
    pub fn purchase(&mut self, index: usize, wallet: &mut u64) -> BattleResult<ShopOffer> {
        if !self.open {
            return Err(BattleError::ShopClosed);
        }
        let offer = self
            .offers
            .get(index)
            .ok_or(BattleError::UnknownOffer(index))?;
        if *wallet < offer.price {
            warn!(
                item = %offer.item,
                cost = offer.price,
                available = *wallet,
                "purchase rejected"
            );
            return Err(BattleError::InsufficientCurrency {
                item: offer.item.name.clone(),
                cost: offer.price,
                available: *wallet,
            });
        }
        *wallet -= offer.price;
        Ok(offer.clone())
    }
}
