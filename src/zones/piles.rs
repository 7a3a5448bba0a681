//! Deck, hand and discard piles for one character.
//!
//! `CardPiles` owns every card a character has. Cards move between the three
//! zones by transfer, never by copy, so
//! `deck + hand + discard == total_created()` always holds.
//!
//! Draws pick a uniformly random card from the deck. When the deck runs dry
//! mid-draw the discard pile is shuffled back in; when both are empty the
//! draw simply comes back short.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{Card, CardId, CardKind, PUNCH};
use crate::core::error::{BattleError, BattleResult};
use crate::core::rng::GameRng;

/// Which pile a card sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down pool of undrawn cards.
    Deck,
    /// Cards available to play.
    Hand,
    /// Played cards, shuffled back when the deck empties.
    Discard,
}

/// Hand storage. Inline for the standard five-card hand.
pub type Hand = SmallVec<[Card; 5]>;

/// The three piles of one character.
///
/// ## Usage
///
/// ```
/// use card_battler::core::GameRng;
/// use card_battler::zones::CardPiles;
///
/// let mut rng = GameRng::new(42);
/// let mut piles = CardPiles::starting(20, 5, 1..=3, &mut rng);
///
/// assert_eq!(piles.hand().len(), 5);
/// assert_eq!(piles.deck().len(), 15);
///
/// let played = piles.play_card(0, &mut rng).unwrap();
/// assert_eq!(piles.hand().len(), 5);
/// assert_eq!(piles.discard().last().map(|c| c.id), Some(played.id));
/// ```
#[derive(Clone, Debug)]
pub struct CardPiles {
    deck: Vec<Card>,
    hand: Hand,
    discard: Vec<Card>,
    hand_limit: usize,
    next_id: u32,
}

impl CardPiles {
    /// Create empty piles with the given hand limit.
    #[must_use]
    pub fn new(hand_limit: usize) -> Self {
        Self {
            deck: Vec::new(),
            hand: SmallVec::new(),
            discard: Vec::new(),
            hand_limit,
            next_id: 0,
        }
    }

    /// Create a starting deck of melee punches and draw an opening hand.
    pub fn starting(
        deck_size: usize,
        hand_limit: usize,
        damage: std::ops::RangeInclusive<u32>,
        rng: &mut GameRng,
    ) -> Self {
        let mut piles = Self::new(hand_limit);
        for _ in 0..deck_size {
            let dmg = rng.gen_damage(damage.clone());
            piles.add_to_deck(CardKind::Melee, PUNCH, dmg);
        }
        piles.fill_hand(rng);
        piles
    }

    /// Create a new card on the deck and return its id.
    pub fn add_to_deck(&mut self, kind: CardKind, name: impl Into<String>, damage: u32) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        self.deck.push(Card::new(id, kind, name, damage));
        id
    }

    // === Views ===

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Mutable access to undrawn cards (weapon upgrades rewrite them).
    pub fn deck_mut(&mut self) -> &mut [Card] {
        &mut self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    #[must_use]
    pub fn hand_limit(&self) -> usize {
        self.hand_limit
    }

    /// Number of cards ever created for these piles.
    #[must_use]
    pub fn total_created(&self) -> usize {
        self.next_id as usize
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        match zone {
            Zone::Deck => self.deck.len(),
            Zone::Hand => self.hand.len(),
            Zone::Discard => self.discard.len(),
        }
    }

    /// Find which zone holds a card.
    #[must_use]
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        if self.deck.iter().any(|c| c.id == id) {
            Some(Zone::Deck)
        } else if self.hand.iter().any(|c| c.id == id) {
            Some(Zone::Hand)
        } else if self.discard.iter().any(|c| c.id == id) {
            Some(Zone::Discard)
        } else {
            None
        }
    }

    // === Movement ===

    /// Shuffle the deck in place.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.deck);
    }

    /// Move the whole discard pile into the deck and shuffle.
    ///
    /// Returns the number of cards moved.
    pub fn reshuffle_discard(&mut self, rng: &mut GameRng) -> usize {
        let moved = self.discard.len();
        self.deck.append(&mut self.discard);
        self.shuffle_deck(rng);
        debug!(moved, deck = self.deck.len(), "reshuffled discard into deck");
        moved
    }

    /// Take a uniformly random card out of the deck, reshuffling the discard
    /// pile in first if the deck is empty.
    fn take_random(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.deck.is_empty() {
            self.reshuffle_discard(rng);
        }
        if self.deck.is_empty() {
            return None;
        }
        let index = rng.gen_range_usize(0..self.deck.len());
        Some(self.deck.remove(index))
    }

    /// Draw up to `count` cards into the hand.
    ///
    /// Stops early when the hand is full or when deck and discard are both
    /// exhausted. Returns how many cards were drawn.
    pub fn draw_cards(&mut self, count: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;
        while drawn < count && self.hand.len() < self.hand_limit {
            match self.take_random(rng) {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => {
                    debug!(requested = count, drawn, "deck and discard exhausted");
                    break;
                }
            }
        }
        self.check_hand();
        drawn
    }

    /// Draw one card if the hand has room.
    ///
    /// Returns the drawn card's id, or `None` if the hand is full or no card
    /// is left anywhere.
    pub fn draw_card(&mut self, rng: &mut GameRng) -> Option<CardId> {
        if self.draw_cards(1, rng) == 1 {
            self.hand.last().map(|c| c.id)
        } else {
            None
        }
    }

    /// Top the hand up to the hand limit.
    pub fn fill_hand(&mut self, rng: &mut GameRng) -> usize {
        let missing = self.hand_limit.saturating_sub(self.hand.len());
        self.draw_cards(missing, rng)
    }

    /// Play the card at `index`: move it to discard, then draw one.
    ///
    /// Returns the played card. An out-of-range index changes nothing.
    pub fn play_card(&mut self, index: usize, rng: &mut GameRng) -> BattleResult<Card> {
        if index >= self.hand.len() {
            return Err(BattleError::InvalidHandIndex {
                index,
                hand_size: self.hand.len(),
            });
        }
        let card = self.hand.remove(index);
        self.discard.push(card.clone());
        self.draw_card(rng);
        Ok(card)
    }

    /// Return the hand to the deck, shuffle, and draw a fresh hand.
    pub fn redraw_hand(&mut self, rng: &mut GameRng) -> usize {
        self.deck.extend(self.hand.drain(..));
        self.shuffle_deck(rng);
        self.fill_hand(rng)
    }

    fn check_hand(&self) {
        debug_assert!(
            self.hand.len() <= self.hand_limit,
            "hand holds {} cards, limit {}",
            self.hand.len(),
            self.hand_limit
        );
    }
}
