//! Card choice for automated sides.
//!
//! The enemy picks its card through a `CardPolicy`. The game's enemy picks
//! uniformly at random; other policies are useful for tests and
//! simulations.

use crate::cards::Card;
use crate::core::rng::GameRng;

/// Chooses which hand index to play.
pub trait CardPolicy: Send + Sync {
    /// Pick an index into `hand`.
    ///
    /// Returns `None` if the hand is empty.
    fn choose_card(&self, hand: &[Card], rng: &mut GameRng) -> Option<usize>;
}

/// Uniform random choice.
#[derive(Clone, Debug, Default)]
pub struct UniformPolicy;

impl CardPolicy for UniformPolicy {
    fn choose_card(&self, hand: &[Card], rng: &mut GameRng) -> Option<usize> {
        let indices: Vec<usize> = (0..hand.len()).collect();
        rng.choose(&indices).copied()
    }
}

/// Always the highest base damage; the first such card on ties.
#[derive(Clone, Debug, Default)]
pub struct HighestDamagePolicy;

impl CardPolicy for HighestDamagePolicy {
    fn choose_card(&self, hand: &[Card], _rng: &mut GameRng) -> Option<usize> {
        hand.iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, card)| card.damage)
            .map(|(i, _)| i)
    }
}
