//! Effect resolution: applying an `Effect` to a character.

use tracing::debug;

use super::Effect;
use crate::cards::{CardKind, SLASH};
use crate::character::Character;

/// Result of resolving an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The character changed.
    Applied,
    /// The effect was valid but had nothing to act on (e.g. a heal at full
    /// health, or a sword with no melee cards left in the deck).
    NoChange,
}

/// Applies effects to characters.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply one effect to `target`.
    pub fn resolve(effect: &Effect, target: &mut Character) -> Resolution {
        let resolution = match effect {
            Effect::SharpenMelee { damage_increase } => {
                let mut touched = 0;
                // Only undrawn cards are rewritten; hand and discard keep
                // their current damage until the next upgrade.
                for card in target.piles_mut().deck_mut() {
                    if card.is_melee() {
                        card.name = SLASH.to_string();
                        card.damage += damage_increase;
                        touched += 1;
                    }
                }
                if touched > 0 {
                    Resolution::Applied
                } else {
                    Resolution::NoChange
                }
            }

            Effect::AttuneStaff {
                spell_damage_multiplier,
            } => {
                target.spell_damage_multiplier = *spell_damage_multiplier;
                target.has_staff = true;
                Resolution::Applied
            }

            Effect::SetResistance { factor } => {
                if (target.damage_resistance - factor).abs() < f64::EPSILON {
                    Resolution::NoChange
                } else {
                    target.damage_resistance = *factor;
                    Resolution::Applied
                }
            }

            Effect::AddRegeneration { rate } => {
                target.regeneration_rate += rate;
                Resolution::Applied
            }

            Effect::AddSpellCard { name, damage } => {
                target
                    .piles_mut()
                    .add_to_deck(CardKind::Spell, name.clone(), *damage);
                Resolution::Applied
            }

            Effect::Heal { amount } => {
                if target.heal(*amount) > 0.0 {
                    Resolution::Applied
                } else {
                    Resolution::NoChange
                }
            }
        };

        debug!(name = %target.name, ?effect, ?resolution, "resolved effect");
        resolution
    }
}
