//! Effect definitions.
//!
//! Each item carries exactly one `Effect`: a parameterised mutation of a
//! character's stats or deck. Effects are data; `EffectResolver` applies them.

use serde::{Deserialize, Serialize};

/// A mutation an item applies to its owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Rename every melee card in the deck to "slash" and raise its damage.
    SharpenMelee { damage_increase: u32 },

    /// Set the spell multiplier and mark the character as holding a staff.
    AttuneStaff { spell_damage_multiplier: f64 },

    /// Set the multiplicative damage resistance factor.
    SetResistance { factor: f64 },

    /// Add to the per-turn regeneration rate. Stacks.
    AddRegeneration { rate: f64 },

    /// Put a new spell card with fixed damage into the deck.
    AddSpellCard { name: String, damage: u32 },

    /// Restore health, capped at max health.
    Heal { amount: f64 },
}

impl Effect {
    /// Create a melee upgrade effect.
    pub fn sharpen(damage_increase: u32) -> Self {
        Self::SharpenMelee { damage_increase }
    }

    /// Create a staff effect.
    pub fn staff(spell_damage_multiplier: f64) -> Self {
        Self::AttuneStaff {
            spell_damage_multiplier,
        }
    }

    /// Create a resistance effect.
    pub fn resistance(factor: f64) -> Self {
        Self::SetResistance { factor }
    }

    /// Create a regeneration effect.
    pub fn regeneration(rate: f64) -> Self {
        Self::AddRegeneration { rate }
    }

    /// Create a spell card effect.
    pub fn spell_card(name: impl Into<String>, damage: u32) -> Self {
        Self::AddSpellCard {
            name: name.into(),
            damage,
        }
    }

    /// Create a heal effect.
    pub fn heal(amount: f64) -> Self {
        Self::Heal { amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Effect::sharpen(1), Effect::SharpenMelee { damage_increase: 1 });
        assert_eq!(Effect::resistance(0.1), Effect::SetResistance { factor: 0.1 });
        assert_eq!(
            Effect::spell_card("Fireball", 7),
            Effect::AddSpellCard {
                name: "Fireball".to_string(),
                damage: 7
            }
        );
    }

    #[test]
    fn test_serialization() {
        let effect = Effect::staff(0.2);
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
