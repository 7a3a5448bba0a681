//! The damage formula.

use crate::cards::{Card, CardKind};
use crate::character::Character;

/// Multiplier an attacker applies to a card.
///
/// Melee cards use the attacker's damage multiplier. Spell cards use the
/// staff multiplier plus `staff_bonus` when the attacker holds a staff (and
/// staffs are enabled), and 1 otherwise.
#[must_use]
pub fn damage_multiplier(
    attacker: &Character,
    card: &Card,
    staff_enabled: bool,
    staff_bonus: f64,
) -> f64 {
    match card.kind {
        CardKind::Melee => attacker.damage_multiplier,
        CardKind::Spell if staff_enabled && attacker.has_staff => {
            attacker.spell_damage_multiplier + staff_bonus
        }
        CardKind::Spell => 1.0,
    }
}

/// Damage landing on the target: `damage * multiplier * resistance`.
#[must_use]
pub fn damage_dealt(card_damage: u32, multiplier: f64, resistance: f64) -> f64 {
    f64::from(card_damage) * multiplier * resistance
}
