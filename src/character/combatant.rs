//! The combatant: health, combat multipliers and card piles.

use tracing::trace;

use super::progression::Progress;
use crate::core::config::{MatchConfig, Progression};
use crate::core::rng::GameRng;
use crate::zones::CardPiles;

/// A player or enemy character.
///
/// Health is fractional because multipliers and resistance are. The
/// invariant `0 <= health <= max_health` holds after every public method.
#[derive(Clone, Debug)]
pub struct Character {
    pub name: String,

    pub(super) health: f64,
    pub(super) max_health: u32,

    /// Multiplier for melee cards.
    pub damage_multiplier: f64,

    /// Staff multiplier for spell cards (only used while `has_staff`).
    pub spell_damage_multiplier: f64,

    /// Multiplicative factor on incoming damage. 1.0 means no reduction.
    pub damage_resistance: f64,

    /// Health restored after each of this character's plays.
    pub regeneration_rate: f64,

    pub has_staff: bool,

    pub(super) progress: Progress,
    pub(super) progression: Progression,

    piles: CardPiles,
}

impl Character {
    /// Create a character with a fresh starting deck and opening hand.
    pub fn new(
        name: impl Into<String>,
        max_health: u32,
        damage_multiplier: f64,
        config: &MatchConfig,
        rng: &mut GameRng,
    ) -> Self {
        let piles =
            CardPiles::starting(config.deck_size, config.hand_size, config.melee_damage(), rng);
        Self::from_piles(name, max_health, damage_multiplier, config.progression, piles)
    }

    /// Create a character around existing piles.
    #[must_use]
    pub fn from_piles(
        name: impl Into<String>,
        max_health: u32,
        damage_multiplier: f64,
        progression: Progression,
        piles: CardPiles,
    ) -> Self {
        Self {
            name: name.into(),
            health: f64::from(max_health),
            max_health,
            damage_multiplier,
            spell_damage_multiplier: 1.0,
            damage_resistance: 1.0,
            regeneration_rate: 0.0,
            has_staff: false,
            progress: Progress::new(&progression),
            progression,
            piles,
        }
    }

    // === Health ===

    #[must_use]
    pub fn health(&self) -> f64 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Set health directly, clamped into `0..=max_health`.
    pub fn set_health(&mut self, health: f64) {
        self.health = health.clamp(0.0, f64::from(self.max_health));
        self.check_health();
    }

    /// Reduce health, never below zero. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        let before = self.health;
        self.health = (self.health - amount).max(0.0);
        self.check_health();
        before - self.health
    }

    /// Restore health, never above max. Returns the health actually gained.
    pub fn heal(&mut self, amount: f64) -> f64 {
        let before = self.health;
        self.health = (self.health + amount).min(f64::from(self.max_health));
        self.check_health();
        self.health - before
    }

    /// Apply one tick of regeneration.
    pub fn regenerate(&mut self) -> f64 {
        let healed = self.heal(self.regeneration_rate);
        if healed > 0.0 {
            trace!(name = %self.name, healed, health = self.health, "regenerated");
        }
        healed
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    /// At or below a tenth of max health.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.health <= f64::from(self.max_health) * 0.1
    }

    // === Cards ===

    #[must_use]
    pub fn piles(&self) -> &CardPiles {
        &self.piles
    }

    pub fn piles_mut(&mut self) -> &mut CardPiles {
        &mut self.piles
    }

    // === Progress ===

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut Progress {
        &mut self.progress
    }

    pub(super) fn check_health(&self) {
        debug_assert!(
            (0.0..=f64::from(self.max_health)).contains(&self.health),
            "{} health {} outside 0..={}",
            self.name,
            self.health,
            self.max_health
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(max_health: u32) -> Character {
        Character::from_piles(
            "Test",
            max_health,
            1.0,
            Progression::default(),
            CardPiles::new(5),
        )
    }

    #[test]
    fn test_new_character() {
        let config = MatchConfig::default();
        let mut rng = GameRng::new(42);
        let c = Character::new("Player", 10, 1.0, &config, &mut rng);

        assert_eq!(c.health(), 10.0);
        assert_eq!(c.max_health(), 10);
        assert_eq!(c.damage_resistance, 1.0);
        assert_eq!(c.spell_damage_multiplier, 1.0);
        assert_eq!(c.regeneration_rate, 0.0);
        assert!(!c.has_staff);
        assert_eq!(c.progress().level, 1);
        assert_eq!(c.piles().hand().len(), 5);
        assert_eq!(c.piles().total_created(), 20);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut c = fighter(10);

        assert_eq!(c.take_damage(3.0), 3.0);
        assert_eq!(c.health(), 7.0);
        assert!(!c.is_defeated());

        assert_eq!(c.take_damage(50.0), 7.0);
        assert_eq!(c.health(), 0.0);
        assert!(c.is_defeated());
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut c = fighter(10);
        c.take_damage(4.0);

        assert_eq!(c.heal(10.0), 4.0);
        assert_eq!(c.health(), 10.0);
    }

    #[test]
    fn test_regenerate() {
        let mut c = fighter(10);
        assert_eq!(c.regenerate(), 0.0);

        c.regeneration_rate = 0.5;
        c.take_damage(1.0);
        c.regenerate();
        assert!((c.health() - 9.5).abs() < 1e-9);

        c.regenerate();
        c.regenerate();
        assert_eq!(c.health(), 10.0);
    }

    #[test]
    fn test_set_health_clamps() {
        let mut c = fighter(10);
        c.set_health(-2.0);
        assert_eq!(c.health(), 0.0);
        c.set_health(25.0);
        assert_eq!(c.health(), 10.0);
    }

    #[test]
    fn test_critical_threshold() {
        let mut c = fighter(10);
        assert!(!c.is_critical());
        c.set_health(1.0);
        assert!(c.is_critical());
    }
}
