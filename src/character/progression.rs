//! Experience and leveling.
//!
//! XP carries over between levels: a level-up subtracts the threshold rather
//! than resetting to zero, and one large gain can trigger several level-ups.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::combatant::Character;
use crate::core::config::Progression;

/// Leveling state of a character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub level: u32,
    pub xp: f64,
    pub xp_to_next_level: u32,
    /// Scales the XP granted for the next kill.
    pub xp_multiplier: f64,
}

impl Progress {
    /// Level 1 with no XP.
    #[must_use]
    pub fn new(progression: &Progression) -> Self {
        Self {
            level: 1,
            xp: 0.0,
            xp_to_next_level: progression.starting_xp_threshold,
            xp_multiplier: 1.0,
        }
    }

    /// Fraction of the way to the next level, in `0.0..1.0`.
    #[must_use]
    pub fn fraction_to_next(&self) -> f64 {
        self.xp / f64::from(self.xp_to_next_level)
    }
}

/// Notification produced by a level-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub level: u32,
    pub max_health: u32,
}

impl Character {
    /// Add XP and level up as many times as it covers.
    ///
    /// Returns one notification per level gained, in order.
    pub fn gain_xp(&mut self, amount: f64) -> Vec<LevelUp> {
        self.progress.xp += amount;
        let mut level_ups = Vec::new();
        while self.progress.xp >= f64::from(self.progress.xp_to_next_level) {
            level_ups.push(self.level_up());
        }
        debug_assert!(self.progress.xp < f64::from(self.progress.xp_to_next_level));
        level_ups
    }

    /// Gain one level: raise the XP threshold and max health, then heal fully.
    pub fn level_up(&mut self) -> LevelUp {
        let progress = &mut self.progress;
        progress.level += 1;
        progress.xp -= f64::from(progress.xp_to_next_level);
        progress.xp_to_next_level = (f64::from(progress.xp_to_next_level)
            * self.progression.xp_threshold_growth)
            .floor() as u32;

        self.max_health =
            (f64::from(self.max_health) * self.progression.max_health_growth).floor() as u32;
        self.health = f64::from(self.max_health);
        self.check_health();

        info!(
            name = %self.name,
            level = self.progress.level,
            max_health = self.max_health,
            "level up"
        );

        LevelUp {
            level: self.progress.level,
            max_health: self.max_health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::CardPiles;

    fn fighter() -> Character {
        Character::from_piles("Hero", 10, 1.0, Progression::default(), CardPiles::new(5))
    }

    #[test]
    fn test_single_level_up() {
        let mut c = fighter();
        c.take_damage(6.0);

        let ups = c.gain_xp(12.0);

        assert_eq!(ups, vec![LevelUp { level: 2, max_health: 11 }]);
        assert_eq!(c.progress().xp, 2.0);
        assert_eq!(c.progress().xp_to_next_level, 15);
        assert_eq!(c.health(), 11.0);
    }

    #[test]
    fn test_multi_level_gain() {
        let mut c = fighter();

        let ups = c.gain_xp(25.0);

        assert_eq!(ups.len(), 2);
        assert_eq!(c.progress().level, 3);
        assert_eq!(c.progress().xp, 0.0);
        assert_eq!(c.progress().xp_to_next_level, 22);
        assert_eq!(ups[1], LevelUp { level: 3, max_health: 12 });
    }

    #[test]
    fn test_below_threshold_keeps_level() {
        let mut c = fighter();

        assert!(c.gain_xp(9.5).is_empty());
        assert_eq!(c.progress().level, 1);
        assert_eq!(c.progress().xp, 9.5);
        assert!((c.progress().fraction_to_next() - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_level_up_heals_fully() {
        let mut c = fighter();
        c.set_health(0.5);

        c.level_up();

        assert_eq!(c.health(), f64::from(c.max_health()));
    }
}
