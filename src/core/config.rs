//! Match configuration.
//!
//! A host configures the engine at startup by providing a `MatchConfig`:
//! - `Capabilities`: which optional systems this run includes
//! - `Progression`: the leveling curve
//! - Character, deck, scaling, reward and shop constants
//!
//! Defaults reproduce the full-featured game. `Capabilities::basic()` gives
//! the stripped-down variant (no leveling, no staff, no ring, free slots).
//! Every field is `#[serde(default)]`, so partial documents deserialize.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{BattleError, BattleResult};
use crate::shop::Pricing;

/// Optional systems a match can run with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// XP rewards, level-ups and the growing XP multiplier.
    pub leveling: bool,
    /// Staff in the shop and the staff spell multiplier.
    pub staff: bool,
    /// Regeneration Ring in the shop.
    pub regeneration_ring: bool,
    /// At most one equipped item per slot. When off, the slot just tracks
    /// the most recently equipped item.
    pub exclusive_slots: bool,
}

impl Capabilities {
    /// Every system enabled.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            leveling: true,
            staff: true,
            regeneration_ring: true,
            exclusive_slots: true,
        }
    }

    /// Bare battler: melee, armor, spell cards and potions only.
    #[must_use]
    pub const fn basic() -> Self {
        Self {
            leveling: false,
            staff: false,
            regeneration_ring: false,
            exclusive_slots: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}

/// Leveling curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progression {
    /// XP needed to reach level 2.
    pub starting_xp_threshold: u32,
    /// Factor applied (then floored) to the threshold on each level-up.
    pub xp_threshold_growth: f64,
    /// Factor applied (then floored) to max health on each level-up.
    pub max_health_growth: f64,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            starting_xp_threshold: 10,
            xp_threshold_growth: 1.5,
            max_health_growth: 1.1,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// RNG seed for the whole match.
    pub seed: u64,

    /// Optional systems.
    pub capabilities: Capabilities,

    /// Leveling curve for the player.
    pub progression: Progression,

    pub player_name: String,
    pub enemy_name: String,

    /// Player health at match start.
    pub starting_health: u32,

    /// Health of the round-1 enemy. Later enemies scale from it.
    pub enemy_starting_health: u32,

    /// Cards in a freshly created deck.
    pub deck_size: usize,

    /// Cards a hand is topped up to.
    pub hand_size: usize,

    /// Inclusive damage range for starting melee cards.
    pub melee_damage_min: u32,
    pub melee_damage_max: u32,

    /// Per-round factor on enemy max health and damage multiplier.
    pub enemy_scaling: f64,

    /// Currency for winning round 1.
    pub base_reward: u64,

    /// Per-round growth of the currency reward.
    pub reward_growth: f64,

    /// XP for a kill before the XP multiplier.
    pub base_xp_reward: f64,

    /// Factor applied to the XP multiplier after every kill.
    pub xp_multiplier_growth: f64,

    /// Added to the staff multiplier for spell cards.
    pub staff_spell_bonus: f64,

    /// "Thinking" delay before the enemy acts.
    pub enemy_delay_ms: u64,

    /// Random offers per shop visit (the health potion comes on top).
    pub shop_offer_count: usize,

    /// Shop prices.
    pub pricing: Pricing,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            capabilities: Capabilities::full(),
            progression: Progression::default(),
            player_name: "Player".to_string(),
            enemy_name: "Enemy".to_string(),
            starting_health: 10,
            enemy_starting_health: 10,
            deck_size: 20,
            hand_size: 5,
            melee_damage_min: 1,
            melee_damage_max: 3,
            enemy_scaling: 1.1,
            base_reward: 20,
            reward_growth: 1.1,
            base_xp_reward: 1.0,
            xp_multiplier_growth: 1.1,
            staff_spell_bonus: 0.2,
            enemy_delay_ms: 1000,
            shop_offer_count: 5,
            pricing: Pricing::default(),
        }
    }
}

impl MatchConfig {
    /// Create a default configuration with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the capability set.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Set the leveling curve.
    #[must_use]
    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.progression = progression;
        self
    }

    /// Set player and round-1 enemy health.
    #[must_use]
    pub fn with_health(mut self, player: u32, enemy: u32) -> Self {
        self.starting_health = player;
        self.enemy_starting_health = enemy;
        self
    }

    /// Set deck and hand sizes.
    #[must_use]
    pub fn with_deck(mut self, deck_size: usize, hand_size: usize) -> Self {
        self.deck_size = deck_size;
        self.hand_size = hand_size;
        self
    }

    /// Set the starting melee damage range.
    #[must_use]
    pub fn with_melee_damage(mut self, min: u32, max: u32) -> Self {
        self.melee_damage_min = min;
        self.melee_damage_max = max;
        self
    }

    /// Set the enemy delay in milliseconds.
    #[must_use]
    pub fn with_enemy_delay_ms(mut self, delay_ms: u64) -> Self {
        self.enemy_delay_ms = delay_ms;
        self
    }

    /// Set how many random offers the shop shows.
    #[must_use]
    pub fn with_shop_offer_count(mut self, count: usize) -> Self {
        self.shop_offer_count = count;
        self
    }

    /// Set the shop prices.
    #[must_use]
    pub fn with_pricing(mut self, pricing: Pricing) -> Self {
        self.pricing = pricing;
        self
    }

    /// Starting melee damage as a range.
    #[must_use]
    pub fn melee_damage(&self) -> RangeInclusive<u32> {
        self.melee_damage_min..=self.melee_damage_max
    }

    /// Enemy delay as a `Duration`.
    #[must_use]
    pub fn enemy_delay(&self) -> Duration {
        Duration::from_millis(self.enemy_delay_ms)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> BattleResult<()> {
        let fail = |msg: &str| Err(BattleError::InvalidConfig(msg.to_string()));

        if self.hand_size == 0 {
            return fail("hand_size must be at least 1");
        }
        if self.deck_size == 0 {
            return fail("deck_size must be at least 1");
        }
        if self.melee_damage_min > self.melee_damage_max {
            return fail("melee_damage_min exceeds melee_damage_max");
        }
        if self.starting_health == 0 || self.enemy_starting_health == 0 {
            return fail("starting health must be positive");
        }
        if self.progression.starting_xp_threshold == 0 {
            return fail("starting_xp_threshold must be positive");
        }

        // Comparisons are written so NaN fails them.
        let at_least = |value: f64, min: f64| value.is_finite() && value >= min;
        let positive = |value: f64| value.is_finite() && value > 0.0;

        if !at_least(self.progression.xp_threshold_growth, 1.0) {
            return fail("xp_threshold_growth must be at least 1.0");
        }
        if !at_least(self.progression.max_health_growth, 1.0) {
            return fail("max_health_growth must be at least 1.0");
        }
        if !positive(self.enemy_scaling) {
            return fail("enemy_scaling must be a positive number");
        }
        if !positive(self.reward_growth) {
            return fail("reward_growth must be a positive number");
        }
        if !positive(self.xp_multiplier_growth) {
            return fail("xp_multiplier_growth must be a positive number");
        }
        if !at_least(self.base_xp_reward, 0.0) {
            return fail("base_xp_reward must be a non-negative number");
        }
        if !at_least(self.staff_spell_bonus, 0.0) {
            return fail("staff_spell_bonus must be a non-negative number");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_full_game() {
        let config = MatchConfig::default();

        assert_eq!(config.capabilities, Capabilities::full());
        assert_eq!(config.starting_health, 10);
        assert_eq!(config.deck_size, 20);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.melee_damage(), 1..=3);
        assert_eq!(config.enemy_delay(), Duration::from_millis(1000));
        assert_eq!(config.progression.starting_xp_threshold, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_basic_capabilities() {
        let caps = Capabilities::basic();
        assert!(!caps.leveling);
        assert!(!caps.staff);
        assert!(!caps.regeneration_ring);
        assert!(!caps.exclusive_slots);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new(7)
            .with_capabilities(Capabilities::basic())
            .with_health(30, 5)
            .with_deck(12, 4)
            .with_melee_damage(2, 2)
            .with_enemy_delay_ms(0)
            .with_shop_offer_count(3);

        assert_eq!(config.seed, 7);
        assert_eq!(config.starting_health, 30);
        assert_eq!(config.enemy_starting_health, 5);
        assert_eq!(config.deck_size, 12);
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.melee_damage(), 2..=2);
        assert_eq!(config.enemy_delay(), Duration::ZERO);
        assert_eq!(config.shop_offer_count, 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(MatchConfig::default().with_deck(20, 0).validate().is_err());
        assert!(MatchConfig::default().with_melee_damage(4, 1).validate().is_err());
        assert!(MatchConfig::default().with_health(0, 10).validate().is_err());

        let mut config = MatchConfig::default();
        config.progression.xp_threshold_growth = 0.5;
        assert!(matches!(config.validate(), Err(BattleError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_bad_curves() {
        let cases: [(&str, fn(&mut MatchConfig)); 12] = [
            ("xp_threshold_growth", |c| c.progression.xp_threshold_growth = f64::NAN),
            ("max_health_growth", |c| c.progression.max_health_growth = 0.0),
            ("max_health_growth", |c| c.progression.max_health_growth = 0.9),
            ("max_health_growth", |c| c.progression.max_health_growth = f64::NAN),
            ("enemy_scaling", |c| c.enemy_scaling = f64::INFINITY),
            ("reward_growth", |c| c.reward_growth = f64::NAN),
            ("reward_growth", |c| c.reward_growth = -1.0),
            ("xp_multiplier_growth", |c| c.xp_multiplier_growth = f64::NAN),
            ("xp_multiplier_growth", |c| c.xp_multiplier_growth = 0.0),
            ("base_xp_reward", |c| c.base_xp_reward = -1.0),
            ("base_xp_reward", |c| c.base_xp_reward = f64::NAN),
            ("staff_spell_bonus", |c| c.staff_spell_bonus = f64::NEG_INFINITY),
        ];

        for (field, corrupt) in cases {
            let mut config = MatchConfig::default();
            corrupt(&mut config);
            match config.validate() {
                Err(BattleError::InvalidConfig(msg)) => assert!(msg.contains(field), "{msg}"),
                other => panic!("{field}: expected InvalidConfig, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_accepts_flat_curves() {
        let mut config = MatchConfig::default();
        config.progression.xp_threshold_growth = 1.0;
        config.progression.max_health_growth = 1.0;
        config.base_xp_reward = 0.0;
        config.staff_spell_bonus = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{ "seed": 99, "capabilities": { "staff": false } }"#).unwrap();

        assert_eq!(config.seed, 99);
        assert!(!config.capabilities.staff);
        assert!(config.capabilities.leveling);
        assert_eq!(config.deck_size, 20);
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::new(3).with_capabilities(Capabilities::basic());
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
