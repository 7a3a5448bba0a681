//! Turn resolution and round progression.
//!
//! `BattleEngine` borrows the match configuration and mutates a
//! `MatchState`. It never schedules anything itself: after a play that hands
//! the turn to the enemy, the caller decides when the enemy acts.

use tracing::{debug, info};

use super::damage::{damage_dealt, damage_multiplier};
use super::record::{MatchOutcome, TurnOutcome, TurnRecord, VictoryReport};
use crate::character::Character;
use crate::core::config::MatchConfig;
use crate::core::error::{BattleError, BattleResult};
use crate::core::rng::GameRng;
use crate::core::side::Side;
use crate::core::state::{BattlePhase, MatchState};

/// Rules of the battle.
///
/// ## Usage
///
/// ```
/// use card_battler::battle::{BattleEngine, TurnOutcome};
/// use card_battler::core::{GameRng, MatchConfig, MatchState, Side};
///
/// let config = MatchConfig::new(42);
/// let mut rng = GameRng::new(config.seed);
/// let mut state = MatchState::new(&config, &mut rng);
/// let engine = BattleEngine::new(&config);
///
/// let outcome = engine.resolve_turn(&mut state, Side::Player, 0, &mut rng).unwrap();
/// assert!(matches!(outcome, TurnOutcome::Continue { next: Side::Enemy, .. }));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BattleEngine<'a> {
    config: &'a MatchConfig,
}

impl<'a> BattleEngine<'a> {
    #[must_use]
    pub fn new(config: &'a MatchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        self.config
    }

    /// `actor` plays the card at `card_index` against the other side.
    ///
    /// An empty hand is a no-op (`TurnOutcome::NoCards`). A bad index, a
    /// finished match or a side acting out of turn is rejected without
    /// touching the state.
    pub fn resolve_turn(
        &self,
        state: &mut MatchState,
        actor: Side,
        card_index: usize,
        rng: &mut GameRng,
    ) -> BattleResult<TurnOutcome> {
        if state.is_over() {
            return Err(BattleError::MatchOver);
        }
        if state.current != actor {
            return Err(BattleError::OutOfTurn(actor));
        }
        if state.characters[actor].piles().hand().is_empty() {
            debug!(%actor, "no cards to play");
            return Ok(TurnOutcome::NoCards);
        }

        let round = state.round;
        let (attacker, target) = state.characters.split_mut(actor);
        let card = attacker.piles_mut().play_card(card_index, rng)?;

        let multiplier = damage_multiplier(
            attacker,
            &card,
            self.config.capabilities.staff,
            self.config.staff_spell_bonus,
        );
        let damage = damage_dealt(card.damage, multiplier, target.damage_resistance);
        target.take_damage(damage);
        attacker.regenerate();

        state.turn += 1;
        let record = TurnRecord {
            round,
            turn: state.turn,
            side: actor,
            card,
            multiplier,
            damage_dealt: damage,
            target_health: target.health(),
        };
        debug!(
            %actor,
            card = %record.card,
            multiplier,
            damage,
            target_health = record.target_health,
            "card played"
        );
        let defeated = target.is_defeated();
        state.history.push_back(record.clone());

        if !defeated {
            let next = actor.opponent();
            state.current = next;
            state.phase = BattlePhase::turn_of(next);
            return Ok(TurnOutcome::Continue { next, record });
        }

        match actor {
            Side::Player => {
                state.phase = BattlePhase::PlayerWon;
                let victory = self.claim_victory(state, rng);
                Ok(TurnOutcome::PlayerWon { record, victory })
            }
            Side::Enemy => {
                state.phase = BattlePhase::EnemyWon;
                info!(round, turn = state.turn, "player defeated, match over");
                Ok(TurnOutcome::EnemyWon { record })
            }
        }
    }

    /// Apply everything a player victory grants: XP (when leveling is on),
    /// the currency reward, the shop, and the next round.
    pub fn claim_victory(&self, state: &mut MatchState, rng: &mut GameRng) -> VictoryReport {
        let won_round = state.round;

        let (xp_gained, level_ups) = if self.config.capabilities.leveling {
            let player = state.player_mut();
            let xp = self.config.base_xp_reward * player.progress().xp_multiplier;
            let level_ups = player.gain_xp(xp);
            player.progress_mut().xp_multiplier *= self.config.xp_multiplier_growth;
            (xp, level_ups)
        } else {
            (0.0, Vec::new())
        };

        let reward = self.round_reward(won_round);
        state.currency += reward;
        state.round += 1;
        info!(
            round = won_round,
            reward,
            currency = state.currency,
            xp = xp_gained,
            "round won"
        );

        state.shop.open(self.config, &state.inventory, rng);
        self.next_round(state, rng);

        state.current = Side::Player;
        state.phase = BattlePhase::PlayerTurn;

        VictoryReport {
            round: won_round,
            xp_gained,
            level_ups,
            reward,
        }
    }

    /// Currency for winning `round`: `floor(base * growth^(round - 1))`.
    #[must_use]
    pub fn round_reward(&self, round: u32) -> u64 {
        let exponent = round.saturating_sub(1) as i32;
        let reward = self.config.base_reward as f64 * self.config.reward_growth.powi(exponent);
        reward.floor() as u64
    }

    /// Start the next round: redraw the player's hand and replace the enemy
    /// with a scaled-up one.
    pub fn next_round(&self, state: &mut MatchState, rng: &mut GameRng) {
        state.player_mut().piles_mut().redraw_hand(rng);

        let scaling = self.config.enemy_scaling;
        let old = state.enemy();
        let max_health = (f64::from(old.max_health()) * scaling).floor() as u32;
        let multiplier = old.damage_multiplier * scaling;

        let enemy = Character::new(
            self.config.enemy_name.clone(),
            max_health.max(1),
            multiplier,
            self.config,
            rng,
        );
        *state.enemy_mut() = enemy;

        info!(
            round = state.round,
            enemy_health = max_health,
            enemy_multiplier = multiplier,
            "next round"
        );
    }

    /// Hand the turn to the other side without a play.
    pub fn pass_turn(&self, state: &mut MatchState) -> BattleResult<Side> {
        if state.is_over() {
            return Err(BattleError::MatchOver);
        }
        let next = state.current.opponent();
        state.current = next;
        state.phase = BattlePhase::turn_of(next);
        debug!(%next, "turn passed");
        Ok(next)
    }

    /// `Some` once the match has ended.
    #[must_use]
    pub fn is_terminal(&self, state: &MatchState) -> Option<MatchOutcome> {
        match state.phase {
            BattlePhase::EnemyWon => Some(MatchOutcome::PlayerLost),
            _ => None,
        }
    }
}
