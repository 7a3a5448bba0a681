//! The session: inbound operations for a presentation layer.

use tracing::{debug, info};

use super::schedule::{EnemyTurnTicket, TurnScheduler};
use crate::battle::{BattleEngine, CardPolicy, MatchOutcome, TurnOutcome, UniformPolicy};
use crate::core::config::MatchConfig;
use crate::core::error::{BattleError, BattleResult};
use crate::core::rng::{GameRng, GameRngState};
use crate::core::side::Side;
use crate::core::state::MatchState;
use crate::effects::EffectResolver;
use crate::events::{EventQueue, MatchEvent, MatchSnapshot};
use crate::items::ItemId;
use crate::shop::{EquipOutcome, ShopOffer};

/// Result of a player play.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayReport {
    pub outcome: TurnOutcome,
    /// Set when the enemy is due to act next.
    pub enemy_turn: Option<EnemyTurnTicket>,
}

/// Result of redeeming an enemy-turn ticket.
#[derive(Clone, Debug, PartialEq)]
pub enum EnemyTurnResult {
    Resolved(TurnOutcome),
    /// The ticket was stale or already used. Nothing changed.
    Discarded,
}

/// Result of a purchase.
#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseReport {
    pub offer: ShopOffer,
    /// Inventory id, unless the item applied on purchase.
    pub stored: Option<ItemId>,
}

/// One match plus everything around it: RNG, enemy policy, the enemy-turn
/// scheduler and the event queue.
///
/// ## Usage
///
/// ```
/// use card_battler::session::{EnemyTurnResult, Session};
/// use card_battler::core::MatchConfig;
///
/// let mut session = Session::new(MatchConfig::new(42)).unwrap();
///
/// let report = session.player_plays_card(0).unwrap();
/// let ticket = report.enemy_turn.unwrap();
///
/// // ...wait ticket.delay()...
/// let result = session.run_enemy_turn(ticket).unwrap();
/// assert!(matches!(result, EnemyTurnResult::Resolved(_)));
///
/// // A ticket only works once.
/// assert_eq!(session.run_enemy_turn(ticket).unwrap(), EnemyTurnResult::Discarded);
/// ```
pub struct Session<P: CardPolicy = UniformPolicy> {
    config: MatchConfig,
    rng: GameRng,
    state: MatchState,
    scheduler: TurnScheduler,
    events: EventQueue,
    policy: P,
}

impl Session<UniformPolicy> {
    /// Start a match with the uniform random enemy.
    pub fn new(config: MatchConfig) -> BattleResult<Self> {
        Self::with_policy(config, UniformPolicy)
    }
}

impl<P: CardPolicy> Session<P> {
    /// Start a match with a custom enemy policy.
    pub fn with_policy(config: MatchConfig, policy: P) -> BattleResult<Self> {
        config.validate()?;
        let mut rng = GameRng::new(config.seed);
        let state = MatchState::new(&config, &mut rng);
        let mut session = Self {
            config,
            rng,
            state,
            scheduler: TurnScheduler::new(),
            events: EventQueue::new(),
            policy,
        };
        session.announce_match();
        Ok(session)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.scheduler.generation()
    }

    #[must_use]
    pub fn pending_enemy_turn(&self) -> Option<EnemyTurnTicket> {
        self.scheduler.pending()
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(&self.state, self.scheduler.generation())
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        self.events.drain()
    }

    // === Match lifecycle ===

    /// Replace the match with a fresh one: round 1, new decks, no currency
    /// or inventory. Any scheduled enemy turn is discarded.
    pub fn initialize_match(&mut self) {
        self.scheduler.invalidate();
        self.state = MatchState::new(&self.config, &mut self.rng);
        self.announce_match();
    }

    /// Throw the current match away and start again.
    pub fn restart_match(&mut self) {
        info!(
            round = self.state.round,
            generation = self.scheduler.generation(),
            "restarting match"
        );
        self.initialize_match();
    }

    fn announce_match(&mut self) {
        info!(
            generation = self.scheduler.generation(),
            seed = self.rng.seed(),
            "match started"
        );
        self.events.push(MatchEvent::RoundStarted {
            round: self.state.round,
        });
        self.emit_state();
    }

    // === Battle ===

    /// The player plays the card at `index`.
    ///
    /// A successful play closes the shop. If the enemy survives, its card is
    /// chosen now and returned as a ticket to redeem after the delay.
    pub fn player_plays_card(&mut self, index: usize) -> BattleResult<PlayReport> {
        let engine = BattleEngine::new(&self.config);
        let outcome = engine.resolve_turn(&mut self.state, Side::Player, index, &mut self.rng)?;

        let mut enemy_turn = None;
        if outcome == TurnOutcome::NoCards {
            return Ok(PlayReport {
                outcome,
                enemy_turn,
            });
        }
        match &outcome {
            TurnOutcome::NoCards => {}
            TurnOutcome::Continue { next, record } => {
                self.state.shop.close();
                self.events.push(MatchEvent::CardPlayed(record.clone()));
                if *next == Side::Enemy {
                    enemy_turn = self.schedule_enemy_turn()?;
                }
            }
            TurnOutcome::PlayerWon { record, victory } => {
                self.events.push(MatchEvent::CardPlayed(record.clone()));
                for level_up in &victory.level_ups {
                    self.events.push(MatchEvent::LevelUp {
                        level: level_up.level,
                        max_health: level_up.max_health,
                    });
                }
                self.events.push(MatchEvent::RewardGranted {
                    amount: victory.reward,
                    currency: self.state.currency,
                });
                self.events.push(MatchEvent::MatchOver {
                    outcome: MatchOutcome::PlayerWon,
                    round: victory.round,
                });
                self.events.push(MatchEvent::RoundStarted {
                    round: self.state.round,
                });
                self.scheduler.invalidate();
            }
            TurnOutcome::EnemyWon { record } => {
                self.events.push(MatchEvent::CardPlayed(record.clone()));
            }
        }

        self.emit_state();
        Ok(PlayReport {
            outcome,
            enemy_turn,
        })
    }

    /// Pick the enemy's card and issue a ticket for it. An enemy with an
    /// empty hand forfeits its turn.
    fn schedule_enemy_turn(&mut self) -> BattleResult<Option<EnemyTurnTicket>> {
        let hand = self.state.enemy().piles().hand();
        match self.policy.choose_card(hand, &mut self.rng) {
            Some(card_index) => {
                let ticket = self.scheduler.issue(card_index, self.config.enemy_delay_ms);
                debug!(
                    card_index,
                    sequence = ticket.sequence,
                    delay_ms = ticket.delay_ms,
                    "enemy turn scheduled"
                );
                self.events.push(MatchEvent::EnemyTurnScheduled {
                    delay_ms: ticket.delay_ms,
                });
                Ok(Some(ticket))
            }
            None => {
                debug!("enemy has no cards, turn passes back");
                BattleEngine::new(&self.config).pass_turn(&mut self.state)?;
                Ok(None)
            }
        }
    }

    /// Resolve a scheduled enemy play.
    ///
    /// Stale or already-redeemed tickets are discarded without touching the
    /// match. After an enemy play the match survives, the player draws.
    pub fn run_enemy_turn(&mut self, ticket: EnemyTurnTicket) -> BattleResult<EnemyTurnResult> {
        if !self.scheduler.redeem(&ticket) {
            debug!(
                ticket_generation = ticket.generation,
                generation = self.scheduler.generation(),
                sequence = ticket.sequence,
                "discarding stale enemy turn"
            );
            return Ok(EnemyTurnResult::Discarded);
        }

        let engine = BattleEngine::new(&self.config);
        let outcome =
            engine.resolve_turn(&mut self.state, Side::Enemy, ticket.card_index, &mut self.rng)?;

        match &outcome {
            TurnOutcome::NoCards => {
                engine.pass_turn(&mut self.state)?;
            }
            TurnOutcome::Continue { record, .. } => {
                self.events.push(MatchEvent::CardPlayed(record.clone()));
                self.state.player_mut().piles_mut().draw_card(&mut self.rng);
            }
            TurnOutcome::EnemyWon { record } => {
                self.events.push(MatchEvent::CardPlayed(record.clone()));
                self.events.push(MatchEvent::MatchOver {
                    outcome: MatchOutcome::PlayerLost,
                    round: self.state.round,
                });
                self.scheduler.invalidate();
            }
            TurnOutcome::PlayerWon { .. } => {}
        }

        self.emit_state();
        Ok(EnemyTurnResult::Resolved(outcome))
    }

    // === Shop ===

    /// Buy the offer at `offer_index`.
    ///
    /// Spell cards go straight into the player's deck; everything else is
    /// stored in the inventory. The offers are regenerated afterwards.
    pub fn purchase_item(&mut self, offer_index: usize) -> BattleResult<PurchaseReport> {
        if self.state.is_over() {
            return Err(BattleError::MatchOver);
        }

        let offer = match self
            .state
            .shop
            .purchase(offer_index, &mut self.state.currency)
        {
            Ok(offer) => offer,
            Err(err) => {
                if let BattleError::InsufficientCurrency {
                    item,
                    cost,
                    available,
                } = &err
                {
                    self.events.push(MatchEvent::PurchaseRejected {
                        item: item.clone(),
                        cost: *cost,
                        available: *available,
                    });
                }
                return Err(err);
            }
        };

        let stored = if offer.item.category.applies_on_purchase() {
            EffectResolver::resolve(&offer.item.effect, self.state.player_mut());
            None
        } else {
            Some(self.state.inventory.add(offer.item.clone()))
        };
        info!(
            item = %offer.item,
            price = offer.price,
            currency = self.state.currency,
            "item purchased"
        );

        self.events.push(MatchEvent::ItemPurchased {
            item: offer.item.clone(),
            price: offer.price,
        });
        self.state
            .shop
            .restock(&self.config, &self.state.inventory, &mut self.rng);
        self.emit_state();

        Ok(PurchaseReport { offer, stored })
    }

    /// Equip an owned item, or use it if it is a consumable.
    pub fn equip_item(&mut self, id: ItemId) -> BattleResult<EquipOutcome> {
        if self.state.is_over() {
            return Err(BattleError::MatchOver);
        }

        let exclusive = self.config.capabilities.exclusive_slots;
        let player = &mut self.state.characters[Side::Player];
        let outcome = self.state.inventory.equip(id, player, exclusive)?;
        if outcome == EquipOutcome::AlreadyEquipped {
            return Ok(outcome);
        }

        match &outcome {
            EquipOutcome::Equipped { slot, .. } => {
                let name = self
                    .state
                    .inventory
                    .get(id)
                    .map(|owned| owned.item.name.clone())
                    .unwrap_or_default();
                info!(item = %name, %slot, "item equipped");
                self.events.push(MatchEvent::ItemEquipped {
                    id,
                    name,
                    slot: *slot,
                });
            }
            EquipOutcome::Consumed(item) => {
                info!(item = %item, "item used");
                self.events.push(MatchEvent::ItemUsed { item: item.clone() });
            }
            EquipOutcome::AlreadyEquipped => {}
        }

        self.emit_state();
        Ok(outcome)
    }

    /// Close the shop without playing a card.
    pub fn close_shop(&mut self) {
        self.state.shop.close();
        self.emit_state();
    }

    fn emit_state(&mut self) {
        let snapshot = self.snapshot();
        self.events.push(MatchEvent::StateChanged(Box::new(snapshot)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::HighestDamagePolicy;
    use crate::core::state::BattlePhase;
    use crate::items::names;

    fn session(seed: u64) -> Session {
        Session::new(MatchConfig::new(seed)).unwrap()
    }

    /// Open the shop and restock until `name` is on offer.
    fn offer_index(session: &mut Session, name: &str) -> usize {
        session.state.shop.open(&session.config, &session.state.inventory, &mut session.rng);
        for _ in 0..100 {
            if let Some(i) = session
                .state
                .shop
                .offers()
                .iter()
                .position(|o| o.item.name == name)
            {
                return i;
            }
            session
                .state
                .shop
                .restock(&session.config, &session.state.inventory, &mut session.rng);
        }
        panic!("{name} never offered");
    }

    #[test]
    fn test_new_emits_start_events() {
        let mut s = session(1);
        let events = s.drain_events();

        assert!(matches!(events[0], MatchEvent::RoundStarted { round: 1 }));
        assert!(matches!(events[1], MatchEvent::StateChanged(_)));
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatchConfig::new(1).with_deck(20, 0);
        assert!(matches!(
            Session::new(config),
            Err(BattleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_degenerate_curves_rejected() {
        let mut config = MatchConfig::new(1).with_health(10, 1);
        config.progression.max_health_growth = 0.0;
        assert!(matches!(
            Session::new(config),
            Err(BattleError::InvalidConfig(_))
        ));

        let mut config = MatchConfig::new(1).with_health(10, 1);
        config.progression.xp_threshold_growth = f64::NAN;
        assert!(matches!(
            Session::new(config),
            Err(BattleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_purchase_rejected_when_too_poor() {
        let mut s = session(2);
        let staff = offer_index(&mut s, names::STAFF);
        s.state.currency = 150;
        let inventory_before = s.state.inventory.len();
        s.drain_events();

        let err = s.purchase_item(staff).unwrap_err();

        assert_eq!(
            err,
            BattleError::InsufficientCurrency {
                item: names::STAFF.to_string(),
                cost: 200,
                available: 150
            }
        );
        assert_eq!(s.state.currency, 150);
        assert_eq!(s.state.inventory.len(), inventory_before);
        assert_eq!(
            s.drain_events(),
            vec![MatchEvent::PurchaseRejected {
                item: names::STAFF.to_string(),
                cost: 200,
                available: 150
            }]
        );
    }

    #[test]
    fn test_purchase_spell_card_applies_immediately() {
        let mut s = session(3);
        let fireball = offer_index(&mut s, names::FIREBALL);
        s.state.currency = 10;
        let created = s.state.player().piles().total_created();

        let report = s.purchase_item(fireball).unwrap();

        assert_eq!(report.stored, None);
        assert_eq!(s.state.currency, 0);
        assert_eq!(s.state.player().piles().total_created(), created + 1);
        assert!(s.state.inventory.is_empty());
    }

    #[test]
    fn test_purchase_sword_then_equip() {
        let mut s = session(4);
        let sword = offer_index(&mut s, names::SWORD);
        s.state.currency = 20;

        let report = s.purchase_item(sword).unwrap();
        let id = report.stored.unwrap();

        assert!(s.state.inventory.owns_equipable(names::SWORD));
        assert!(s
            .state
            .shop
            .offers()
            .iter()
            .all(|o| o.item.name != names::SWORD));

        let outcome = s.equip_item(id).unwrap();
        assert!(matches!(outcome, EquipOutcome::Equipped { .. }));
        assert!(s
            .state
            .player()
            .piles()
            .deck()
            .iter()
            .filter(|c| c.is_melee())
            .all(|c| c.name == crate::cards::SLASH));
        assert_eq!(s.equip_item(id).unwrap(), EquipOutcome::AlreadyEquipped);
    }

    #[test]
    fn test_purchase_requires_open_shop() {
        let mut s = session(5);
        s.state.currency = 1000;
        assert_eq!(s.purchase_item(0).unwrap_err(), BattleError::ShopClosed);
    }

    #[test]
    fn test_play_closes_shop() {
        let mut s = session(6);
        offer_index(&mut s, names::ARMOR);
        assert!(s.state.shop.is_open());

        s.player_plays_card(0).unwrap();

        assert!(!s.state.shop.is_open());
    }

    #[test]
    fn test_invalid_play_keeps_shop_open() {
        let mut s = session(7);
        offer_index(&mut s, names::ARMOR);

        assert!(s.player_plays_card(9).is_err());
        assert!(s.state.shop.is_open());
        assert_eq!(s.state.current, Side::Player);
    }

    #[test]
    fn test_enemy_turn_and_player_draw() {
        let mut s = session(8);
        let report = s.player_plays_card(0).unwrap();
        let ticket = report.enemy_turn.unwrap();
        assert_eq!(s.pending_enemy_turn(), Some(ticket));
        assert_eq!(s.state.phase, BattlePhase::EnemyTurn);

        let result = s.run_enemy_turn(ticket).unwrap();

        assert!(matches!(
            result,
            EnemyTurnResult::Resolved(TurnOutcome::Continue {
                next: Side::Player,
                ..
            })
        ));
        assert_eq!(s.state.current, Side::Player);
        assert_eq!(s.state.player().piles().hand().len(), 5);
        assert_eq!(s.pending_enemy_turn(), None);
    }

    #[test]
    fn test_player_cannot_act_during_enemy_turn() {
        let mut s = session(9);
        s.player_plays_card(0).unwrap();

        assert_eq!(
            s.player_plays_card(0).unwrap_err(),
            BattleError::OutOfTurn(Side::Player)
        );
    }

    #[test]
    fn test_restart_discards_pending_turn() {
        let mut s = session(10);
        let ticket = s.player_plays_card(0).unwrap().enemy_turn.unwrap();
        let generation = s.generation();

        s.restart_match();

        assert_eq!(s.generation(), generation + 1);
        assert_eq!(s.run_enemy_turn(ticket).unwrap(), EnemyTurnResult::Discarded);
        assert_eq!(s.state.current, Side::Player);
        assert_eq!(s.state.turn, 0);
        assert_eq!(s.state.enemy().health(), 10.0);
    }

    #[test]
    fn test_quick_win_events() {
        let config = MatchConfig::new(11).with_health(10, 1);
        let mut s = Session::new(config).unwrap();
        s.drain_events();

        let report = s.player_plays_card(0).unwrap();

        assert!(matches!(report.outcome, TurnOutcome::PlayerWon { .. }));
        assert!(report.enemy_turn.is_none());
        let kinds: Vec<_> = s.drain_events().iter().map(MatchEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "card_played",
                "reward_granted",
                "match_over",
                "round_started",
                "state_changed"
            ]
        );
        assert!(s.state.shop.is_open());
        assert_eq!(s.state.currency, 20);
    }

    #[test]
    fn test_quick_loss() {
        let config = MatchConfig::new(12).with_health(1, 50);
        let mut s = Session::with_policy(config, HighestDamagePolicy).unwrap();

        let ticket = s.player_plays_card(0).unwrap().enemy_turn.unwrap();
        let result = s.run_enemy_turn(ticket).unwrap();

        assert!(matches!(
            result,
            EnemyTurnResult::Resolved(TurnOutcome::EnemyWon { .. })
        ));
        assert!(s.state.is_over());
        assert_eq!(s.player_plays_card(0).unwrap_err(), BattleError::MatchOver);
        assert_eq!(s.purchase_item(0).unwrap_err(), BattleError::MatchOver);
        assert!(s.drain_events().iter().any(|e| matches!(
            e,
            MatchEvent::MatchOver {
                outcome: MatchOutcome::PlayerLost,
                ..
            }
        )));
    }

    #[test]
    fn test_potion_used_from_inventory() {
        let mut s = session(13);
        let potion = offer_index(&mut s, names::HEALTH_POTION);
        s.state.currency = 20;
        s.state.player_mut().take_damage(5.0);

        let id = s.purchase_item(potion).unwrap().stored.unwrap();
        let outcome = s.equip_item(id).unwrap();

        assert!(matches!(outcome, EquipOutcome::Consumed(_)));
        assert_eq!(s.state.player().health(), 10.0);
        assert!(s.state.inventory.is_empty());
    }
}
