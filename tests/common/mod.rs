//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use card_battler::core::Side;
use card_battler::session::{EnemyTurnResult, Session};
use card_battler::{CardPolicy, Character, MatchState};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test subscriber once. Honors `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Every card a character ever created is in exactly one pile.
pub fn assert_card_integrity(character: &Character) {
    let piles = character.piles();
    assert_eq!(
        piles.deck().len() + piles.hand().len() + piles.discard().len(),
        piles.total_created(),
        "{} lost or duplicated a card",
        character.name
    );
    assert!(piles.hand().len() <= piles.hand_limit());
}

/// Health stays within `0..=max_health`.
pub fn assert_health_bounds(character: &Character) {
    assert!(character.health() >= 0.0, "{} health below zero", character.name);
    assert!(
        character.health() <= f64::from(character.max_health()),
        "{} health above max",
        character.name
    );
}

pub fn assert_state_invariants(state: &MatchState) {
    for (_, character) in state.characters.iter() {
        assert_card_integrity(character);
        assert_health_bounds(character);
    }
    assert!(state.round >= 1);
}

/// Play card 0 and resolve the enemy's reply, if any.
///
/// Returns `false` once the match is over.
pub fn play_exchange<P: CardPolicy>(session: &mut Session<P>) -> bool {
    if session.state().is_over() {
        return false;
    }
    assert_eq!(session.state().current, Side::Player);
    let report = session.player_plays_card(0).expect("player play");
    if let Some(ticket) = report.enemy_turn {
        let result = session.run_enemy_turn(ticket).expect("enemy play");
        assert!(matches!(result, EnemyTurnResult::Resolved(_)));
    }
    !session.state().is_over()
}
