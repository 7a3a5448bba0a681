//! Enemy-turn scheduling.
//!
//! The engine never sleeps. When the enemy is due to act it hands the caller
//! an `EnemyTurnTicket`, the caller waits `delay()` however it likes, then
//! redeems the ticket. A ticket is good exactly once, and only while the
//! match generation that issued it is still current: restarting the match,
//! finishing a round or ending the match bumps the generation and strands
//! any ticket still in flight.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A deferred enemy play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyTurnTicket {
    pub generation: u64,
    pub sequence: u64,
    /// Enemy hand index, chosen when the turn was scheduled.
    pub card_index: usize,
    pub delay_ms: u64,
}

impl EnemyTurnTicket {
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Issues and validates tickets.
#[derive(Clone, Debug, Default)]
pub struct TurnScheduler {
    generation: u64,
    next_sequence: u64,
    pending: Option<EnemyTurnTicket>,
}

impl TurnScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn pending(&self) -> Option<EnemyTurnTicket> {
        self.pending
    }

    /// Issue a ticket for the current generation, replacing any pending one.
    pub fn issue(&mut self, card_index: usize, delay_ms: u64) -> EnemyTurnTicket {
        let ticket = EnemyTurnTicket {
            generation: self.generation,
            sequence: self.next_sequence,
            card_index,
            delay_ms,
        };
        self.next_sequence += 1;
        self.pending = Some(ticket);
        ticket
    }

    /// Consume `ticket` if it is the pending one.
    pub fn redeem(&mut self, ticket: &EnemyTurnTicket) -> bool {
        if self.pending.as_ref() == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Start a new generation. Any outstanding ticket becomes stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}
