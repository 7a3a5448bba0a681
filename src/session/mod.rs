//! Session facade and enemy-turn scheduling.
//!
//! `Session` owns one match and exposes the operations a presentation layer
//! calls: play, buy, equip, restart, plus `run_enemy_turn` to redeem a
//! scheduled enemy move. Every mutation queues events; the host drains them.

pub mod game;
pub mod schedule;

pub use game::{EnemyTurnResult, PlayReport, PurchaseReport, Session};
pub use schedule::{EnemyTurnTicket, TurnScheduler};
