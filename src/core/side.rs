//! The two sides of a battle and per-side storage.
//!
//! ## Side
//!
//! `Side::Player` or `Side::Enemy`. Exactly one side holds the turn.
//!
//! ## Sides
//!
//! One value per side with O(1) indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A participant in the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Enemy];

    /// The side this one fights against.
    ///
    /// ```
    /// use card_battler::core::Side;
    ///
    /// assert_eq!(Side::Player.opponent(), Side::Enemy);
    /// assert_eq!(Side::Enemy.opponent(), Side::Player);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

/// One value per side.
///
/// ## Example
///
/// ```
/// use card_battler::core::{Side, Sides};
///
/// let mut health = Sides::new(|_| 10);
/// health[Side::Enemy] -= 3;
///
/// assert_eq!(health[Side::Player], 10);
/// assert_eq!(health[Side::Enemy], 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sides<T> {
    player: T,
    enemy: T,
}

impl<T> Sides<T> {
    /// Build both entries from a factory.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        let player = factory(Side::Player);
        let enemy = factory(Side::Enemy);
        Self { player, enemy }
    }

    /// Build from explicit values.
    pub fn from_pair(player: T, enemy: T) -> Self {
        Self { player, enemy }
    }

    /// Borrow the acting side mutably together with its opponent.
    pub fn split_mut(&mut self, actor: Side) -> (&mut T, &mut T) {
        match actor {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Enemy, &self.enemy)].into_iter()
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for side in Side::ALL {
            assert_ne!(side, side.opponent());
            assert_eq!(side, side.opponent().opponent());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::Player), "player");
        assert_eq!(format!("{}", Side::Enemy), "enemy");
    }

    #[test]
    fn test_sides_factory_and_index() {
        let mut sides = Sides::new(|side| if side == Side::Player { 1 } else { 2 });

        assert_eq!(sides[Side::Player], 1);
        assert_eq!(sides[Side::Enemy], 2);

        sides[Side::Player] = 5;
        assert_eq!(sides[Side::Player], 5);
    }

    #[test]
    fn test_split_mut() {
        let mut sides = Sides::from_pair(10, 20);

        let (actor, target) = sides.split_mut(Side::Enemy);
        *actor += 1;
        *target -= 1;

        assert_eq!(sides[Side::Enemy], 21);
        assert_eq!(sides[Side::Player], 9);
    }

    #[test]
    fn test_iter_order() {
        let sides = Sides::from_pair("a", "b");
        let pairs: Vec<_> = sides.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &"a"), (Side::Enemy, &"b")]);
    }

    #[test]
    fn test_serialization() {
        let sides = Sides::from_pair(3, 4);
        let json = serde_json::to_string(&sides).unwrap();
        let deserialized: Sides<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(sides, deserialized);
    }
}
