//! Item effects.
//!
//! - `Effect`: a parameterised mutation of one character
//! - `EffectResolver`: applies an effect and reports whether anything changed
//!
//! Effects never touch match state (currency, inventory, turn order); they
//! only see the character they are applied to.

mod effect;
mod resolver;

pub use effect::Effect;
pub use resolver::{EffectResolver, Resolution};
