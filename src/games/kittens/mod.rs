//! Exploding Kittens elimination game.
//!
//! - Each player starts with a dealt hand plus one bonus defuse
//! - On your turn: optionally steal with a cat pair, then draw a card
//! - Drawing the exploding kitten without a defuse knocks you out
//! - Last player standing wins
//!
//! Attack, skip, nope and future cards are dealt and drawn like any other
//! card but have no effect.

mod game;
mod outcome;

pub use game::{KittensGame, KittensGameBuilder};
pub use outcome::{DrawOutcome, StealOutcome};
