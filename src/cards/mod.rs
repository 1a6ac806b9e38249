//! Card system for the elimination game.
//!
//! ## Key Types
//!
//! - `CardEffect`: what a card does (explode, defuse, cat, ...)
//! - `Card`: immutable name + effect
//! - `Deck`: shuffled draw pile, drawn from the top

pub mod card;
pub mod deck;

pub use card::{Card, CardEffect, CAT_NAMES};
pub use deck::Deck;
