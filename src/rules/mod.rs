//! Game-agnostic turn and result interface.
//!
//! The adapter layer calls into `TurnBasedGame` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, TurnBasedGame};
