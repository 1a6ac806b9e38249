//! # rust-minigames
//!
//! Turn-based chat minigames: an Exploding Kittens style elimination game
//! and Connect Four with a heuristic AI.
//!
//! ## Design Principles
//!
//! 1. **Engines are pure state machines**: no I/O, no global state. Every
//!    operation validates first and either mutates or returns a `GameError`.
//!
//! 2. **Deterministic**: all randomness flows through a seeded `GameRng`,
//!    so a seed replays a game exactly.
//!
//! 3. **Adapter owns sessions**: the `arcade` layer keys games by channel;
//!    engines know nothing about channels or messages.
//!
//! ## Modules
//!
//! - `core`: player and channel ids, RNG, configuration, errors
//! - `cards`: cards and the draw pile
//! - `rules`: `TurnBasedGame` trait shared by both games
//! - `games`: the Exploding Kittens and Connect Four engines
//! - `arcade`: command parsing, sessions, replies

pub mod arcade;
pub mod cards;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ArcadeConfig, ChannelId, ConfigError, DeckComposition, GameError, GameRng, GameRngState,
    KittensConfig, PlayerId, Result, TargetReason,
};

pub use crate::cards::{Card, CardEffect, Deck, CAT_NAMES};

pub use crate::rules::{GameResult, TurnBasedGame};

pub use crate::games::connect_four::{
    Board, ConnectFourGame, HeuristicAi, Move, MovePolicy, Opponent, Piece, PlaceOutcome,
    RandomMover, Status,
};
pub use crate::games::kittens::{DrawOutcome, KittensGame, KittensGameBuilder, StealOutcome};

pub use crate::arcade::{Arcade, Command, Reply, SessionStore};
