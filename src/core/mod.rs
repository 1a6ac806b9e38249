//! Core engine types: players, RNG, configuration, errors.
//!
//! These are shared by both game engines and by the adapter layer.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{ArcadeConfig, DeckComposition, KittensConfig, CAT_COPIES, MAX_COUNT};
pub use error::{ConfigError, GameError, Result, TargetReason};
pub use player::{ChannelId, PlayerId};
pub use rng::{GameRng, GameRngState};
