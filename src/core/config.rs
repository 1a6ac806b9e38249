//! Game configuration types.
//!
//! - `DeckComposition`: how many of each card kind go into a kittens deck
//! - `KittensConfig`: composition plus starting hand size
//! - `ArcadeConfig`: adapter-level settings (command prefix, seed)
//!
//! All structs deserialize from JSON with per-field defaults, so a config
//! file only needs to name the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, GameError};
use crate::cards::CAT_NAMES;

/// Number of copies of each cat card.
pub const CAT_COPIES: usize = 2;

/// Largest accepted hand size or per-kind card count.
pub const MAX_COUNT: usize = 100;

/// Per-kind card counts for an elimination deck.
///
/// Cat cards are not configurable: every deck holds each of the five
/// cat kinds twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckComposition {
    pub bomb_count: usize,
    pub defuse_count: usize,
    pub attack_x2_count: usize,
    pub attack_x3_count: usize,
    pub skip_count: usize,
    pub nope_count: usize,
    pub future_count: usize,
    pub reveal_future_count: usize,
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self {
            bomb_count: 1,
            defuse_count: 6,
            attack_x2_count: 2,
            attack_x3_count: 2,
            skip_count: 2,
            nope_count: 2,
            future_count: 2,
            reveal_future_count: 1,
        }
    }
}

impl DeckComposition {
    /// Number of cat cards in every deck.
    pub const CAT_CARDS: usize = CAT_NAMES.len() * CAT_COPIES;

    /// Configurable counts, keyed by setting name.
    #[must_use]
    pub fn counts(&self) -> [(&'static str, usize); 8] {
        [
            ("defuse_count", self.defuse_count),
            ("bomb_count", self.bomb_count),
            ("attack_x2_count", self.attack_x2_count),
            ("attack_x3_count", self.attack_x3_count),
            ("skip_count", self.skip_count),
            ("nope_count", self.nope_count),
            ("future_count", self.future_count),
            ("reveal_future_count", self.reveal_future_count),
        ]
    }

    /// Total number of cards the shuffled deck starts with.
    ///
    /// `None` if the counts overflow.
    #[must_use]
    pub fn total_cards(&self) -> Option<usize> {
        self.counts()
            .iter()
            .try_fold(Self::CAT_CARDS, |total, &(_, count)| total.checked_add(count))
    }

    #[must_use]
    pub fn with_bombs(mut self, count: usize) -> Self {
        self.bomb_count = count;
        self
    }

    #[must_use]
    pub fn with_defuses(mut self, count: usize) -> Self {
        self.defuse_count = count;
        self
    }

    #[must_use]
    pub fn with_attacks(mut self, x2: usize, x3: usize) -> Self {
        self.attack_x2_count = x2;
        self.attack_x3_count = x3;
        self
    }

    #[must_use]
    pub fn with_skips(mut self, count: usize) -> Self {
        self.skip_count = count;
        self
    }

    #[must_use]
    pub fn with_nopes(mut self, count: usize) -> Self {
        self.nope_count = count;
        self
    }

    #[must_use]
    pub fn with_futures(mut self, future: usize, reveal: usize) -> Self {
        self.future_count = future;
        self.reveal_future_count = reveal;
        self
    }
}

/// Settings for one elimination game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KittensConfig {
    /// Cards dealt from the deck to each player, before the bonus defuse.
    pub starting_hand_size: usize,
    pub composition: DeckComposition,
}

impl Default for KittensConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: 5,
            composition: DeckComposition::default(),
        }
    }
}

impl KittensConfig {
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_composition(mut self, composition: DeckComposition) -> Self {
        self.composition = composition;
        self
    }

    /// Cards left in the deck after dealing to `players` players.
    ///
    /// Returns `None` if the deck cannot cover the deal.
    #[must_use]
    pub fn deck_after_deal(&self, players: usize) -> Option<usize> {
        let dealt = players.checked_mul(self.starting_hand_size)?;
        self.composition.total_cards()?.checked_sub(dealt)
    }

    /// Check the settings for a game of `players` and return the deck size
    /// left after the deal.
    ///
    /// Every count must be at most [`MAX_COUNT`], and the deal must leave at
    /// least one card to draw.
    pub fn validate(&self, players: usize) -> Result<usize, GameError> {
        let oversized = std::iter::once(("starting_hand_size", self.starting_hand_size))
            .chain(self.composition.counts())
            .find(|&(_, count)| count > MAX_COUNT);
        if let Some((name, count)) = oversized {
            return Err(GameError::InvalidSetup(format!(
                "{name} of {count} is above the limit of {MAX_COUNT}"
            )));
        }

        match self.deck_after_deal(players) {
            Some(left) if left > 0 => Ok(left),
            _ => Err(GameError::InvalidSetup(format!(
                "deck of {} cards cannot deal {} cards to {} players and keep a draw pile",
                self.composition.total_cards().unwrap_or_default(),
                self.starting_hand_size,
                players
            ))),
        }
    }
}

/// Adapter-level configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Command prefix (e.g. `!`).
    pub prefix: String,
    /// Master seed. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Defaults for `start_game` when the command gives no overrides.
    pub kittens: KittensConfig,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            seed: None,
            kittens: KittensConfig::default(),
        }
    }
}

impl ArcadeConfig {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::Invalid("prefix must not be empty".to_string()));
        }
        self.kittens
            .validate(2)
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        Ok(())
    }
}
