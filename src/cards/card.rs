//! Card definitions for the elimination game.
//!
//! A `Card` is immutable once created. Several cards share an effect;
//! the five cat cards share the `Cat` effect and are told apart by name.

use serde::{Deserialize, Serialize};

/// Names of the five pair-matchable cat kinds.
pub const CAT_NAMES: [&str; 5] = ["Palindrome Cat", "Beard Cat", "Smol Cat", "Big Cat", "Panzer Cat"];

/// What a card does when it matters.
///
/// Only `Explode`, `Defuse` and `Cat` have rules attached. The others sit
/// in hands and deck without resolution logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardEffect {
    Explode,
    Defuse,
    Attack2,
    Attack3,
    Skip,
    Nope,
    Future,
    RevealFuture,
    Cat,
}

impl CardEffect {
    /// Display name for every non-cat effect.
    #[must_use]
    pub fn default_name(self) -> Option<&'static str> {
        match self {
            CardEffect::Explode => Some("Exploding Kitten"),
            CardEffect::Defuse => Some("Defuse"),
            CardEffect::Attack2 => Some("Attack x2"),
            CardEffect::Attack3 => Some("Attack x3"),
            CardEffect::Skip => Some("Skip"),
            CardEffect::Nope => Some("Nope"),
            CardEffect::Future => Some("See the Future"),
            CardEffect::RevealFuture => Some("Reveal the Future"),
            CardEffect::Cat => None,
        }
    }
}

/// A single card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    name: String,
    effect: CardEffect,
}

impl Card {
    /// Create a card with an explicit name.
    #[must_use]
    pub fn new(name: impl Into<String>, effect: CardEffect) -> Self {
        Self {
            name: name.into(),
            effect,
        }
    }

    /// Create a card of a non-cat effect with its standard name.
    ///
    /// # Panics
    ///
    /// Panics when called with `CardEffect::Cat`; use [`Card::cat`].
    #[must_use]
    pub fn of(effect: CardEffect) -> Self {
        let name = effect
            .default_name()
            .unwrap_or_else(|| panic!("cat cards need a name, use Card::cat"));
        Self::new(name, effect)
    }

    #[must_use]
    pub fn exploding_kitten() -> Self {
        Self::of(CardEffect::Explode)
    }

    #[must_use]
    pub fn defuse() -> Self {
        Self::of(CardEffect::Defuse)
    }

    /// Create a cat card.
    #[must_use]
    pub fn cat(name: impl Into<String>) -> Self {
        Self::new(name, CardEffect::Cat)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn effect(&self) -> CardEffect {
        self.effect
    }

    #[must_use]
    pub fn is_defuse(&self) -> bool {
        self.effect == CardEffect::Defuse
    }

    #[must_use]
    pub fn is_explode(&self) -> bool {
        self.effect == CardEffect::Explode
    }

    #[must_use]
    pub fn is_cat(&self) -> bool {
        self.effect == CardEffect::Cat
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names() {
        assert_eq!(Card::exploding_kitten().name(), "Exploding Kitten");
        assert_eq!(Card::defuse().name(), "Defuse");
        assert_eq!(Card::of(CardEffect::RevealFuture).name(), "Reveal the Future");
    }

    #[test]
    fn test_cat_card() {
        let cat = Card::cat(CAT_NAMES[2]);
        assert!(cat.is_cat());
        assert_eq!(cat.to_string(), "Smol Cat");
        assert!(!cat.is_defuse());
    }

    #[test]
    #[should_panic(expected = "cat cards need a name")]
    fn test_cat_without_name_panics() {
        let _ = Card::of(CardEffect::Cat);
    }

    #[test]
    fn test_effect_serialization() {
        let json = serde_json::to_string(&CardEffect::RevealFuture).unwrap();
        assert_eq!(json, "\"reveal_future\"");
        let card: Card = serde_json::from_str(r#"{"name":"Defuse","effect":"defuse"}"#).unwrap();
        assert_eq!(card, Card::defuse());
    }
}
