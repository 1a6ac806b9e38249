//! Draw pile for the elimination game.
//!
//! The deck is a stack: the last element of the backing `Vec` is the top
//! card. Insertion indices run from `0` (bottom) to `len()` (top).

use serde::{Deserialize, Serialize};

use super::card::{Card, CardEffect, CAT_NAMES};
use crate::core::{DeckComposition, GameRng, CAT_COPIES};

/// Ordered draw pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck from cards in bottom-to-top order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Build the unshuffled deck for a composition.
    #[must_use]
    pub fn from_composition(composition: &DeckComposition) -> Self {
        let counts = [
            (CardEffect::Explode, composition.bomb_count),
            (CardEffect::Defuse, composition.defuse_count),
            (CardEffect::Attack2, composition.attack_x2_count),
            (CardEffect::Attack3, composition.attack_x3_count),
            (CardEffect::Skip, composition.skip_count),
            (CardEffect::Nope, composition.nope_count),
            (CardEffect::Future, composition.future_count),
            (CardEffect::RevealFuture, composition.reveal_future_count),
        ];

        let mut cards = Vec::with_capacity(composition.total_cards().unwrap_or_default());
        for (effect, count) in counts {
            cards.extend(std::iter::repeat_with(|| Card::of(effect)).take(count));
        }
        for name in CAT_NAMES {
            cards.extend(std::iter::repeat_with(|| Card::cat(name)).take(CAT_COPIES));
        }

        Self { cards }
    }

    /// Build and shuffle the deck for a composition.
    #[must_use]
    pub fn shuffled(composition: &DeckComposition, rng: &mut GameRng) -> Self {
        let mut deck = Self::from_composition(composition);
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Insert a card at a uniformly random position in `0..=len()`.
    ///
    /// Returns the chosen index.
    pub fn insert_random(&mut self, card: Card, rng: &mut GameRng) -> usize {
        let index = rng.gen_index_inclusive(self.cards.len());
        self.cards.insert(index, card);
        index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Count cards with the given effect.
    #[must_use]
    pub fn count_effect(&self, effect: CardEffect) -> usize {
        self.cards.iter().filter(|c| c.effect() == effect).count()
    }

    /// Cards in bottom-to-top order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_composition_counts() {
        let deck = Deck::from_composition(&DeckComposition::default());
        assert_eq!(deck.len(), 28);
        assert_eq!(deck.count_effect(CardEffect::Explode), 1);
        assert_eq!(deck.count_effect(CardEffect::Defuse), 6);
        assert_eq!(deck.count_effect(CardEffect::Cat), 10);
        for name in CAT_NAMES {
            assert_eq!(deck.cards().iter().filter(|c| c.name() == name).count(), 2);
        }
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let comp = DeckComposition::default();
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&comp, &mut rng);
        let plain = Deck::from_composition(&comp);

        assert_eq!(deck.len(), plain.len());
        assert_ne!(deck.cards(), plain.cards());

        let mut a: Vec<_> = deck.cards().iter().map(|c| c.name().to_string()).collect();
        let mut b: Vec<_> = plain.cards().iter().map(|c| c.name().to_string()).collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::from_cards(vec![Card::defuse(), Card::exploding_kitten()]);
        assert_eq!(deck.draw(), Some(Card::exploding_kitten()));
        assert_eq!(deck.draw(), Some(Card::defuse()));
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_insert_random_in_bounds() {
        let mut rng = GameRng::new(3);
        let mut deck = Deck::from_cards(vec![Card::cat("A"); 5]);
        for expected_len in 6..20 {
            let idx = deck.insert_random(Card::exploding_kitten(), &mut rng);
            assert!(idx < expected_len);
            assert_eq!(deck.len(), expected_len);
            assert!(deck.cards()[idx].is_explode());
        }
    }
}
