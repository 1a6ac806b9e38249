//! Elimination game implementation.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::outcome::{DrawOutcome, StealOutcome};
use crate::cards::{Card, Deck};
use crate::core::{DeckComposition, GameError, GameRng, KittensConfig, PlayerId, Result, TargetReason};
use crate::rules::{GameResult, TurnBasedGame};

/// Exploding Kittens game state.
///
/// ## Invariants
///
/// - `players` is never empty
/// - `turn_index < players.len()`
/// - every active player has an entry in `hands`
/// - once `exhausted` is set the game is over with no winner
#[derive(Clone, Debug)]
pub struct KittensGame {
    players: Vec<PlayerId>,
    turn_index: usize,
    deck: Deck,
    /// A draw emptied the deck before a winner emerged.
    exhausted: bool,
    hands: FxHashMap<PlayerId, Vec<Card>>,
    config: KittensConfig,
    rng: GameRng,
}

/// Builder for creating a KittensGame.
#[derive(Clone, Debug, Default)]
pub struct KittensGameBuilder {
    config: KittensConfig,
}

impl KittensGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: KittensConfig) -> Self {
        self.config = config;
        self
    }

    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.config.starting_hand_size = size;
        self
    }

    pub fn composition(mut self, composition: DeckComposition) -> Self {
        self.config.composition = composition;
        self
    }

    /// Shuffle the deck and deal the starting hands.
    pub fn build(self, players: Vec<PlayerId>, seed: u64) -> Result<KittensGame> {
        KittensGame::new(players, self.config, GameRng::new(seed))
    }
}

fn validate_roster(players: &[PlayerId]) -> Result<()> {
    if players.len() < 2 {
        return Err(GameError::InvalidSetup(format!(
            "need at least 2 players, got {}",
            players.len()
        )));
    }
    for (i, p) in players.iter().enumerate() {
        if players[..i].contains(p) {
            return Err(GameError::InvalidSetup(format!("{} is listed twice", p)));
        }
    }
    Ok(())
}

impl KittensGame {
    /// Create a game: shuffle the configured deck, deal `starting_hand_size`
    /// cards to each player in roster order, then give everyone one extra
    /// defuse from outside the deck.
    pub fn new(players: Vec<PlayerId>, config: KittensConfig, mut rng: GameRng) -> Result<Self> {
        validate_roster(&players)?;

        config.validate(players.len())?;

        let mut deck = Deck::shuffled(&config.composition, &mut rng);
        let mut hands = FxHashMap::default();

        for &player in &players {
            let mut hand = Vec::with_capacity(config.starting_hand_size + 1);
            for _ in 0..config.starting_hand_size {
                // Deal size was checked above
                if let Some(card) = deck.draw() {
                    hand.push(card);
                }
            }
            hand.push(Card::defuse());
            hands.insert(player, hand);
        }

        info!(
            players = players.len(),
            deck = deck.len(),
            hand_size = config.starting_hand_size + 1,
            "kittens game created"
        );

        Ok(Self {
            players,
            turn_index: 0,
            deck,
            exhausted: false,
            hands,
            config,
            rng,
        })
    }

    /// Create a game from an explicit deck and hands.
    ///
    /// Players without an entry in `hands` start empty-handed.
    pub fn from_parts(
        players: Vec<PlayerId>,
        deck: Deck,
        hands: Vec<(PlayerId, Vec<Card>)>,
        rng: GameRng,
    ) -> Result<Self> {
        validate_roster(&players)?;

        let mut map: FxHashMap<PlayerId, Vec<Card>> =
            players.iter().map(|&p| (p, Vec::new())).collect();
        for (player, cards) in hands {
            match map.get_mut(&player) {
                Some(hand) => hand.extend(cards),
                None => return Err(GameError::NotInGame(player)),
            }
        }

        Ok(Self {
            players,
            turn_index: 0,
            deck,
            exhausted: false,
            hands: map,
            config: KittensConfig::default(),
            rng,
        })
    }

    // === Queries ===

    /// Active players in turn order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }

    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.players[self.turn_index]
    }

    /// The last player standing, once everyone else exploded.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.players.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Has the deck run out before a winner emerged?
    ///
    /// An exhausted game is over and has no winner.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&[Card]> {
        self.hands.get(&player).map(Vec::as_slice)
    }

    #[must_use]
    pub fn hand_size(&self, player: PlayerId) -> usize {
        self.hand(player).map_or(0, <[Card]>::len)
    }

    #[must_use]
    pub fn defuse_count(&self, player: PlayerId) -> usize {
        self.hand(player)
            .map_or(0, |h| h.iter().filter(|c| c.is_defuse()).count())
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn config(&self) -> &KittensConfig {
        &self.config
    }

    /// Cat kinds the player holds at least twice, in hand order.
    #[must_use]
    pub fn matching_pairs(&self, player: PlayerId) -> Vec<String> {
        let Some(hand) = self.hands.get(&player) else {
            return Vec::new();
        };

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for card in hand.iter().filter(|c| c.is_cat()) {
            *counts.entry(card.name()).or_default() += 1;
        }

        let mut pairs: Vec<String> = Vec::new();
        for card in hand.iter().filter(|c| c.is_cat()) {
            let name = card.name();
            if counts.get(name).copied().unwrap_or(0) >= 2 && !pairs.iter().any(|p| p == name) {
                pairs.push(name.to_string());
            }
        }
        pairs
    }

    // === Operations ===

    /// Draw the top card for `player`.
    ///
    /// Drawing the exploding kitten either spends the player's first defuse
    /// and shuffles the kitten back in, or eliminates the player. Drawing
    /// the last card without producing a winner exhausts the game. The
    /// caller checks [`TurnBasedGame::result`] afterwards.
    pub fn draw(&mut self, player: PlayerId) -> Result<DrawOutcome> {
        self.ensure_running()?;
        self.ensure_turn(player)?;

        let card = self.deck.draw().ok_or(GameError::EmptyDeck)?;
        let outcome = if card.is_explode() {
            self.resolve_explosion(player)
        } else {
            debug!(player = player.raw(), card = card.name(), deck = self.deck.len(), "drew card");
            self.hand_mut(player).push(card.clone());
            DrawOutcome::Drew { player, card }
        };

        if self.deck.is_empty() && self.winner().is_none() {
            self.exhausted = true;
            info!(players = self.players.len(), "deck exhausted, game ends without a winner");
        }
        Ok(outcome)
    }

    /// Steal a random card from `target` using any cat pair the player holds.
    ///
    /// Without a pair nothing changes and `StealOutcome::NoPair` is returned.
    /// The pair itself stays in the player's hand.
    pub fn steal(&mut self, player: PlayerId, target: PlayerId) -> Result<StealOutcome> {
        self.ensure_running()?;
        self.ensure_turn(player)?;

        let reason = if target == player {
            Some(TargetReason::SelfTarget)
        } else if !self.is_active(target) {
            Some(TargetReason::NotInGame)
        } else if self.hand_size(target) == 0 {
            Some(TargetReason::EmptyHand)
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(GameError::InvalidTarget { target, reason });
        }

        let pairs = self.matching_pairs(player);
        let Some(pair) = self.rng.choose(&pairs).cloned() else {
            debug!(player = player.raw(), "steal without a cat pair");
            return Ok(StealOutcome::NoPair { player });
        };

        let index = self.rng.gen_range_usize(0..self.hand_size(target));
        let card = self.hand_mut(target).remove(index);
        self.hand_mut(player).push(card.clone());

        debug!(
            player = player.raw(),
            target = target.raw(),
            card = card.name(),
            pair = pair.as_str(),
            "stole card"
        );
        Ok(StealOutcome::Stole {
            player,
            target,
            card,
            pair,
        })
    }

    /// Move the turn to the next active player and return them.
    pub fn advance_turn(&mut self) -> PlayerId {
        self.turn_index = (self.turn_index + 1) % self.players.len();
        let next = self.current();
        debug!(player = next.raw(), turn_index = self.turn_index, "turn advanced");
        next
    }

    // === Internals ===

    fn ensure_running(&self) -> Result<()> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        Ok(())
    }

    fn ensure_turn(&self, player: PlayerId) -> Result<()> {
        if !self.is_active(player) {
            return Err(GameError::NotInGame(player));
        }
        let expected = self.current();
        if expected != player {
            return Err(GameError::OutOfTurn {
                expected,
                actual: player,
            });
        }
        Ok(())
    }

    fn hand_mut(&mut self, player: PlayerId) -> &mut Vec<Card> {
        self.hands.entry(player).or_default()
    }

    fn resolve_explosion(&mut self, player: PlayerId) -> DrawOutcome {
        let defuse = self
            .hands
            .get(&player)
            .and_then(|hand| hand.iter().position(Card::is_defuse));

        match defuse {
            Some(index) => {
                self.hand_mut(player).remove(index);
                let reinserted_at = self.deck.insert_random(Card::exploding_kitten(), &mut self.rng);
                info!(player = player.raw(), reinserted_at, deck = self.deck.len(), "explosion defused");
                DrawOutcome::Defused {
                    player,
                    reinserted_at,
                }
            }
            None => {
                self.eliminate(player);
                info!(player = player.raw(), remaining = self.players.len(), "player exploded");
                DrawOutcome::Exploded {
                    player,
                    remaining: self.players.len(),
                }
            }
        }
    }

    /// Remove a player and their hand, keeping the turn pointer on the same
    /// seat (which now holds the eliminated player's successor).
    fn eliminate(&mut self, player: PlayerId) {
        let Some(index) = self.players.iter().position(|&p| p == player) else {
            return;
        };

        self.players.remove(index);
        self.hands.remove(&player);
        assert!(
            !self.players.is_empty(),
            "elimination left no active players; deck composition is broken"
        );

        if index < self.turn_index {
            self.turn_index -= 1;
        }
        self.turn_index %= self.players.len();
    }
}

impl TurnBasedGame for KittensGame {
    fn current_player(&self) -> Option<PlayerId> {
        if self.is_over() {
            None
        } else {
            Some(self.current())
        }
    }

    fn result(&self) -> Option<GameResult> {
        match self.winner() {
            Some(winner) => Some(GameResult::Winner(winner)),
            None => self.exhausted.then_some(GameResult::Draw),
        }
    }
}
