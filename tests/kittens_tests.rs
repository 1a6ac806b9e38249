//! Exploding Kittens engine tests across whole games.
//!
//! These drive the public API only: deal, steal, draw, eliminate, win.

use rust_minigames::cards::{Card, CardEffect, Deck};
use rust_minigames::core::{DeckComposition, GameError, GameRng, KittensConfig, PlayerId};
use rust_minigames::games::kittens::{DrawOutcome, KittensGame, KittensGameBuilder, StealOutcome};
use rust_minigames::rules::{GameResult, TurnBasedGame};

fn roster(n: u64) -> Vec<PlayerId> {
    (1..=n).map(PlayerId::new).collect()
}

/// Two players with the default deck: 28 cards, 5 each dealt, plus a defuse.
#[test]
fn test_two_player_deal() {
    let game = KittensGameBuilder::new().build(roster(2), 42).unwrap();

    assert_eq!(game.deck_len(), 18);
    for &player in game.players() {
        assert_eq!(game.hand_size(player), 6);
        assert!(game.defuse_count(player) >= 1);
        assert!(game.hand(player).unwrap().last().unwrap().is_defuse());
    }
    assert_eq!(game.current(), PlayerId::new(1));
    assert_eq!(game.result(), None);
}

/// Every card of the composition ends up in a hand or the deck.
#[test]
fn test_deal_conserves_cards() {
    for players in 2..=5 {
        let game = KittensGameBuilder::new().build(roster(players), players).unwrap();
        let in_hands: usize = game.players().iter().map(|&p| game.hand_size(p)).sum();
        let bonus = players as usize;
        assert_eq!(game.deck_len() + in_hands - bonus, DeckComposition::default().total_cards().unwrap());
    }
}

#[test]
fn test_deal_too_large_is_rejected() {
    let config = KittensConfig::default().with_starting_hand_size(10);
    let result = KittensGame::new(roster(3), config, GameRng::new(1));
    assert!(matches!(result, Err(GameError::InvalidSetup(_))));
}

/// Three players; the middle one explodes and play passes to the third.
#[test]
fn test_elimination_passes_turn_to_successor() {
    let deck = Deck::from_cards(vec![
        Card::of(CardEffect::Nope),
        Card::of(CardEffect::Skip),
        Card::exploding_kitten(),
    ]);
    let mut game = KittensGame::from_parts(
        roster(3),
        deck,
        vec![(PlayerId::new(1), vec![Card::cat("Big Cat")])],
        GameRng::new(3),
    )
    .unwrap();

    game.advance_turn();
    assert_eq!(game.current(), PlayerId::new(2));

    let outcome = game.draw(PlayerId::new(2)).unwrap();
    assert_eq!(
        outcome,
        DrawOutcome::Exploded {
            player: PlayerId::new(2),
            remaining: 2
        }
    );
    assert!(!outcome.ends_turn());
    assert_eq!(game.current(), PlayerId::new(3));
    assert_eq!(game.hand(PlayerId::new(2)), None);

    // Third player draws normally, then the turn wraps to the first
    let outcome = game.draw(PlayerId::new(3)).unwrap();
    assert!(outcome.ends_turn());
    assert_eq!(game.advance_turn(), PlayerId::new(1));
}

#[test]
fn test_eliminated_player_cannot_act() {
    let deck = Deck::from_cards(vec![Card::of(CardEffect::Skip), Card::exploding_kitten()]);
    let mut game = KittensGame::from_parts(roster(3), deck, Vec::new(), GameRng::new(9)).unwrap();

    game.draw(PlayerId::new(1)).unwrap();
    assert_eq!(game.draw(PlayerId::new(1)), Err(GameError::NotInGame(PlayerId::new(1))));
    assert_eq!(
        game.steal(PlayerId::new(2), PlayerId::new(1)),
        Err(GameError::InvalidTarget {
            target: PlayerId::new(1),
            reason: rust_minigames::core::TargetReason::NotInGame,
        })
    );
}

#[test]
fn test_defuse_then_explode() {
    let deck = Deck::from_cards(vec![Card::exploding_kitten()]);
    let mut game = KittensGame::from_parts(
        roster(2),
        deck,
        vec![(PlayerId::new(1), vec![Card::defuse()])],
        GameRng::new(5),
    )
    .unwrap();

    // Kitten goes back into an otherwise empty deck, so it is drawn again
    let outcome = game.draw(PlayerId::new(1)).unwrap();
    assert!(matches!(outcome, DrawOutcome::Defused { reinserted_at: 0, .. }));
    assert_eq!(game.defuse_count(PlayerId::new(1)), 0);
    assert_eq!(game.deck_len(), 1);

    game.advance_turn();
    let outcome = game.draw(PlayerId::new(2)).unwrap();
    assert!(matches!(outcome, DrawOutcome::Exploded { remaining: 1, .. }));
    assert_eq!(game.winner(), Some(PlayerId::new(1)));
    assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::new(1))));
    assert!(game.is_over());
    assert_eq!(game.draw(PlayerId::new(1)), Err(GameError::GameAlreadyOver));
}

#[test]
fn test_steal_then_draw_turn() {
    let deck = Deck::from_cards(vec![Card::of(CardEffect::Nope)]);
    let mut game = KittensGame::from_parts(
        roster(2),
        deck,
        vec![
            (PlayerId::new(1), vec![Card::cat("Smol Cat"), Card::cat("Smol Cat")]),
            (PlayerId::new(2), vec![Card::of(CardEffect::Attack2)]),
        ],
        GameRng::new(11),
    )
    .unwrap();

    let steal = game.steal(PlayerId::new(1), PlayerId::new(2)).unwrap();
    assert!(matches!(
        steal,
        StealOutcome::Stole { ref card, ref pair, .. } if card.name() == "Attack x2" && pair == "Smol Cat"
    ));
    // Stealing does not end the turn
    assert_eq!(game.current(), PlayerId::new(1));

    game.draw(PlayerId::new(1)).unwrap();
    assert_eq!(game.hand_size(PlayerId::new(1)), 4);
    assert_eq!(game.hand_size(PlayerId::new(2)), 0);
}

/// Auto-play whole games and check the turn invariants after every step.
#[test]
fn test_full_games_keep_invariants() {
    for seed in 0..20u64 {
        let players = 2 + seed % 4;
        let composition = DeckComposition::default().with_bombs(players as usize - 1);
        let mut game = KittensGameBuilder::new()
            .composition(composition)
            .build(roster(players), seed)
            .unwrap();

        for _ in 0..500 {
            assert!(game.turn_index() < game.players().len());
            let current = game.current();
            assert!(game.is_active(current));

            let outcome = match game.draw(current) {
                Ok(outcome) => outcome,
                Err(err) => panic!("unexpected error: {err}"),
            };
            if game.is_over() {
                break;
            }
            if outcome.ends_turn() {
                game.advance_turn();
            }
        }

        // Either someone outlasted everyone or the deck ran out
        match game.result() {
            Some(GameResult::Winner(winner)) => assert_eq!(game.players(), &[winner]),
            Some(GameResult::Draw) => {
                assert!(game.is_exhausted());
                assert_eq!(game.deck_len(), 0);
            }
            other => panic!("game did not finish: {other:?}"),
        }
    }
}

/// Every kitten dealt into hands: the deck runs dry and nobody wins.
#[test]
fn test_deck_exhaustion_ends_without_winner() {
    let deck = Deck::from_cards(vec![Card::of(CardEffect::Skip), Card::cat("Beard Cat")]);
    let mut game = KittensGame::from_parts(
        roster(2),
        deck,
        vec![(PlayerId::new(2), vec![Card::exploding_kitten()])],
        GameRng::new(8),
    )
    .unwrap();

    game.draw(PlayerId::new(1)).unwrap();
    game.advance_turn();
    game.draw(PlayerId::new(2)).unwrap();

    assert!(game.is_exhausted());
    assert_eq!(game.result(), Some(GameResult::Draw));
    assert_eq!(game.draw(PlayerId::new(1)), Err(GameError::GameAlreadyOver));
}

#[test]
fn test_same_seed_same_game() {
    let a = KittensGameBuilder::new().build(roster(4), 77).unwrap();
    let b = KittensGameBuilder::new().build(roster(4), 77).unwrap();
    assert_eq!(a.deck().cards(), b.deck().cards());
    for &player in a.players() {
        assert_eq!(a.hand(player), b.hand(player));
    }
}
