//! Shared turn-based game trait.
//!
//! Both engines implement `TurnBasedGame` so the adapter can ask any game
//! whose turn it is and whether it has finished, without knowing its rules.

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// No winner: a full Connect Four board or an exhausted kittens deck.
    Draw,
    /// The heuristic AI won a Connect Four game.
    AiWinner,
}

/// Turn-based game trait.
///
/// ## Implementation Notes
///
/// - `current_player`: `None` when the game is over, or when the AI is
///   the side to move
/// - `result`: `None` while the game continues
pub trait TurnBasedGame {
    /// The human player expected to act next.
    fn current_player(&self) -> Option<PlayerId>;

    /// Check if the game is over.
    fn result(&self) -> Option<GameResult>;

    /// Convenience wrapper over `result`.
    fn is_over(&self) -> bool {
        self.result().is_some()
    }
}
