//! Move policies for Connect Four.
//!
//! - `HeuristicAi`: win if possible, otherwise block, otherwise random
//! - `RandomMover`: uniformly random legal column

use tracing::debug;

use super::board::{Board, Piece};
use crate::core::GameRng;

/// Policy for picking the next column.
pub trait MovePolicy {
    /// Choose a column for `piece`, or `None` if the board is full.
    ///
    /// Implementations may place speculative pieces but must leave the
    /// board exactly as they found it.
    fn choose_column(&self, board: &mut Board, piece: Piece, rng: &mut GameRng) -> Option<usize>;
}

/// First column (left to right) where `piece` would complete a line of four.
///
/// Each candidate is placed, tested and removed again before the next one.
pub fn best_move(board: &mut Board, piece: Piece) -> Option<usize> {
    for col in board.available_columns() {
        let Some(row) = board.landing_row(col) else {
            continue;
        };
        board.set(row, col, Some(piece));
        let wins = board.winner() == Some(piece);
        board.set(row, col, None);
        if wins {
            return Some(col);
        }
    }
    None
}

/// Rule-priority opponent: win, then block, then random.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicAi;

impl MovePolicy for HeuristicAi {
    fn choose_column(&self, board: &mut Board, piece: Piece, rng: &mut GameRng) -> Option<usize> {
        if let Some(col) = best_move(board, piece) {
            debug!(column = col, "ai takes winning column");
            return Some(col);
        }
        if let Some(col) = best_move(board, piece.opponent()) {
            debug!(column = col, "ai blocks opponent");
            return Some(col);
        }
        RandomMover.choose_column(board, piece, rng)
    }
}

/// Uniformly random non-full column.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomMover;

impl MovePolicy for RandomMover {
    fn choose_column(&self, board: &mut Board, _piece: Piece, rng: &mut GameRng) -> Option<usize> {
        let columns = board.available_columns();
        rng.choose(&columns).copied()
    }
}
