//! Connect Four with a heuristic AI opponent.
//!
//! Two seats drop pieces into a 6x7 grid; four in a row (horizontal,
//! vertical or diagonal) wins. Against the AI, the AI's reply is applied
//! in the same call as the human move.

mod ai;
mod board;
mod game;

pub use ai::{best_move, HeuristicAi, MovePolicy, RandomMover};
pub use board::{Board, Cell, Columns, Piece, COLS, ROWS};
pub use game::{ConnectFourGame, Move, Opponent, PlaceOutcome, Status};
