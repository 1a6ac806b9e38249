//! Connect Four game: two seats, one board, optional AI opponent.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ai::{HeuristicAi, MovePolicy};
use super::board::{Board, Piece};
use crate::core::{GameError, GameRng, PlayerId, Result};
use crate::rules::{GameResult, TurnBasedGame};

/// Who sits in the second seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    Human(PlayerId),
    Ai,
}

impl std::fmt::Display for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Opponent::Human(id) => write!(f, "{}", id.mention()),
            Opponent::Ai => f.write_str("AI"),
        }
    }
}

/// A piece that landed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub piece: Piece,
    pub column: usize,
    pub row: usize,
}

/// Where the game stands after a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The game continues with this seat to move.
    InProgress { next: Opponent },
    /// The seat that moved last completed a line of four.
    Won { by: Opponent },
    /// The board filled up without a line of four.
    Draw,
}

/// Result of a human placement, including the AI's synchronous reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceOutcome {
    pub placed: Move,
    /// Set when the AI moved right after the human.
    pub ai_reply: Option<Move>,
    pub status: Status,
}

impl PlaceOutcome {
    /// Did the last placement in this outcome win the game?
    #[must_use]
    pub fn win(&self) -> bool {
        matches!(self.status, Status::Won { .. })
    }
}

/// Connect Four state.
///
/// Player one always plays `Red` and moves first.
#[derive(Clone, Debug)]
pub struct ConnectFourGame {
    player1: PlayerId,
    player2: Opponent,
    board: Board,
    current: Piece,
    game_over: bool,
    result: Option<GameResult>,
    rng: GameRng,
}

impl ConnectFourGame {
    /// Create a game. Passing the same human in both seats is rejected.
    pub fn new(player1: PlayerId, player2: Opponent, rng: GameRng) -> Result<Self> {
        if player2 == Opponent::Human(player1) {
            return Err(GameError::InvalidSetup(
                "cannot play Connect Four against yourself".to_string(),
            ));
        }
        info!(player1 = player1.raw(), player2 = %player2, "connect four game created");
        Ok(Self {
            player1,
            player2,
            board: Board::new(),
            current: Piece::Red,
            game_over: false,
            result: None,
            rng,
        })
    }

    /// Create a game starting from an existing board, `Red` to move.
    pub fn with_board(player1: PlayerId, player2: Opponent, board: Board, rng: GameRng) -> Result<Self> {
        let mut game = Self::new(player1, player2, rng)?;
        game.board = board;
        Ok(game)
    }

    /// Session identifier: `"<p1>_<p2>"`, or `"<p1>_AI"` against the AI.
    #[must_use]
    pub fn game_id(&self) -> String {
        match self.player2 {
            Opponent::Human(p2) => format!("{}_{}", self.player1.raw(), p2.raw()),
            Opponent::Ai => format!("{}_AI", self.player1.raw()),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player1(&self) -> PlayerId {
        self.player1
    }

    #[must_use]
    pub fn player2(&self) -> Opponent {
        self.player2
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Piece to move next.
    #[must_use]
    pub fn current_piece(&self) -> Piece {
        self.current
    }

    /// Seat to move next.
    #[must_use]
    pub fn current_turn(&self) -> Opponent {
        self.seat(self.current)
    }

    /// Does `player` sit at this table?
    #[must_use]
    pub fn is_participant(&self, player: PlayerId) -> bool {
        player == self.player1 || self.player2 == Opponent::Human(player)
    }

    fn seat(&self, piece: Piece) -> Opponent {
        match piece {
            Piece::Red => Opponent::Human(self.player1),
            Piece::Blue => self.player2,
        }
    }

    /// Drop the acting player's piece into `column`.
    ///
    /// Against the AI, the AI's reply is computed and applied before this
    /// returns. Errors leave the board untouched.
    pub fn place(&mut self, actor: PlayerId, column: usize) -> Result<PlaceOutcome> {
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.is_participant(actor) {
            return Err(GameError::NotInGame(actor));
        }
        // The AI always moves inside the human's call, so a live game has a human up
        let Some(expected) = self.current_player() else {
            return Err(GameError::GameAlreadyOver);
        };
        if expected != actor {
            return Err(GameError::OutOfTurn {
                expected,
                actual: actor,
            });
        }

        let placed = self.apply(column)?;
        let mut ai_reply = None;

        if !self.game_over && self.current_turn() == Opponent::Ai {
            let piece = self.current;
            if let Some(col) = HeuristicAi.choose_column(&mut self.board, piece, &mut self.rng) {
                ai_reply = Some(self.apply(col)?);
            }
        }

        Ok(PlaceOutcome {
            placed,
            ai_reply,
            status: self.status(),
        })
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> Status {
        match &self.result {
            Some(GameResult::Draw) => Status::Draw,
            Some(GameResult::Winner(id)) => Status::Won {
                by: if *id == self.player1 {
                    Opponent::Human(self.player1)
                } else {
                    self.player2
                },
            },
            Some(GameResult::AiWinner) => Status::Won { by: Opponent::Ai },
            None => Status::InProgress {
                next: self.current_turn(),
            },
        }
    }

    /// Place the current piece, then settle win, draw or turn switch.
    fn apply(&mut self, column: usize) -> Result<Move> {
        let piece = self.current;
        let row = self.board.drop_piece(column, piece)?;
        let seat = self.seat(piece);
        debug!(seat = %seat, column, row, "piece placed");

        if self.board.winner() == Some(piece) {
            self.game_over = true;
            self.result = Some(match seat {
                Opponent::Human(id) => GameResult::Winner(id),
                Opponent::Ai => GameResult::AiWinner,
            });
            info!(winner = %seat, "connect four won");
        } else if self.board.is_full() {
            self.game_over = true;
            self.result = Some(GameResult::Draw);
            info!("connect four drawn");
        } else {
            self.current = piece.opponent();
        }

        Ok(Move { piece, column, row })
    }
}

impl TurnBasedGame for ConnectFourGame {
    fn current_player(&self) -> Option<PlayerId> {
        if self.game_over {
            return None;
        }
        match self.current_turn() {
            Opponent::Human(id) => Some(id),
            Opponent::Ai => None,
        }
    }

    fn result(&self) -> Option<GameResult> {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect_four::board::{COLS, ROWS};

    fn p(id: u64) -> PlayerId {
        PlayerId::new(id)
    }

    fn human_game() -> ConnectFourGame {
        ConnectFourGame::new(p(1), Opponent::Human(p(2)), GameRng::new(42)).unwrap()
    }

    #[test]
    fn test_game_id() {
        assert_eq!(human_game().game_id(), "1_2");
        let ai = ConnectFourGame::new(p(1), Opponent::Ai, GameRng::new(1)).unwrap();
        assert_eq!(ai.game_id(), "1_AI");
    }

    #[test]
    fn test_self_play_rejected() {
        assert!(matches!(
            ConnectFourGame::new(p(1), Opponent::Human(p(1)), GameRng::new(1)),
            Err(GameError::InvalidSetup(_))
        ));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = human_game();
        let first = game.place(p(1), 3).unwrap();
        assert_eq!(first.placed, Move { piece: Piece::Red, column: 3, row: 5 });
        assert_eq!(first.status, Status::InProgress { next: Opponent::Human(p(2)) });
        assert_eq!(first.ai_reply, None);

        assert_eq!(
            game.place(p(1), 3),
            Err(GameError::OutOfTurn { expected: p(2), actual: p(1) })
        );
        let second = game.place(p(2), 3).unwrap();
        assert_eq!(second.placed.row, 4);
        assert_eq!(second.placed.piece, Piece::Blue);
        assert_eq!(game.current_player(), Some(p(1)));
    }

    #[test]
    fn test_stranger_rejected() {
        let mut game = human_game();
        assert_eq!(game.place(p(9), 0), Err(GameError::NotInGame(p(9))));
    }

    #[test]
    fn test_full_column_keeps_turn() {
        let mut game = human_game();
        for i in 0..ROWS {
            let actor = if i % 2 == 0 { p(1) } else { p(2) };
            game.place(actor, 0).unwrap();
        }
        let board = game.board().clone();
        assert_eq!(game.place(p(1), 0), Err(GameError::ColumnFull { column: 0 }));
        assert_eq!(game.board(), &board);
        assert_eq!(game.current_player(), Some(p(1)));
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = human_game();
        for col in 0..3 {
            game.place(p(1), col).unwrap();
            game.place(p(2), col).unwrap();
        }
        let outcome = game.place(p(1), 3).unwrap();
        assert!(outcome.win());
        assert_eq!(outcome.status, Status::Won { by: Opponent::Human(p(1)) });
        assert!(game.is_game_over());
        assert_eq!(game.result(), Some(GameResult::Winner(p(1))));
        assert_eq!(game.place(p(2), 4), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_ai_replies_immediately() {
        let mut game = ConnectFourGame::new(p(1), Opponent::Ai, GameRng::new(3)).unwrap();
        let outcome = game.place(p(1), 3).unwrap();

        let reply = outcome.ai_reply.expect("ai should move");
        assert_eq!(reply.piece, Piece::Blue);
        assert_eq!(game.current_player(), Some(p(1)));
        assert_eq!(outcome.status, Status::InProgress { next: Opponent::Human(p(1)) });
    }

    #[test]
    fn test_ai_blocks_horizontal_threat() {
        let mut board = Board::new();
        board.set(5, 0, Some(Piece::Red));
        board.set(5, 1, Some(Piece::Red));
        board.set(4, 0, Some(Piece::Blue));
        board.set(4, 1, Some(Piece::Blue));
        let mut game = ConnectFourGame::with_board(p(1), Opponent::Ai, board, GameRng::new(9)).unwrap();

        // Red makes three in a row on the bottom; AI must block column 3
        let outcome = game.place(p(1), 2).unwrap();
        assert_eq!(outcome.ai_reply.map(|m| m.column), Some(3));
    }

    #[test]
    fn test_ai_wins_when_it_can() {
        let mut board = Board::new();
        for col in 0..3 {
            board.set(5, col, Some(Piece::Blue));
        }
        let mut game = ConnectFourGame::with_board(p(1), Opponent::Ai, board, GameRng::new(9)).unwrap();

        let outcome = game.place(p(1), 6).unwrap();
        assert_eq!(outcome.ai_reply.map(|m| m.column), Some(3));
        assert_eq!(outcome.status, Status::Won { by: Opponent::Ai });
        assert_eq!(game.result(), Some(GameResult::AiWinner));
        assert_eq!(game.current_player(), None);
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                if (row, col) == (0, COLS - 1) {
                    continue;
                }
                let piece = if (row / 2 + col) % 2 == 0 { Piece::Red } else { Piece::Blue };
                board.set(row, col, Some(piece));
            }
        }
        assert!(!board.has_win());
        let mut game = ConnectFourGame::with_board(p(1), Opponent::Human(p(2)), board, GameRng::new(1)).unwrap();

        let outcome = game.place(p(1), COLS - 1).unwrap();
        assert_eq!(outcome.status, Status::Draw);
        assert_eq!(game.result(), Some(GameResult::Draw));
    }
}
