//! Connect Four grid and win detection.
//!
//! Row 0 is the top of the board; pieces fall toward row `ROWS - 1`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameError, Result};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of pieces in a winning line.
const RUN: isize = 4;

/// Line directions checked from every cell: right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Piece colour. `Red` belongs to the first player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Red,
    Blue,
}

impl Piece {
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Piece::Red => Piece::Blue,
            Piece::Blue => Piece::Red,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Piece::Red => "🟥",
            Piece::Blue => "🟦",
        }
    }
}

/// A board cell: `None` is empty.
pub type Cell = Option<Piece>;

/// Columns that can still take a piece.
pub type Columns = SmallVec<[usize; COLS]>;

/// 6x7 Connect Four grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell contents. Out-of-range coordinates read as empty.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Overwrite a cell directly, ignoring gravity.
    ///
    /// Used to set up positions and to undo speculative moves.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Lowest empty row in a column, or `None` if the column is full.
    #[must_use]
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_none())
    }

    #[must_use]
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    #[must_use]
    pub fn available_columns(&self) -> Columns {
        (0..COLS).filter(|&c| !self.is_column_full(c)).collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available_columns().is_empty()
    }

    /// Drop a piece into a column and return the row it landed on.
    ///
    /// A full or out-of-range column leaves the board unchanged.
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Result<usize> {
        if col >= COLS {
            return Err(GameError::InvalidColumn { column: col });
        }
        let row = self
            .landing_row(col)
            .ok_or(GameError::ColumnFull { column: col })?;
        self.cells[row][col] = Some(piece);
        Ok(row)
    }

    /// Owner of the first line of four found, scanning every cell.
    #[must_use]
    pub fn winner(&self) -> Option<Piece> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let Some(piece) = self.cells[row][col] else {
                    continue;
                };
                if DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.check_direction(row, col, dr, dc, piece))
                {
                    return Some(piece);
                }
            }
        }
        None
    }

    /// Check whether any line of four exists.
    #[must_use]
    pub fn has_win(&self) -> bool {
        self.winner().is_some()
    }

    fn check_direction(&self, row: usize, col: usize, dr: isize, dc: isize, piece: Piece) -> bool {
        (1..RUN).all(|i| {
            let r = row as isize + dr * i;
            let c = col as isize + dc * i;
            (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.cells[r as usize][c as usize] == Some(piece)
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "1️⃣2️⃣3️⃣4️⃣5️⃣6️⃣7️⃣")?;
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                f.write_str(cell.map_or("⬛", Piece::symbol))?;
            }
            if i + 1 < ROWS {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
