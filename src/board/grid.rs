//! Fixed-size game grid and move application.

use crate::error::{BoardParseError, MoveError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side to move. The human always opens a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    /// Mark drawn for this player (`O` for the human, `X` for the AI).
    pub fn symbol(&self) -> char {
        match self {
            Player::Human => 'O',
            Player::Ai => 'X',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Board coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of a row-major cell index on a board `cols` wide.
    pub const fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    pub const fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Step by `(dr, dc)`, or `None` when the result would be negative.
    pub(crate) fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rows x cols grid plus the run length needed to win on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Self {
        Self {
            rows,
            cols,
            win_length,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// `X` is an AI mark, `O` a human mark, and `.`, `_` or a space is empty.
    pub fn from_rows(rows: &[&str], win_length: usize) -> Result<Self, BoardParseError> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(BoardParseError::Empty);
        }

        let mut board = Board::new(rows.len(), width, win_length);
        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(BoardParseError::RaggedRow {
                    row,
                    expected: width,
                    got,
                });
            }
            for (col, character) in line.chars().enumerate() {
                let cell = match character {
                    'X' | 'x' => Cell::Mark(Player::Ai),
                    'O' | 'o' => Cell::Mark(Player::Human),
                    '.' | '_' | ' ' => Cell::Empty,
                    _ => {
                        return Err(BoardParseError::InvalidCell {
                            character,
                            row,
                            col,
                        })
                    }
                };
                board.cells[row * width + col] = cell;
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Cell at `pos`. Out-of-bounds positions read as empty.
    pub fn get(&self, pos: Pos) -> Cell {
        if self.in_bounds(pos) {
            self.cells[pos.index(self.cols)]
        } else {
            Cell::Empty
        }
    }

    /// Mark an empty cell.
    pub fn place(&mut self, pos: Pos, player: Player) -> Result<Pos, MoveError> {
        if !self.in_bounds(pos) {
            return Err(MoveError::OutOfBounds);
        }
        let index = pos.index(self.cols);
        if !self.cells[index].is_empty() {
            return Err(MoveError::CellOccupied);
        }
        self.cells[index] = Cell::Mark(player);
        Ok(pos)
    }

    /// Drop a piece into `col`; it settles in the lowest empty row.
    /// Returns the position where it landed.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<Pos, MoveError> {
        if col >= self.cols {
            return Err(MoveError::OutOfBounds);
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull)?;
        let pos = Pos::new(row, col);
        self.cells[pos.index(self.cols)] = Cell::Mark(player);
        Ok(pos)
    }

    /// Lowest empty row of `col`, if the column has room.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.cols + col].is_empty())
    }

    /// Empty a cell again. Only search uses this, on its own copy.
    pub(crate) fn lift(&mut self, pos: Pos) {
        if self.in_bounds(pos) {
            self.cells[pos.index(self.cols)] = Cell::Empty;
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| Pos::from_index(i, self.cols))
            .collect()
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Mark(player))
            .count()
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = match self.get(Pos::new(row, col)) {
                    Cell::Empty => '.',
                    Cell::Mark(p) => p.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
