//! Two-player board games played against the AI.

pub mod connect_four;
pub mod tic_tac_toe;

pub use connect_four::ConnectFour;
pub use tic_tac_toe::TicTacToe;

use crate::ai::GameTuning;
use crate::config::ArcadeConfig;
use crate::board::{Board, Player, Pos};
use crate::error::{BoardParseError, MoveError};
use std::fmt::Debug;

/// Geometry and move semantics of one game, plus the scoring hooks the
/// search needs.
pub trait Rules {
    /// What a player submits: a cell, a column, ...
    type Move: Copy + Eq + Debug;

    const NAME: &'static str;
    const ROWS: usize;
    const COLS: usize;
    const WIN_LENGTH: usize;
    /// Whether the game is too large to search to the end.
    const BOUNDED_SEARCH: bool;

    fn new_board() -> Board {
        Board::new(Self::ROWS, Self::COLS, Self::WIN_LENGTH)
    }

    /// Legal moves in the order the search tries them.
    fn legal_moves(board: &Board) -> Vec<Self::Move>;

    /// Reject positions the game's own moves could never produce.
    fn check_position(_board: &Board) -> Result<(), BoardParseError> {
        Ok(())
    }

    /// Apply `mv` for `player`, returning the cell that was filled.
    fn apply(board: &mut Board, mv: Self::Move, player: Player) -> Result<Pos, MoveError>;

    /// Score of a win made `ply` plies below the searched position, for the winner.
    fn win_score(ply: u32) -> i32;

    /// Score of an undecided position where the search stops, for `me`.
    fn static_score(board: &Board, me: Player) -> i32;

    fn default_tuning() -> GameTuning;

    /// This game's tuning as configured by the user.
    fn tuning(config: &ArcadeConfig) -> GameTuning;
}
