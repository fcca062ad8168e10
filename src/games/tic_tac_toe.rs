//! Tic-Tac-Toe: 3x3, three in a row, moves name a cell.

use super::Rules;
use crate::ai::GameTuning;
use crate::board::{Board, Player, Pos};
use crate::config::ArcadeConfig;
use crate::error::MoveError;

/// Base score of a win; each ply of delay costs one point
const SCORE_WIN: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToe;

impl Rules for TicTacToe {
    type Move = Pos;

    const NAME: &'static str = "tic-tac-toe";
    const ROWS: usize = 3;
    const COLS: usize = 3;
    const WIN_LENGTH: usize = 3;
    const BOUNDED_SEARCH: bool = false;

    fn legal_moves(board: &Board) -> Vec<Pos> {
        board.empty_cells()
    }

    fn apply(board: &mut Board, mv: Pos, player: Player) -> Result<Pos, MoveError> {
        board.place(mv, player)
    }

    fn win_score(ply: u32) -> i32 {
        SCORE_WIN - ply as i32
    }

    /// Only reached on a full board (a draw) or under a configured depth cap.
    fn static_score(_board: &Board, _me: Player) -> i32 {
        0
    }

    fn default_tuning() -> GameTuning {
        GameTuning::tic_tac_toe()
    }

    fn tuning(config: &ArcadeConfig) -> GameTuning {
        config.tic_tac_toe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{Horizon, SearchEngine};

    #[test]
    fn test_legal_moves_are_row_major_empty_cells() {
        let board = Board::from_rows(&["X.O", "...", "..X"], 3).unwrap();
        let moves = TicTacToe::legal_moves(&board);
        assert_eq!(moves.len(), 6);
        assert_eq!(moves[0], Pos::new(0, 1));
        assert_eq!(moves[5], Pos::new(2, 1));
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let mut board = TicTacToe::new_board();
        TicTacToe::apply(&mut board, Pos::new(1, 1), Player::Human).unwrap();
        let before = board.clone();
        assert_eq!(
            TicTacToe::apply(&mut board, Pos::new(1, 1), Player::Ai),
            Err(MoveError::CellOccupied)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_win_score_prefers_quick_wins() {
        assert_eq!(TicTacToe::win_score(0), 10);
        assert_eq!(TicTacToe::win_score(3), 7);
    }

    #[test]
    fn test_empty_board_is_a_draw_with_best_play() {
        let board = TicTacToe::new_board();
        let mut engine = SearchEngine::<TicTacToe>::new(Horizon::Exhaustive);
        assert_eq!(engine.best_move(&board, Player::Ai).score, 0);
    }

    #[test]
    fn test_answers_corner_opening_with_center() {
        // Every reply except the center loses against a corner opening.
        let board = Board::from_rows(&["O..", "...", "..."], 3).unwrap();
        let mut engine = SearchEngine::<TicTacToe>::new(Horizon::Exhaustive);
        let result = engine.best_move(&board, Player::Ai);
        assert_eq!(result.mv, Some(Pos::new(1, 1)));
        assert_eq!(result.score, 0);
    }
}
