//! Connect Four: 6x7, four in a row, pieces drop to the lowest free row.

use super::Rules;
use crate::ai::{evaluate, GameTuning};
use crate::board::{Board, Cell, Player, Pos};
use crate::config::ArcadeConfig;
use crate::error::{BoardParseError, MoveError};

/// Any found win outranks every heuristic score
const SCORE_WIN: i32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectFour;

impl Rules for ConnectFour {
    /// Column index, left to right.
    type Move = usize;

    const NAME: &'static str = "connect-four";
    const ROWS: usize = 6;
    const COLS: usize = 7;
    const WIN_LENGTH: usize = 4;
    const BOUNDED_SEARCH: bool = true;

    fn legal_moves(board: &Board) -> Vec<usize> {
        (0..board.cols())
            .filter(|&col| board.landing_row(col).is_some())
            .collect()
    }

    fn check_position(board: &Board) -> Result<(), BoardParseError> {
        for col in 0..board.cols() {
            for row in 0..board.rows().saturating_sub(1) {
                let occupied = board.get(Pos::new(row, col)) != Cell::Empty;
                if occupied && board.get(Pos::new(row + 1, col)) == Cell::Empty {
                    return Err(BoardParseError::FloatingPiece { row, col });
                }
            }
        }
        Ok(())
    }

    fn apply(board: &mut Board, col: usize, player: Player) -> Result<Pos, MoveError> {
        board.drop_piece(col, player)
    }

    fn win_score(_ply: u32) -> i32 {
        SCORE_WIN
    }

    fn static_score(board: &Board, me: Player) -> i32 {
        evaluate(board, me)
    }

    fn default_tuning() -> GameTuning {
        GameTuning::connect_four()
    }

    fn tuning(config: &ArcadeConfig) -> GameTuning {
        config.connect_four
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{Horizon, SearchEngine};

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows, 4).unwrap()
    }

    #[test]
    fn test_legal_moves_skip_full_columns() {
        let b = board(&["X......", "O......", "X......", "O......", "X......", "O......"]);
        assert_eq!(ConnectFour::legal_moves(&b), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_apply_lands_on_top_of_column() {
        let mut b = ConnectFour::new_board();
        assert_eq!(ConnectFour::apply(&mut b, 2, Player::Human), Ok(Pos::new(5, 2)));
        assert_eq!(ConnectFour::apply(&mut b, 2, Player::Ai), Ok(Pos::new(4, 2)));
        assert_eq!(
            ConnectFour::apply(&mut b, 9, Player::Ai),
            Err(MoveError::OutOfBounds)
        );
    }

    #[test]
    fn test_check_position_requires_support() {
        let stacked = board(&[".......", ".......", ".......", ".......", "..O....", "..X...O"]);
        assert_eq!(ConnectFour::check_position(&stacked), Ok(()));

        let floating = board(&[".......", ".......", ".......", ".......", "......X", "..X...."]);
        assert_eq!(
            ConnectFour::check_position(&floating),
            Err(BoardParseError::FloatingPiece { row: 4, col: 6 })
        );
    }

    #[test]
    fn test_static_score_uses_evaluator() {
        let b = board(&[".......", ".......", ".......", ".......", ".......", "...X..."]);
        assert_eq!(ConnectFour::static_score(&b, Player::Ai), 3);
    }

    #[test]
    fn test_blocks_vertical_threat() {
        let b = board(&[
            ".......", ".......", ".......", "O......", "O......", "O.XX...",
        ]);
        let mut engine = SearchEngine::<ConnectFour>::new(Horizon::Plies(3));
        assert_eq!(engine.best_move(&b, Player::Ai).mv, Some(0));
    }
}
