//! Heuristic scoring for positions the search cannot play out.

use crate::board::{Board, Cell, Player, Pos};

/// Window scores, from the scoring side's point of view
const SCORE_FULL: i32 = 100;
const SCORE_OPEN_THREE: i32 = 5;
const SCORE_OPEN_TWO: i32 = 2;
/// Opponent one short of a full window
const SCORE_OPPONENT_THREE: i32 = -4;
/// Per own mark in the center column
const SCORE_CENTER: i32 = 3;

/// Window directions: (row_delta, col_delta)
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (-1, 1), // Diagonal up-right
];

/// Score `board` for `me`. Positive favours `me`.
///
/// Every window of `win_length` cells in the four line directions is scored
/// by [`score_window`], and each of `me`'s marks in the center column adds a
/// small bonus.
pub fn evaluate(board: &Board, me: Player) -> i32 {
    let center = board.cols() / 2;
    let mut score = (0..board.rows())
        .filter(|&row| board.get(Pos::new(row, center)) == Cell::Mark(me))
        .count() as i32
        * SCORE_CENTER;

    let len = board.win_length();
    let mut window = Vec::with_capacity(len);
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            for (dr, dc) in DIRECTIONS {
                window.clear();
                let mut cur = Some(Pos::new(row, col));
                while window.len() < len {
                    match cur {
                        Some(p) if board.in_bounds(p) => {
                            window.push(board.get(p));
                            cur = p.offset(dr, dc);
                        }
                        _ => break,
                    }
                }
                if window.len() == len {
                    score += score_window(&window, me);
                }
            }
        }
    }
    score
}

/// Score one window of cells.
fn score_window(window: &[Cell], me: Player) -> i32 {
    let len = window.len();
    let own = window.iter().filter(|&&c| c == Cell::Mark(me)).count();
    let opponent = window
        .iter()
        .filter(|&&c| c == Cell::Mark(me.opponent()))
        .count();
    let empty = len - own - opponent;

    if own == len {
        SCORE_FULL
    } else if own + 1 == len && empty == 1 {
        SCORE_OPEN_THREE
    } else if own + 2 == len && empty == 2 {
        SCORE_OPEN_TWO
    } else if opponent + 1 == len && empty == 1 {
        SCORE_OPPONENT_THREE
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connect_four(rows: &[&str]) -> Board {
        Board::from_rows(rows, 4).unwrap()
    }

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new(6, 7, 4);
        assert_eq!(evaluate(&board, Player::Ai), 0);
        assert_eq!(evaluate(&board, Player::Human), 0);
    }

    #[test]
    fn test_center_column_bonus() {
        let board = connect_four(&[
            ".......", ".......", ".......", ".......", ".......", "...X...",
        ]);
        // One center mark, no window reaches two marks
        assert_eq!(evaluate(&board, Player::Ai), SCORE_CENTER);
        assert_eq!(evaluate(&board, Player::Human), 0);
    }

    #[test]
    fn test_score_window_patterns() {
        let x = Cell::Mark(Player::Ai);
        let o = Cell::Mark(Player::Human);
        let e = Cell::Empty;
        assert_eq!(score_window(&[x, x, x, x], Player::Ai), SCORE_FULL);
        assert_eq!(score_window(&[x, x, e, x], Player::Ai), SCORE_OPEN_THREE);
        assert_eq!(score_window(&[e, x, x, e], Player::Ai), SCORE_OPEN_TWO);
        assert_eq!(score_window(&[o, o, e, o], Player::Ai), SCORE_OPPONENT_THREE);
        assert_eq!(score_window(&[o, x, x, x], Player::Ai), 0);
        assert_eq!(score_window(&[o, e, e, e], Player::Ai), 0);
    }

    #[test]
    fn test_opponent_threat_is_penalised() {
        let board = connect_four(&[
            ".......", ".......", ".......", ".......", ".......", "OOO....",
        ]);
        assert!(evaluate(&board, Player::Ai) < 0);
        assert!(evaluate(&board, Player::Human) > 0);
    }

    #[test]
    fn test_own_three_beats_opponent_three() {
        let mine = connect_four(&[
            ".......", ".......", ".......", ".......", ".......", "XXX....",
        ]);
        let theirs = connect_four(&[
            ".......", ".......", ".......", ".......", ".......", "OOO....",
        ]);
        assert!(evaluate(&mine, Player::Ai) > -evaluate(&theirs, Player::Ai));
    }
}
