//! Line detection and game outcome.

use super::grid::{Board, Cell, Player, Pos};
use serde::{Deserialize, Serialize};

/// Line axes to scan: (row_delta, col_delta)
const AXES: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (-1, 1), // Diagonal up-right
];

/// Outcome of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    InProgress,
    /// `line` runs from one end of the winning run to the other.
    Win { player: Player, line: Vec<Pos> },
    Draw,
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Win { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// The run of marks through `pos` that wins the game, if any.
///
/// Only the lines through `pos` are examined, so this is the check to run
/// right after a move lands on `pos`.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let Cell::Mark(player) = board.get(pos) else {
        return None;
    };

    for (dr, dc) in AXES {
        let backward = count_direction(board, pos, -dr, -dc, player);
        let forward = count_direction(board, pos, dr, dc, player);
        if backward + forward + 1 < board.win_length() {
            continue;
        }

        // Walk back to the start of the run, then collect it in order.
        let mut start = pos;
        for _ in 0..backward {
            match start.offset(-dr, -dc) {
                Some(p) => start = p,
                None => break,
            }
        }
        let mut line = Vec::with_capacity(backward + forward + 1);
        let mut cur = Some(start);
        for _ in 0..backward + forward + 1 {
            let Some(p) = cur else { break };
            line.push(p);
            cur = p.offset(dr, dc);
        }
        return Some(line);
    }
    None
}

/// Count consecutive marks of `player` from `pos` in one direction, excluding `pos`.
fn count_direction(board: &Board, pos: Pos, dr: isize, dc: isize, player: Player) -> usize {
    let mut count = 0;
    let mut cur = pos.offset(dr, dc);
    while let Some(p) = cur {
        if !board.in_bounds(p) || board.get(p) != Cell::Mark(player) {
            break;
        }
        count += 1;
        cur = p.offset(dr, dc);
    }
    count
}

/// Does the mark at `pos` complete a line?
pub fn is_winning_move(board: &Board, pos: Pos) -> bool {
    let Cell::Mark(player) = board.get(pos) else {
        return false;
    };
    AXES.iter().any(|&(dr, dc)| {
        let run = count_direction(board, pos, dr, dc, player)
            + count_direction(board, pos, -dr, -dc, player)
            + 1;
        run >= board.win_length()
    })
}

/// Outcome right after a move landed on `pos`.
pub fn outcome_after_move(board: &Board, pos: Pos) -> GameResult {
    if let Some(line) = winning_line(board, pos) {
        if let Cell::Mark(player) = board.get(pos) {
            return GameResult::Win { player, line };
        }
    }
    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// Outcome of an arbitrary position, scanning every occupied cell in
/// row-major order. Pure; prefer [`outcome_after_move`] during play.
pub fn check_winner(board: &Board) -> GameResult {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let pos = Pos::new(row, col);
            if let Cell::Mark(player) = board.get(pos) {
                if let Some(line) = winning_line(board, pos) {
                    return GameResult::Win { player, line };
                }
            }
        }
    }
    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
