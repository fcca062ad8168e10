//! Grid model and win detection shared by every board game.

pub mod grid;
pub mod win;

pub use grid::{Board, Cell, Player, Pos};
pub use win::{check_winner, is_winning_move, outcome_after_move, winning_line, GameResult};
