//! Arcade - Tic-Tac-Toe and Connect Four against a minimax AI.
//!
//! The game logic is exposed for testing and for other front-ends; the
//! terminal UI lives in `app` and `ui`.

pub mod ai;
pub mod app;
pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod games;
pub mod input;
pub mod logging;
pub mod ui;

pub use board::{Board, Cell, GameResult, Player, Pos};
pub use controller::{GameConfig, GameController, GameEvent, Scoreboard, TurnState};
pub use error::{BoardParseError, ConfigError, MoveError};
pub use games::{ConnectFour, Rules, TicTacToe};
