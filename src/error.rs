//! Error types for moves, board parsing and configuration.

use std::path::PathBuf;

/// Why a move was rejected. Every variant is recoverable: the game state is
/// left exactly as it was before the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position is outside the board")]
    OutOfBounds,

    #[error("cell is already occupied")]
    CellOccupied,

    #[error("column is full")]
    ColumnFull,

    #[error("game is already over")]
    MoveWhileTerminal,

    #[error("wait for the opponent to move")]
    MoveDuringAiTurn,
}

/// Errors produced when reading a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("board must have at least one row and one column")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCell { character: char, row: usize, col: usize },

    #[error("board is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    WrongSize {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("piece at row {row}, column {col} has an empty cell below it")]
    FloatingPiece { row: usize, col: usize },

    #[error("{human} human and {ai} AI marks cannot come from alternating turns")]
    MarkCount { human: usize, ai: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull.to_string(), "column is full");
        assert_eq!(
            MoveError::MoveDuringAiTurn.to_string(),
            "wait for the opponent to move"
        );
    }

    #[test]
    fn test_board_parse_error_display() {
        let err = BoardParseError::InvalidCell {
            character: 'Z',
            row: 1,
            col: 2,
        };
        assert_eq!(err.to_string(), "invalid character 'Z' at row 1, column 2");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ai_think_ticks must be <= 100".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ai_think_ticks must be <= 100"
        );
    }
}
