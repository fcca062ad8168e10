//! Keyboard input for the terminal front-end.

use crate::board::Pos;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// What a key press means, independent of the screen it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Up,
    Down,
    Left,
    Right,
    /// Place a mark / start the selected game
    Place,
    Restart,
    ClearScore,
    /// Back to the menu
    Back,
    Quit,
    Other,
}

pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => GameInput::Up,
        KeyCode::Down | KeyCode::Char('j') => GameInput::Down,
        KeyCode::Left | KeyCode::Char('h') => GameInput::Left,
        KeyCode::Right | KeyCode::Char('l') => GameInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Place,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        KeyCode::Char('c') | KeyCode::Char('C') => GameInput::ClearScore,
        KeyCode::Esc => GameInput::Back,
        KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    }
}

/// Board cursor clamped to a `rows` x `cols` area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
    rows: usize,
    cols: usize,
}

impl Cursor {
    /// Starts in the middle of the area.
    pub fn centered(rows: usize, cols: usize) -> Self {
        Self {
            row: rows / 2,
            col: cols / 2,
            rows,
            cols,
        }
    }

    pub fn move_by(&mut self, d_row: i32, d_col: i32) {
        let max_row = self.rows.saturating_sub(1) as i32;
        let max_col = self.cols.saturating_sub(1) as i32;
        self.row = (self.row as i32 + d_row).clamp(0, max_row) as usize;
        self.col = (self.col as i32 + d_col).clamp(0, max_col) as usize;
    }

    /// Apply an arrow input. Returns false for anything else.
    pub fn apply(&mut self, input: GameInput) -> bool {
        match input {
            GameInput::Up => self.move_by(-1, 0),
            GameInput::Down => self.move_by(1, 0),
            GameInput::Left => self.move_by(0, -1),
            GameInput::Right => self.move_by(0, 1),
            _ => return false,
        }
        true
    }

    pub fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }
}
