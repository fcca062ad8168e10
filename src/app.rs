//! Screen state for the terminal front-end: the menu and one session per game.

use crate::ai::Difficulty;
use crate::board::Pos;
use crate::config::ArcadeConfig;
use crate::controller::{GameController, GameEvent};
use crate::games::{ConnectFour, Rules, TicTacToe};
use crate::input::{Cursor, GameInput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    TicTacToe,
    ConnectFour,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::TicTacToe, GameKind::ConnectFour];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TicTacToe => "Tic-Tac-Toe",
            Self::ConnectFour => "Connect Four",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::TicTacToe => "Three in a row on a 3x3 grid.",
            Self::ConnectFour => "Drop pieces, connect four on a 6x7 grid.",
        }
    }
}

/// A game the cursor can drive.
pub trait CursorGame: Rules {
    fn new_cursor() -> Cursor;

    /// The move the cursor points at.
    fn move_at(cursor: &Cursor) -> Self::Move;
}

impl CursorGame for TicTacToe {
    fn new_cursor() -> Cursor {
        Cursor::centered(Self::ROWS, Self::COLS)
    }

    fn move_at(cursor: &Cursor) -> Pos {
        cursor.pos()
    }
}

impl CursorGame for ConnectFour {
    /// Only picks a column.
    fn new_cursor() -> Cursor {
        Cursor::centered(1, Self::COLS)
    }

    fn move_at(cursor: &Cursor) -> usize {
        cursor.col
    }
}

/// What a screen asks the app to do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Start(GameKind),
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub selected: usize,
    pub difficulty: Difficulty,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            selected: 0,
            difficulty: Difficulty::Medium,
        }
    }
}

impl Menu {
    pub fn game(&self) -> GameKind {
        GameKind::ALL[self.selected % GameKind::ALL.len()]
    }

    pub fn handle(&mut self, input: GameInput) -> Action {
        let games = GameKind::ALL.len();
        let tiers = Difficulty::ALL.len();
        match input {
            GameInput::Up => self.selected = (self.selected + games - 1) % games,
            GameInput::Down => self.selected = (self.selected + 1) % games,
            GameInput::Left => {
                let index = self.difficulty.index().saturating_sub(1);
                self.difficulty = Difficulty::from_index(index);
            }
            GameInput::Right => {
                let index = (self.difficulty.index() + 1).min(tiers - 1);
                self.difficulty = Difficulty::from_index(index);
            }
            GameInput::Place => return Action::Start(self.game()),
            GameInput::Back | GameInput::Quit => return Action::Quit,
            _ => {}
        }
        Action::None
    }
}

/// One game being played: the controller plus what only the UI needs.
pub struct Session<G: CursorGame> {
    pub controller: GameController<G>,
    pub cursor: Cursor,
    /// Last rejection, shown until the next successful move
    pub message: Option<String>,
}

impl<G: CursorGame> Session<G> {
    pub fn new(config: &ArcadeConfig, difficulty: Difficulty) -> Self {
        Self {
            controller: GameController::new(config.game_config::<G>(difficulty)),
            cursor: G::new_cursor(),
            message: None,
        }
    }

    /// New game with fresh settings; the scoreboard carries over.
    pub fn restart_with(&mut self, config: &ArcadeConfig, difficulty: Difficulty) {
        self.controller.reset(config.game_config::<G>(difficulty));
        self.cursor = G::new_cursor();
        self.message = None;
    }

    pub fn handle(&mut self, input: GameInput) -> Action {
        match input {
            GameInput::Back => {
                // Leaving for the menu ends the match
                self.controller.clear_scoreboard();
                return Action::Back;
            }
            GameInput::Quit => return Action::Quit,
            GameInput::Restart => {
                self.controller.restart();
                self.message = None;
                return Action::None;
            }
            GameInput::ClearScore => {
                self.controller.clear_scoreboard();
                return Action::None;
            }
            _ => {}
        }

        if self.controller.is_over() {
            if input == GameInput::Place {
                self.controller.restart();
                self.message = None;
            }
            return Action::None;
        }

        if self.cursor.apply(input) {
            return Action::None;
        }
        if input == GameInput::Place {
            let events = self.controller.submit_human_move(G::move_at(&self.cursor));
            self.note(&events);
        }
        Action::None
    }

    pub fn tick(&mut self, rng: &mut StdRng) {
        let events = self.controller.tick(rng);
        self.note(&events);
    }

    fn note(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::InvalidMove(err) => self.message = Some(err.to_string()),
                GameEvent::MoveApplied { .. } | GameEvent::GameEnded(_) => self.message = None,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    TicTacToe,
    ConnectFour,
}

pub struct App {
    pub config: ArcadeConfig,
    pub screen: Screen,
    pub menu: Menu,
    pub tic_tac_toe: Option<Session<TicTacToe>>,
    pub connect_four: Option<Session<ConnectFour>>,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    pub fn new(config: ArcadeConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: ArcadeConfig, rng: StdRng) -> Self {
        Self {
            config,
            screen: Screen::Menu,
            menu: Menu::default(),
            tic_tac_toe: None,
            connect_four: None,
            should_quit: false,
            rng,
        }
    }

    pub fn handle_input(&mut self, input: GameInput) {
        let action = match self.screen {
            Screen::Menu => self.menu.handle(input),
            Screen::TicTacToe => match self.tic_tac_toe.as_mut() {
                Some(session) => session.handle(input),
                None => Action::Back,
            },
            Screen::ConnectFour => match self.connect_four.as_mut() {
                Some(session) => session.handle(input),
                None => Action::Back,
            },
        };

        match action {
            Action::None => {}
            Action::Start(kind) => self.start(kind),
            Action::Back => self.screen = Screen::Menu,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Advance the AI of the game on screen.
    pub fn tick(&mut self) {
        match self.screen {
            Screen::Menu => {}
            Screen::TicTacToe => {
                if let Some(session) = self.tic_tac_toe.as_mut() {
                    session.tick(&mut self.rng);
                }
            }
            Screen::ConnectFour => {
                if let Some(session) = self.connect_four.as_mut() {
                    session.tick(&mut self.rng);
                }
            }
        }
    }

    fn start(&mut self, kind: GameKind) {
        let difficulty = self.menu.difficulty;
        info!(game = kind.name(), difficulty = difficulty.name(), "starting game");
        match kind {
            GameKind::TicTacToe => {
                start_session(&mut self.tic_tac_toe, &self.config, difficulty);
                self.screen = Screen::TicTacToe;
            }
            GameKind::ConnectFour => {
                start_session(&mut self.connect_four, &self.config, difficulty);
                self.screen = Screen::ConnectFour;
            }
        }
    }
}

fn start_session<G: CursorGame>(
    slot: &mut Option<Session<G>>,
    config: &ArcadeConfig,
    difficulty: Difficulty,
) {
    match slot {
        Some(session) => session.restart_with(config, difficulty),
        None => *slot = Some(Session::new(config, difficulty)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GameResult, Player};
    use crate::controller::{Scoreboard, TurnState};

    fn app() -> App {
        let config = ArcadeConfig {
            ai_think_ticks: 2,
            ..Default::default()
        };
        App::with_rng(config, StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut menu = Menu::default();
        assert_eq!(menu.handle(GameInput::Up), Action::None);
        assert_eq!(menu.game(), GameKind::ConnectFour);
        menu.handle(GameInput::Down);
        assert_eq!(menu.game(), GameKind::TicTacToe);
    }

    #[test]
    fn test_menu_difficulty_stops_at_ends() {
        let mut menu = Menu::default();
        menu.handle(GameInput::Right);
        menu.handle(GameInput::Right);
        assert_eq!(menu.difficulty, Difficulty::Hard);
        for _ in 0..3 {
            menu.handle(GameInput::Left);
        }
        assert_eq!(menu.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_start_and_back() {
        let mut app = app();
        app.handle_input(GameInput::Place);
        assert_eq!(app.screen, Screen::TicTacToe);
        assert!(app.tic_tac_toe.is_some());

        app.handle_input(GameInput::Back);
        assert_eq!(app.screen, Screen::Menu);
        app.handle_input(GameInput::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_place_then_ai_replies_after_delay() {
        let mut app = app();
        app.menu.difficulty = Difficulty::Hard;
        app.handle_input(GameInput::Place);
        app.handle_input(GameInput::Place);

        let session = app.tic_tac_toe.as_ref().unwrap();
        assert_eq!(session.controller.history(), &[(Pos::new(1, 1), Player::Human)]);
        assert!(session.controller.is_ai_turn());

        app.tick();
        assert!(app.tic_tac_toe.as_ref().unwrap().controller.is_ai_turn());
        app.tick();
        let session = app.tic_tac_toe.as_ref().unwrap();
        assert_eq!(session.controller.state(), &TurnState::AwaitingHumanMove);
        assert_eq!(session.controller.history().len(), 2);
    }

    #[test]
    fn test_rejected_move_sets_message() {
        let mut app = app();
        app.handle_input(GameInput::Place);
        app.handle_input(GameInput::Place);
        app.tick();
        app.tick();
        // AI never answers on the occupied center
        app.handle_input(GameInput::Place);
        let session = app.tic_tac_toe.as_ref().unwrap();
        assert_eq!(session.message.as_deref(), Some("cell is already occupied"));
    }

    #[test]
    fn test_connect_four_cursor_picks_column() {
        let mut app = app();
        app.handle_input(GameInput::Down);
        app.handle_input(GameInput::Place);
        assert_eq!(app.screen, Screen::ConnectFour);

        app.handle_input(GameInput::Left);
        app.handle_input(GameInput::Place);
        let session = app.connect_four.as_ref().unwrap();
        assert_eq!(session.controller.last_move(), Some(Pos::new(5, 2)));
    }

    #[test]
    fn test_restart_keeps_scoreboard_until_back_to_menu() {
        let mut app = app();
        app.handle_input(GameInput::Place);
        {
            let session = app.tic_tac_toe.as_mut().unwrap();
            let config = app.config.game_config::<TicTacToe>(Difficulty::Hard);
            session.controller =
                GameController::resume(config, &["XX.", "OO.", "..."], Player::Ai).unwrap();
            session.controller.play_ai_turn(&mut StdRng::seed_from_u64(1));
            assert!(matches!(
                session.controller.result(),
                GameResult::Win {
                    player: Player::Ai,
                    ..
                }
            ));
        }

        app.handle_input(GameInput::Restart);
        let session = app.tic_tac_toe.as_ref().unwrap();
        assert_eq!(session.controller.scoreboard().ai_wins, 1);
        assert!(!session.controller.is_over());

        app.handle_input(GameInput::Back);
        assert_eq!(app.screen, Screen::Menu);
        app.handle_input(GameInput::Place);
        let session = app.tic_tac_toe.as_ref().unwrap();
        assert_eq!(session.controller.scoreboard(), &Scoreboard::default());
        assert!(!session.controller.is_over());
    }
}
