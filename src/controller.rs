//! Turn-based game session: human move, AI reply, repeat until decided.
//!
//! The controller owns the only real board of a session. Presentation code
//! feeds it inputs (`submit_human_move`, `tick`/`play_ai_turn`, `reset`) and
//! renders the [`GameEvent`]s each call returns.

use crate::ai::{Difficulty, DifficultyPolicy, GameTuning};
use crate::board::{check_winner, outcome_after_move, Board, GameResult, Player, Pos};
use crate::error::{BoardParseError, MoveError};
use crate::games::Rules;
use rand::Rng;
use tracing::{debug, info, warn};

/// Settings chosen when a game starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub tuning: GameTuning,
    /// Ticks the AI "thinks" before its move lands (0 = next tick)
    pub think_ticks: u32,
}

impl GameConfig {
    /// Default tuning for `G`, no thinking delay.
    pub fn for_game<G: Rules>(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            tuning: G::default_tuning(),
            think_ticks: 0,
        }
    }

    /// `self` with its tuning replaced by `G`'s defaults if it is out of range.
    fn checked<G: Rules>(mut self) -> Self {
        if let Err(err) = self.tuning.validate(G::NAME, G::BOUNDED_SEARCH) {
            warn!(game = G::NAME, %err, "bad tuning, using defaults");
            self.tuning = G::default_tuning();
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    AwaitingHumanMove,
    AwaitingAiMove,
    /// Absorbing until the game is reset.
    Finished(GameResult),
}

/// Output for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied { player: Player, pos: Pos },
    GameEnded(GameResult),
    InvalidMove(MoveError),
}

/// Results of finished games in this session. Survives resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::Win {
                player: Player::Human,
                ..
            } => self.human_wins += 1,
            GameResult::Win {
                player: Player::Ai, ..
            } => self.ai_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.human_wins + self.ai_wins + self.draws
    }
}

pub struct GameController<G: Rules> {
    board: Board,
    state: TurnState,
    config: GameConfig,
    policy: DifficultyPolicy,
    history: Vec<(Pos, Player)>,
    think_ticks: u32,
    scoreboard: Scoreboard,
    _rules: std::marker::PhantomData<G>,
}

impl<G: Rules> GameController<G> {
    /// Fresh game, human to move.
    pub fn new(config: GameConfig) -> Self {
        let config = config.checked::<G>();
        info!(
            game = G::NAME,
            difficulty = config.difficulty.name(),
            "new game"
        );
        Self {
            board: G::new_board(),
            state: TurnState::AwaitingHumanMove,
            config,
            policy: DifficultyPolicy::new(config.difficulty, &config.tuning),
            history: Vec::new(),
            think_ticks: 0,
            scoreboard: Scoreboard::default(),
            _rules: std::marker::PhantomData,
        }
    }

    /// Start from a given position (top row first, `X` = AI, `O` = human)
    /// with `to_move` on turn. A position that is already decided starts
    /// finished and is not counted on the scoreboard.
    pub fn resume(
        config: GameConfig,
        rows: &[&str],
        to_move: Player,
    ) -> Result<Self, BoardParseError> {
        let board = Board::from_rows(rows, G::WIN_LENGTH)?;
        if board.rows() != G::ROWS || board.cols() != G::COLS {
            return Err(BoardParseError::WrongSize {
                expected_rows: G::ROWS,
                expected_cols: G::COLS,
                rows: board.rows(),
                cols: board.cols(),
            });
        }
        let (human, ai) = (board.count(Player::Human), board.count(Player::Ai));
        if human.abs_diff(ai) > 1 {
            return Err(BoardParseError::MarkCount { human, ai });
        }
        G::check_position(&board)?;

        let mut controller = Self::new(config);
        controller.state = match check_winner(&board) {
            GameResult::InProgress => match to_move {
                Player::Human => TurnState::AwaitingHumanMove,
                Player::Ai => TurnState::AwaitingAiMove,
            },
            decided => TurnState::Finished(decided),
        };
        controller.board = board;
        Ok(controller)
    }

    /// Start over with `config`. The scoreboard is kept.
    pub fn reset(&mut self, config: GameConfig) {
        let config = config.checked::<G>();
        info!(
            game = G::NAME,
            difficulty = config.difficulty.name(),
            "game reset"
        );
        self.board.reset();
        self.state = TurnState::AwaitingHumanMove;
        self.config = config;
        self.policy = DifficultyPolicy::new(config.difficulty, &config.tuning);
        self.history.clear();
        self.think_ticks = 0;
    }

    /// Start over with the current settings.
    pub fn restart(&mut self) {
        self.reset(self.config);
    }

    /// Apply a human move, or report why it was refused.
    pub fn submit_human_move(&mut self, mv: G::Move) -> Vec<GameEvent> {
        match self.try_human_move(mv) {
            Ok(events) => events,
            Err(err) => {
                warn!(game = G::NAME, ?mv, %err, "move rejected");
                vec![GameEvent::InvalidMove(err)]
            }
        }
    }

    /// Like [`submit_human_move`](Self::submit_human_move) but returns the
    /// rejection as an error. Nothing changes when it fails.
    pub fn try_human_move(&mut self, mv: G::Move) -> Result<Vec<GameEvent>, MoveError> {
        match self.state {
            TurnState::AwaitingHumanMove => self.apply_move(mv, Player::Human),
            TurnState::AwaitingAiMove => Err(MoveError::MoveDuringAiTurn),
            TurnState::Finished(_) => Err(MoveError::MoveWhileTerminal),
        }
    }

    /// Advance the AI's thinking delay by one tick; the move lands once the
    /// configured number of ticks has passed.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        if self.state != TurnState::AwaitingAiMove {
            return Vec::new();
        }
        self.think_ticks += 1;
        if self.think_ticks < self.config.think_ticks {
            return Vec::new();
        }
        self.play_ai_turn(rng)
    }

    /// Make the AI's move now. Does nothing unless the AI is on turn.
    pub fn play_ai_turn<R: Rng>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        if self.state != TurnState::AwaitingAiMove {
            return Vec::new();
        }
        self.think_ticks = 0;

        // An undecided board always has a legal move, and the policy only
        // picks from the legal ones.
        let Some(mv) = self.policy.choose_move::<G, R>(&self.board, Player::Ai, rng) else {
            debug_assert!(false, "AI found no move on an undecided board");
            warn!(game = G::NAME, "AI has no legal move");
            return Vec::new();
        };

        match self.apply_move(mv, Player::Ai) {
            Ok(events) => events,
            Err(err) => {
                debug_assert!(false, "AI chose an illegal move: {:?}", err);
                warn!(game = G::NAME, ?mv, %err, "AI chose an illegal move");
                Vec::new()
            }
        }
    }

    fn apply_move(&mut self, mv: G::Move, player: Player) -> Result<Vec<GameEvent>, MoveError> {
        let pos = G::apply(&mut self.board, mv, player)?;
        self.history.push((pos, player));
        debug!(game = G::NAME, ?player, %pos, "move applied");

        let mut events = vec![GameEvent::MoveApplied { player, pos }];
        match outcome_after_move(&self.board, pos) {
            GameResult::InProgress => {
                self.state = match player {
                    Player::Human => TurnState::AwaitingAiMove,
                    Player::Ai => TurnState::AwaitingHumanMove,
                };
            }
            decided => self.finish(decided, &mut events),
        }
        Ok(events)
    }

    fn finish(&mut self, result: GameResult, events: &mut Vec<GameEvent>) {
        self.scoreboard.record(&result);
        info!(
            game = G::NAME,
            winner = ?result.winner(),
            moves = self.history.len(),
            "game over"
        );
        self.state = TurnState::Finished(result.clone());
        events.push(GameEvent::GameEnded(result));
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    pub fn result(&self) -> GameResult {
        match &self.state {
            TurnState::Finished(result) => result.clone(),
            _ => GameResult::InProgress,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.state == TurnState::AwaitingAiMove
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::Finished(_))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn clear_scoreboard(&mut self) {
        self.scoreboard = Scoreboard::default();
    }
}
