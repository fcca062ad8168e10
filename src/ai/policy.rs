//! Difficulty tiers and the per-turn choice between searching and playing at random.

use super::search::{Horizon, SearchEngine};
use crate::board::{Board, Player};
use crate::error::ConfigError;
use crate::games::Rules;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Deepest bounded search a tuning may ask for
pub const MAX_SEARCH_DEPTH: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Medium)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Strength knobs for one game. A depth of `None` searches to the end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameTuning {
    /// Chance that a Medium AI searches instead of moving at random
    pub medium_search_chance: f64,
    pub medium_depth: Option<u32>,
    pub hard_depth: Option<u32>,
}

impl GameTuning {
    pub fn tic_tac_toe() -> Self {
        Self {
            medium_search_chance: 0.5,
            medium_depth: None,
            hard_depth: None,
        }
    }

    pub fn connect_four() -> Self {
        Self {
            medium_search_chance: 0.6,
            medium_depth: Some(3),
            hard_depth: Some(5),
        }
    }

    /// Check ranges. `bounded` games cannot be searched to the end.
    pub fn validate(&self, game: &str, bounded: bool) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.medium_search_chance) {
            return Err(ConfigError::Validation(format!(
                "{}.medium_search_chance must be in [0, 1]",
                game
            )));
        }
        for (field, depth) in [
            ("medium_depth", self.medium_depth),
            ("hard_depth", self.hard_depth),
        ] {
            match depth {
                None if bounded => {
                    return Err(ConfigError::Validation(format!(
                        "{}.{} must be set",
                        game, field
                    )));
                }
                Some(d) if d == 0 || d > MAX_SEARCH_DEPTH => {
                    return Err(ConfigError::Validation(format!(
                        "{}.{} must be in 1..={}",
                        game, field, MAX_SEARCH_DEPTH
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// What the AI does on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Random,
    Search(Horizon),
}

/// A difficulty resolved against a game's tuning, fixed for the whole game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyPolicy {
    difficulty: Difficulty,
    search_chance: f64,
    horizon: Horizon,
}

impl DifficultyPolicy {
    pub fn new(difficulty: Difficulty, tuning: &GameTuning) -> Self {
        let (search_chance, depth) = match difficulty {
            Difficulty::Easy => (0.0, tuning.medium_depth),
            Difficulty::Medium => (tuning.medium_search_chance, tuning.medium_depth),
            Difficulty::Hard => (1.0, tuning.hard_depth),
        };
        Self {
            difficulty,
            search_chance,
            horizon: Horizon::from(depth),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn search_chance(&self) -> f64 {
        self.search_chance
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    /// Roll for this turn. Medium re-rolls every turn.
    pub fn decide<R: Rng>(&self, rng: &mut R) -> Decision {
        if self.search_chance <= 0.0 {
            Decision::Random
        } else if self.search_chance >= 1.0 || rng.gen::<f64>() < self.search_chance {
            Decision::Search(self.horizon)
        } else {
            Decision::Random
        }
    }

    /// Pick a move for `me`, or `None` if the position has no legal move.
    pub fn choose_move<G: Rules, R: Rng>(
        &self,
        board: &Board,
        me: Player,
        rng: &mut R,
    ) -> Option<G::Move> {
        let moves = G::legal_moves(board);
        if moves.is_empty() {
            return None;
        }

        match self.decide(rng) {
            Decision::Random => {
                let mv = moves.choose(rng).copied();
                debug!(game = G::NAME, ?mv, "random move");
                mv
            }
            Decision::Search(horizon) => SearchEngine::<G>::new(horizon).best_move(board, me).mv,
        }
    }
}
