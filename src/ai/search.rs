//! Minimax search with alpha-beta pruning.
//!
//! The search plays both sides on a private copy of the board using
//! place/lift, so the caller's board is never modified. Scores are always
//! from the point of view of the side the search is run for (`me`), which
//! maximizes; the opponent minimizes.

use crate::board::{is_winning_move, Board, Player};
use crate::games::Rules;
use std::marker::PhantomData;
use tracing::debug;

/// How far the search looks ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizon {
    /// Play every line out to a win or a full board.
    Exhaustive,
    /// Stop after this many plies and score the position heuristically.
    Plies(u32),
}

impl From<Option<u32>> for Horizon {
    fn from(depth: Option<u32>) -> Self {
        match depth {
            Some(plies) => Horizon::Plies(plies),
            None => Horizon::Exhaustive,
        }
    }
}

/// Best score found and the move that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub score: i32,
    /// `None` only when the searched position had no legal move.
    pub mv: Option<M>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Moves tried across the whole search
    pub nodes: u64,
}

pub struct SearchEngine<G: Rules> {
    horizon: Horizon,
    prune: bool,
    stats: SearchStats,
    _rules: PhantomData<G>,
}

impl<G: Rules> SearchEngine<G> {
    pub fn new(horizon: Horizon) -> Self {
        Self {
            horizon,
            prune: true,
            stats: SearchStats::default(),
            _rules: PhantomData,
        }
    }

    /// Plain minimax. Same scores and moves, many more nodes.
    pub fn without_pruning(mut self) -> Self {
        self.prune = false;
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `board` for the best move of `me`.
    pub fn best_move(&mut self, board: &Board, me: Player) -> SearchResult<G::Move> {
        self.stats = SearchStats::default();
        let mut scratch = board.clone();
        let depth = match self.horizon {
            Horizon::Exhaustive => None,
            // The root is always expanded so a legal move comes back.
            Horizon::Plies(plies) => Some(plies.max(1)),
        };
        let result = self.minimax(&mut scratch, depth, 0, i32::MIN, i32::MAX, true, me);
        debug!(
            game = G::NAME,
            ?me,
            horizon = ?self.horizon,
            prune = self.prune,
            nodes = self.stats.nodes,
            score = result.score,
            "search finished"
        );
        result
    }

    /// `depth` is the number of plies left (`None` = unbounded), `ply` the
    /// distance from the root.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: Option<u32>,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        me: Player,
    ) -> SearchResult<G::Move> {
        let moves = G::legal_moves(board);
        if moves.is_empty() || depth == Some(0) {
            return SearchResult {
                score: G::static_score(board, me),
                mv: None,
            };
        }

        let player = if maximizing { me } else { me.opponent() };
        let mut best = SearchResult {
            score: if maximizing { i32::MIN } else { i32::MAX },
            mv: moves.first().copied(),
        };

        for mv in moves {
            let Ok(pos) = G::apply(board, mv, player) else {
                continue;
            };
            self.stats.nodes += 1;

            let score = if is_winning_move(board, pos) {
                let win = G::win_score(ply);
                if maximizing {
                    win
                } else {
                    -win
                }
            } else {
                self.minimax(
                    board,
                    depth.map(|d| d - 1),
                    ply + 1,
                    alpha,
                    beta,
                    !maximizing,
                    me,
                )
                .score
            };
            board.lift(pos);

            if maximizing {
                if score > best.score {
                    best = SearchResult { score, mv: Some(mv) };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score {
                    best = SearchResult { score, mv: Some(mv) };
                }
                beta = beta.min(score);
            }
            if self.prune && beta <= alpha {
                break;
            }
        }
        best
    }
}
