//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores live on one shared scale in `[-1, 1]`: White maximises, Black
//! minimises. The evaluator answers for the side to move and is flipped into
//! that frame at the leaves. Mates are `+1`/`-1`, draws `0`.
//!
//! The tree is walked on a single board with make/unmake, so the caller's
//! position is identical before and after `search`.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::{is_check, is_fifty_move_draw};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::{all_legal_moves, has_legal_move};
use crate::search::evaluator::{Evaluator, StateEncoder};
use crate::search::feature_encoder::FeatureEncoder;
use crate::search::move_ordering::order_moves;

pub const WIN_SCORE: f32 = 1.0;
pub const DRAW_SCORE: f32 = 0.0;

/// Out-of-range start values so a node with moves always records one.
const BELOW_RANGE: f32 = -2.0;
const ABOVE_RANGE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub depth: u8,
    /// `false` walks the full minimax tree.
    pub pruning: bool,
    pub order_moves: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            pruning: true,
            order_moves: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// `None` only when the root has no legal move.
    pub best_move: Option<Move>,
    /// White-positive score.
    pub score: f32,
    pub nodes: u64,
}

pub struct Searcher<E, S = FeatureEncoder> {
    evaluator: E,
    encoder: S,
    config: SearchConfig,
    nodes: u64,
}

impl<E: Evaluator> Searcher<E, FeatureEncoder> {
    pub fn with_feature_encoder(evaluator: E, config: SearchConfig) -> Self {
        Self::new(evaluator, FeatureEncoder, config)
    }
}

impl<E: Evaluator, S: StateEncoder> Searcher<E, S> {
    pub fn new(evaluator: E, encoder: S, config: SearchConfig) -> Self {
        Self {
            evaluator,
            encoder,
            config,
            nodes: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn search(&mut self, game_state: &mut GameState) -> SearchResult {
        self.nodes = 0;
        let depth = self.config.depth;
        let (best_move, score) = self.alpha_beta(game_state, depth, -WIN_SCORE, WIN_SCORE, true);

        debug!(
            "search depth {} pruning {} nodes {} best {} score {:.4}",
            depth,
            self.config.pruning,
            self.nodes,
            best_move.map_or_else(|| "-".to_owned(), |mv| mv.to_string()),
            score
        );

        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn alpha_beta(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        mut alpha: f32,
        mut beta: f32,
        is_root: bool,
    ) -> (Option<Move>, f32) {
        self.nodes += 1;
        let side = game_state.side_to_move;

        if depth == 0 {
            return (None, self.leaf_score(game_state));
        }

        let mut moves = all_legal_moves(game_state, side);
        if moves.is_empty() {
            let score = if is_check(game_state, side) {
                -side.sign() * WIN_SCORE
            } else {
                DRAW_SCORE
            };
            return (None, score);
        }

        if self.config.order_moves {
            order_moves(game_state, &mut moves);
        }

        let maximizing = side == Color::White;
        let mut best_move = None;
        let mut best_score = if maximizing { BELOW_RANGE } else { ABOVE_RANGE };

        for mv in moves {
            let undo = make_move(game_state, mv);
            let score = match self.terminal_score(game_state, side) {
                Some(score) => score,
                None => self.alpha_beta(game_state, depth - 1, alpha, beta, false).1,
            };
            unmake_move(game_state, undo);

            if is_root {
                trace!("root move {} score {:.4}", mv, score);
            }

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if self.config.pruning && beta <= alpha {
                break;
            }
        }

        (best_move, best_score)
    }

    /// Score of the position reached after `mover` moved, if the game is
    /// over there.
    fn terminal_score(&self, game_state: &mut GameState, mover: Color) -> Option<f32> {
        let defender = mover.opposite();
        if !has_legal_move(game_state, defender) {
            return Some(if is_check(game_state, defender) {
                mover.sign() * WIN_SCORE
            } else {
                DRAW_SCORE
            });
        }
        if is_fifty_move_draw(game_state) {
            return Some(DRAW_SCORE);
        }
        None
    }

    fn leaf_score(&self, game_state: &mut GameState) -> f32 {
        let features = self.encoder.encode(game_state);
        let value = self.evaluator.evaluate(&features);
        let value = if value.is_nan() {
            DRAW_SCORE
        } else {
            value.clamp(-WIN_SCORE, WIN_SCORE)
        };
        value * game_state.side_to_move.sign()
    }
}
