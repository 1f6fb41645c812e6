//! Epsilon-greedy move selection on top of the searcher.
//!
//! While exploring, the agent plays a uniformly random legal move with
//! probability epsilon and the search's best move otherwise. Epsilon starts
//! at the configured value and decays as `epsilon / (1 + games / decay)`,
//! with integer division on the game count.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::EngineConfig;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::alpha_beta::Searcher;
use crate::search::evaluator::{Evaluator, StateEncoder};
use crate::search::feature_encoder::FeatureEncoder;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentChoice {
    pub mv: Move,
    /// White-positive search score; `None` for exploratory random moves.
    pub evaluation: Option<f32>,
}

pub struct Agent<E, S = FeatureEncoder> {
    searcher: Searcher<E, S>,
    initial_epsilon: f64,
    epsilon: f64,
    decay_games: u32,
    games_played: u32,
    rng: StdRng,
}

impl<E: Evaluator> Agent<E, FeatureEncoder> {
    pub fn from_config(evaluator: E, config: &EngineConfig) -> Self {
        let searcher = Searcher::with_feature_encoder(evaluator, config.search_config());
        Self::new(searcher, config.epsilon, config.epsilon_decay_games, config.seed)
    }
}

impl<E: Evaluator, S: StateEncoder> Agent<E, S> {
    pub fn new(searcher: Searcher<E, S>, epsilon: f64, decay_games: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            searcher,
            initial_epsilon: epsilon.clamp(0.0, 1.0),
            epsilon: epsilon.clamp(0.0, 1.0),
            decay_games: decay_games.max(1),
            games_played: 0,
            rng,
        }
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Picks a move for the side to move. Returns `None` only when the side
    /// to move has no legal move. `explore = false` always searches.
    pub fn choose_move(&mut self, game_state: &mut GameState, explore: bool) -> Option<AgentChoice> {
        if explore && self.rng.random_bool(self.epsilon) {
            return self.random_move(game_state);
        }

        let result = self.searcher.search(game_state);
        match result.best_move {
            Some(mv) => Some(AgentChoice {
                mv,
                evaluation: Some(result.score),
            }),
            // A depth-0 search scores the root without picking a move.
            None => self.random_move(game_state),
        }
    }

    fn random_move(&mut self, game_state: &mut GameState) -> Option<AgentChoice> {
        let side = game_state.side_to_move;
        let moves = all_legal_moves(game_state, side);
        moves.choose(&mut self.rng).map(|&mv| AgentChoice {
            mv,
            evaluation: None,
        })
    }

    pub fn finish_game(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
        let decay_steps = 1 + self.games_played / self.decay_games;
        self.epsilon = self.initial_epsilon / f64::from(decay_steps);
    }
}
