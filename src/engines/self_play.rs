//! Self-play driver: one agent plays both sides until the game ends or the
//! ply cap is reached.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::engines::agent::Agent;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::make_move;
use crate::search::evaluator::{Evaluator, StateEncoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    FiftyMoveDraw,
    PlyLimit,
}

impl GameOutcome {
    /// White-positive result: 1, 0 or -1.
    pub fn reward(self) -> f32 {
        match self {
            GameOutcome::WhiteWins => 1.0,
            GameOutcome::BlackWins => -1.0,
            GameOutcome::Stalemate | GameOutcome::FiftyMoveDraw | GameOutcome::PlyLimit => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub started_at: DateTime<Utc>,
    pub start_fen: String,
    /// Long algebraic, one entry per ply.
    pub moves: Vec<String>,
    pub outcome: GameOutcome,
    pub final_fen: String,
}

impl GameRecord {
    #[inline]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

pub fn play_game<E, S>(agent: &mut Agent<E, S>, start: &GameState, max_plies: u32) -> GameRecord
where
    E: Evaluator,
    S: StateEncoder,
{
    let started_at = Utc::now();
    let mut game_state = start.clone();
    let mut moves = Vec::new();

    info!(
        "self-play game {} starting from {} (epsilon {:.3})",
        agent.games_played() + 1,
        start.to_fen(),
        agent.epsilon()
    );

    let outcome = loop {
        match game_status(&mut game_state) {
            GameStatus::Checkmate {
                winner: Color::White,
            } => break GameOutcome::WhiteWins,
            GameStatus::Checkmate {
                winner: Color::Black,
            } => break GameOutcome::BlackWins,
            GameStatus::Stalemate => break GameOutcome::Stalemate,
            GameStatus::FiftyMoveDraw => break GameOutcome::FiftyMoveDraw,
            GameStatus::Ongoing => {}
        }

        if moves.len() >= max_plies as usize {
            break GameOutcome::PlyLimit;
        }

        let Some(choice) = agent.choose_move(&mut game_state, true) else {
            unreachable!("ongoing position {} has no legal move", game_state.to_fen());
        };
        moves.push(choice.mv.to_string());
        make_move(&mut game_state, choice.mv);
    };

    agent.finish_game();

    info!("self-play game finished: {:?} after {} plies", outcome, moves.len());

    GameRecord {
        started_at,
        start_fen: start.to_fen(),
        moves,
        outcome,
        final_fen: game_state.to_fen(),
    }
}
