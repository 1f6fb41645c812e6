//! Terminal-state queries.

use crate::game_state::chess_rules::FIFTY_MOVE_LIMIT;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_generator::has_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move has been mated; the payload is the winner.
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveDraw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

pub fn is_check(game_state: &GameState, color: Color) -> bool {
    is_king_attacked(game_state, color)
}

pub fn is_checkmate(game_state: &mut GameState, color: Color) -> bool {
    is_check(game_state, color) && !has_legal_move(game_state, color)
}

pub fn is_stalemate(game_state: &mut GameState, color: Color) -> bool {
    !is_check(game_state, color) && !has_legal_move(game_state, color)
}

#[inline]
pub fn is_fifty_move_draw(game_state: &GameState) -> bool {
    game_state.halfmove_clock >= FIFTY_MOVE_LIMIT
}

/// Status for the side to move. Mate and stalemate take precedence over the
/// fifty-move draw.
pub fn game_status(game_state: &mut GameState) -> GameStatus {
    let side = game_state.side_to_move;
    if !has_legal_move(game_state, side) {
        return if is_check(game_state, side) {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }
    if is_fifty_move_draw(game_state) {
        return GameStatus::FiftyMoveDraw;
    }
    GameStatus::Ongoing
}
