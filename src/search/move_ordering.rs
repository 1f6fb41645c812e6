//! Captures-first move ordering (most valuable victim, least valuable
//! attacker), then promotions, then quiet moves in generation order.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::capture_cell_for;

fn order_key(game_state: &GameState, mv: Move) -> i32 {
    let victim = capture_cell_for(game_state, mv.piece, mv.to)
        .and_then(|cell| game_state.piece_at(cell))
        .map_or(0, |piece| i32::from(piece.value()));
    let promotion = mv.promotion.map_or(0, |kind| i32::from(kind.value()));

    if victim > 0 {
        1000 + victim * 16 - i32::from(mv.piece.value()) + promotion
    } else {
        promotion * 16
    }
}

/// Stable sort, so equal keys keep generation order.
pub fn order_moves(game_state: &GameState, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| std::cmp::Reverse(order_key(game_state, mv)));
}
