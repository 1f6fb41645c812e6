//! Legal move generation for one piece or a whole army.
//!
//! Dispatch is a table indexed by piece kind. Every generator takes the
//! state mutably because candidate moves are checked by simulating them on
//! the live grid; the grid is always restored before a generator returns.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_piece::generate_piece_moves;

type LegalMovesFn = fn(&mut GameState, Piece, &mut Vec<Move>);

const LEGAL_MOVES_TABLE: [LegalMovesFn; 6] = [
    generate_king_moves,
    generate_piece_moves,
    generate_piece_moves,
    generate_piece_moves,
    generate_piece_moves,
    generate_pawn_moves,
];

/// Legal moves for `piece`. A piece that is not actually standing on its
/// cell has none.
pub fn legal_moves(game_state: &mut GameState, piece: Piece) -> Vec<Move> {
    let mut out = Vec::new();
    legal_moves_into(game_state, piece, &mut out);
    out
}

pub fn legal_moves_into(game_state: &mut GameState, piece: Piece, out: &mut Vec<Move>) {
    if game_state.piece_at(piece.cell) != Some(piece) {
        return;
    }
    LEGAL_MOVES_TABLE[piece.kind.index()](game_state, piece, out);
}

/// Every legal move of `color`, grouped by piece in row-major board order.
pub fn all_legal_moves(game_state: &mut GameState, color: Color) -> Vec<Move> {
    let army: Vec<Piece> = game_state.army(color).collect();
    let mut out = Vec::with_capacity(64);
    for piece in army {
        legal_moves_into(game_state, piece, &mut out);
    }
    out
}

/// Stops at the first piece with a legal move.
pub fn has_legal_move(game_state: &mut GameState, color: Color) -> bool {
    let army: Vec<Piece> = game_state.army(color).collect();
    let mut scratch = Vec::new();
    for piece in army {
        legal_moves_into(game_state, piece, &mut scratch);
        if !scratch.is_empty() {
            return true;
        }
    }
    false
}
