use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attacks::attacks_of;

/// Cheap geometric filter so sliders only walk rays that could reach `cell`.
#[inline]
fn could_reach(piece: Piece, cell: Cell) -> bool {
    let d_row = piece.cell.row().abs_diff(cell.row());
    let d_col = piece.cell.col().abs_diff(cell.col());
    match piece.kind {
        PieceKind::Rook => d_row == 0 || d_col == 0,
        PieceKind::Bishop => d_row == d_col,
        PieceKind::Queen => d_row == 0 || d_col == 0 || d_row == d_col,
        PieceKind::King | PieceKind::Knight | PieceKind::Pawn => true,
    }
}

#[inline]
pub fn attacks_cell(game_state: &GameState, piece: Piece, cell: Cell) -> bool {
    piece.cell != cell && could_reach(piece, cell) && attacks_of(game_state, piece).contains(cell)
}

/// Whether any piece of `attacker_color` attacks `cell`.
pub fn is_cell_attacked(game_state: &GameState, cell: Cell, attacker_color: Color) -> bool {
    game_state
        .army(attacker_color)
        .any(|piece| attacks_cell(game_state, piece, cell))
}

pub fn attackers_of_cell(game_state: &GameState, cell: Cell, attacker_color: Color) -> Vec<Piece> {
    game_state
        .army(attacker_color)
        .filter(|&piece| attacks_cell(game_state, piece, cell))
        .collect()
}

/// Whether the king of `color` stands on a cell attacked by the other side.
#[inline]
pub fn is_king_attacked(game_state: &GameState, color: Color) -> bool {
    let Some(king_cell) = game_state.king_cell(color) else {
        return false;
    };
    is_cell_attacked(game_state, king_cell, color.opposite())
}
