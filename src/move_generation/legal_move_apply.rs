//! Move application.
//!
//! `make_move` / `unmake_move` mutate one board in place and are what search
//! and perft use. `apply_move` is the checked copy-on-apply entry point for
//! callers holding a shared position.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    LONG_CASTLE_ROOK_COL, LONG_ROOK_COL, SHORT_CASTLE_KING_COL, SHORT_CASTLE_ROOK_COL, SHORT_ROOK_COL,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::legal_move_shared::capture_cell_for;

/// Applies a move known to be legal for the side to move and returns the
/// record needed to take it back.
pub fn make_move(game_state: &mut GameState, mv: Move) -> UndoState {
    let piece = mv.piece;
    let color = piece.color;
    let from = piece.cell;
    let to = mv.to;

    let mut undo = UndoState {
        mv,
        captured: None,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_target: game_state.en_passant_target,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    };

    // Captured piece first; for en passant it sits behind the destination.
    undo.captured = capture_cell_for(game_state, piece, to).and_then(|cell| game_state.remove(cell));

    game_state.en_passant_target = None;
    if piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
        game_state.en_passant_target = from.offset(color.pawn_step(), 0);
    }

    if mv.is_castling() {
        let (rook_from, rook_to) = castling_rook_cells(color, to);
        game_state.relocate(rook_from, rook_to);
    }

    update_castling_rights(game_state, piece, undo.captured);

    match mv.promotion {
        Some(kind) => {
            game_state.remove(from);
            game_state.place(Piece::new(color, kind, to));
        }
        None => {
            game_state.relocate(from, to);
        }
    }

    let resets_clock = undo.captured.is_some() || piece.kind == PieceKind::Pawn;
    game_state.halfmove_clock = if resets_clock {
        0
    } else {
        game_state.halfmove_clock.saturating_add(1)
    };

    if color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }
    game_state.side_to_move = color.opposite();

    undo
}

/// Reverses `make_move` exactly.
pub fn unmake_move(game_state: &mut GameState, undo: UndoState) {
    let mv = undo.mv;
    let piece = mv.piece;

    if mv.promotion.is_some() {
        game_state.remove(mv.to);
        game_state.place(piece);
    } else {
        game_state.relocate(mv.to, piece.cell);
    }

    if mv.is_castling() {
        let (rook_from, rook_to) = castling_rook_cells(piece.color, mv.to);
        game_state.relocate(rook_to, rook_from);
    }

    if let Some(captured) = undo.captured {
        game_state.place(captured);
    }

    game_state.side_to_move = piece.color;
    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_target = undo.prev_en_passant_target;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
}

/// Checked copy-on-apply: `game_state` is left untouched and the result is
/// an independent position. Rejects moves by the wrong side and moves not in
/// the mover's legal set.
pub fn apply_move(game_state: &GameState, mv: Move) -> ChessResult<GameState> {
    if mv.piece.color != game_state.side_to_move {
        return Err(ChessError::IllegalMove(format!(
            "{mv}: {:?} is not to move",
            mv.piece.color
        )));
    }

    let mut next = game_state.clone();
    if !legal_moves(&mut next, mv.piece).contains(&mv) {
        return Err(ChessError::IllegalMove(format!(
            "{mv} is not legal in {}",
            game_state.to_fen()
        )));
    }

    make_move(&mut next, mv);
    Ok(next)
}

/// Copy-on-apply without the legality check, for callers that generated the
/// move themselves.
pub fn apply_move_unchecked(game_state: &GameState, mv: Move) -> GameState {
    let mut next = game_state.clone();
    make_move(&mut next, mv);
    next
}

fn castling_rook_cells(color: Color, king_to: Cell) -> (Cell, Cell) {
    let row = color.back_row();
    if king_to.col() == SHORT_CASTLE_KING_COL {
        (Cell::at(row, SHORT_ROOK_COL), Cell::at(row, SHORT_CASTLE_ROOK_COL))
    } else {
        (Cell::at(row, LONG_ROOK_COL), Cell::at(row, LONG_CASTLE_ROOK_COL))
    }
}

fn update_castling_rights(game_state: &mut GameState, moved: Piece, captured: Option<Piece>) {
    let rights = &mut game_state.castling_rights;

    match moved.kind {
        PieceKind::King => rights.revoke_all(moved.color),
        PieceKind::Rook => revoke_for_corner(rights, moved),
        _ => {}
    }

    if let Some(captured) = captured.filter(|p| p.kind == PieceKind::Rook) {
        revoke_for_corner(rights, captured);
    }
}

fn revoke_for_corner(rights: &mut CastlingRights, rook: Piece) {
    if rook.cell.row() != rook.color.back_row() {
        return;
    }
    match rook.cell.col() {
        SHORT_ROOK_COL => rights.revoke_short(rook.color),
        LONG_ROOK_COL => rights.revoke_long(rook.color),
        _ => {}
    }
}
