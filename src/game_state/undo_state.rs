use crate::game_state::chess_types::*;

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// Piece removed by the move; its cell differs from `mv.to` for en passant.
    pub captured: Option<Piece>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Cell>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
