//! Pawn capture cells.
//!
//! Only the two forward diagonals count as attacks. Pushes depend on empty
//! cells rather than attack semantics and live in the pawn legality filter.

use crate::game_state::chess_types::{Cell, CellSet, Color, GameState, Piece};
use crate::moves::king_moves::set_if_valid;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);

#[inline]
pub const fn pawn_attacks(color: Color, cell: Cell) -> CellSet {
    match color {
        Color::White => CellSet::from_bits(WHITE_PAWN_ATTACKS[cell.index()]),
        Color::Black => CellSet::from_bits(BLACK_PAWN_ATTACKS[cell.index()]),
    }
}

pub fn pawn_attacks_of(_game_state: &GameState, pawn: Piece) -> CellSet {
    pawn_attacks(pawn.color, pawn.cell)
}

const fn generate_pawn_attacks(step: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;

    while index < 64 {
        let row = (index / 8) as i32;
        let col = (index % 8) as i32;

        table[index] = set_if_valid(row + step, col - 1) | set_if_valid(row + step, col + 1);
        index += 1;
    }

    table
}
