//! King attack tables.
//!
//! The eight adjacent cells of every cell, computed at compile time. Castling
//! destinations are not attacks and are added by the king legality filter.

use crate::game_state::chess_types::{Cell, CellSet, GameState, Piece};

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(cell: Cell) -> CellSet {
    CellSet::from_bits(KING_ATTACKS[cell.index()])
}

/// Attack-generator entry for kings.
pub fn king_attacks_of(_game_state: &GameState, king: Piece) -> CellSet {
    king_attacks(king.cell)
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;

    while index < 64 {
        let row = (index / 8) as i32;
        let col = (index % 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row - 1, col - 1);
        attacks |= set_if_valid(row - 1, col);
        attacks |= set_if_valid(row - 1, col + 1);
        attacks |= set_if_valid(row, col - 1);
        attacks |= set_if_valid(row, col + 1);
        attacks |= set_if_valid(row + 1, col - 1);
        attacks |= set_if_valid(row + 1, col);
        attacks |= set_if_valid(row + 1, col + 1);

        table[index] = attacks;
        index += 1;
    }

    table
}

pub(crate) const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    1u64 << ((row as usize) * 8 + (col as usize))
}
