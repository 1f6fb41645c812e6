use crate::game_state::chess_types::{Cell, CellSet, GameState, Piece};
use crate::moves::king_moves::set_if_valid;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(cell: Cell) -> CellSet {
    CellSet::from_bits(KNIGHT_ATTACKS[cell.index()])
}

pub fn knight_attacks_of(_game_state: &GameState, knight: Piece) -> CellSet {
    knight_attacks(knight.cell)
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;

    while index < 64 {
        let row = (index / 8) as i32;
        let col = (index % 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row + 2, col + 1);
        attacks |= set_if_valid(row + 1, col + 2);
        attacks |= set_if_valid(row - 1, col + 2);
        attacks |= set_if_valid(row - 2, col + 1);
        attacks |= set_if_valid(row - 2, col - 1);
        attacks |= set_if_valid(row - 1, col - 2);
        attacks |= set_if_valid(row + 1, col - 2);
        attacks |= set_if_valid(row + 2, col - 1);

        table[index] = attacks;
        index += 1;
    }

    table
}
