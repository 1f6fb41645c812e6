use crate::game_state::chess_types::{CellSet, GameState, Piece};
use crate::moves::rook_moves::slide;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn bishop_attacks_of(game_state: &GameState, bishop: Piece) -> CellSet {
    slide(game_state, bishop, &BISHOP_DIRECTIONS)
}
