use crate::game_state::chess_types::{CellSet, GameState, Piece};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::{slide, ROOK_DIRECTIONS};

pub fn queen_attacks_of(game_state: &GameState, queen: Piece) -> CellSet {
    slide(game_state, queen, &ROOK_DIRECTIONS) | slide(game_state, queen, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks_of;
    use crate::game_state::chess_types::*;

    #[test]
    fn queen_in_the_centre_sees_twenty_seven_cells() {
        let game = GameState::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("FEN should parse");
        let queen = game.piece_at(Cell::at(4, 3)).expect("queen on d4");
        assert_eq!(queen_attacks_of(&game, queen).len(), 27);
    }
}
