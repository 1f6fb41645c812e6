//! Legal queen, rook, knight and bishop moves.
//!
//! These kinds share one rule: attacks minus friendly-occupied cells, minus
//! destinations that would leave the own king attacked.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{keeps_king_safe, without_friendly};
use crate::moves::attacks::attacks_of;

pub fn generate_piece_moves(game_state: &mut GameState, piece: Piece, out: &mut Vec<Move>) {
    let targets = without_friendly(game_state, piece, attacks_of(game_state, piece));
    for to in targets {
        if keeps_king_safe(game_state, piece, to) {
            out.push(Move::new(piece, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_piece_moves;
    use crate::game_state::chess_types::*;

    fn moves_of(fen: &str, cell: Cell) -> Vec<Move> {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let piece = game.piece_at(cell).expect("piece on cell");
        let mut out = Vec::new();
        generate_piece_moves(&mut game, piece, &mut out);
        out
    }

    #[test]
    fn start_position_knight_has_two_moves() {
        let moves = moves_of(crate::game_state::chess_rules::STARTING_POSITION_FEN, Cell::at(7, 1));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn pinned_rook_may_slide_along_the_pin() {
        // Rook e4 pinned on the e-file by the queen on e8; it may move along the file only.
        let moves = moves_of("4q2k/8/8/8/4R3/8/8/4K3 w - - 0 1", Cell::at(4, 4));
        assert!(moves.iter().all(|mv| mv.to.col() == 4));
        // e5, e6, e7, xe8 upwards and e3, e2 downwards.
        assert_eq!(moves.len(), 6);
    }

    #[test]
    fn only_moves_that_block_or_capture_escape_check() {
        // White king e1 checked by the rook on e8; the bishop on d3 can only block on e2 or e4.
        let moves = moves_of("4r2k/8/8/8/8/3B4/8/4K3 w - - 0 1", Cell::at(5, 3));
        let mut targets: Vec<Cell> = moves.iter().map(|mv| mv.to).collect();
        targets.sort();
        assert_eq!(targets, vec![Cell::at(4, 4), Cell::at(6, 4)]);
    }
}
