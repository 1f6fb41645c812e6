//! Pseudo-legal attack generation.
//!
//! `attacks_of` ignores whether the mover's own king would be exposed. The
//! per-kind generators are pure functions looked up by the piece tag.

use crate::game_state::chess_types::{CellSet, GameState, Piece};
use crate::moves::bishop_moves::bishop_attacks_of;
use crate::moves::king_moves::king_attacks_of;
use crate::moves::knight_moves::knight_attacks_of;
use crate::moves::pawn_moves::pawn_attacks_of;
use crate::moves::queen_moves::queen_attacks_of;
use crate::moves::rook_moves::rook_attacks_of;

type AttackFn = fn(&GameState, Piece) -> CellSet;

/// Indexed by `PieceKind::index`.
const ATTACK_TABLE: [AttackFn; 6] = [
    king_attacks_of,
    queen_attacks_of,
    rook_attacks_of,
    knight_attacks_of,
    bishop_attacks_of,
    pawn_attacks_of,
];

#[inline]
pub fn attacks_of(game_state: &GameState, piece: Piece) -> CellSet {
    ATTACK_TABLE[piece.kind.index()](game_state, piece)
}

#[cfg(test)]
mod tests {
    use super::attacks_of;
    use crate::game_state::chess_types::*;

    #[test]
    fn dispatch_matches_each_kind_at_the_start() {
        let game = GameState::new_game();
        let knight = game.piece_at(Cell::at(7, 6)).expect("knight on g1");
        let rook = game.piece_at(Cell::at(7, 7)).expect("rook on h1");
        let pawn = game.piece_at(Cell::at(6, 4)).expect("pawn on e2");
        let king = game.piece_at(Cell::at(7, 4)).expect("king on e1");

        assert_eq!(attacks_of(&game, knight).len(), 3);
        assert!(attacks_of(&game, rook).is_empty());
        assert_eq!(attacks_of(&game, pawn).len(), 2);
        assert_eq!(attacks_of(&game, king).len(), 5);
    }
}
