use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::keeps_king_safe;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(game_state: &mut GameState, pawn: Piece, out: &mut Vec<Move>) {
    let color = pawn.color;
    let step = color.pawn_step();
    let mut candidates = CellSet::EMPTY;

    // Diagonals only when there is something to take.
    for to in pawn_attacks(color, pawn.cell) {
        let enemy_there = game_state.piece_at(to).is_some_and(|other| other.color != color);
        let en_passant = color == game_state.side_to_move && game_state.en_passant_target == Some(to);
        if enemy_there || en_passant {
            candidates.insert(to);
        }
    }

    if let Some(one_step) = pawn.cell.offset(step, 0) {
        if game_state.piece_at(one_step).is_none() {
            candidates.insert(one_step);

            if pawn.cell.row() == color.pawn_home_row() {
                if let Some(two_step) = one_step.offset(step, 0) {
                    if game_state.piece_at(two_step).is_none() {
                        candidates.insert(two_step);
                    }
                }
            }
        }
    }

    for to in candidates {
        if !keeps_king_safe(game_state, pawn, to) {
            continue;
        }
        if to.row() == color.promotion_row() {
            for kind in PieceKind::PROMOTIONS {
                out.push(Move::with_promotion(pawn, to, kind));
            }
        } else {
            out.push(Move::new(pawn, to));
        }
    }
}
