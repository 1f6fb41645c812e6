use crate::game_state::chess_rules::{
    KING_START_COL, LONG_CASTLE_KING_COL, LONG_CASTLE_PASS_COL, LONG_CASTLE_ROOK_COL, LONG_ROOK_COL,
    SHORT_CASTLE_KING_COL, SHORT_CASTLE_ROOK_COL, SHORT_ROOK_COL,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_cell_attacked;
use crate::move_generation::legal_move_shared::{keeps_king_safe, without_friendly};
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(game_state: &mut GameState, king: Piece, out: &mut Vec<Move>) {
    // Simulated like every other piece so the king cannot step back along a
    // ray that currently runs through its own cell.
    let targets = without_friendly(game_state, king, king_attacks(king.cell));
    for to in targets {
        if keeps_king_safe(game_state, king, to) {
            out.push(Move::new(king, to));
        }
    }

    generate_castling_moves(game_state, king, out);
}

fn generate_castling_moves(game_state: &GameState, king: Piece, out: &mut Vec<Move>) {
    let color = king.color;
    let row = color.back_row();
    if king.cell != Cell::at(row, KING_START_COL) {
        return;
    }

    let rights = game_state.castling_rights.for_color(color);
    if !rights.short && !rights.long {
        return;
    }

    let enemy = color.opposite();

    // Cannot castle out of check.
    if is_cell_attacked(game_state, king.cell, enemy) {
        return;
    }

    let empty = |col: u8| game_state.piece_at(Cell::at(row, col)).is_none();
    let safe = |col: u8| !is_cell_attacked(game_state, Cell::at(row, col), enemy);

    if rights.short
        && rook_on_corner(game_state, color, row, SHORT_ROOK_COL)
        && empty(SHORT_CASTLE_ROOK_COL)
        && empty(SHORT_CASTLE_KING_COL)
        && safe(SHORT_CASTLE_ROOK_COL)
        && safe(SHORT_CASTLE_KING_COL)
    {
        out.push(Move::new(king, Cell::at(row, SHORT_CASTLE_KING_COL)));
    }

    // The b-file square must be empty but may be attacked.
    if rights.long
        && rook_on_corner(game_state, color, row, LONG_ROOK_COL)
        && empty(LONG_CASTLE_PASS_COL)
        && empty(LONG_CASTLE_KING_COL)
        && empty(LONG_CASTLE_ROOK_COL)
        && safe(LONG_CASTLE_ROOK_COL)
        && safe(LONG_CASTLE_KING_COL)
    {
        out.push(Move::new(king, Cell::at(row, LONG_CASTLE_KING_COL)));
    }
}

fn rook_on_corner(game_state: &GameState, color: Color, row: u8, col: u8) -> bool {
    game_state
        .piece_at(Cell::at(row, col))
        .is_some_and(|piece| piece.color == color && piece.kind == PieceKind::Rook)
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;

    fn king_targets(fen: &str, color: Color) -> Vec<Cell> {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let cell = game.king_cell(color).expect("king on board");
        let king = game.piece_at(cell).expect("king piece");
        let mut out = Vec::new();
        generate_king_moves(&mut game, king, &mut out);
        out.into_iter().map(|mv| mv.to).collect()
    }

    #[test]
    fn both_castles_when_path_is_clear() {
        let targets = king_targets("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Color::White);
        assert!(targets.contains(&Cell::at(7, 6)));
        assert!(targets.contains(&Cell::at(7, 2)));

        let targets = king_targets("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", Color::Black);
        assert!(targets.contains(&Cell::at(0, 6)));
        assert!(targets.contains(&Cell::at(0, 2)));
    }

    #[test]
    fn no_castling_through_attacked_cells() {
        // Black rook on f8 covers f1.
        let targets = king_targets("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White);
        assert!(!targets.contains(&Cell::at(7, 6)));
        assert!(targets.contains(&Cell::at(7, 2)));

        // b1 may be attacked; only c1 and d1 matter on the long side.
        let targets = king_targets("1r5k/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White);
        assert!(targets.contains(&Cell::at(7, 2)));
    }

    #[test]
    fn occupied_b_file_blocks_long_castling() {
        let targets = king_targets("7k/8/8/8/8/8/8/RN2K2R w KQ - 0 1", Color::White);
        assert!(targets.contains(&Cell::at(7, 6)));
        assert!(!targets.contains(&Cell::at(7, 2)));

        let targets = king_targets("rn2k3/8/8/8/8/8/8/7K b q - 0 1", Color::Black);
        assert!(!targets.contains(&Cell::at(0, 2)));
    }

    #[test]
    fn no_castling_out_of_check_or_without_rook() {
        let targets = king_targets("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White);
        assert!(!targets.contains(&Cell::at(7, 6)));
        assert!(!targets.contains(&Cell::at(7, 2)));

        let targets = king_targets("7k/8/8/8/8/8/8/4K2R w KQ - 0 1", Color::White);
        assert!(targets.contains(&Cell::at(7, 6)));
        assert!(!targets.contains(&Cell::at(7, 2)));
    }

    #[test]
    fn king_cannot_retreat_along_the_checking_ray() {
        // Rook a1 checks the king on d1; c1 and e1 both stay on the rank.
        let targets = king_targets("7k/8/8/8/8/8/8/r2K4 w - - 0 1", Color::White);
        assert!(!targets.contains(&Cell::at(7, 4)));
        assert!(!targets.contains(&Cell::at(7, 2)));
        assert!(targets.contains(&Cell::at(6, 3)));
    }

    #[test]
    fn king_may_only_capture_undefended_pieces() {
        let targets = king_targets("7k/8/8/8/8/8/3q4/3K4 w - - 0 1", Color::White);
        assert_eq!(targets, vec![Cell::at(6, 3)]);

        // Same queen, now covered by the rook on d8.
        let targets = king_targets("3r3k/8/8/8/8/8/3q4/3K4 w - - 0 1", Color::White);
        assert!(targets.is_empty());
    }
}
