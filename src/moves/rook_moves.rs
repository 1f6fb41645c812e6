use crate::game_state::chess_types::{Cell, CellSet, Color, GameState, Piece};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn rook_attacks_of(game_state: &GameState, rook: Piece) -> CellSet {
    slide(game_state, rook, &ROOK_DIRECTIONS)
}

/// Union of `trace_ray` over `directions`.
pub fn slide(game_state: &GameState, piece: Piece, directions: &[(i8, i8)]) -> CellSet {
    let mut attacks = CellSet::EMPTY;
    for &(d_row, d_col) in directions {
        attacks |= trace_ray(game_state, piece.cell, piece.color, d_row, d_col);
    }
    attacks
}

/// Walks from `from` one cell at a time. Empty cells are included and the
/// walk continues; an enemy piece is included and ends the walk; a friendly
/// piece ends the walk without being included.
pub fn trace_ray(game_state: &GameState, from: Cell, color: Color, d_row: i8, d_col: i8) -> CellSet {
    let mut attacks = CellSet::EMPTY;
    let mut current = from;

    while let Some(next) = current.offset(d_row, d_col) {
        match game_state.piece_at(next) {
            None => attacks.insert(next),
            Some(other) => {
                if other.color != color {
                    attacks.insert(next);
                }
                break;
            }
        }
        current = next;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::rook_attacks_of;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_on_empty_board_sees_fourteen_cells() {
        let game = GameState::from_fen("k7/8/8/8/3R4/8/8/7K w - - 0 1").expect("FEN should parse");
        let rook = game.piece_at(Cell::at(4, 3)).expect("rook on d4");
        assert_eq!(rook_attacks_of(&game, rook).len(), 14);
    }

    #[test]
    fn blockers_stop_the_ray() {
        // Rook a1, own pawn a4, enemy knight d1.
        let game = GameState::from_fen("k7/8/8/8/P7/8/8/R2n3K w - - 0 1").expect("FEN should parse");
        let rook = game.piece_at(Cell::at(7, 0)).expect("rook on a1");
        let attacks = rook_attacks_of(&game, rook);

        assert!(attacks.contains(Cell::at(5, 0)), "a3 reachable");
        assert!(!attacks.contains(Cell::at(4, 0)), "own pawn on a4 excluded");
        assert!(!attacks.contains(Cell::at(3, 0)), "a5 behind own pawn");
        assert!(attacks.contains(Cell::at(7, 3)), "enemy knight on d1 included");
        assert!(!attacks.contains(Cell::at(7, 4)), "e1 behind the knight");
        assert_eq!(attacks.len(), 5);
    }
}
