//! Scoped king-exposure simulation.
//!
//! `SimulatedMove` relocates a piece on the live grid (removing whatever it
//! captures) and puts everything back when dropped, so every exit path of a
//! legality check leaves the board exactly as it found it.

use std::ops::Deref;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_attacked;

/// Cell of the piece removed by moving `piece` to `to`, if any. For an
/// en-passant capture this is the cell behind the destination.
pub fn capture_cell_for(game_state: &GameState, piece: Piece, to: Cell) -> Option<Cell> {
    if game_state.piece_at(to).is_some() {
        return Some(to);
    }
    if piece.kind == PieceKind::Pawn
        && piece.color == game_state.side_to_move
        && piece.cell.col() != to.col()
        && game_state.en_passant_target == Some(to)
    {
        let behind = to.offset(-piece.color.pawn_step(), 0)?;
        return game_state
            .piece_at(behind)
            .filter(|victim| victim.kind == PieceKind::Pawn && victim.color != piece.color)
            .map(|victim| victim.cell);
    }
    None
}

pub struct SimulatedMove<'a> {
    game_state: &'a mut GameState,
    moved: Piece,
    to: Cell,
    captured: Option<Piece>,
}

impl<'a> SimulatedMove<'a> {
    pub fn new(game_state: &'a mut GameState, piece: Piece, to: Cell) -> Self {
        let captured = capture_cell_for(game_state, piece, to).and_then(|cell| game_state.remove(cell));
        game_state.relocate(piece.cell, to);
        Self {
            game_state,
            moved: piece,
            to,
            captured,
        }
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        &*self.game_state
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.game_state.relocate(self.to, self.moved.cell);
        if let Some(captured) = self.captured {
            self.game_state.place(captured);
        }
    }
}

/// Whether moving `piece` to `to` keeps its own king out of attack.
pub fn keeps_king_safe(game_state: &mut GameState, piece: Piece, to: Cell) -> bool {
    let simulated = SimulatedMove::new(game_state, piece, to);
    !is_king_attacked(&simulated, piece.color)
}

/// Drops destinations holding a friendly piece.
#[inline]
pub fn without_friendly(game_state: &GameState, piece: Piece, targets: CellSet) -> CellSet {
    targets
        .iter()
        .filter(|&cell| game_state.piece_at(cell).map_or(true, |other| other.color != piece.color))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{capture_cell_for, keeps_king_safe, SimulatedMove};
    use crate::game_state::chess_types::*;

    #[test]
    fn simulation_restores_the_grid_on_drop() {
        let mut game = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let before = game.clone();
        let pawn = game.piece_at(Cell::at(4, 4)).expect("pawn on e4");

        {
            let simulated = SimulatedMove::new(&mut game, pawn, Cell::at(3, 3));
            assert_eq!(simulated.piece_count(Color::Black, PieceKind::Pawn), 0);
            assert_eq!(simulated.piece_at(Cell::at(3, 3)).map(|p| p.color), Some(Color::White));
        }

        assert_eq!(game, before);
    }

    #[test]
    fn simulation_restores_even_when_unwinding() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let knight = game.piece_at(Cell::at(7, 6)).expect("knight on g1");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _simulated = SimulatedMove::new(&mut game, knight, Cell::at(5, 5));
            panic!("abort mid-simulation");
        }));

        assert!(result.is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn en_passant_capture_cell_is_behind_the_target() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        let pawn = game.piece_at(Cell::at(3, 4)).expect("pawn on e5");
        assert_eq!(capture_cell_for(&game, pawn, Cell::at(2, 3)), Some(Cell::at(3, 3)));
        assert_eq!(capture_cell_for(&game, pawn, Cell::at(2, 4)), None);
    }

    #[test]
    fn pinned_knight_cannot_move() {
        // Knight e2 pinned against the king on e1 by the rook on e8.
        let mut game = GameState::from_fen("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let knight = game.piece_at(Cell::at(6, 4)).expect("knight on e2");
        assert!(!keeps_king_safe(&mut game, knight, Cell::at(4, 3)));
        assert!(!keeps_king_safe(&mut game, knight, Cell::at(5, 2)));
    }
}
