//! Long algebraic move notation (`e2e4`, `e7e8q`).
//!
//! Parsing only resolves the piece standing on the origin cell; whether the
//! move is legal is decided by the applier.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_cell;

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}

pub fn long_algebraic_to_move(long_algebraic: &str, game_state: &GameState) -> ChessResult<Move> {
    if !long_algebraic.is_ascii() || (long_algebraic.len() != 4 && long_algebraic.len() != 5) {
        return Err(ChessError::Format(format!(
            "Invalid long algebraic move: {long_algebraic}"
        )));
    }

    let from = algebraic_to_cell(&long_algebraic[0..2])?;
    let to = algebraic_to_cell(&long_algebraic[2..4])?;

    let piece = game_state.piece_at(from).ok_or_else(|| {
        ChessError::IllegalMove(format!("No piece on from-square: {}", &long_algebraic[0..2]))
    })?;

    let promotion = match long_algebraic[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    Ok(Move {
        piece,
        to,
        promotion,
    })
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    match PieceKind::from_char(ch) {
        Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Ok(kind),
        _ => Err(ChessError::Format(format!(
            "Invalid promotion piece character: {ch}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn simple_move_round_trip() {
        let game_state = parse_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("e2e4", &game_state).expect("move should parse");

        assert_eq!(mv.piece.kind, PieceKind::Pawn);
        assert_eq!(mv.to, Cell::at(4, 4));
        assert_eq!(move_to_long_algebraic(mv), "e2e4");
    }

    #[test]
    fn promotion_round_trip() {
        let game_state = parse_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("a7a8n", &game_state).expect("move should parse");

        assert_eq!(mv.promotion, Some(PieceKind::Knight));
        assert_eq!(mv.to_string(), "a7a8n");
    }

    #[test]
    fn rejects_malformed_moves() {
        let game_state = parse_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        assert!(matches!(
            long_algebraic_to_move("a7", &game_state),
            Err(ChessError::Format(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("a7a8k", &game_state),
            Err(ChessError::Format(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("c3c4", &game_state),
            Err(ChessError::IllegalMove(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("a7z8", &game_state),
            Err(ChessError::Notation(_))
        ));
    }
}
