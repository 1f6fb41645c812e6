//! FEN-to-GameState parser.
//!
//! Builds a fully-populated state from a Forsyth-Edwards Notation string.
//! Any malformed field rejects the whole string; no partial state escapes.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_cell;

fn format_error(msg: impl Into<String>) -> ChessError {
    ChessError::Format(msg.into())
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| format_error("Missing board layout in FEN"))?;
    let side_part = parts.next().ok_or_else(|| format_error("Missing side-to-move in FEN"))?;
    let castling_part = parts.next().ok_or_else(|| format_error("Missing castling rights in FEN"))?;
    let en_passant_part = parts.next().ok_or_else(|| format_error("Missing en-passant square in FEN"))?;
    let halfmove_part = parts.next().ok_or_else(|| format_error("Missing halfmove clock in FEN"))?;
    let fullmove_part = parts.next().ok_or_else(|| format_error("Missing fullmove number in FEN"))?;

    if parts.next().is_some() {
        return Err(format_error("FEN has extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_target(en_passant_part, game_state.side_to_move)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| format_error(format!("Invalid halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| format_error(format!("Invalid fullmove number: {fullmove_part}")))?;
    if game_state.fullmove_number == 0 {
        return Err(format_error("Fullmove number starts at 1"));
    }

    for color in Color::BOTH {
        let kings = game_state.piece_count(color, PieceKind::King);
        if kings != 1 {
            return Err(format_error(format!("{color:?} must have exactly one king, found {kings}")));
        }
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(format_error("Board layout must contain 8 ranks"));
    }

    // FEN lists the eighth rank first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format_error(format!("Invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| format_error(format!("Invalid piece character '{ch}' in board layout")))?;

            if col >= 8 {
                return Err(format_error("Board rank has too many files"));
            }

            game_state.place(Piece::new(color, kind, Cell::at(row as u8, col as u8)));
            col += 1;
        }

        if col != 8 {
            return Err(format_error("Board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format_error(format!("Invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.grant(Color::White, true, false),
            'Q' => rights.grant(Color::White, false, true),
            'k' => rights.grant(Color::Black, true, false),
            'q' => rights.grant(Color::Black, false, true),
            _ => return Err(format_error(format!("Invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(en_passant_part: &str, side_to_move: Color) -> ChessResult<Option<Cell>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let cell = algebraic_to_cell(en_passant_part)?;
    // Only the cell a pawn of the side not to move just passed over is valid.
    let expected_row = match side_to_move {
        Color::White => 2,
        Color::Black => 5,
    };
    if cell.row() != expected_row {
        return Err(format_error(format!("Impossible en-passant square: {en_passant_part}")));
    }
    Ok(Some(cell))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    Some((color, PieceKind::from_char(ch)?))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.en_passant_target, None);
        assert_eq!(
            game_state.piece_at(Cell::at(0, 3)),
            Some(Piece::new(Color::Black, PieceKind::Queen, Cell::at(0, 3)))
        );
        assert_eq!(
            game_state.piece_at(Cell::at(6, 4)),
            Some(Piece::new(Color::White, PieceKind::Pawn, Cell::at(6, 4)))
        );
    }

    #[test]
    fn parse_fields_after_placement() {
        let game_state =
            parse_fen("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPPP1PP/RNBQKBNR w Kq e6 0 3").expect("FEN should parse");
        assert_eq!(game_state.en_passant_target, Some(Cell::at(2, 4)));
        assert!(game_state.castling_rights.for_color(Color::White).short);
        assert!(!game_state.castling_rights.for_color(Color::White).long);
        assert!(!game_state.castling_rights.for_color(Color::Black).short);
        assert!(game_state.castling_rights.for_color(Color::Black).long);
        assert_eq!(game_state.fullmove_number, 3);
    }

    #[test]
    fn malformed_strings_are_format_errors() {
        let cases = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1",
            "rnbq1bnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQ - 0 1",
        ];
        for fen in cases {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::Format(_))),
                "expected a format error for {fen}"
            );
        }
    }

    #[test]
    fn bad_en_passant_notation_is_reported() {
        let err = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1")
            .expect_err("notation should be rejected");
        assert_eq!(err, ChessError::Notation("z9".to_owned()));
    }
}
