//! Cell conversions for algebraic coordinates.
//!
//! `row = 8 - rank_digit`, `col = file_letter - 'a'`. Only used at the I/O
//! boundary (FEN, long algebraic moves, CLI output).

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Cell;

/// Convert algebraic notation (for example: "e4") to a cell.
pub fn algebraic_to_cell(square: &str) -> ChessResult<Cell> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::Notation(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::Notation(square.to_owned()));
    }

    Cell::new(i32::from(b'8' - rank), i32::from(file - b'a'))
}

/// Convert a cell to algebraic notation (for example: "e4").
pub fn cell_to_algebraic(cell: Cell) -> String {
    cell.to_string()
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = char::from(b'a' + self.col());
        let rank_char = char::from(b'8' - self.row());
        write!(f, "{file_char}{rank_char}")
    }
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_cell, cell_to_algebraic};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::Cell;

    #[test]
    fn corner_conversions() {
        assert_eq!(algebraic_to_cell("a8").expect("a8 should parse"), Cell::at(0, 0));
        assert_eq!(algebraic_to_cell("h1").expect("h1 should parse"), Cell::at(7, 7));
        assert_eq!(algebraic_to_cell("e4").expect("e4 should parse"), Cell::at(4, 4));
        assert_eq!(cell_to_algebraic(Cell::at(7, 0)), "a1");
        assert_eq!(cell_to_algebraic(Cell::at(2, 3)), "d6");
    }

    #[test]
    fn rejects_cells_off_the_board() {
        for bad in ["i1", "a9", "a0", "e", "e44", ""] {
            assert_eq!(
                algebraic_to_cell(bad),
                Err(ChessError::Notation(bad.to_owned())),
                "{bad} should be rejected"
            );
        }
    }
}
