//! Core board state representation.
//!
//! `GameState` owns the 8x8 grid, which is the single source of truth for
//! piece placement. Per-color registries (piece counts and king cells) are
//! kept in step at the three mutation points `place`, `remove` and
//! `relocate`; piece lists are derived from the grid on demand.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: [[Option<Piece>; 8]; 8],

    // [color][kind]
    piece_counts: [[u8; 6]; 2],
    king_cells: [Option<Cell>; 2],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Cell>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            grid: [[None; 8]; 8],
            piece_counts: [[0; 6]; 2],
            king_cells: [None; 2],

            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.grid[cell.row() as usize][cell.col() as usize]
    }

    #[inline]
    pub fn king_cell(&self, color: Color) -> Option<Cell> {
        self.king_cells[color.index()]
    }

    #[inline]
    pub fn piece_count(&self, color: Color, kind: PieceKind) -> u8 {
        self.piece_counts[color.index()][kind.index()]
    }

    /// All pieces on the board, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flatten().filter_map(|slot| *slot)
    }

    /// Live pieces of one color, row-major.
    pub fn army(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Pieces of one color and kind, row-major.
    pub fn registry(&self, color: Color, kind: PieceKind) -> Vec<Piece> {
        self.army(color).filter(|p| p.kind == kind).collect()
    }

    /// Puts `piece` on its own cell, which must be empty.
    pub(crate) fn place(&mut self, piece: Piece) {
        let cell = piece.cell;
        debug_assert!(self.piece_at(cell).is_none(), "place onto occupied cell {cell:?}");
        self.grid[cell.row() as usize][cell.col() as usize] = Some(piece);
        self.piece_counts[piece.color.index()][piece.kind.index()] += 1;
        if piece.kind == PieceKind::King {
            self.king_cells[piece.color.index()] = Some(cell);
        }
    }

    /// Takes whatever stands on `cell` off the board.
    pub(crate) fn remove(&mut self, cell: Cell) -> Option<Piece> {
        let piece = self.grid[cell.row() as usize][cell.col() as usize].take()?;
        self.piece_counts[piece.color.index()][piece.kind.index()] -= 1;
        if piece.kind == PieceKind::King && self.king_cells[piece.color.index()] == Some(cell) {
            self.king_cells[piece.color.index()] = None;
        }
        Some(piece)
    }

    /// Moves the piece on `from` to the empty cell `to`, updating its stored
    /// cell. Returns the relocated piece.
    pub(crate) fn relocate(&mut self, from: Cell, to: Cell) -> Option<Piece> {
        let mut piece = self.grid[from.row() as usize][from.col() as usize].take()?;
        debug_assert!(self.piece_at(to).is_none(), "relocate onto occupied cell {to:?}");
        piece.cell = to;
        self.grid[to.row() as usize][to.col() as usize] = Some(piece);
        if piece.kind == PieceKind::King {
            self.king_cells[piece.color.index()] = Some(to);
        }
        Some(piece)
    }

    /// Consistency pass over the derived registries. Meant for tests and
    /// debug assertions, not the search hot path.
    pub fn validate(&self) -> Result<(), String> {
        let mut counts = [[0u8; 6]; 2];
        let mut kings: [Option<Cell>; 2] = [None; 2];

        for row in 0..8u8 {
            for col in 0..8u8 {
                let Some(piece) = self.grid[row as usize][col as usize] else {
                    continue;
                };
                let cell = Cell::at(row, col);
                if piece.cell != cell {
                    return Err(format!(
                        "piece {piece:?} stored on {cell:?} but records {:?}",
                        piece.cell
                    ));
                }
                counts[piece.color.index()][piece.kind.index()] += 1;
                if piece.kind == PieceKind::King {
                    kings[piece.color.index()] = Some(cell);
                }
            }
        }

        if counts != self.piece_counts {
            return Err(format!(
                "registry counts {:?} disagree with grid {:?}",
                self.piece_counts, counts
            ));
        }

        for color in Color::BOTH {
            let king_count = counts[color.index()][PieceKind::King.index()];
            if king_count != 1 {
                return Err(format!("{color:?} has {king_count} kings"));
            }
            if kings[color.index()] != self.king_cells[color.index()] {
                return Err(format!(
                    "{color:?} king cached on {:?} but found on {:?}",
                    self.king_cells[color.index()],
                    kings[color.index()]
                ));
            }
        }

        if let Some(target) = self.en_passant_target {
            // The cell passed over by the last double push: row 5 after White, row 2 after Black.
            let expected_row = match self.side_to_move {
                Color::White => 2,
                Color::Black => 5,
            };
            if target.row() != expected_row {
                return Err(format!("en-passant target {target:?} on impossible row"));
            }
        }

        Ok(())
    }
}
