//! Core value types shared by the board, move generation and search.
//!
//! Everything here is `Copy`: pieces are values that live in the grid, never
//! references shared between board copies.

use crate::errors::{ChessError, ChessResult};

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step.
    #[inline]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns start on; double pushes are only allowed from here.
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row holding the king and rooks in the initial arrangement.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// +1 for the maximizing side (White), -1 for Black.
    #[inline]
    pub const fn sign(self) -> f32 {
        match self {
            Color::White => 1.0,
            Color::Black => -1.0,
        }
    }
}

/// Closed set of piece kinds. Behaviour is selected by matching on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Knight,
    Bishop,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Pawn,
    ];

    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 4,
            PieceKind::Pawn => 5,
        }
    }

    /// Relative worth used by feature extraction and capture ordering only.
    #[inline]
    pub const fn value(self) -> u8 {
        match self {
            PieceKind::King => 15,
            PieceKind::Queen => 9,
            PieceKind::Rook => 5,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Pawn => 1,
        }
    }

    /// Lowercase FEN letter.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Pawn => 'p',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

/// A board cell. Row 0 is the eighth rank, column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> ChessResult<Self> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(ChessError::Bounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Builds a cell from coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self {
            row: row & 7,
            col: col & 7,
        }
    }

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self::at((index / 8) as u8, (index % 8) as u8)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// The cell `(row + d_row, col + d_col)`, or `None` off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// A set of cells packed into 64 bits (bit `row * 8 + col`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet(u64);

impl CellSet {
    pub const EMPTY: CellSet = CellSet(0);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        CellSet(bits)
    }

    #[inline]
    pub fn insert(&mut self, cell: Cell) {
        self.0 |= 1u64 << cell.index();
    }

    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        self.0 & (1u64 << cell.index()) != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates cells in row-major order.
    #[inline]
    pub fn iter(self) -> CellSetIter {
        CellSetIter(self.0)
    }
}

impl std::ops::BitOr for CellSet {
    type Output = CellSet;

    fn bitor(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: CellSet) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> CellSetIter {
        self.iter()
    }
}

pub struct CellSetIter(u64);

impl Iterator for CellSetIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Cell::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CellSetIter {}

/// A piece together with the cell it currently stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub cell: Cell,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind, cell: Cell) -> Self {
        Self { color, kind, cell }
    }

    /// FEN letter, uppercase for White.
    pub fn notation(self) -> char {
        match self.color {
            Color::White => self.kind.to_char().to_ascii_uppercase(),
            Color::Black => self.kind.to_char(),
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.kind.value()
    }
}

/// A move of `piece` to `to`, with a promotion kind for pawns reaching the
/// last row. Only meaningful relative to the position it was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub to: Cell,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(piece: Piece, to: Cell) -> Self {
        Self {
            piece,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(piece: Piece, to: Cell, promotion: PieceKind) -> Self {
        Self {
            piece,
            to,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub const fn from(self) -> Cell {
        self.piece.cell
    }

    /// King moves spanning two columns.
    #[inline]
    pub fn is_castling(self) -> bool {
        self.piece.kind == PieceKind::King && self.piece.cell.col().abs_diff(self.to.col()) == 2
    }
}

/// Short/long availability for one color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastleSide {
    pub short: bool,
    pub long: bool,
}

/// Castling availability for both colors. Flags are only ever cleared after
/// construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingRights {
    sides: [CastleSide; 2],
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        sides: [CastleSide {
            short: false,
            long: false,
        }; 2],
    };

    pub const ALL: CastlingRights = CastlingRights {
        sides: [CastleSide {
            short: true,
            long: true,
        }; 2],
    };

    #[inline]
    pub const fn for_color(&self, color: Color) -> CastleSide {
        self.sides[color.index()]
    }

    #[inline]
    pub fn revoke_short(&mut self, color: Color) {
        self.sides[color.index()].short = false;
    }

    #[inline]
    pub fn revoke_long(&mut self, color: Color) {
        self.sides[color.index()].long = false;
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.sides[color.index()] = CastleSide::default();
    }

    /// Only used while building a position from its textual form.
    pub(crate) fn grant(&mut self, color: Color, short: bool, long: bool) {
        let side = &mut self.sides[color.index()];
        side.short |= short;
        side.long |= long;
    }

    pub fn is_empty(&self) -> bool {
        self.sides.iter().all(|s| !s.short && !s.long)
    }
}
