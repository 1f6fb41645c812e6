//! Canonical chess-rule constants.
//!
//! Starting position, draw threshold and the fixed columns involved in
//! castling.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-move clock value at which the fifty-move draw applies.
pub const FIFTY_MOVE_LIMIT: u16 = 50;

pub const KING_START_COL: u8 = 4;

pub const SHORT_ROOK_COL: u8 = 7;
pub const LONG_ROOK_COL: u8 = 0;

/// King destination and rook destination columns after castling.
pub const SHORT_CASTLE_KING_COL: u8 = 6;
pub const SHORT_CASTLE_ROOK_COL: u8 = 5;
pub const LONG_CASTLE_KING_COL: u8 = 2;
pub const LONG_CASTLE_ROOK_COL: u8 = 3;

/// Square between the long-side rook and its destination; must be empty only.
pub const LONG_CASTLE_PASS_COL: u8 = 1;
