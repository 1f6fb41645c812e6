//! Errors used throughout the engine.
//!
//! `ChessError` is the single error type returned by parsing, move
//! application and configuration loading. Search and status queries never
//! fail: checkmate, stalemate and draws are ordinary scores.

use thiserror::Error;

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A position string (or a move string) could not be parsed.
    #[error("invalid position string: {0}")]
    Format(String),

    /// The move is not in the legal move set of the side to move.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A zero-based coordinate fell outside `0..=7`.
    #[error("cell out of bounds: row {row}, col {col}")]
    Bounds { row: i32, col: i32 },

    /// Algebraic cell notation outside `a1..h8`.
    #[error("invalid cell notation: {0}")]
    Notation(String),

    /// The engine configuration could not be read or failed validation.
    #[error("invalid engine configuration: {0}")]
    Config(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
