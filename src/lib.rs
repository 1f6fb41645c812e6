//! Crate root module declarations for the deep_carlsen engine.
//!
//! Exposes the board model, attack and legal-move generation, move
//! application, fixed-depth search, the self-play agent and the text
//! boundary helpers so the binary, benches and tests share stable paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod attacks;
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod legal_moves_piece;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod evaluator;
    pub mod feature_encoder;
    pub mod move_ordering;
}

pub mod engines {
    pub mod agent;
    pub mod console;
    pub mod self_play;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}
