//! Perft: leaf counts of the legal move tree, the standard move-generator
//! correctness check.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::attackers_of_cell;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_legal_move};
use crate::move_generation::legal_move_shared::capture_cell_for;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub discovery_checks: u64,
    pub double_checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.discovery_checks += rhs.discovery_checks;
        self.double_checks += rhs.double_checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count at `depth`. The board is restored before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let side = game_state.side_to_move;
    let moves = all_legal_moves(game_state, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let undo = make_move(game_state, mv);
        nodes += perft(game_state, depth - 1);
        unmake_move(game_state, undo);
    }
    nodes
}

/// Per-root-move leaf counts, for bisecting a mismatch against a reference.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    let side = game_state.side_to_move;
    let moves = all_legal_moves(game_state, side);

    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        let undo = make_move(game_state, mv);
        let nodes = perft(game_state, depth.saturating_sub(1));
        unmake_move(game_state, undo);
        out.push((mv, nodes));
    }
    out
}

/// Leaf count plus a classification of the moves that reach the leaves.
pub fn perft_counts(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let side = game_state.side_to_move;
    let mut total = PerftCounts::default();

    for mv in all_legal_moves(game_state, side) {
        if depth == 1 {
            total.merge(classify_leaf(game_state, mv));
        } else {
            let undo = make_move(game_state, mv);
            total.merge(perft_counts(game_state, depth - 1));
            unmake_move(game_state, undo);
        }
    }

    total
}

fn classify_leaf(game_state: &mut GameState, mv: Move) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if let Some(captured_on) = capture_cell_for(game_state, mv.piece, mv.to) {
        counts.captures = 1;
        if captured_on != mv.to {
            counts.en_passant = 1;
        }
    }
    if mv.is_castling() {
        counts.castles = 1;
    }
    if mv.promotion.is_some() {
        counts.promotions = 1;
    }

    let mover = mv.piece.color;
    let defender = mover.opposite();

    let undo = make_move(game_state, mv);
    if let Some(king_cell) = game_state.king_cell(defender) {
        let checkers = attackers_of_cell(game_state, king_cell, mover);
        if !checkers.is_empty() {
            counts.checks = 1;
            if checkers.len() >= 2 {
                counts.double_checks = 1;
            } else if checkers[0].cell != mv.to && !mv.is_castling() {
                counts.discovery_checks = 1;
            }
            if !has_legal_move(game_state, defender) {
                counts.checkmates = 1;
            }
        }
    }
    unmake_move(game_state, undo);

    counts
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    fn assert_perft(fen: &str, expected: &[u64]) {
        let mut game = GameState::from_fen(fen).expect("fixture FEN should parse");
        let before = game.clone();
        for (depth_idx, nodes) in expected.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;
            assert_eq!(perft(&mut game, depth), *nodes, "{fen} at depth {depth}");
        }
        assert_eq!(game, before);
    }

    #[test]
    fn start_position_node_counts() {
        assert_perft(STARTING_POSITION_FEN, &[20, 400, 8902]);
    }

    #[test]
    fn kiwipete_node_counts() {
        assert_perft(KIWIPETE, &[48, 2039]);
    }

    #[test]
    fn position_3_node_counts() {
        assert_perft(POSITION_3, &[14, 191, 2812]);
    }

    #[test]
    fn position_4_node_counts() {
        assert_perft(POSITION_4, &[6, 264, 9467]);
    }

    #[test]
    fn position_5_node_counts() {
        assert_perft(POSITION_5, &[44, 1486]);
    }

    #[test]
    fn depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        assert_eq!(
            perft_counts(&mut game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_depth_three_metrics() {
        let mut game = GameState::new_game();
        let counts = perft_counts(&mut game, 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn kiwipete_depth_two_metrics() {
        let mut game = GameState::from_fen(KIWIPETE).expect("fixture FEN should parse");
        assert_eq!(
            perft_counts(&mut game, 1),
            PerftCounts {
                nodes: 48,
                captures: 8,
                castles: 2,
                ..PerftCounts::default()
            }
        );
        assert_eq!(
            perft_counts(&mut game, 2),
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                checks: 3,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn position_4_depth_two_metrics() {
        let mut game = GameState::from_fen(POSITION_4).expect("fixture FEN should parse");
        assert_eq!(
            perft_counts(&mut game, 2),
            PerftCounts {
                nodes: 264,
                captures: 87,
                castles: 6,
                promotions: 48,
                checks: 10,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn position_4_mates_appear_at_depth_three() {
        let mut game = GameState::from_fen(POSITION_4).expect("fixture FEN should parse");
        let counts = perft_counts(&mut game, 3);
        assert_eq!(counts.nodes, 9467);
        assert_eq!(counts.promotions, 120);
        assert_eq!(counts.checkmates, 22);
    }

    #[test]
    fn position_3_depth_three_metrics() {
        let mut game = GameState::from_fen(POSITION_3).expect("fixture FEN should parse");
        let counts = perft_counts(&mut game, 3);
        assert_eq!(counts.nodes, 2812);
        assert_eq!(counts.captures, 209);
        assert_eq!(counts.en_passant, 2);
        assert_eq!(counts.checks, 267);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::from_fen(KIWIPETE).expect("fixture FEN should parse");
        let divided = perft_divide(&mut game, 2);
        assert_eq!(divided.len(), 48);
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<u64>(), 2039);
    }
}
