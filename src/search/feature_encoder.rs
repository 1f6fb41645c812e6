//! Fixed-length feature vector for learned evaluators.
//!
//! Layout, in order:
//! * side to move (0 White, 1 Black)
//! * castling flags: White short, White long, Black short, Black long
//! * material counts per color: queens, rooks, knights, bishops, pawns
//! * per color, one slot per roster entry (K, Q, R, R, N, N, B, B, P x8).
//!   A slot is `present, row - 3.5, col - 3.5, mobility, lowest attacker,
//!   lowest defender`; the king slot has no presence flag. Empty slots are 0.
//! * White then Black attack maps: lowest attacker value per cell, 25 when
//!   unattacked.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::attacks::attacks_of;
use crate::search::evaluator::StateEncoder;

pub const SIDE_TO_MOVE_INDEX: usize = 0;
pub const CASTLING_OFFSET: usize = 1;
pub const MATERIAL_OFFSET: usize = 5;
pub const PIECE_SLOTS_OFFSET: usize = 15;

const SLOT_BODY_LEN: usize = 5;
const SLOT_LEN: usize = SLOT_BODY_LEN + 1;

/// Non-king roster: kind and number of slots per color.
const ROSTER: [(PieceKind, usize); 5] = [
    (PieceKind::Queen, 1),
    (PieceKind::Rook, 2),
    (PieceKind::Knight, 2),
    (PieceKind::Bishop, 2),
    (PieceKind::Pawn, 8),
];

const MATERIAL_KINDS: [PieceKind; 5] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Pawn,
];

pub const SLOTS_PER_COLOR: usize = SLOT_BODY_LEN + 15 * SLOT_LEN;
pub const ATTACK_MAP_OFFSET: usize = PIECE_SLOTS_OFFSET + 2 * SLOTS_PER_COLOR;
pub const FEATURE_LEN: usize = ATTACK_MAP_OFFSET + 2 * 64;

/// Attack-map value of a cell nothing attacks.
pub const UNATTACKED: u8 = 25;

#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder;

impl StateEncoder for FeatureEncoder {
    fn encode(&self, game_state: &mut GameState) -> Vec<f32> {
        let mut features = Vec::with_capacity(FEATURE_LEN);

        features.push(match game_state.side_to_move {
            Color::White => 0.0,
            Color::Black => 1.0,
        });

        for color in Color::BOTH {
            let rights = game_state.castling_rights.for_color(color);
            features.push(f32::from(u8::from(rights.short)));
            features.push(f32::from(u8::from(rights.long)));
        }

        for color in Color::BOTH {
            for kind in MATERIAL_KINDS {
                features.push(f32::from(game_state.piece_count(color, kind)));
            }
        }

        let maps = [
            attack_map(game_state, Color::White),
            attack_map(game_state, Color::Black),
        ];

        for color in Color::BOTH {
            let own = &maps[color.index()];
            let enemy = &maps[color.opposite().index()];

            match game_state.king_cell(color).and_then(|cell| game_state.piece_at(cell)) {
                Some(king) => push_slot_body(&mut features, game_state, king, own, enemy),
                None => features.extend([0.0; SLOT_BODY_LEN]),
            }

            for (kind, slots) in ROSTER {
                let pieces = game_state.registry(color, kind);
                for slot in 0..slots {
                    match pieces.get(slot) {
                        Some(&piece) => {
                            features.push(1.0);
                            push_slot_body(&mut features, game_state, piece, own, enemy);
                        }
                        None => features.extend([0.0; SLOT_LEN]),
                    }
                }
            }
        }

        for map in &maps {
            features.extend(map.iter().map(|&value| f32::from(value)));
        }

        debug_assert_eq!(features.len(), FEATURE_LEN);
        features
    }
}

fn push_slot_body(
    features: &mut Vec<f32>,
    game_state: &mut GameState,
    piece: Piece,
    own: &[u8; 64],
    enemy: &[u8; 64],
) {
    let index = piece.cell.index();
    features.push(f32::from(piece.cell.row()) - 3.5);
    features.push(f32::from(piece.cell.col()) - 3.5);
    features.push(legal_moves(game_state, piece).len() as f32);
    features.push(f32::from(enemy[index]));
    features.push(f32::from(own[index]));
}

/// Lowest value of a `color` piece attacking each cell.
pub fn attack_map(game_state: &GameState, color: Color) -> [u8; 64] {
    let mut map = [UNATTACKED; 64];
    for piece in game_state.army(color) {
        for cell in attacks_of(game_state, piece) {
            let slot = &mut map[cell.index()];
            *slot = (*slot).min(piece.value());
        }
    }
    map
}
