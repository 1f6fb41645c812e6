//! Leaf evaluation interfaces.
//!
//! Search never looks at the board to score a leaf. It asks a `StateEncoder`
//! for a feature vector and hands that to an `Evaluator`, which answers with
//! a value in `[-1, 1]` from the perspective of the side to move. Trained
//! models plug in through the closure impl.

use crate::game_state::game_state::GameState;
use crate::search::feature_encoder::{MATERIAL_OFFSET, SIDE_TO_MOVE_INDEX};

pub trait Evaluator {
    /// Value of the encoded position for the side to move, in `[-1, 1]`.
    fn evaluate(&self, features: &[f32]) -> f32;
}

impl<F> Evaluator for F
where
    F: Fn(&[f32]) -> f32,
{
    fn evaluate(&self, features: &[f32]) -> f32 {
        self(features)
    }
}

pub trait StateEncoder {
    /// Takes the state mutably because some features need legal-move
    /// counts; the board is unchanged on return.
    fn encode(&self, game_state: &mut GameState) -> Vec<f32>;
}

/// Baseline evaluator over the material block of `FeatureEncoder` output.
#[derive(Debug, Clone, Copy)]
pub struct MaterialEvaluator {
    /// Material difference that maps to a full point.
    pub scale: f32,
}

impl MaterialEvaluator {
    // Queen, rook, knight, bishop, pawn: the order of the material block.
    const WEIGHTS: [f32; 5] = [9.0, 5.0, 3.0, 3.0, 1.0];
}

impl Default for MaterialEvaluator {
    fn default() -> Self {
        Self { scale: 39.0 }
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, features: &[f32]) -> f32 {
        let Some(material) = features.get(MATERIAL_OFFSET..MATERIAL_OFFSET + 10) else {
            return 0.0;
        };

        let (white, black) = material.split_at(5);
        let side_of = |counts: &[f32]| -> f32 {
            counts
                .iter()
                .zip(Self::WEIGHTS)
                .map(|(count, weight)| count * weight)
                .sum()
        };
        let white_minus_black = side_of(white) - side_of(black);

        let black_to_move = features.get(SIDE_TO_MOVE_INDEX).is_some_and(|&side| side > 0.5);
        let for_mover = if black_to_move {
            -white_minus_black
        } else {
            white_minus_black
        };

        (for_mover / self.scale).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Evaluator, MaterialEvaluator, StateEncoder};
    use crate::game_state::chess_types::*;
    use crate::search::feature_encoder::FeatureEncoder;

    fn material_score(fen: &str) -> f32 {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let features = FeatureEncoder.encode(&mut game);
        MaterialEvaluator::default().evaluate(&features)
    }

    #[test]
    fn balanced_material_is_zero() {
        assert_eq!(material_score(crate::game_state::chess_rules::STARTING_POSITION_FEN), 0.0);
    }

    #[test]
    fn score_is_from_the_movers_side() {
        // White is a rook up.
        let white_view = material_score("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let black_view = material_score("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");
        assert!((white_view - 5.0 / 39.0).abs() < 1e-6);
        assert!((black_view + 5.0 / 39.0).abs() < 1e-6);
    }

    #[test]
    fn closures_are_evaluators() {
        let constant = |_: &[f32]| 0.25f32;
        assert_eq!(constant.evaluate(&[]), 0.25);
        assert_eq!(MaterialEvaluator::default().evaluate(&[]), 0.0);
    }
}
