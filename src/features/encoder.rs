//! Board encoding for value-function input.
//!
//! Turns a [`Board`] into a flat feature vector from one color's
//! perspective. The learning side (weights, training) lives outside this
//! crate; only the input layout is defined here.

use crate::core::{Board, Color, NUM_POINTS, PIECES_PER_COLOR};

/// Encodes boards into feature vectors.
pub trait BoardEncoder: Send + Sync {
    /// Encode `board` as seen by `perspective`.
    fn encode(&self, board: &Board, perspective: Color) -> Vec<f32>;

    /// Length of every vector `encode` returns.
    fn feature_count(&self) -> usize;
}

/// Units per point per color.
const UNITS_PER_POINT: usize = 4;

/// The classic 196-unit TD-Gammon layout.
///
/// Layout, always written as if the perspective color were White:
/// - 96 units: 4 per point for the perspective color
/// - opponent bar / 2, own bar / 2
/// - opponent off / 15, own off / 15
/// - 96 units: 4 per point for the opponent
///
/// A point holding `n` pieces encodes as `0000`, `1000`, `1100`, or
/// `1 1 1 (n-3)/2` for `n >= 3`.
///
/// The Black perspective encodes [`Board::mirrored`], so both colors
/// see themselves travelling the same way.
#[derive(Clone, Copy, Debug, Default)]
pub struct TdGammonEncoder;

impl TdGammonEncoder {
    /// Total features.
    pub const FEATURES: usize = 2 * NUM_POINTS * UNITS_PER_POINT + 4;

    pub fn new() -> Self {
        Self
    }

    fn encode_point(count: u8, out: &mut Vec<f32>) {
        let n = f32::from(count);
        out.push(if count >= 1 { 1.0 } else { 0.0 });
        out.push(if count >= 2 { 1.0 } else { 0.0 });
        out.push(if count >= 3 { 1.0 } else { 0.0 });
        out.push(if count > 3 { (n - 3.0) / 2.0 } else { 0.0 });
    }

    fn encode_side(board: &Board, color: Color, out: &mut Vec<f32>) {
        for point in 0..NUM_POINTS {
            Self::encode_point(board.pieces_of(color, point), out);
        }
    }
}

impl BoardEncoder for TdGammonEncoder {
    fn encode(&self, board: &Board, perspective: Color) -> Vec<f32> {
        let view = match perspective {
            Color::White => board.clone(),
            Color::Black => board.mirrored(),
        };
        let (own, opponent) = (Color::White, Color::Black);
        let pieces = f32::from(PIECES_PER_COLOR);

        let mut features = Vec::with_capacity(Self::FEATURES);
        Self::encode_side(&view, own, &mut features);
        features.push(f32::from(view.bar(opponent)) / 2.0);
        features.push(f32::from(view.bar(own)) / 2.0);
        features.push(f32::from(view.off(opponent)) / pieces);
        features.push(f32::from(view.off(own)) / pieces);
        Self::encode_side(&view, opponent, &mut features);

        debug_assert_eq!(features.len(), Self::FEATURES);
        features
    }

    fn feature_count(&self) -> usize {
        Self::FEATURES
    }
}
