//! Physical hand model
//!
//! The hand is treated as a rigid frame: each finger rests at a fixed offset from the middle finger,
//! scaled by the hand size. Knowing where one finger actually is places every other finger.

use super::types::{Finger, HandSize};

/// Rest offset of each finger relative to the middle finger (fingers 1..=5)
const REST_OFFSETS: [f64; 5] = [-7.0, -2.8, 0.0, 2.8, 5.6];

/// Relative finger strength
const WEIGHTS: [f64; 5] = [1.1, 1.0, 1.1, 0.9, 0.8];

/// Extra strength factor on black keys; the thumb is by far the weakest there
const BLACK_BIAS: [f64; 5] = [0.3, 1.0, 1.1, 0.8, 0.7];

/// Array slot of a finger, `None` for 0 or anything above 5.
fn slot(finger: Finger) -> Option<usize> {
    (1..=5).contains(&finger).then(|| finger as usize - 1)
}

/// Projected key position of every finger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerPositions([f64; 5]);

impl FingerPositions {
    /// Position of `finger`, `None` if it is not a real finger.
    pub fn get(&self, finger: Finger) -> Option<f64> {
        slot(finger).map(|i| self.0[i])
    }

    pub fn as_array(&self) -> [f64; 5] {
        self.0
    }
}

/// Fixed geometry and strength tables for one hand size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandModel {
    rest: [f64; 5],
    weights: [f64; 5],
    black_bias: [f64; 5],
}

impl HandModel {
    pub fn new(size: HandSize) -> Self {
        let factor = size.factor();
        Self {
            rest: REST_OFFSETS.map(|offset| offset * factor),
            weights: WEIGHTS,
            black_bias: BLACK_BIAS,
        }
    }

    pub fn rest_offset(&self, finger: Finger) -> Option<f64> {
        slot(finger).map(|i| self.rest[i])
    }

    /// Positions of the fingers when the hand is at rest around key position 0.
    pub fn rest_positions(&self) -> FingerPositions {
        FingerPositions(self.rest)
    }

    /// Project every finger from the known key position `x` of `anchor`.
    ///
    /// Returns `None` if `anchor` is not a finger.
    pub fn anchored(&self, anchor: Finger, x: f64) -> Option<FingerPositions> {
        let anchor_rest = self.rest_offset(anchor)?;
        Some(FingerPositions(self.rest.map(|rest| (rest - anchor_rest) + x)))
    }

    /// Divisor normalising a finger's travel velocity by its strength.
    ///
    /// Returns `None` if `finger` is not a finger.
    pub fn strength(&self, finger: Finger, black: bool) -> Option<f64> {
        let i = slot(finger)?;
        Some(if black {
            self.weights[i] * self.black_bias[i]
        } else {
            self.weights[i]
        })
    }
}
