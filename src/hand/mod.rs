//! # Hand Module
//!
//! Per-hand optimization context: side, size, rest geometry and the projected finger positions
//! that the search updates as it commits fingers.
//!
//! ## Sub-modules
//! - `types` - Finger, Side and HandSize definitions
//! - `model` - Rest geometry, strength tables and the anchor projection
//!
//! ## Anchoring
//! Knowing the key position of one finger fixes the whole hand: every other finger sits at its
//! rest offset relative to the anchor. [`Hand::set_anchor`] re-derives all five positions from one
//! committed finger.
//!
//! ## Example
//! ```rust
//! use fingering::{Hand, HandSize, Note, Side};
//!
//! let notes = vec![Note::new(60, 0.0, 0.5), Note::new(64, 0.5, 0.5)];
//! let mut hand = Hand::new(Side::Right, HandSize::M);
//! hand.set_anchor(&[1, 3], &notes, 1);
//!
//! assert_eq!(hand.positions().get(3), Some(64.0));
//! assert_eq!(hand.positions().get(1), Some(57.0));
//! ```

mod model;
mod types;

pub use model::{FingerPositions, HandModel};
pub use types::{Finger, HandSize, Side, FINGERS};

use crate::note::Note;
use crate::search::{clamp_depth, MAX_DEPTH};

/// Optimization state for one hand over one note sequence.
#[derive(Debug, Clone)]
pub struct Hand {
    side: Side,
    size: HandSize,
    model: HandModel,
    positions: FingerPositions,
    depth: usize,
    history: Vec<FingerPositions>,
}

impl Hand {
    /// Create a hand with the default (maximum) lookahead depth.
    pub fn new(side: Side, size: HandSize) -> Self {
        let model = HandModel::new(size);
        Self {
            side,
            size,
            model,
            positions: model.rest_positions(),
            depth: MAX_DEPTH,
            history: Vec::new(),
        }
    }

    /// Set the lookahead depth, clamped into the supported range.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = clamp_depth(depth);
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn size(&self) -> HandSize {
        self.size
    }

    pub fn model(&self) -> &HandModel {
        &self.model
    }

    /// Configured lookahead depth. Never changes during a run.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Current projected position of every finger.
    pub fn positions(&self) -> FingerPositions {
        self.positions
    }

    /// Projected positions after each committed note, in commit order.
    pub fn position_history(&self) -> &[FingerPositions] {
        &self.history
    }

    /// Re-project all finger positions from `fingering[index]` playing `notes[index]`.
    ///
    /// Leaves the positions untouched if either entry is missing or the finger is unassigned.
    pub fn set_anchor(&mut self, fingering: &[Finger], notes: &[Note], index: usize) {
        let (Some(&finger), Some(note)) = (fingering.get(index), notes.get(index)) else {
            return;
        };
        if let Some(positions) = self.model.anchored(finger, note.x) {
            self.positions = positions;
        }
    }

    /// Record the current positions as the trace entry for a committed note.
    pub(crate) fn record_positions(&mut self) {
        self.history.push(self.positions);
    }

    /// Drop the trace of a previous run.
    pub(crate) fn reset(&mut self) {
        self.positions = self.model.rest_positions();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_is_clamped() {
        assert_eq!(Hand::new(Side::Right, HandSize::M).depth(), 9);
        assert_eq!(Hand::new(Side::Right, HandSize::M).with_depth(1).depth(), 3);
        assert_eq!(Hand::new(Side::Right, HandSize::M).with_depth(20).depth(), 9);
        assert_eq!(Hand::new(Side::Left, HandSize::S).with_depth(5).depth(), 5);
    }

    #[test]
    fn test_initial_positions_are_rest_offsets() {
        let hand = Hand::new(Side::Right, HandSize::M);
        assert_eq!(hand.positions().as_array(), [-7.0, -2.8, 0.0, 2.8, 5.6]);
        assert!(hand.position_history().is_empty());
    }

    #[test]
    fn test_set_anchor_ignores_missing_entries() {
        let notes = vec![Note::new(60, 0.0, 0.5)];
        let mut hand = Hand::new(Side::Right, HandSize::M);
        let before = hand.positions();

        hand.set_anchor(&[2], &notes, 1);
        assert_eq!(hand.positions(), before);

        hand.set_anchor(&[0], &notes, 0);
        assert_eq!(hand.positions(), before);

        hand.set_anchor(&[2], &notes, 0);
        assert_eq!(hand.positions().get(2), Some(60.0));
    }
}
