//! # Search Module
//!
//! Sliding-window branch-and-bound search that assigns one finger per note.
//!
//! ## Sub-modules
//! - `cost` - Window effort score (mean normalised finger velocity)
//! - `prune` - Heuristic legality check for finger transitions
//! - `window` - Exhaustive (pruned) enumeration of one lookahead window
//! - `sequence` - Hand-level driver: slide the window, commit one note per step
//!
//! ## Algorithm
//! For every position `i` the driver takes the next `min(depth, remaining)` notes, enumerates every
//! legal finger sequence over them depth-first (fingers 1 to 5 at each level) and scores each
//! complete sequence. The cheapest sequence wins; ties go to the first one enumerated. Only the
//! finger for note `i` is committed, the hand is re-anchored on it, and the next window is forced
//! to start with the winner's second finger.
//!
//! This is a bounded-lookahead greedy search. It does not guarantee a globally optimal fingering.
//!
//! ## Example
//! ```rust
//! use fingering::{run_sequence, Hand, HandSize, Note, Side};
//!
//! let mut notes: Vec<Note> = [60, 62, 64, 65, 67]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &pitch)| Note::new(pitch, i as f64 * 0.5, 0.5))
//!     .collect();
//!
//! let mut hand = Hand::new(Side::Right, HandSize::M).with_depth(9);
//! let report = run_sequence(&mut hand, &mut notes);
//!
//! let fingers: Vec<u8> = notes.iter().map(|n| n.fingering).collect();
//! assert_eq!(fingers, vec![1, 2, 3, 4, 0]);
//! assert_eq!(report.assigned, 4);
//! ```

mod cost;
mod prune;
mod sequence;
mod window;

#[cfg(test)]
mod tests;

pub use cost::window_cost;
pub use prune::skip;
pub use sequence::{run_sequence, HandReport};
pub use window::{optimize_window, WindowSolution};

/// Smallest lookahead window the driver will use
pub const MIN_DEPTH: usize = 3;

/// Largest lookahead window (5^9 candidate leaves before pruning)
pub const MAX_DEPTH: usize = 9;

/// Clamp a configured depth into `MIN_DEPTH..=MAX_DEPTH`.
pub fn clamp_depth(depth: usize) -> usize {
    depth.clamp(MIN_DEPTH, MAX_DEPTH)
}
