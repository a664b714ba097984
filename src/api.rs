//! # Public API
//!
//! Entry points that run the whole pipeline for one hand: search, then mirroring for the left hand.
//!
//! - [`assign_fingering()`] - Annotate already-normalized notes in place
//! - [`finger_raw_notes()`] - Normalize raw records, then annotate them
//!
//! ## Typical Usage
//!
//! ```rust
//! use fingering::{assign_fingering, FingeringConfig, Note, Side};
//!
//! let mut notes: Vec<Note> = [48, 50, 52, 53, 55]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &pitch)| Note::new(pitch, i as f64 * 0.5, 0.5))
//!     .collect();
//!
//! let report = assign_fingering(&mut notes, Side::Left, &FingeringConfig::default());
//!
//! let fingers: Vec<u8> = notes.iter().map(|n| n.fingering).collect();
//! assert_eq!(fingers, vec![5, 4, 3, 2, 0]);
//! assert_eq!(report.assigned, 4);
//! ```

use crate::config::FingeringConfig;
use crate::hand::Side;
use crate::mirror::mirror_fingering;
use crate::note::{normalize, Note, RawNote};
use crate::search::{run_sequence, HandReport};

/// Assign fingers to one hand's notes in place.
///
/// Right-hand fingers are returned as searched; left-hand fingers are mirrored after the whole
/// sequence is finished. Empty input is a no-op.
pub fn assign_fingering(notes: &mut [Note], side: Side, config: &FingeringConfig) -> HandReport {
    let mut hand = config.hand(side);
    let report = run_sequence(&mut hand, notes);
    if side == Side::Left {
        mirror_fingering(notes);
    }
    report
}

/// Normalize raw records and assign fingers to them.
pub fn finger_raw_notes(
    raw: &[RawNote],
    side: Side,
    config: &FingeringConfig,
) -> (Vec<Note>, HandReport) {
    let mut notes: Vec<Note> = raw.iter().map(normalize).collect();
    let report = assign_fingering(&mut notes, side, config);
    (notes, report)
}
