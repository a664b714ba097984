//! Hand-level driver

use log::{debug, trace, warn};
use serde::Serialize;

use super::window::optimize_window;
use crate::hand::{Finger, Hand, HandSize, Side};
use crate::note::Note;

/// Summary of one hand's run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandReport {
    pub side: Side,
    pub size: HandSize,
    pub depth: usize,
    /// Number of notes in the sequence
    pub notes: usize,
    /// Number of notes that received a finger
    pub assigned: usize,
}

/// Assign a finger to every note of `notes` by sliding a lookahead window over them.
///
/// At step `i` the window covers `min(depth, notes.len() - i)` notes. Windows shorter than two
/// notes end the run, so the last note keeps finger 0. Each step commits the winner's first
/// finger to `notes[i]` (with the window cost), re-anchors the hand on it and forces the next
/// window to start with the winner's second finger.
///
/// Fingers and costs from a previous run are cleared first. The search works in the right-hand
/// frame regardless of [`Hand::side`]; mirroring is the caller's job.
pub fn run_sequence(hand: &mut Hand, notes: &mut [Note]) -> HandReport {
    hand.reset();
    for note in notes.iter_mut() {
        note.fingering = 0;
        note.cost = None;
    }

    let total = notes.len();
    let mut start: Option<Finger> = None;

    for i in 0..total {
        let depth = hand.depth().min(total - i);
        if depth < 2 {
            break;
        }

        let window = &notes[i..i + depth];
        let solution = optimize_window(hand.model(), window, depth, start);

        let Some(solution) = solution else {
            warn!(
                "{} hand: every fingering pruned for window at note {} (pitch {}), leaving it unassigned",
                hand.side(),
                i,
                notes[i].pitch
            );
            hand.record_positions();
            start = None;
            continue;
        };

        hand.set_anchor(&solution.fingering, window, 0);
        hand.record_positions();
        start = solution.fingering.get(1).copied();

        let finger = solution.fingering[0];
        trace!(
            "{} hand: note {} (pitch {}) -> finger {} (cost {:.4}, window {:?})",
            hand.side(),
            i,
            notes[i].pitch,
            finger,
            solution.cost,
            solution.fingering
        );

        notes[i].fingering = finger;
        notes[i].cost = Some(solution.cost);
    }

    let assigned = notes.iter().filter(|n| n.fingering != 0).count();
    debug!(
        "{} hand ({}, depth {}): assigned {} of {} notes",
        hand.side(),
        hand.size(),
        hand.depth(),
        assigned,
        total
    );

    HandReport {
        side: hand.side(),
        size: hand.size(),
        depth: hand.depth(),
        notes: total,
        assigned,
    }
}
