//! Window effort score

use crate::hand::{Finger, FingerPositions, HandModel};
use crate::note::Note;

/// Added to every inter-onset interval so simultaneous notes do not divide by zero (seconds)
const TIME_SMOOTHING: f64 = 0.1;

/// Re-anchor `positions` on `fingering[index]` playing `notes[index]`, if both exist.
fn reanchor(positions: &mut FingerPositions, model: &HandModel, fingering: &[Finger], notes: &[Note], index: usize) {
    if let (Some(&finger), Some(note)) = (fingering.get(index), notes.get(index)) {
        if let Some(anchored) = model.anchored(finger, note.x) {
            *positions = anchored;
        }
    }
}

/// Mean normalised finger velocity of playing `notes` with `fingering`. Lower is easier.
///
/// The hand is anchored on the first note, then for every following note the assigned finger
/// travels from its projected position to the key in the time since the previous onset. The
/// velocity is divided by the finger's strength (and black-key bias on black keys) and the hand
/// is re-anchored on that note before the next transition.
///
/// Positions are local to the call, so candidates can be scored independently. Transitions with a
/// missing note or an unassigned finger count as zero effort. A single note costs 0.
pub fn window_cost(model: &HandModel, fingering: &[Finger], notes: &[Note]) -> f64 {
    let transitions = fingering.len().saturating_sub(1);
    if transitions == 0 {
        return 0.0;
    }

    let mut positions = model.rest_positions();
    reanchor(&mut positions, model, fingering, notes, 0);

    let mut total = 0.0;
    for i in 1..fingering.len() {
        let (Some(prev), Some(next)) = (notes.get(i - 1), notes.get(i)) else {
            continue;
        };
        let finger = fingering[i];
        let (Some(resting), Some(strength)) =
            (positions.get(finger), model.strength(finger, next.is_black))
        else {
            continue;
        };

        let dx = (next.x - resting).abs();
        let dt = (next.time - prev.time).abs() + TIME_SMOOTHING;
        total += dx / dt / strength;

        reanchor(&mut positions, model, fingering, notes, i);
    }

    total / transitions as f64
}
