//! Transition pruning
//!
//! Heuristic legality rules that cut physically implausible finger transitions before they are
//! scored. They approximate biomechanics, they do not simulate it.

use crate::hand::Finger;
use crate::note::Note;

/// Held notes at least this long (seconds) may be re-struck by the same finger after a slide
const LONG_HOLD: f64 = 4.0;

/// A thumb holding a black key at least this long may let another finger cross under
const THUMB_BLACK_HOLD: f64 = 2.0;

/// True if finger `fb` on `nb` must not follow finger `fa` on `na`.
///
/// Rules, applied only when neither note belongs to a chord:
/// - the same finger cannot move to a different key unless the first note is long-held;
/// - two non-thumb fingers cannot move against key order (a higher finger going left, or a lower
///   finger going right);
/// - a non-thumb finger cannot pass to the thumb on a black key while moving right;
/// - the thumb cannot leave a short black-key note for another finger while moving left.
///
/// Chord members are trusted as tagged upstream and never pruned.
pub fn skip(fa: Finger, fb: Finger, na: &Note, nb: &Note) -> bool {
    if na.is_chord || nb.is_chord {
        return false;
    }

    let xba = nb.x - na.x;

    if fa == fb && xba != 0.0 && na.duration < LONG_HOLD {
        return true;
    }

    if fa > 1 {
        let crossing = fb > 1 && (fb as f64 - fa as f64) * xba < 0.0;
        let thumb_onto_black = fb == 1 && nb.is_black && xba > 0.0;
        crossing || thumb_onto_black
    } else {
        na.is_black && xba < 0.0 && fb > 1 && na.duration < THUMB_BLACK_HOLD
    }
}
