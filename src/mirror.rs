//! Left-hand mirroring
//!
//! The search always reasons with a right-hand-shaped model. A left hand is the mirror image, so its
//! fingers are renumbered once the whole sequence is finished: 1<->5, 2<->4, 3 stays.

use crate::hand::Finger;
use crate::note::Note;

/// Mirror one finger number. 0 (unassigned) and out-of-range values are returned unchanged.
///
/// ```
/// use fingering::mirror_finger;
///
/// assert_eq!(mirror_finger(1), 5);
/// assert_eq!(mirror_finger(3), 3);
/// assert_eq!(mirror_finger(0), 0);
/// ```
pub fn mirror_finger(finger: Finger) -> Finger {
    match finger {
        1..=5 => 6 - finger,
        other => other,
    }
}

/// Mirror the finger of every note in place.
pub fn mirror_fingering(notes: &mut [Note]) {
    for note in notes {
        note.fingering = mirror_finger(note.fingering);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_map() {
        let mirrored: Vec<Finger> = (1..=5).map(mirror_finger).collect();
        assert_eq!(mirrored, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_mirror_is_an_involution() {
        for finger in 0..=5 {
            assert_eq!(mirror_finger(mirror_finger(finger)), finger);
        }
    }

    #[test]
    fn test_mirror_sequence_twice() {
        let mut notes: Vec<Note> = (0..6).map(|i| Note::new(60 + i, i as f64, 0.5)).collect();
        for (note, finger) in notes.iter_mut().zip([1, 2, 3, 4, 5, 0]) {
            note.fingering = finger;
        }
        let original = notes.clone();

        mirror_fingering(&mut notes);
        let once: Vec<Finger> = notes.iter().map(|n| n.fingering).collect();
        assert_eq!(once, vec![5, 4, 3, 2, 1, 0]);

        mirror_fingering(&mut notes);
        assert_eq!(notes, original);
    }
}
