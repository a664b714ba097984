use super::*;
use crate::hand::{Finger, Hand, HandSize, Side};
use crate::note::Note;

fn notes_from(entries: &[(i32, f64, f64)]) -> Vec<Note> {
    entries
        .iter()
        .map(|&(pitch, time, duration)| Note::new(pitch, time, duration))
        .collect()
}

fn ascending_run() -> Vec<Note> {
    notes_from(&[
        (60, 0.0, 0.5),
        (62, 0.5, 0.5),
        (64, 1.0, 0.5),
        (65, 1.5, 0.5),
        (67, 2.0, 0.5),
    ])
}

/// Up and down the C major / chromatic exercise used as the demo right-hand part
fn exercise() -> Vec<Note> {
    notes_from(&[
        (60, 0.0, 0.5),
        (62, 0.5, 0.5),
        (64, 1.0, 0.5),
        (65, 1.5, 0.5),
        (67, 2.0, 0.5),
        (66, 2.5, 0.5),
        (65, 3.0, 0.5),
        (64, 3.5, 0.5),
        (62, 4.0, 0.5),
        (61, 4.5, 0.5),
        (60, 5.0, 0.5),
        (62, 5.5, 0.5),
        (64, 6.0, 0.5),
        (66, 6.5, 0.5),
        (68, 7.0, 0.5),
        (69, 7.5, 0.5),
        (71, 8.0, 0.0),
        (72, 8.0, 1.0),
    ])
}

fn fingers(notes: &[Note]) -> Vec<Finger> {
    notes.iter().map(|n| n.fingering).collect()
}

fn run(notes: &mut [Note], size: HandSize, depth: usize) -> HandReport {
    let mut hand = Hand::new(Side::Right, size).with_depth(depth);
    run_sequence(&mut hand, notes)
}

#[test]
fn test_ascending_run_end_to_end() {
    let mut notes = ascending_run();
    let report = run(&mut notes, HandSize::M, 9);

    // The last note never gets a window of two notes
    assert_eq!(fingers(&notes), vec![1, 2, 3, 4, 0]);
    assert_eq!(report.notes, 5);
    assert_eq!(report.assigned, 4);

    let costs: Vec<f64> = notes.iter().filter_map(|n| n.cost).collect();
    let expected = [2.469696969696967, 2.0707070707070656, 2.4999999999999947, 1.6666666666666607];
    assert_eq!(costs.len(), expected.len());
    for (cost, want) in costs.iter().zip(expected) {
        assert!((cost - want).abs() < 1e-9, "cost {} != {}", cost, want);
    }
    assert_eq!(notes[4].cost, None);
}

#[test]
fn test_exercise_fingering() {
    let mut notes = exercise();
    run(&mut notes, HandSize::M, 9);
    assert_eq!(
        fingers(&notes),
        vec![1, 2, 3, 4, 5, 4, 3, 2, 1, 2, 1, 2, 3, 4, 5, 1, 2, 0]
    );
}

#[test]
fn test_hand_size_changes_fingering() {
    let mut large = exercise();
    run(&mut large, HandSize::L, 9);
    assert_eq!(
        fingers(&large),
        vec![1, 2, 3, 4, 5, 4, 3, 2, 1, 2, 1, 2, 1, 2, 3, 1, 2, 0]
    );
}

#[test]
fn test_shallower_depth_changes_fingering() {
    let mut notes = exercise();
    run(&mut notes, HandSize::M, 5);
    assert_eq!(
        fingers(&notes),
        vec![1, 2, 3, 4, 5, 4, 3, 2, 1, 3, 2, 1, 2, 3, 4, 1, 2, 0]
    );
}

#[test]
fn test_descending_run() {
    let mut notes = notes_from(&[
        (67, 0.0, 0.5),
        (65, 0.5, 0.5),
        (64, 1.0, 0.5),
        (62, 1.5, 0.5),
        (60, 2.0, 0.5),
    ]);
    run(&mut notes, HandSize::M, 9);
    assert_eq!(fingers(&notes), vec![5, 4, 3, 2, 0]);
}

#[test]
fn test_determinism() {
    let mut first = exercise();
    let mut second = exercise();
    run(&mut first, HandSize::S, 7);
    run(&mut second, HandSize::S, 7);
    assert_eq!(first, second);
}

#[test]
fn test_rerun_on_annotated_notes_is_stable() {
    let mut notes = exercise();
    let mut hand = Hand::new(Side::Right, HandSize::M);
    run_sequence(&mut hand, &mut notes);
    let once = notes.clone();
    run_sequence(&mut hand, &mut notes);
    assert_eq!(notes, once);
    assert_eq!(hand.position_history().len(), notes.len() - 1);
}

#[test]
fn test_fingers_stay_in_range() {
    for size in HandSize::ALL {
        let mut notes = exercise();
        run(&mut notes, size, 6);
        assert!(notes.iter().all(|n| n.fingering <= 5));
    }
}

#[test]
fn test_depth_is_clamped() {
    let mut shallow = exercise();
    let mut three = exercise();
    run(&mut shallow, HandSize::M, 1);
    run(&mut three, HandSize::M, 3);
    assert_eq!(shallow, three);
    assert_eq!(
        fingers(&three),
        vec![2, 3, 4, 1, 3, 2, 1, 2, 1, 2, 1, 2, 3, 4, 5, 1, 2, 0]
    );

    let mut deep = exercise();
    let mut nine = exercise();
    let report = run(&mut deep, HandSize::M, 20);
    run(&mut nine, HandSize::M, 9);
    assert_eq!(deep, nine);
    assert_eq!(report.depth, 9);
}

#[test]
fn test_empty_sequence() {
    let mut notes: Vec<Note> = Vec::new();
    let report = run(&mut notes, HandSize::Xxl, 9);
    assert!(notes.is_empty());
    assert_eq!(report.notes, 0);
    assert_eq!(report.assigned, 0);
}

#[test]
fn test_single_note_is_left_unassigned() {
    let mut notes = notes_from(&[(60, 0.0, 1.0)]);
    let report = run(&mut notes, HandSize::M, 9);
    assert_eq!(notes[0].fingering, 0);
    assert_eq!(notes[0].cost, None);
    assert_eq!(report.assigned, 0);
}

#[test]
fn test_three_notes_leave_only_the_tail() {
    let mut notes = ascending_run();
    notes.truncate(3);
    run(&mut notes, HandSize::M, 9);
    assert_eq!(fingers(&notes), vec![2, 3, 0]);
}

#[test]
fn test_next_window_starts_with_previous_second_finger() {
    // With depth 3 every window must begin with the finger projected for it by the last window
    let mut notes = exercise();
    let mut hand = Hand::new(Side::Right, HandSize::M).with_depth(3);
    run_sequence(&mut hand, &mut notes);

    let model = *hand.model();
    let mut start = None;
    for i in 0..notes.len() - 1 {
        let depth = 3.min(notes.len() - i);
        let solution = optimize_window(&model, &notes[i..i + depth], depth, start).unwrap();
        assert_eq!(solution.fingering[0], notes[i].fingering);
        start = solution.fingering.get(1).copied();
    }
}

#[test]
fn test_position_history_follows_commits() {
    let mut notes = ascending_run();
    let mut hand = Hand::new(Side::Right, HandSize::M);
    run_sequence(&mut hand, &mut notes);

    let history = hand.position_history();
    assert_eq!(history.len(), 4);
    for (positions, note) in history.iter().zip(&notes) {
        assert_eq!(positions.get(note.fingering), Some(note.x));
    }
    assert_eq!(hand.positions(), history[3]);
}

#[test]
fn test_chord_tail_is_unconstrained() {
    let mut notes = exercise();
    for note in notes.iter_mut().skip(16) {
        note.is_chord = true;
    }
    run(&mut notes, HandSize::M, 9);
    assert_eq!(
        fingers(&notes),
        vec![1, 2, 3, 4, 5, 4, 3, 2, 1, 2, 1, 2, 1, 2, 3, 4, 5, 0]
    );
}

#[test]
fn test_pruned_window_leaves_note_unassigned() {
    // The window at 61 inherits a start finger from which every continuation down to 58 is
    // pruned; the note stays at 0 and the following window starts unconstrained
    let mut notes = notes_from(&[
        (63, 0.0, 0.5),
        (64, 0.5, 0.5),
        (61, 1.0, 0.5),
        (58, 1.5, 0.5),
        (56, 2.0, 0.5),
        (55, 2.5, 0.5),
    ]);
    let report = run(&mut notes, HandSize::M, 3);
    assert_eq!(fingers(&notes), vec![2, 3, 0, 4, 3, 0]);
    assert_eq!(notes[2].cost, None);
    assert_eq!(report.assigned, 4);
}
