//! Single-window enumeration

use super::cost::window_cost;
use super::prune::skip;
use crate::hand::{Finger, HandModel, FINGERS};
use crate::note::Note;

/// Cheapest finger sequence found for one window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSolution {
    pub fingering: Vec<Finger>,
    pub cost: f64,
}

/// Find the cheapest legal fingering for the first `min(depth, notes.len())` notes.
///
/// Candidates are generated depth-first, fingers 1 to 5 at every level, with the first level
/// restricted to `start` when given. A candidate finger is dropped as soon as [`skip`] rejects
/// the transition into it. The first leaf with the lowest cost wins.
///
/// The traversal uses an explicit path and per-level cursors instead of recursion.
///
/// Returns `None` for an empty window or when every candidate is pruned.
pub fn optimize_window(
    model: &HandModel,
    notes: &[Note],
    depth: usize,
    start: Option<Finger>,
) -> Option<WindowSolution> {
    let depth = depth.min(notes.len());
    if depth == 0 {
        return None;
    }

    let all = FINGERS;
    let first: &[Finger] = match start.and_then(|f| all.iter().position(|&g| g == f)) {
        Some(i) => &all[i..=i],
        None => &all,
    };

    let mut path: Vec<Finger> = Vec::with_capacity(depth);
    let mut cursor = vec![0usize; depth];
    let mut best: Option<WindowSolution> = None;
    let mut best_cost = f64::INFINITY;

    loop {
        let level = path.len();

        if level == depth {
            let cost = window_cost(model, &path, notes);
            if cost < best_cost {
                best_cost = cost;
                best = Some(WindowSolution {
                    fingering: path.clone(),
                    cost,
                });
            }
            path.pop();
            continue;
        }

        let candidates = if level == 0 { first } else { &all[..] };
        let mut descended = false;
        while let Some(&finger) = candidates.get(cursor[level]) {
            cursor[level] += 1;
            if level > 0 && skip(path[level - 1], finger, &notes[level - 1], &notes[level]) {
                continue;
            }
            path.push(finger);
            if level + 1 < depth {
                cursor[level + 1] = 0;
            }
            descended = true;
            break;
        }

        if !descended {
            if level == 0 {
                break;
            }
            path.pop();
        }
    }

    best
}
