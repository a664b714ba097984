//! # Piano Vision Documents
//!
//! Read a Piano Vision JSON document, finger both hands and write the fingers back.
//!
//! ## Layout
//! ```text
//! {
//!   "tracksV2": {
//!     "right": [ { "notes": [ { "note": 60, "start": 0.0, "duration": 0.5, ... }, ... ] }, ... ],
//!     "left":  [ { "notes": [ ... ] } ]
//!   },
//!   ...
//! }
//! ```
//!
//! The notes of all blocks of a hand are flattened into one sequence in document order. After the
//! search each record gets an integer `finger` field; everything else in the document is kept
//! as it was.
//!
//! ## Example
//! ```rust
//! use fingering::{process_json, FingeringConfig};
//!
//! let input = r#"{"tracksV2": {"right": [{"notes": [
//!     {"note": 60, "start": 0.0, "duration": 0.5},
//!     {"note": 62, "start": 0.5, "duration": 0.5},
//!     {"note": 64, "start": 1.0, "duration": 0.5}
//! ]}]}}"#;
//!
//! let (output, report) = process_json(input, &FingeringConfig::default())?;
//! assert!(output.contains("\"finger\""));
//! assert_eq!(report.hands.len(), 1);
//! assert_eq!(report.hands[0].assigned, 2);
//! # Ok::<(), fingering::FingeringError>(())
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::assign_fingering;
use crate::config::FingeringConfig;
use crate::error::FingeringError;
use crate::hand::Side;
use crate::note::{normalize, Note, RawNote};
use crate::search::HandReport;

/// Hands in processing order
const HANDS: [Side; 2] = [Side::Right, Side::Left];

/// Per-hand summaries of a processed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    pub hands: Vec<HandReport>,
}

impl DocumentReport {
    /// Notes that received a finger, over all hands.
    pub fn assigned(&self) -> usize {
        self.hands.iter().map(|h| h.assigned).sum()
    }

    pub fn hand(&self, side: Side) -> Option<&HandReport> {
        self.hands.iter().find(|h| h.side == side)
    }

    /// Pretty-printed JSON summary, as written by the binary's `--report` option.
    pub fn to_json(&self) -> Result<String, FingeringError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Finger both hands of a parsed document in place.
///
/// Hands that are missing, not arrays, or without notes are skipped. Every record of both hands is
/// read before any `finger` field is written, so on error the document is left untouched.
pub fn process_document(
    document: &mut Value,
    config: &FingeringConfig,
) -> Result<DocumentReport, FingeringError> {
    let tracks = document
        .get_mut("tracksV2")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| FingeringError::InvalidDocument("no tracksV2 object found".to_string()))?;

    let mut parsed = Vec::new();
    for side in HANDS {
        let notes = note_records(tracks, side)
            .enumerate()
            .map(|(index, record)| read_note(record, side, index))
            .collect::<Result<Vec<_>, _>>()?;
        if !notes.is_empty() {
            parsed.push((side, notes));
        }
    }

    let mut hands = Vec::new();
    for (side, mut notes) in parsed {
        hands.push(assign_fingering(&mut notes, side, config));

        for (record, note) in note_records_mut(tracks, side).zip(&notes) {
            if let Some(fields) = record.as_object_mut() {
                fields.insert("finger".to_string(), Value::from(note.fingering));
            }
        }
    }

    Ok(DocumentReport { hands })
}

/// Note records of one hand, all blocks flattened in document order.
fn note_records(tracks: &Map<String, Value>, side: Side) -> impl Iterator<Item = &Value> {
    tracks
        .get(side.key())
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|block| block.get("notes").and_then(Value::as_array))
        .flatten()
}

fn note_records_mut(
    tracks: &mut Map<String, Value>,
    side: Side,
) -> impl Iterator<Item = &mut Value> {
    tracks
        .get_mut(side.key())
        .and_then(Value::as_array_mut)
        .into_iter()
        .flatten()
        .filter_map(|block| block.get_mut("notes").and_then(Value::as_array_mut))
        .flatten()
}

fn read_note(record: &Value, side: Side, index: usize) -> Result<Note, FingeringError> {
    RawNote::from_value(record)
        .map(|raw| normalize(&raw))
        .map_err(|e| FingeringError::InvalidNote {
            hand: side.to_string(),
            index,
            message: e.to_string(),
        })
}

/// Parse a document, finger it and serialize it back as pretty-printed JSON.
pub fn process_json(
    input: &str,
    config: &FingeringConfig,
) -> Result<(String, DocumentReport), FingeringError> {
    let mut document: Value = serde_json::from_str(input)?;
    let report = process_document(&mut document, config)?;
    Ok((serde_json::to_string_pretty(&document)?, report))
}

/// Output file name for a processed document: `song.json` becomes `song_updated.json`.
pub fn updated_file_name(name: &str) -> String {
    match name.strip_suffix(".json") {
        Some(stem) => format!("{}_updated.json", stem),
        None => format!("{}_updated.json", name),
    }
}
