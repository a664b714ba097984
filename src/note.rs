//! # Note Model
//!
//! Canonical note record consumed and annotated by the fingering search.
//!
//! Upstream loaders deliver notes in loosely-typed records (`note`/`pitch`, `start`/`time`, optional
//! chord bookkeeping). [`RawNote`] captures that shape for deserialization and [`normalize`] turns
//! it into a [`Note`] with every optional field defaulted. Only the pitch is required.
//!
//! ## Example
//! ```rust
//! use fingering::note::{normalize, RawNote};
//!
//! let raw: RawNote = serde_json::from_str(r#"{"note": 61, "time": 1.5}"#).unwrap();
//! let note = normalize(&raw);
//!
//! assert_eq!(note.pitch, 61);
//! assert!(note.is_black);
//! assert_eq!(note.octave, 4);
//! assert_eq!(note.time, 1.5);
//! assert_eq!(note.duration, 0.0);
//! assert_eq!(note.fingering, 0);
//! ```

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::hand::Finger;

/// Pitch classes of the black keys (C#, D#, F#, G#, A#)
const BLACK_PITCH_CLASSES: [i32; 5] = [1, 3, 6, 8, 10];

/// True if the MIDI pitch falls on a black key.
pub fn is_black_key(pitch: i32) -> bool {
    BLACK_PITCH_CLASSES.contains(&pitch.rem_euclid(12))
}

/// Horizontal key position used by the hand model.
///
/// One unit per semitone; the hand's rest geometry is expressed in the same units.
pub fn key_position(pitch: i32) -> f64 {
    pitch as f64
}

/// One note as delivered by an upstream loader.
///
/// Field names follow the Piano Vision JSON layout. Optional fields that are missing, `null` or of
/// an unexpected type are treated as absent.
///
/// `pitch` is accepted in place of `note`. A record carrying both is rejected by plain serde
/// deserialization as a duplicate field; [`RawNote::from_value`] reads such a record and keeps `note`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawNote {
    #[serde(alias = "pitch")]
    pub note: i32,
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub note_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub note_pitch: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub octave: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub finger: Option<Finger>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_chord: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub measure: Option<u32>,
    #[serde(rename = "chordID", default, deserialize_with = "lenient")]
    pub chord_id: Option<u32>,
    #[serde(rename = "chordnr", default, deserialize_with = "lenient")]
    pub chord_nr: Option<u32>,
    #[serde(rename = "NinChord", default, deserialize_with = "lenient")]
    pub n_in_chord: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
}

impl RawNote {
    /// Read a record from a JSON value. When both `note` and `pitch` are present, `note` wins.
    pub fn from_value(record: &Value) -> Result<Self, serde_json::Error> {
        match record.as_object() {
            Some(fields) if fields.contains_key("note") && fields.contains_key("pitch") => {
                let mut fields = fields.clone();
                fields.remove("pitch");
                Self::deserialize(Value::Object(fields))
            }
            _ => Self::deserialize(record),
        }
    }
}

/// Deserialize an optional field, mapping type mismatches to `None` instead of failing.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A single note annotated by the search.
///
/// Everything except `fingering` and `cost` is fixed once the note is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub name: String,
    pub pitch: i32,
    pub octave: i32,
    pub is_black: bool,
    pub x: f64,
    pub time: f64,
    pub duration: f64,
    pub is_chord: bool,
    /// 0 = unassigned, otherwise 1 (thumb) to 5 (little finger)
    pub fingering: Finger,
    /// Effort score of the window that committed this note's finger
    pub cost: Option<f64>,
    pub measure: u32,
    pub chord_id: u32,
    pub chord_nr: u32,
    pub n_in_chord: u32,
    pub id: u64,
}

impl Note {
    /// Build a plain, non-chord note.
    pub fn new(pitch: i32, time: f64, duration: f64) -> Self {
        Self {
            name: String::new(),
            pitch,
            octave: pitch.div_euclid(12) - 1,
            is_black: is_black_key(pitch),
            x: key_position(pitch),
            time,
            duration,
            is_chord: false,
            fingering: 0,
            cost: None,
            measure: 0,
            chord_id: 0,
            chord_nr: 0,
            n_in_chord: 0,
            id: 0,
        }
    }

    /// Mark the note as a member of a simultaneous-onset group.
    pub fn in_chord(mut self) -> Self {
        self.is_chord = true;
        self
    }
}

/// Normalize a raw record into a [`Note`], defaulting every missing field.
pub fn normalize(raw: &RawNote) -> Note {
    let pitch = raw.note;
    let name = raw
        .note_name
        .clone()
        .or_else(|| raw.note_pitch.clone())
        .unwrap_or_default();

    Note {
        name,
        pitch,
        octave: raw.octave.unwrap_or(pitch.div_euclid(12) - 1),
        is_black: is_black_key(pitch),
        x: key_position(pitch),
        time: raw.start.or(raw.time).unwrap_or(0.0),
        duration: raw.duration.unwrap_or(0.0),
        is_chord: raw.is_chord.unwrap_or(false),
        fingering: raw.finger.filter(|f| *f <= 5).unwrap_or(0),
        cost: None,
        measure: raw.measure.unwrap_or(0),
        chord_id: raw.chord_id.unwrap_or(0),
        chord_nr: raw.chord_nr.unwrap_or(0),
        n_in_chord: raw.n_in_chord.unwrap_or(0),
        id: raw.id.unwrap_or(0),
    }
}
