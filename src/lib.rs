pub mod api;
pub mod config;
pub mod error;
pub mod hand;
pub mod mirror;
pub mod note;
pub mod pianovision;
pub mod search;

pub use api::{assign_fingering, finger_raw_notes};
pub use config::FingeringConfig;
pub use error::*;
pub use hand::{Finger, FingerPositions, Hand, HandModel, HandSize, Side, FINGERS};
pub use mirror::{mirror_finger, mirror_fingering};
pub use note::{normalize, Note, RawNote};
pub use pianovision::{process_document, process_json, updated_file_name, DocumentReport};
pub use search::{optimize_window, run_sequence, skip, window_cost, HandReport, WindowSolution};
