//! # Error Types
//!
//! This module defines all error types for the fingering library.
//!
//! The search engine itself never fails: malformed note data is defaulted and the window depth is
//! clamped. Errors only come from the surfaces around it, where documents and configuration are
//! read.
//!
//! ## Error Types
//! - `UnknownHandSize` - A hand-size label outside `XXS..XXL`
//! - `InvalidNote` - A note record that cannot be normalized (missing pitch, wrong field type)
//! - `InvalidDocument` - A Piano Vision document without a usable `tracksV2` object
//! - `Json` / `Config` / `Io` - Wrapped serialization and file errors
//!
//! ## Usage
//! ```rust
//! use fingering::{FingeringError, HandSize};
//!
//! match "XXXL".parse::<HandSize>() {
//!     Ok(size) => println!("factor {}", size.factor()),
//!     Err(FingeringError::UnknownHandSize(label)) => eprintln!("no such hand size: {}", label),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FingeringError {
    /// Hand-size label not in the fixed table.
    ///
    /// # Example
    /// ```
    /// # use fingering::FingeringError;
    /// let err = FingeringError::UnknownHandSize("XXXL".to_string());
    /// assert_eq!(err.to_string(), "Unknown hand size 'XXXL' (expected one of XXS, XS, S, M, L, XL, XXL)");
    /// ```
    #[error("Unknown hand size '{0}' (expected one of XXS, XS, S, M, L, XL, XXL)")]
    UnknownHandSize(String),

    /// A note record that could not be normalized.
    ///
    /// `index` is the position of the record in the flattened hand sequence.
    ///
    /// # Example
    /// ```
    /// # use fingering::FingeringError;
    /// let err = FingeringError::InvalidNote {
    ///     hand: "right".to_string(),
    ///     index: 3,
    ///     message: "missing field `note`".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid right hand note #3: missing field `note`");
    /// ```
    #[error("Invalid {hand} hand note #{index}: {message}")]
    InvalidNote {
        hand: String,
        index: usize,
        message: String,
    },

    /// The document has no usable `tracksV2` object.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid YAML configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
