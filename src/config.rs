//! # Configuration
//!
//! Search settings: hand size and lookahead depth.
//!
//! Settings can be written as YAML with kebab-case keys. Missing keys take the defaults
//! (`M`, depth 9):
//!
//! ```rust
//! use fingering::{FingeringConfig, HandSize};
//!
//! let config = FingeringConfig::from_yaml("hand-size: L\ndepth: 5\n")?;
//! assert_eq!(config.hand_size, HandSize::L);
//! assert_eq!(config.depth, 5);
//! # Ok::<(), fingering::FingeringError>(())
//! ```
//!
//! The depth is stored as given and clamped into `3..=9` when a [`Hand`] is built from it.

use serde::Deserialize;

use crate::error::FingeringError;
use crate::hand::{Hand, HandSize, Side};
use crate::search::MAX_DEPTH;

/// Settings shared by both hands of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingeringConfig {
    pub hand_size: HandSize,
    pub depth: usize,
}

impl Default for FingeringConfig {
    fn default() -> Self {
        Self {
            hand_size: HandSize::default(),
            depth: MAX_DEPTH,
        }
    }
}

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub hand_size: Option<String>,
    pub depth: Option<usize>,
}

impl FingeringConfig {
    /// Parse YAML settings. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, FingeringError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| FingeringError::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, FingeringError> {
        let defaults = Self::default();
        let hand_size = match raw.hand_size {
            Some(label) => label.parse::<HandSize>()?,
            None => defaults.hand_size,
        };
        Ok(Self {
            hand_size,
            depth: raw.depth.unwrap_or(defaults.depth),
        })
    }

    /// Apply explicitly given settings on top of these, e.g. command-line flags over a file.
    pub fn with_overrides(self, hand_size: Option<HandSize>, depth: Option<usize>) -> Self {
        Self {
            hand_size: hand_size.unwrap_or(self.hand_size),
            depth: depth.unwrap_or(self.depth),
        }
    }

    /// Fresh hand state for one side.
    pub fn hand(&self, side: Side) -> Hand {
        Hand::new(side, self.hand_size).with_depth(self.depth)
    }
}
