//! Hand type definitions
//!
//! Fingers, hand sides and the fixed hand-size table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FingeringError;

/// Finger number: 1 (thumb) to 5 (little finger), 0 when unassigned.
pub type Finger = u8;

/// All fingers in enumeration order. Search ties are broken by this order.
pub const FINGERS: [Finger; 5] = [1, 2, 3, 4, 5];

/// Which hand a sequence belongs to.
///
/// The search is side-agnostic; only the final mirroring step looks at the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Key used for this hand in Piano Vision documents.
    pub fn key(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Hand-size label.
///
/// Each label maps to a fixed multiplier on the finger rest geometry.
///
/// | Label | Factor |
/// |-------|--------|
/// | XXS   | 0.80   |
/// | XS    | 0.85   |
/// | S     | 0.90   |
/// | M     | 1.00   |
/// | L     | 1.05   |
/// | XL    | 1.10   |
/// | XXL   | 1.15   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HandSize {
    Xxs,
    Xs,
    S,
    #[default]
    M,
    L,
    Xl,
    Xxl,
}

impl HandSize {
    pub const ALL: [HandSize; 7] = [
        HandSize::Xxs,
        HandSize::Xs,
        HandSize::S,
        HandSize::M,
        HandSize::L,
        HandSize::Xl,
        HandSize::Xxl,
    ];

    /// Scale factor applied to the finger rest offsets.
    pub fn factor(self) -> f64 {
        match self {
            HandSize::Xxs => 0.80,
            HandSize::Xs => 0.85,
            HandSize::S => 0.90,
            HandSize::M => 1.00,
            HandSize::L => 1.05,
            HandSize::Xl => 1.10,
            HandSize::Xxl => 1.15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HandSize::Xxs => "XXS",
            HandSize::Xs => "XS",
            HandSize::S => "S",
            HandSize::M => "M",
            HandSize::L => "L",
            HandSize::Xl => "XL",
            HandSize::Xxl => "XXL",
        }
    }

    /// Look up a label such as "M" or "xxl". Returns `None` for labels outside the table.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|size| size.label() == wanted)
    }
}

impl FromStr for HandSize {
    type Err = FingeringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| FingeringError::UnknownHandSize(s.trim().to_string()))
    }
}

impl fmt::Display for HandSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
