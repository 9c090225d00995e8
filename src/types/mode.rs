//! Swatch generation mode selection.

use std::fmt;

use crate::error::{Result, SwatchError};

/// Strategy for deriving a swatch from a base colour.
///
/// Each variant carries its own tuning value, so a blend strength can never
/// be mistaken for a tint range or a white-mix offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwatchMode {
    /// Linear tint steps toward white/black across the key sequence.
    ///
    /// `range` is the full width of the stepped interval; omitted, the
    /// steps run from +100 down to −80.
    Shade { range: Option<f64> },

    /// Fixed per-key compositing over white (light shades) or black (dark
    /// shades), every entry normalized to one alpha level.
    ///
    /// `strength` is the target opacity as a fraction; omitted, the base
    /// colour's own alpha is used.
    Desaturate { strength: Option<f64> },

    /// Linear opacity ramp across key position.
    ///
    /// `add` is a white-mix offset applied to the base colour before
    /// ramping; fractional values truncate toward zero.
    Fade { add: Option<f64> },

    /// Complementary hues remapped across the keys. Takes no tuning.
    Complements,
}

impl SwatchMode {
    /// The textual mode names accepted by [`SwatchMode::parse`].
    pub const NAMES: [&'static str; 4] = ["shade", "desaturate", "fade", "complements"];

    /// Build a mode from its textual name plus the loose tuning factor
    /// used at the CLI and theme-file boundary.
    ///
    /// `complements` ignores the factor entirely.
    pub fn parse(name: &str, factor: Option<f64>) -> Result<Self> {
        match name {
            "shade" => Ok(Self::Shade { range: factor }),
            "desaturate" => Ok(Self::Desaturate { strength: factor }),
            "fade" => Ok(Self::Fade { add: factor }),
            "complements" => Ok(Self::Complements),
            other => Err(SwatchError::Parse {
                message: format!("Unknown swatch mode: {}", other),
                help: Some("Available modes: shade, desaturate, fade, complements".to_string()),
            }),
        }
    }

    /// The textual name of this mode.
    pub const fn name(&self) -> &'static str {
        match self {
            SwatchMode::Shade { .. } => "shade",
            SwatchMode::Desaturate { .. } => "desaturate",
            SwatchMode::Fade { .. } => "fade",
            SwatchMode::Complements => "complements",
        }
    }
}

impl fmt::Display for SwatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
