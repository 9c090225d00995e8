//! Shade-key tables.
//!
//! The two fixed, ordered key sequences a swatch can be built over. Every
//! generator emits exactly one of these sequences — no other keys, no
//! omissions, no duplicates.

use serde::{Deserialize, Serialize};

/// A named shade level within a swatch (50 = lightest, 900 = darkest).
pub type ShadeKey = u16;

/// Shade keys of a primary (ten-entry) swatch, ascending.
pub const PRIMARY_KEYS: [ShadeKey; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Shade keys of an accent (five-entry) swatch, ascending.
pub const ACCENT_KEYS: [ShadeKey; 5] = [50, 100, 200, 400, 700];

/// Which of the two fixed swatch shapes is being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwatchKind {
    Primary,
    Accent,
}

impl SwatchKind {
    /// The ordered key sequence for this kind.
    pub const fn keys(self) -> &'static [ShadeKey] {
        match self {
            SwatchKind::Primary => &PRIMARY_KEYS,
            SwatchKind::Accent => &ACCENT_KEYS,
        }
    }

    /// Number of shades in this kind.
    pub const fn count(self) -> usize {
        self.keys().len()
    }

    /// The key conventionally holding the base colour itself.
    pub const fn mid_key(self) -> ShadeKey {
        match self {
            SwatchKind::Primary => 500,
            SwatchKind::Accent => 200,
        }
    }
}
