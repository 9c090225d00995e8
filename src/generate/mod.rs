//! Swatch generation: the four shade strategies and their dispatcher.
//!
//! Each strategy maps one base colour onto the fixed key sequence of a
//! primary or accent swatch:
//! - `shade` - linear tint steps toward white/black
//! - `desaturate` - fixed-weight compositing over white/black
//! - `fade` - linear opacity ramp
//! - `complements` - hue-wheel permutation
//!
//! Generation is pure: identical inputs always produce an identical swatch.

mod blend;
mod complement;
mod fade;
mod shade;

use crate::error::Result;
use crate::types::{Colour, Swatch, SwatchKind, SwatchMode};

/// Build a swatch from a base colour under the given mode.
///
/// The only fallible path is `complements`, which propagates a hue-count
/// contract violation; the other modes are total over their inputs.
pub fn build_swatch(colour: Colour, mode: SwatchMode, kind: SwatchKind) -> Result<Swatch> {
    let shades = match mode {
        SwatchMode::Shade { range } => shade::generate(colour, range, kind),
        SwatchMode::Desaturate { strength } => blend::generate(colour, strength, kind),
        SwatchMode::Fade { add } => fade::generate(colour, add, kind),
        SwatchMode::Complements => complement::generate(colour, kind)?,
    };
    Ok(Swatch::new(colour, kind, shades))
}

/// Build the ten-entry primary swatch.
pub fn primary_swatch(colour: Colour, mode: SwatchMode) -> Result<Swatch> {
    build_swatch(colour, mode, SwatchKind::Primary)
}

/// Build the five-entry accent swatch.
pub fn accent_swatch(colour: Colour, mode: SwatchMode) -> Result<Swatch> {
    build_swatch(colour, mode, SwatchKind::Accent)
}
