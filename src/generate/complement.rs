//! Shade-by-complement generation: evenly spaced hues remapped to keys.

use crate::error::{Result, SwatchError};
use crate::types::{Colour, ShadeMap, SwatchKind};

/// Hue-wheel index feeding each primary-variant key, in key order.
///
/// The source colour (index 0) lands on the middle key; the wheel's far
/// side fills the light half.
const PRIMARY_SOURCES: [usize; 10] = [5, 6, 7, 8, 9, 0, 1, 2, 3, 4];

/// Hue-wheel index feeding each accent-variant key, in key order.
const ACCENT_SOURCES: [usize; 5] = [3, 4, 0, 1, 2];

/// Derive a shade map by remapping evenly spaced complementary hues onto
/// the key sequence. Pure permutation, no interpolation.
///
/// Fails if hue generation does not yield exactly one colour per key.
pub fn generate(primary: Colour, kind: SwatchKind) -> Result<ShadeMap> {
    let count = kind.count();
    let hues = primary.complementary(count);
    if hues.len() != count {
        return Err(SwatchError::Generate {
            message: format!(
                "Complementary hue generation returned {} colours, expected {}",
                hues.len(),
                count
            ),
            help: None,
        });
    }

    let sources: &[usize] = match kind {
        SwatchKind::Primary => &PRIMARY_SOURCES,
        SwatchKind::Accent => &ACCENT_SOURCES,
    };

    let mut map = ShadeMap::with_capacity(count);
    for (&key, &source) in kind.keys().iter().zip(sources) {
        map.insert(key, hues[source]);
    }
    Ok(map)
}
