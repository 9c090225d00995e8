//! Shade-by-mix generation: linear tint steps across the key sequence.

use crate::types::{Colour, ShadeMap, SwatchKind};

/// Derive a shade map by stepping a tint amount linearly across the keys.
///
/// Without a range the steps run from +100 at the lightest key down through
/// zero at the middle key to −80 at the darkest. A caller-supplied `range`
/// gives the full width of the stepped interval; its halves are truncated
/// toward zero before stepping, and each step is itself truncated.
///
/// A zero or negative range is not rejected; it collapses the interval and
/// every entry degenerates toward the base colour.
pub fn generate(primary: Colour, range: Option<f64>, kind: SwatchKind) -> ShadeMap {
    let count = kind.count();
    let (min, max) = match range {
        None => (-100.0, 100.0),
        Some(range) => {
            let half = (range / 2.0).trunc();
            (-half, half)
        }
    };
    let delta = (max - min) / count as f64;

    let mut map = ShadeMap::with_capacity(count);
    for (i, &key) in kind.keys().iter().enumerate() {
        let step = (max - i as f64 * delta).trunc() as i32;
        map.insert(key, primary.tint(step));
    }
    map
}
