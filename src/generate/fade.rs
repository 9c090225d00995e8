//! Shade-by-opacity generation: a linear opacity ramp across key position.

use crate::types::{Colour, ShadeMap, SwatchKind};

/// Derive a shade map by ramping opacity linearly over key position.
///
/// The first key gets half the second key's weight; after that the weight
/// is the key's position. The ramp divisor is the shade count for a primary
/// swatch and count−1 for an accent swatch, so only the final key reaches
/// (accent) or approaches (primary) the base colour's own opacity. The
/// middle key does not equal the base colour in this mode; callers that
/// need exact preservation at a known key use the blend mode instead.
///
/// `add` pre-mixes the base colour toward white before ramping; fractional
/// offsets truncate toward zero.
pub fn generate(primary: Colour, add: Option<f64>, kind: SwatchKind) -> ShadeMap {
    let add = add.map_or(0, |a| a.trunc() as i32);
    let divisor = match kind {
        SwatchKind::Primary => kind.count(),
        SwatchKind::Accent => kind.count() - 1,
    };
    let delta = 1.0 / divisor as f32;

    let tinted = primary.tint(add);
    let opacity = primary.opacity();

    let mut map = ShadeMap::with_capacity(kind.count());
    for (idx, &key) in kind.keys().iter().enumerate() {
        let weight = if idx == 0 { 0.5 } else { idx as f32 };
        map.insert(key, tinted.with_opacity(opacity * delta * weight));
    }
    map
}
