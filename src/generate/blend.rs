//! Shade-by-blend generation: fixed-weight compositing over white or black.

use crate::types::{Colour, ShadeKey, ShadeMap, SwatchKind};

/// Per-key blend row: composite the primary at `weight` of the resolved
/// alpha over the background; `None` keeps the primary itself.
type BlendRow = (ShadeKey, Option<(Colour, f32)>);

const PRIMARY_BLENDS: [BlendRow; 10] = [
    (50, Some((Colour::WHITE, 0.15))),
    (100, Some((Colour::WHITE, 0.25))),
    (200, Some((Colour::WHITE, 0.40))),
    (300, Some((Colour::WHITE, 0.60))),
    (400, Some((Colour::WHITE, 0.80))),
    (500, None),
    (600, Some((Colour::BLACK, 0.70))),
    (700, Some((Colour::BLACK, 0.50))),
    (800, Some((Colour::BLACK, 0.30))),
    (900, Some((Colour::BLACK, 0.15))),
];

const ACCENT_BLENDS: [BlendRow; 5] = [
    (50, Some((Colour::WHITE, 0.40))),
    (100, Some((Colour::WHITE, 0.75))),
    (200, None),
    (400, Some((Colour::BLACK, 0.60))),
    (700, Some((Colour::BLACK, 0.20))),
];

/// Convert a blend strength into a concrete alpha level.
///
/// Strength is a fraction of full opacity; out-of-range values clamp.
fn strength_to_alpha(strength: f64) -> u8 {
    (strength.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Derive a shade map by compositing the primary over white (light shades)
/// or black (dark shades) at fixed per-key weights.
///
/// Every entry shares one alpha level: the strength-derived alpha when a
/// strength is given, the primary's own alpha otherwise. The middle key
/// (500 primary / 200 accent) is the primary itself at that alpha, with no
/// compositing.
pub fn generate(primary: Colour, strength: Option<f64>, kind: SwatchKind) -> ShadeMap {
    let alpha = match strength {
        Some(strength) => strength_to_alpha(strength),
        None => primary.a,
    };

    let rows: &[BlendRow] = match kind {
        SwatchKind::Primary => &PRIMARY_BLENDS,
        SwatchKind::Accent => &ACCENT_BLENDS,
    };

    let mut map = ShadeMap::with_capacity(rows.len());
    for &(key, blend) in rows {
        let colour = match blend {
            None => primary.with_alpha(alpha),
            Some((background, weight)) => primary
                .with_alpha((weight * f32::from(alpha)).round() as u8)
                .composite_over(background)
                .with_alpha(alpha),
        };
        map.insert(key, colour);
    }
    map
}
