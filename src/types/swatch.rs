//! Swatch container handed to the theming layer.

use serde::Serialize;

use super::{Colour, ShadeKey, ShadeMap, SwatchKind};

/// A generated swatch: the base colour's identity plus its shade map.
///
/// The identity is the raw 32-bit ARGB encoding of the base colour, not any
/// computed shade — a theming layer can recover the exact input from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    base: u32,
    kind: SwatchKind,
    shades: ShadeMap,
}

impl Swatch {
    pub(crate) fn new(base: Colour, kind: SwatchKind, shades: ShadeMap) -> Self {
        Self {
            base: base.to_argb(),
            kind,
            shades,
        }
    }

    /// Raw ARGB encoding of the base colour.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// The base colour the swatch was derived from.
    pub fn base_colour(&self) -> Colour {
        Colour::from_argb(self.base)
    }

    /// Which of the two swatch shapes this is.
    pub fn kind(&self) -> SwatchKind {
        self.kind
    }

    /// Look up a shade by key.
    pub fn get(&self, key: ShadeKey) -> Option<Colour> {
        self.shades.get(key)
    }

    /// The ordered shade map.
    pub fn shades(&self) -> &ShadeMap {
        &self.shades
    }

    /// Number of shades.
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Check if the swatch has no shades.
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Swatch {
        let mut shades = ShadeMap::new();
        shades.insert(50, Colour::WHITE);
        shades.insert(100, Colour::BLACK);
        Swatch::new(Colour::rgb(0x1A, 0x6F, 0xEB), SwatchKind::Accent, shades)
    }

    #[test]
    fn test_base_identity() {
        let swatch = sample();
        assert_eq!(swatch.base(), 0xFF1A6FEB);
        assert_eq!(swatch.base_colour(), Colour::rgb(0x1A, 0x6F, 0xEB));
    }

    #[test]
    fn test_get() {
        let swatch = sample();
        assert_eq!(swatch.get(50), Some(Colour::WHITE));
        assert_eq!(swatch.get(900), None);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r##"{"base":4279922667,"kind":"accent","shades":{"50":"#FFFFFF","100":"#000000"}}"##
        );
    }
}
