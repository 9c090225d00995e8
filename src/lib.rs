//! swatch - tonal colour swatch generation
//!
//! A library and CLI for deriving a fixed, ordered set of shade levels
//! from a single base colour, for theming layers that expect named shades
//! (50 = lightest through 900 = darkest). Four strategies are available:
//! tint stepping, background compositing, opacity ramping, and
//! complementary hue rotation.

pub mod cli;
pub mod error;
pub mod generate;
pub mod output;
pub mod render;
pub mod theme;
pub mod types;

pub use error::{Result, SwatchError};
pub use generate::{accent_swatch, build_swatch, primary_swatch};
pub use render::write_strip;
pub use theme::{Theme, ThemeEntry};
pub use types::{
    Colour, ShadeKey, ShadeMap, Swatch, SwatchKind, SwatchMode, ACCENT_KEYS, PRIMARY_KEYS,
};
