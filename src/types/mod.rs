//! Core domain types for swatch.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values and channel-level primitives
//! - `ShadeMap` - the ordered shade-key to colour mapping
//! - `Swatch` - the generated palette container
//! - `SwatchMode` - the four generation strategies

mod colour;
mod keys;
mod map;
mod mode;
mod swatch;

pub use colour::Colour;
pub use keys::{ShadeKey, SwatchKind, ACCENT_KEYS, PRIMARY_KEYS};
pub use map::ShadeMap;
pub use mode::SwatchMode;
pub use swatch::Swatch;
