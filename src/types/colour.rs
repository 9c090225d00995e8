//! Colour type, parsing, and the channel-level primitives the swatch
//! generators are built on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SwatchError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_digit(hex.chars().nth(0).unwrap())?;
                let g = parse_hex_digit(hex.chars().nth(1).unwrap())?;
                let b = parse_hex_digit(hex.chars().nth(2).unwrap())?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            4 => {
                // #RGBA -> #RRGGBBAA
                let r = parse_hex_digit(hex.chars().nth(0).unwrap())?;
                let g = parse_hex_digit(hex.chars().nth(1).unwrap())?;
                let b = parse_hex_digit(hex.chars().nth(2).unwrap())?;
                let a = parse_hex_digit(hex.chars().nth(3).unwrap())?;
                Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
            }
            6 => {
                // #RRGGBB
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                // #RRGGBBAA
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(SwatchError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Pack into a 32-bit ARGB value.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack from a 32-bit ARGB value.
    pub const fn from_argb(value: u32) -> Self {
        Self::new(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
            (value >> 24) as u8,
        )
    }

    /// Replace the alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Replace the alpha channel with a fraction of full opacity.
    pub fn with_opacity(self, fraction: f32) -> Self {
        self.with_alpha((fraction.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// The alpha channel as a fraction of full opacity.
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Mix with another colour by a factor (0.0 = this colour, 1.0 = other).
    ///
    /// Linear interpolation over all four channels.
    pub fn mix(self, other: Colour, factor: f32) -> Colour {
        let factor = factor.clamp(0.0, 1.0);
        let inv = 1.0 - factor;

        Colour::new(
            (f32::from(self.r) * inv + f32::from(other.r) * factor).round() as u8,
            (f32::from(self.g) * inv + f32::from(other.g) * factor).round() as u8,
            (f32::from(self.b) * inv + f32::from(other.b) * factor).round() as u8,
            (f32::from(self.a) * inv + f32::from(other.a) * factor).round() as u8,
        )
    }

    /// Mix toward white by `step` percent; negative steps mix toward black.
    ///
    /// ±100 reaches pure white/black; steps beyond that clamp.
    pub fn tint(self, step: i32) -> Colour {
        if step >= 0 {
            self.mix(Colour::WHITE, step as f32 / 100.0)
        } else {
            self.mix(Colour::BLACK, -(step as f32) / 100.0)
        }
    }

    /// Source-over alpha compositing of this colour on a background.
    pub fn composite_over(self, background: Colour) -> Colour {
        let sa = self.opacity();
        let da = background.opacity();
        let oa = sa + da * (1.0 - sa);

        if oa <= 0.0 {
            return Colour::TRANSPARENT;
        }

        let channel = |s: u8, d: u8| {
            ((f32::from(s) * sa + f32::from(d) * da * (1.0 - sa)) / oa).round() as u8
        };

        Colour::new(
            channel(self.r, background.r),
            channel(self.g, background.g),
            channel(self.b, background.b),
            (oa * 255.0).round() as u8,
        )
    }

    /// Generate `n` evenly spaced hues around the colour wheel.
    ///
    /// Index 0 is this colour itself; the rest are hue rotations of it in
    /// steps of 360°/n, preserving the alpha channel.
    pub fn complementary(self, n: usize) -> Vec<Colour> {
        use palette::{Hsl, IntoColor, ShiftHue, Srgb};

        if n == 0 {
            return Vec::new();
        }

        let rgb: Srgb<f32> = Srgb::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        );
        let hsl: Hsl = rgb.into_color();
        let step = 360.0 / n as f32;

        (0..n)
            .map(|i| {
                if i == 0 {
                    return self;
                }
                let rotated: Srgb<f32> = hsl.shift_hue(step * i as f32).into_color();
                Colour::new(
                    (rotated.red * 255.0).round() as u8,
                    (rotated.green * 255.0).round() as u8,
                    (rotated.blue * 255.0).round() as u8,
                    self.a,
                )
            })
            .collect()
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| SwatchError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SwatchError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a6feb").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x6f, 0xeb));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#F00").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Colour::from_hex("#FF000080").unwrap();
        assert_eq!(c, Colour::new(255, 0, 0, 128));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Colour::from_hex("FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_argb_round_trip() {
        let c = Colour::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_argb(), 0x78123456);
        assert_eq!(Colour::from_argb(c.to_argb()), c);
    }

    #[test]
    fn test_with_opacity() {
        let c = Colour::rgb(10, 20, 30).with_opacity(0.5);
        assert_eq!(c.a, 128);
        assert_eq!((c.r, c.g, c.b), (10, 20, 30));

        // Out-of-range fractions clamp
        assert_eq!(Colour::BLACK.with_opacity(2.0).a, 255);
        assert_eq!(Colour::BLACK.with_opacity(-1.0).a, 0);
    }

    #[test]
    fn test_mix_midpoint() {
        let grey = Colour::BLACK.mix(Colour::WHITE, 0.5);
        assert_eq!(grey, Colour::rgb(128, 128, 128));
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Colour::rgb(10, 20, 30);
        let b = Colour::rgb(200, 100, 50);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }

    #[test]
    fn test_tint_toward_white() {
        let c = Colour::rgb(100, 150, 200);
        assert_eq!(c.tint(100), Colour::WHITE);
        assert_eq!(c.tint(0), c);
        // 20% toward white: channel + (255 - channel) * 0.2
        assert_eq!(c.tint(20), Colour::rgb(131, 171, 211));
    }

    #[test]
    fn test_tint_toward_black() {
        let c = Colour::rgb(100, 150, 200);
        assert_eq!(c.tint(-100), Colour::BLACK);
        assert_eq!(c.tint(-80), Colour::rgb(20, 30, 40));
    }

    #[test]
    fn test_tint_clamps() {
        let c = Colour::rgb(100, 150, 200);
        assert_eq!(c.tint(250), Colour::WHITE);
        assert_eq!(c.tint(-250), Colour::BLACK);
    }

    #[test]
    fn test_composite_over_opaque_background() {
        let fg = Colour::new(255, 0, 0, 128);
        let out = fg.composite_over(Colour::WHITE);
        assert_eq!(out.a, 255);
        assert_eq!(out.r, 255);
        // 0 * (128/255) + 255 * (1 - 128/255) ≈ 127
        assert_eq!(out.g, 127);
        assert_eq!(out.b, 127);
    }

    #[test]
    fn test_composite_over_transparent_background() {
        let fg = Colour::new(255, 0, 0, 128);
        assert_eq!(fg.composite_over(Colour::TRANSPARENT), fg);
    }

    #[test]
    fn test_composite_fully_transparent() {
        let fg = Colour::new(10, 20, 30, 0);
        assert_eq!(fg.composite_over(Colour::TRANSPARENT), Colour::TRANSPARENT);
    }

    #[test]
    fn test_complementary_first_is_self() {
        let c = Colour::rgb(100, 150, 200);
        let hues = c.complementary(10);
        assert_eq!(hues.len(), 10);
        assert_eq!(hues[0], c);
    }

    #[test]
    fn test_complementary_rotates_hue() {
        let hues = Colour::rgb(255, 0, 0).complementary(3);
        // Red rotated by 120° and 240° lands near pure green and blue
        assert!(hues[1].g > 250 && hues[1].r < 5 && hues[1].b < 5);
        assert!(hues[2].b > 250 && hues[2].r < 5 && hues[2].g < 5);
    }

    #[test]
    fn test_complementary_preserves_alpha() {
        let hues = Colour::new(255, 0, 0, 64).complementary(5);
        assert!(hues.iter().all(|h| h.a == 64));
    }

    #[test]
    fn test_complementary_zero() {
        assert!(Colour::WHITE.complementary(0).is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let c = Colour::new(0x1A, 0x6F, 0xEB, 0x80);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#1A6FEB80\"");
        let back: Colour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
