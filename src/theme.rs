//! Theme definition (swatch.yaml) parsing.
//!
//! A theme file names a set of base colours and how to derive a swatch
//! from each one. The `build` command turns it into a palette document.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::generate::build_swatch;
use crate::types::{Colour, Swatch, SwatchKind, SwatchMode};

/// Default theme definition filename.
pub const THEME_FILENAME: &str = "swatch.yaml";

/// A theme definition loaded from swatch.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Theme name, used for the output document filename.
    pub name: String,

    /// Swatch entries to generate.
    pub swatches: Vec<ThemeEntry>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "theme".to_string(),
            swatches: vec![],
        }
    }
}

/// One named swatch in a theme definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeEntry {
    /// Entry name, used for JSON keys and PNG filenames.
    pub name: String,

    /// Base colour as a hex string.
    pub colour: Colour,

    /// Generation mode name.
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Mode tuning factor (meaning depends on the mode).
    #[serde(default)]
    pub factor: Option<f64>,

    /// Generate the five-entry accent swatch instead of the primary.
    #[serde(default)]
    pub accent: bool,
}

fn default_mode() -> String {
    "shade".to_string()
}

impl Theme {
    /// Load a theme from a swatch.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read theme: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a theme from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid theme: {}", e),
            help: Some("Check swatch.yaml syntax".to_string()),
        })
    }
}

impl ThemeEntry {
    /// Which swatch shape this entry requests.
    pub fn kind(&self) -> SwatchKind {
        if self.accent {
            SwatchKind::Accent
        } else {
            SwatchKind::Primary
        }
    }

    /// Resolve the mode name and factor into a concrete mode.
    pub fn swatch_mode(&self) -> Result<SwatchMode> {
        SwatchMode::parse(&self.mode, self.factor)
    }

    /// Generate this entry's swatch.
    pub fn generate(&self) -> Result<Swatch> {
        build_swatch(self.colour, self.swatch_mode()?, self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
name: ocean
swatches:
  - name: primary
    colour: "#1A6FEB"
  - name: accent
    colour: "#EB6F1A"
    mode: desaturate
    factor: 0.8
    accent: true
"##;

    #[test]
    fn test_parse() {
        let theme = Theme::parse(SAMPLE).unwrap();
        assert_eq!(theme.name, "ocean");
        assert_eq!(theme.swatches.len(), 2);

        let first = &theme.swatches[0];
        assert_eq!(first.name, "primary");
        assert_eq!(first.colour, Colour::rgb(0x1A, 0x6F, 0xEB));
        assert_eq!(first.mode, "shade");
        assert_eq!(first.factor, None);
        assert!(!first.accent);

        let second = &theme.swatches[1];
        assert_eq!(second.mode, "desaturate");
        assert_eq!(second.factor, Some(0.8));
        assert!(second.accent);
    }

    #[test]
    fn test_parse_empty() {
        let theme = Theme::parse("{}").unwrap();
        assert_eq!(theme.name, "theme");
        assert!(theme.swatches.is_empty());
    }

    #[test]
    fn test_parse_invalid_colour() {
        let result = Theme::parse("swatches:\n  - name: x\n    colour: \"#ZZZ\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_kind() {
        let theme = Theme::parse(SAMPLE).unwrap();
        assert_eq!(theme.swatches[0].kind(), SwatchKind::Primary);
        assert_eq!(theme.swatches[1].kind(), SwatchKind::Accent);
    }

    #[test]
    fn test_entry_generate() {
        let theme = Theme::parse(SAMPLE).unwrap();
        let swatch = theme.swatches[0].generate().unwrap();
        assert_eq!(swatch.len(), 10);
        assert_eq!(swatch.get(500), Some(Colour::rgb(0x1A, 0x6F, 0xEB)));

        let swatch = theme.swatches[1].generate().unwrap();
        assert_eq!(swatch.len(), 5);
    }

    #[test]
    fn test_entry_unknown_mode() {
        let theme = Theme::parse("swatches:\n  - name: x\n    colour: \"#FFF\"\n    mode: sepia\n")
            .unwrap();
        assert!(theme.swatches[0].generate().is_err());
    }
}
