//! Generate command implementation.
//!
//! Derives one swatch from a base colour given on the command line and
//! prints it as aligned `key hex` lines, JSON, or a PNG strip.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SwatchError};
use crate::generate::build_swatch;
use crate::output::{display_path, Printer};
use crate::render::write_strip;
use crate::types::{Colour, Swatch, SwatchKind, SwatchMode};

/// Derive a swatch from a base colour
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Base colour as a hex string (e.g. "#1A6FEB")
    #[arg(required = true)]
    pub colour: String,

    /// Generation mode
    #[arg(long, default_value = "shade", value_parser = ["shade", "desaturate", "fade", "complements"])]
    pub mode: String,

    /// Mode tuning factor: tint range width for shade, blend strength for
    /// desaturate, white-mix offset for fade
    #[arg(long)]
    pub factor: Option<f64>,

    /// Derive the five-entry accent swatch instead of the primary
    #[arg(long)]
    pub accent: bool,

    /// Print the swatch as JSON instead of aligned text
    #[arg(long)]
    pub json: bool,

    /// Write the swatch to a PNG strip at this path
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Cell size in pixels for PNG output
    #[arg(long, default_value = "32")]
    pub cell: u32,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let colour = Colour::from_hex(&args.colour)?;
    let mode = SwatchMode::parse(&args.mode, args.factor)?;
    let kind = if args.accent {
        SwatchKind::Accent
    } else {
        SwatchKind::Primary
    };

    let swatch = build_swatch(colour, mode, kind)?;

    printer.status(
        "Generated",
        &format!("{} shades from {} ({})", swatch.len(), colour, mode),
    );

    if args.json {
        println!("{}", to_json(&swatch)?);
    } else {
        for (key, shade) in swatch.shades().iter() {
            println!("{:>4} {} {}", key, printer.cell(shade), shade);
        }
    }

    if let Some(path) = &args.png {
        write_strip(&swatch, path, args.cell)?;
        printer.success("Created", &display_path(path));
    }

    Ok(())
}

fn to_json(swatch: &Swatch) -> Result<String> {
    serde_json::to_string_pretty(swatch).map_err(|e| SwatchError::Generate {
        message: format!("Failed to encode swatch: {}", e),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn args(colour: &str) -> GenerateArgs {
        GenerateArgs {
            colour: colour.to_string(),
            mode: "shade".to_string(),
            factor: None,
            accent: false,
            json: false,
            png: None,
            cell: 32,
        }
    }

    #[test]
    fn test_run_simple() {
        run(args("#1A6FEB"), &Printer::new()).unwrap();
    }

    #[test]
    fn test_run_invalid_colour() {
        assert!(run(args("#XYZ"), &Printer::new()).is_err());
    }

    #[test]
    fn test_run_writes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut args = args("#1A6FEB");
        args.accent = true;
        args.png = Some(path.clone());
        args.cell = 4;

        run(args, &Printer::new()).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 20);
        assert_eq!(img.height(), 4);
    }
}
