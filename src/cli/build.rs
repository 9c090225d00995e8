//! Build command implementation.
//!
//! Generates every swatch in a theme definition and writes a JSON palette
//! document (plus optional PNG strips) to an output directory.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};
use crate::render::write_strip;
use crate::theme::{Theme, THEME_FILENAME};
use crate::types::Swatch;

/// Build every swatch in a theme definition file
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Theme definition file
    #[arg(default_value = THEME_FILENAME)]
    pub theme: PathBuf,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Also write a PNG strip per swatch
    #[arg(long)]
    pub png: bool,

    /// Cell size in pixels for PNG strips
    #[arg(long, default_value = "32")]
    pub cell: u32,
}

/// The JSON palette document written for a theme.
#[derive(Serialize)]
struct ThemeDocument<'a> {
    name: &'a str,
    swatches: Vec<NamedSwatch<'a>>,
}

#[derive(Serialize)]
struct NamedSwatch<'a> {
    name: &'a str,
    #[serde(flatten)]
    swatch: &'a Swatch,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let theme = Theme::load(&args.theme)?;

    // Create output directory if needed
    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| SwatchError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    printer.status(
        "Building",
        &format!("{} from {}", theme.name, display_path(&args.theme)),
    );

    let mut generated: Vec<(String, Swatch)> = Vec::with_capacity(theme.swatches.len());
    for entry in &theme.swatches {
        let swatch = entry.generate()?;
        printer.status(
            "Generated",
            &format!("{} ({}, {})", entry.name, entry.colour, entry.mode),
        );

        if args.png {
            let png_path = args.output.join(format!("{}.png", entry.name));
            write_strip(&swatch, &png_path, args.cell)?;
        }

        generated.push((entry.name.clone(), swatch));
    }

    let document = ThemeDocument {
        name: &theme.name,
        swatches: generated
            .iter()
            .map(|(name, swatch)| NamedSwatch { name, swatch })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&document).map_err(|e| SwatchError::Generate {
        message: format!("Failed to encode palette document: {}", e),
        help: None,
    })?;

    let json_path = args.output.join(format!("{}.json", theme.name));
    fs::write(&json_path, json + "\n").map_err(|e| SwatchError::Io {
        path: json_path.clone(),
        message: format!("Failed to write palette document: {}", e),
    })?;

    printer.success(
        "Created",
        &format!(
            "{} ({})",
            display_path(&json_path),
            plural(generated.len(), "swatch", "swatches")
        ),
    );

    Ok(())
}
