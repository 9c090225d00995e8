//! PNG strip output for generated swatches.
//!
//! Renders a swatch as a horizontal strip of square cells, lightest shade
//! first.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{Result, SwatchError};
use crate::types::Swatch;

/// Write a swatch to a PNG file, one `cell`-pixel square per shade.
pub fn write_strip(swatch: &Swatch, path: &Path, cell: u32) -> Result<()> {
    let cell = cell.max(1); // Minimum cell size of 1

    let width = swatch.len() as u32 * cell;
    let mut img: RgbaImage = ImageBuffer::new(width, cell);

    for (i, (_, colour)) in swatch.shades().iter().enumerate() {
        let rgba = Rgba(colour.to_rgba());
        let x0 = i as u32 * cell;

        for sy in 0..cell {
            for sx in 0..cell {
                img.put_pixel(x0 + sx, sy, rgba);
            }
        }
    }

    img.save(path).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
