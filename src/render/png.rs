//! PNG output for synthesized images.
//!
//! Converts a pixel grid to an 8-bit RGB PNG. Channels outside 0..=255 are
//! clamped here, not during synthesis.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{ArtError, Result};
use crate::types::PixelGrid;

/// Convert a pixel grid to an RGB image buffer.
pub fn to_rgb_image(grid: &PixelGrid) -> RgbImage {
    let mut img: RgbImage = ImageBuffer::new(grid.width(), grid.height());

    for (y, row) in grid.rows().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgb(colour.to_rgb8()));
        }
    }

    img
}

/// Write a pixel grid to a PNG file.
///
/// Encoder failures are returned with the underlying `image` error as the
/// source.
pub fn write_png(grid: &PixelGrid, path: &Path) -> Result<()> {
    let img = to_rgb_image(grid);

    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| ArtError::Image {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}
