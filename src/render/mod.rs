//! Image output for artgen.
//!
//! This module encodes synthesized pixel grids to image files.

mod png;

pub use png::{to_rgb_image, write_png};
