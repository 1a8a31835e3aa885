//! Noise command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::art::{seeded_rng, synthesize_noise};
use crate::error::{ArtError, Result};
use crate::output::{display_path, Printer};
use crate::render::write_png;

use super::effective_seed;

/// Generate a test image of random pixels
#[derive(Args, Debug)]
pub struct NoiseArgs {
    /// Output PNG file
    #[arg(default_value = "noise.png")]
    pub file: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value = "350")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "350")]
    pub height: u32,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: NoiseArgs, printer: &Printer) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        return Err(ArtError::Config {
            message: format!("Invalid image size {}x{}", args.width, args.height),
            help: Some("Width and height must be at least 1".to_string()),
        });
    }

    let seed = effective_seed(args.seed);
    printer.status(
        "Generating",
        &format!(
            "{} ({}x{} noise, seed {})",
            printer.cyan(&display_path(&args.file)),
            args.width,
            args.height,
            seed
        ),
    );

    let grid = synthesize_noise(&mut seeded_rng(seed), args.width, args.height);
    write_png(&grid, &args.file)?;

    printer.status("Finished", &display_path(&args.file));
    Ok(())
}
