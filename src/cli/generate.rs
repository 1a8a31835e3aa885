//! Generate command implementation.
//!
//! Builds the channel trees, synthesizes the image, and writes a PNG.

use std::path::PathBuf;

use clap::Args;

use crate::art::{generate, seeded_rng};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;

use super::{effective_seed, TreeArgs};

/// Generate an image from three random expression trees
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output PNG file (default: `output` from the config, else myart.png)
    pub file: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    #[command(flatten)]
    pub tree: TreeArgs,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let mut config = args.tree.resolve()?;
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    config.validate()?;

    if config.min_depth > config.max_depth {
        printer.warning(
            "Adjusting",
            &format!(
                "min depth {} exceeds max depth {}, using {}",
                config.min_depth, config.max_depth, config.max_depth
            ),
        );
    }

    let output = args.file.unwrap_or_else(|| config.output.clone());
    let seed = effective_seed(config.seed);

    printer.status(
        "Generating",
        &format!(
            "{} ({}x{}, depth {}..{}, seed {})",
            printer.cyan(&display_path(&output)),
            config.width,
            config.height,
            config.min_depth,
            config.max_depth,
            seed
        ),
    );

    let mut rng = seeded_rng(seed);
    let art = generate(&config, &mut rng)?;

    for (name, tree) in art.trees.iter() {
        printer.info(
            "Built",
            &format!(
                "{} tree (depth {}, {})",
                name,
                tree.depth(),
                plural(tree.node_count(), "node", "nodes")
            ),
        );
    }

    write_png(&art.grid, &output)?;

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(art.grid.len(), "pixel", "pixels"),
            display_path(&output)
        ),
    );

    Ok(())
}
