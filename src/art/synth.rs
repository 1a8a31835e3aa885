//! Image synthesis.
//!
//! Each colour channel is driven by its own tree. Pixel `(i, j)` is mapped
//! onto `[-1, 1] x [-1, 1]`, every tree is evaluated there, and the results
//! are quantized into the pixel's colour.

use crate::config::ArtConfig;
use crate::error::Result;
use crate::types::{Colour, Expr, PixelGrid};

use super::build::TreeBuilder;
use super::eval::evaluate;
use super::random::RandomSource;
use super::remap::{quantize, remap};

/// One tree per colour channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTrees {
    pub red: Expr,
    pub green: Expr,
    pub blue: Expr,
}

impl ChannelTrees {
    /// Build red, green, then blue from the same source.
    pub fn build<R: RandomSource + ?Sized>(
        builder: &TreeBuilder,
        rng: &mut R,
        min_depth: i32,
        max_depth: i32,
    ) -> Self {
        let red = builder.build(rng, min_depth, max_depth);
        let green = builder.build(rng, min_depth, max_depth);
        let blue = builder.build(rng, min_depth, max_depth);
        Self { red, green, blue }
    }

    /// The quantized colour at `(x, y)` in the unit square.
    pub fn colour_at(&self, x: f64, y: f64) -> Colour {
        Colour::rgb(
            quantize(evaluate(&self.red, x, y)),
            quantize(evaluate(&self.green, x, y)),
            quantize(evaluate(&self.blue, x, y)),
        )
    }

    /// Iterate `(name, tree)` pairs in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Expr)> {
        [("red", &self.red), ("green", &self.green), ("blue", &self.blue)].into_iter()
    }
}

/// A synthesized image and the trees that produced it.
#[derive(Debug, Clone)]
pub struct Artwork {
    pub trees: ChannelTrees,
    pub grid: PixelGrid,
}

/// Evaluate `trees` over a `width` x `height` grid.
pub fn synthesize(trees: &ChannelTrees, width: u32, height: u32) -> Result<PixelGrid> {
    let mut grid = PixelGrid::new(width, height);

    for i in 0..width {
        let x = remap(f64::from(i), 0.0, f64::from(width), -1.0, 1.0)?;
        for j in 0..height {
            let y = remap(f64::from(j), 0.0, f64::from(height), -1.0, 1.0)?;
            grid.set(i, j, trees.colour_at(x, y));
        }
    }

    Ok(grid)
}

/// Build the channel trees described by `config` and synthesize the image.
pub fn generate<R: RandomSource + ?Sized>(config: &ArtConfig, rng: &mut R) -> Result<Artwork> {
    config.validate()?;

    let builder = TreeBuilder::new(config.grammar);
    let trees = ChannelTrees::build(&builder, rng, config.min_depth, config.max_depth);
    let grid = synthesize(&trees, config.width, config.height)?;

    Ok(Artwork { trees, grid })
}

/// A test image of uniformly random pixels.
pub fn synthesize_noise<R: RandomSource + ?Sized>(rng: &mut R, width: u32, height: u32) -> PixelGrid {
    let mut grid = PixelGrid::new(width, height);

    for i in 0..width {
        for j in 0..height {
            let r = rng.below(256) as i64;
            let g = rng.below(256) as i64;
            let b = rng.below(256) as i64;
            grid.set(i, j, Colour::rgb(r, g, b));
        }
    }

    grid
}
