//! artgen - Random expression art generator
//!
//! A library for building random expression trees over `x` and `y`,
//! evaluating them per pixel, and writing the result as an image.

pub mod art;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use art::{
    evaluate, generate, quantize, remap, seeded_rng, synthesize, synthesize_noise, Artwork,
    ChannelTrees, Grammar, RandomSource, ScriptedSource, TreeBuilder,
};
pub use config::ArtConfig;
pub use error::{ArtError, Result};
pub use render::{to_rgb_image, write_png};
pub use types::{BinaryOp, Colour, Expr, Op, PixelGrid, UnaryOp, Var};
