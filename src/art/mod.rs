//! Random expression art.
//!
//! This module builds random expression trees, evaluates them per pixel,
//! and assembles the resulting colours into a pixel grid.

mod build;
mod eval;
pub mod random;
mod remap;
mod synth;

pub use build::{Grammar, TreeBuilder};
pub use eval::evaluate;
pub use random::{seeded_rng, RandomSource, ScriptedSource};
pub use remap::{quantize, remap};
pub use synth::{generate, synthesize, synthesize_noise, Artwork, ChannelTrees};
