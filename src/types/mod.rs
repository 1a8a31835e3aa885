//! Core domain types for artgen.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Expr` - Expression trees over `x` and `y`
//! - `Colour` - Quantized RGB triples
//! - `PixelGrid` - The synthesized image

mod colour;
mod expr;
mod grid;

pub use colour::Colour;
pub use expr::{BinaryOp, Expr, Op, UnaryOp, Var, MAX_PARSE_DEPTH};
pub use grid::PixelGrid;
