//! Random expression tree construction.

use serde::{Deserialize, Serialize};

use crate::types::{Expr, Op, UnaryOp};

use super::random::RandomSource;

/// How `squared` and `cubed` nodes are grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// Powers take the two-child path: two depth draws and a dormant second
    /// subtree.
    #[default]
    Reference,
    /// Powers take one depth draw and one child, like `sigmoid`.
    Unary,
}

/// Builds random trees of bounded depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    grammar: Grammar,
}

impl TreeBuilder {
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// Build a random tree.
    ///
    /// Any `max_depth` below 2 (negative included) yields a single `x` or `y`
    /// terminal. Otherwise the tree has depth at most `max_depth` and each
    /// subtree is drawn a depth budget between `min_depth - 1` and
    /// `max_depth - 1`. A `min_depth` above `max_depth` is lowered to
    /// `max_depth`.
    pub fn build<R: RandomSource + ?Sized>(&self, rng: &mut R, min_depth: i32, max_depth: i32) -> Expr {
        self.grow(rng, min_depth.min(max_depth), max_depth)
    }

    fn grow<R: RandomSource + ?Sized>(&self, rng: &mut R, min_depth: i32, max_depth: i32) -> Expr {
        if max_depth < 2 {
            return if rng.unit() > 0.5 { Expr::x() } else { Expr::y() };
        }

        let op = Op::VOCABULARY[rng.below(Op::VOCABULARY.len())];
        let first_max = child_max_depth(rng, min_depth, max_depth);

        if let Op::Unary(unary) = op {
            if self.takes_one_draw(unary) {
                return Expr::unary(unary, self.grow(rng, min_depth - 1, first_max));
            }
        }

        let second_max = child_max_depth(rng, min_depth, max_depth);
        let first = self.grow(rng, min_depth - 1, first_max);
        let second = self.grow(rng, min_depth - 1, second_max);

        match op {
            Op::Unary(unary) => Expr::unary_with_dormant(unary, first, second),
            Op::Binary(binary) => Expr::binary(binary, first, second),
        }
    }

    fn takes_one_draw(&self, op: UnaryOp) -> bool {
        match self.grammar {
            Grammar::Reference => !op.is_power(),
            Grammar::Unary => true,
        }
    }
}

/// `min_depth + ceil(u * (max_depth - min_depth)) - 1` for a fresh draw `u`.
fn child_max_depth<R: RandomSource + ?Sized>(rng: &mut R, min_depth: i32, max_depth: i32) -> i32 {
    let spread = (rng.unit() * f64::from(max_depth - min_depth)).ceil() as i32;
    min_depth + spread - 1
}
