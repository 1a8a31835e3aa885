//! Expression tree evaluation.

use std::f64::consts::PI;

use crate::types::{BinaryOp, Expr, UnaryOp, Var};

/// Evaluate `expr` at `(x, y)`.
///
/// Children are evaluated before their parent. Dormant children are skipped.
/// For trees over `x` and `y` in [-1, 1] the result also lies in [-1, 1].
pub fn evaluate(expr: &Expr, x: f64, y: f64) -> f64 {
    match expr {
        Expr::Var(Var::X) => x,
        Expr::Var(Var::Y) => y,
        Expr::Const(value) => *value,
        Expr::Unary { op, arg, .. } => apply_unary(*op, evaluate(arg, x, y)),
        Expr::Binary { op, lhs, rhs } => {
            let a = evaluate(lhs, x, y);
            let b = evaluate(rhs, x, y);
            apply_binary(*op, a, b)
        }
    }
}

fn apply_unary(op: UnaryOp, a: f64) -> f64 {
    match op {
        UnaryOp::Sigmoid => 1.0 / (1.0 + (-a).exp()),
        UnaryOp::Squared => a.powf(2.0),
        UnaryOp::Cubed => a.powf(3.0),
        UnaryOp::CosPi => (a * PI).cos(),
        UnaryOp::SinPi => (a * PI).sin(),
    }
}

fn apply_binary(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Product => a * b,
        BinaryOp::Average => (a + b) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::build::TreeBuilder;
    use crate::art::random::seeded_rng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_variables() {
        assert_eq!(evaluate(&Expr::x(), -0.5, 0.75), -0.5);
        assert_eq!(evaluate(&Expr::y(), 0.1, 0.02), 0.02);
    }

    #[test]
    fn test_constant() {
        assert_eq!(evaluate(&Expr::constant(0.3), 1.0, 1.0), 0.3);
    }

    #[test]
    fn test_binary_ops() {
        let prod = Expr::binary(BinaryOp::Product, Expr::x(), Expr::y());
        assert_eq!(evaluate(&prod, 0.5, -0.5), -0.25);

        let avg = Expr::binary(BinaryOp::Average, Expr::x(), Expr::y());
        assert_eq!(evaluate(&avg, 0.5, -0.25), 0.125);
    }

    #[test]
    fn test_powers() {
        let squared = Expr::unary(UnaryOp::Squared, Expr::x());
        assert_eq!(evaluate(&squared, -0.5, 0.0), 0.25);

        let cubed = Expr::unary(UnaryOp::Cubed, Expr::x());
        assert_eq!(evaluate(&cubed, -0.5, 0.0), -0.125);
    }

    #[test]
    fn test_sigmoid() {
        let sigmoid = Expr::unary(UnaryOp::Sigmoid, Expr::x());
        assert_eq!(evaluate(&sigmoid, 0.0, 0.0), 0.5);
        assert!(close(evaluate(&sigmoid, 1.0, 0.0), 1.0 / (1.0 + (-1.0f64).exp())));
    }

    #[test]
    fn test_trig() {
        let cos = Expr::unary(UnaryOp::CosPi, Expr::x());
        assert_eq!(evaluate(&cos, 0.0, 0.0), 1.0);
        assert!(close(evaluate(&cos, 1.0, 0.0), -1.0));

        let sin = Expr::unary(UnaryOp::SinPi, Expr::y());
        assert!(close(evaluate(&sin, 0.0, 0.5), 1.0));
        assert!(close(evaluate(&sin, 0.0, -0.5), -1.0));
    }

    #[test]
    fn test_dormant_child_is_ignored() {
        let tree = Expr::unary_with_dormant(UnaryOp::Squared, Expr::x(), Expr::constant(100.0));
        assert_eq!(evaluate(&tree, 0.5, 0.0), 0.25);
    }

    #[test]
    fn test_nested() {
        // avg(x, prod(y, cos_pi(x)))
        let tree = Expr::binary(
            BinaryOp::Average,
            Expr::x(),
            Expr::binary(
                BinaryOp::Product,
                Expr::y(),
                Expr::unary(UnaryOp::CosPi, Expr::x()),
            ),
        );
        assert_eq!(evaluate(&tree, 0.0, 0.5), 0.25);
    }

    #[test]
    fn test_random_trees_are_deterministic_and_bounded() {
        let builder = TreeBuilder::default();
        let mut rng = seeded_rng(21);

        for _ in 0..50 {
            let tree = builder.build(&mut rng, 7, 9);
            for i in 0..=8 {
                let x = i as f64 / 4.0 - 1.0;
                let y = 1.0 - i as f64 / 4.0;
                let a = evaluate(&tree, x, y);
                let b = evaluate(&tree, x, y);
                assert_eq!(a.to_bits(), b.to_bits());
                assert!((-1.0..=1.0).contains(&a), "{} at ({}, {}) = {}", tree, x, y, a);
            }
        }
    }
}
