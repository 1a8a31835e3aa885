//! Eval command implementation.

use clap::Args;

use crate::art::{evaluate, quantize};
use crate::error::Result;
use crate::output::Printer;
use crate::types::Expr;

/// Evaluate an expression tree at a point
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Tree in prefix form, e.g. "(prod (sin_pi x) y)"
    pub expr: String,

    /// x coordinate
    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    /// y coordinate
    #[arg(allow_negative_numbers = true)]
    pub y: f64,
}

pub fn run(args: EvalArgs, printer: &Printer) -> Result<()> {
    let expr: Expr = args.expr.parse()?;
    let value = evaluate(&expr, args.x, args.y);

    println!("{}", value);
    printer.info("Channel", &quantize(value).to_string());

    Ok(())
}
