//! Expression trees.
//!
//! A tree is built from a small vocabulary of functions over `x` and `y`:
//! - `prod(a, b)` - product of two subtrees
//! - `avg(a, b)` - mean of two subtrees
//! - `sigmoid(a)` - logistic function
//! - `squared(a)`, `cubed(a)` - integer powers
//! - `cos_pi(a)`, `sin_pi(a)` - trig functions scaled by pi
//!
//! Trees print in prefix form, e.g. `(prod (sin_pi x) y)`, and the same
//! form can be parsed back with [`str::parse`].

use std::fmt;
use std::str::FromStr;

use crate::error::{ArtError, Result};

/// A coordinate variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Var {
    X,
    Y,
}

/// Operators taking a single evaluated child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sigmoid,
    Squared,
    Cubed,
    CosPi,
    SinPi,
}

impl UnaryOp {
    /// Power operators are the ones the reference grammar builds with a
    /// second, never-evaluated child.
    pub fn is_power(self) -> bool {
        matches!(self, UnaryOp::Squared | UnaryOp::Cubed)
    }
}

/// Operators combining two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Product,
    Average,
}

/// An entry in the operator vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl Op {
    /// The builder vocabulary, in draw order.
    pub const VOCABULARY: [Op; 7] = [
        Op::Binary(BinaryOp::Product),
        Op::Unary(UnaryOp::Sigmoid),
        Op::Unary(UnaryOp::Squared),
        Op::Unary(UnaryOp::Cubed),
        Op::Binary(BinaryOp::Average),
        Op::Unary(UnaryOp::CosPi),
        Op::Unary(UnaryOp::SinPi),
    ];

    /// The name used in the text form.
    pub fn name(self) -> &'static str {
        match self {
            Op::Binary(BinaryOp::Product) => "prod",
            Op::Binary(BinaryOp::Average) => "avg",
            Op::Unary(UnaryOp::Sigmoid) => "sigmoid",
            Op::Unary(UnaryOp::Squared) => "squared",
            Op::Unary(UnaryOp::Cubed) => "cubed",
            Op::Unary(UnaryOp::CosPi) => "cos_pi",
            Op::Unary(UnaryOp::SinPi) => "sin_pi",
        }
    }

    /// Look up an operator by its text-form name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::VOCABULARY.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node in an expression tree. Each node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `x` or `y`.
    Var(Var),
    /// A literal value.
    Const(f64),
    /// A one-argument function.
    ///
    /// `dormant` holds the second subtree that the reference grammar builds
    /// for `squared` and `cubed`. It counts toward depth but is never
    /// evaluated.
    Unary {
        op: UnaryOp,
        arg: Box<Expr>,
        dormant: Option<Box<Expr>>,
    },
    /// A two-argument function.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// The `x` terminal.
    pub const fn x() -> Self {
        Expr::Var(Var::X)
    }

    /// The `y` terminal.
    pub const fn y() -> Self {
        Expr::Var(Var::Y)
    }

    /// A literal terminal.
    pub fn constant(value: f64) -> Self {
        Expr::Const(value)
    }

    pub fn unary(op: UnaryOp, arg: Expr) -> Self {
        Expr::Unary {
            op,
            arg: Box::new(arg),
            dormant: None,
        }
    }

    /// A unary node carrying a dormant second child.
    pub fn unary_with_dormant(op: UnaryOp, arg: Expr, dormant: Expr) -> Self {
        Expr::Unary {
            op,
            arg: Box::new(arg),
            dormant: Some(Box::new(dormant)),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Check if this node has no children.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Expr::Var(_) | Expr::Const(_))
    }

    /// Number of nodes on the longest root-to-terminal path.
    ///
    /// A lone terminal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Const(_) => 1,
            Expr::Unary { arg, dormant, .. } => {
                let dormant = dormant.as_ref().map_or(0, |d| d.depth());
                1 + arg.depth().max(dormant)
            }
            Expr::Binary { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    /// Total number of nodes, dormant subtrees included.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Const(_) => 1,
            Expr::Unary { arg, dormant, .. } => {
                1 + arg.node_count() + dormant.as_ref().map_or(0, |d| d.node_count())
            }
            Expr::Binary { lhs, rhs, .. } => 1 + lhs.node_count() + rhs.node_count(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(Var::X) => f.write_str("x"),
            Expr::Var(Var::Y) => f.write_str("y"),
            Expr::Const(value) => write!(f, "{}", value),
            Expr::Unary { op, arg, dormant } => {
                write!(f, "({} {}", Op::Unary(*op), arg)?;
                if let Some(dormant) = dormant {
                    write!(f, " {}", dormant)?;
                }
                f.write_str(")")
            }
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", Op::Binary(*op), lhs, rhs),
        }
    }
}

impl FromStr for Expr {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        let tokens = tokenize(s);
        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
        };
        let expr = parser.parse_expr()?;

        if let Some(token) = parser.peek() {
            return Err(ArtError::InvalidTree {
                message: format!("Unexpected trailing input: {}", token),
                help: Some("A tree has exactly one root node".to_string()),
            });
        }

        Ok(expr)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Open,
    Close,
    Atom(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Atom(atom) => f.write_str(atom),
        }
    }
}

fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        match c {
            '(' | ')' => {
                if !current.is_empty() {
                    tokens.push(Token::Atom(std::mem::take(&mut current)));
                }
                tokens.push(if c == '(' { Token::Open } else { Token::Close });
            }
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(Token::Atom(std::mem::take(&mut current)));
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(Token::Atom(current));
    }

    tokens
}

/// Deepest nesting the parser accepts.
pub const MAX_PARSE_DEPTH: usize = 512;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<Token> {
        let token = self.tokens.get(self.pos).cloned().ok_or_else(|| ArtError::InvalidTree {
            message: "Unexpected end of input".to_string(),
            help: Some("Check for unclosed parentheses".to_string()),
        })?;
        self.pos += 1;
        Ok(token)
    }

    fn parse_expr(&mut self) -> Result<Expr> {
        match self.next()? {
            Token::Atom(atom) => parse_terminal(&atom),
            Token::Close => Err(ArtError::InvalidTree {
                message: "Unexpected `)`".to_string(),
                help: None,
            }),
            Token::Open => {
                if self.depth >= MAX_PARSE_DEPTH {
                    return Err(ArtError::InvalidTree {
                        message: format!("Tree nests deeper than {} levels", MAX_PARSE_DEPTH),
                        help: None,
                    });
                }
                self.depth += 1;
                let expr = self.parse_call();
                self.depth -= 1;
                expr
            }
        }
    }

    /// Parse `name child...)` after the opening parenthesis.
    fn parse_call(&mut self) -> Result<Expr> {
        let name = match self.next()? {
            Token::Atom(name) => name,
            other => {
                return Err(ArtError::InvalidTree {
                    message: format!("Expected an operator name, found `{}`", other),
                    help: None,
                })
            }
        };

        let op = Op::from_name(&name).ok_or_else(|| ArtError::InvalidTree {
            message: format!("Unknown operator: {}", name),
            help: Some(
                "Available operators: prod, avg, sigmoid, squared, cubed, cos_pi, sin_pi"
                    .to_string(),
            ),
        })?;

        let mut children = Vec::new();
        loop {
            match self.peek() {
                Some(Token::Close) => {
                    self.pos += 1;
                    break;
                }
                _ => children.push(self.parse_expr()?),
            }
        }

        build_node(op, children)
    }
}

fn parse_terminal(atom: &str) -> Result<Expr> {
    match atom {
        "x" => Ok(Expr::x()),
        "y" => Ok(Expr::y()),
        _ => atom
            .parse::<f64>()
            .map(Expr::Const)
            .map_err(|_| ArtError::InvalidTree {
                message: format!("Unknown terminal: {}", atom),
                help: Some("Terminals are x, y, or a number".to_string()),
            }),
    }
}

fn build_node(op: Op, children: Vec<Expr>) -> Result<Expr> {
    let count = children.len();
    let mut children = children.into_iter();

    match (op, count) {
        (Op::Unary(unary), 1) => Ok(Expr::unary(unary, next_child(&mut children)?)),
        (Op::Unary(unary), 2) if unary.is_power() => {
            let arg = next_child(&mut children)?;
            let dormant = next_child(&mut children)?;
            Ok(Expr::unary_with_dormant(unary, arg, dormant))
        }
        (Op::Binary(binary), 2) => {
            let lhs = next_child(&mut children)?;
            let rhs = next_child(&mut children)?;
            Ok(Expr::binary(binary, lhs, rhs))
        }
        (op, count) => {
            let expected = match op {
                Op::Unary(unary) if unary.is_power() => "1 or 2 children",
                Op::Unary(_) => "1 child",
                Op::Binary(_) => "2 children",
            };
            Err(ArtError::InvalidTree {
                message: format!("`{}` takes {}, got {}", op, expected, count),
                help: None,
            })
        }
    }
}

fn next_child(children: &mut impl Iterator<Item = Expr>) -> Result<Expr> {
    children.next().ok_or_else(|| ArtError::InvalidTree {
        message: "Missing child node".to_string(),
        help: None,
    })
}
