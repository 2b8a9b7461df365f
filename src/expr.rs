//! Expression tree definitions and the tree-walking evaluator.

use std::fmt;

/// A real-valued expression in the single free variable `x`.
///
/// `Log10` and `Ln` are kept apart on purpose: in the input notation `log(`
/// means base 10 and `ln(` means the natural logarithm.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    X,
    Constant(f64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),
    Exp(Box<Expr>),
    Sqrt(Box<Expr>),
    Abs(Box<Expr>),
    Log10(Box<Expr>),
    Ln(Box<Expr>),
}

impl Expr {
    pub fn constant(value: f64) -> Self {
        Expr::Constant(value)
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// True when `x` appears anywhere in the tree.
    pub fn depends_on_x(&self) -> bool {
        match self {
            Expr::X => true,
            Expr::Constant(_) => false,
            Expr::Add(a, b)
            | Expr::Sub(a, b)
            | Expr::Mul(a, b)
            | Expr::Div(a, b)
            | Expr::Pow(a, b) => a.depends_on_x() || b.depends_on_x(),
            Expr::Neg(a)
            | Expr::Sin(a)
            | Expr::Cos(a)
            | Expr::Tan(a)
            | Expr::Exp(a)
            | Expr::Sqrt(a)
            | Expr::Abs(a)
            | Expr::Log10(a)
            | Expr::Ln(a) => a.depends_on_x(),
        }
    }

    /// Evaluate at `x` with plain IEEE-754 semantics.
    ///
    /// Domain errors are not reported here: `sqrt(-1)` is NaN and `1/0` is
    /// infinite, exactly as the arithmetic produces them. Callers that need
    /// the finite-result contract go through [`crate::CompiledFunction::evaluate`].
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::X => x,
            Expr::Constant(c) => *c,
            Expr::Add(a, b) => a.eval(x) + b.eval(x),
            Expr::Sub(a, b) => a.eval(x) - b.eval(x),
            Expr::Mul(a, b) => a.eval(x) * b.eval(x),
            Expr::Div(a, b) => a.eval(x) / b.eval(x),
            Expr::Pow(a, b) => a.eval(x).powf(b.eval(x)),
            Expr::Neg(a) => -a.eval(x),
            Expr::Sin(a) => a.eval(x).sin(),
            Expr::Cos(a) => a.eval(x).cos(),
            Expr::Tan(a) => a.eval(x).tan(),
            Expr::Exp(a) => a.eval(x).exp(),
            Expr::Sqrt(a) => a.eval(x).sqrt(),
            Expr::Abs(a) => a.eval(x).abs(),
            Expr::Log10(a) => a.eval(x).log10(),
            Expr::Ln(a) => a.eval(x).ln(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty(self))
    }
}

pub fn x() -> Expr {
    Expr::X
}

pub fn add(a: Expr, b: Expr) -> Expr {
    Expr::Add(a.boxed(), b.boxed())
}

pub fn sub(a: Expr, b: Expr) -> Expr {
    Expr::Sub(a.boxed(), b.boxed())
}

pub fn mul(a: Expr, b: Expr) -> Expr {
    Expr::Mul(a.boxed(), b.boxed())
}

pub fn div(a: Expr, b: Expr) -> Expr {
    Expr::Div(a.boxed(), b.boxed())
}

pub fn pow(base: Expr, exp: Expr) -> Expr {
    Expr::Pow(base.boxed(), exp.boxed())
}

pub fn neg(a: Expr) -> Expr {
    Expr::Neg(a.boxed())
}
