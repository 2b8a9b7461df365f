//! Compilation of notation strings into callable real functions.

use std::fmt;

use crate::error::{NumError, Result};
use crate::expr::Expr;
use crate::parser::parse_expr;

/// Probe point used by [`is_valid`].
pub const DEFAULT_PROBE: f64 = 1.0;

/// A parsed expression together with the text it came from.
///
/// Stateless and cheap to clone; calling it any number of times with the
/// same point gives the same result.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledFunction {
    source: String,
    expr: Expr,
}

impl CompiledFunction {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Raw value at `x`, possibly NaN or infinite.
    pub fn call(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }

    /// Value at `x`, failing with [`NumError::Evaluation`] when it is not finite.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        let value = self.call(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(NumError::non_finite(x, self.source.as_str(), value))
        }
    }
}

impl fmt::Display for CompiledFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) = {}", self.expr)
    }
}

/// Compile `input` without checking that it evaluates to anything finite.
pub fn compile(input: &str) -> Result<CompiledFunction> {
    let expr = parse_expr(input)?;
    Ok(CompiledFunction {
        source: input.to_string(),
        expr,
    })
}

/// True when `input` compiles and is finite at [`DEFAULT_PROBE`].
pub fn is_valid(input: &str) -> bool {
    is_valid_at(input, DEFAULT_PROBE)
}

pub fn is_valid_at(input: &str, probe: f64) -> bool {
    compile(input).and_then(|f| f.evaluate(probe)).is_ok()
}

/// Anything that can be evaluated at a real point under the finite-result
/// contract. Implemented for compiled expressions and for plain closures.
pub trait RealFunction {
    fn evaluate(&self, x: f64) -> Result<f64>;
}

impl RealFunction for CompiledFunction {
    fn evaluate(&self, x: f64) -> Result<f64> {
        CompiledFunction::evaluate(self, x)
    }
}

impl<F> RealFunction for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> Result<f64> {
        let value = self(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(NumError::non_finite(x, "<closure>", value))
        }
    }
}
