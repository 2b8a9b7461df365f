//! String-based helpers for callers that hold nothing but the text of a
//! function, such as a page handler reacting to a form submit.

use crate::bracket::{BracketSearch, Interval};
use crate::compile::compile;
use crate::derivative::derivative;
use crate::error::Result;
use crate::expr::Expr;
use crate::format::{format_number, DEFAULT_DECIMALS};
use crate::parser::parse_expr;

pub fn parse(input: &str) -> Result<Expr> {
    parse_expr(input)
}

/// Canonical rendering of `input`, e.g. `"x^2-4"` becomes `"x^2 - 4"`.
pub fn pretty(input: &str) -> Result<String> {
    Ok(crate::format::pretty(&parse_expr(input)?))
}

pub fn eval(input: &str, x: f64) -> Result<f64> {
    crate::evaluate::evaluate(input, x)
}

/// Derivative of the expression `input` at `x` with the default step.
pub fn slope(input: &str, x: f64) -> Result<f64> {
    let function = compile(input)?;
    derivative(&function, x)
}

/// Bracket search over the default range and budget.
pub fn bracket(input: &str) -> Result<Interval> {
    BracketSearch::default().find(input, &mut rand::thread_rng())
}

/// Table cell rendering with the default precision.
pub fn cell(value: f64) -> String {
    format_number(value, DEFAULT_DECIMALS)
}
