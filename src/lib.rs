//! Numerical-methods helpers: compile user-typed functions of `x`, evaluate
//! them under a finite-result contract, estimate derivatives, and search for
//! root brackets.

pub mod bracket;
pub mod compile;
pub mod derivative;
pub mod error;
pub mod evaluate;
pub mod expr;
pub mod format;
pub mod parser;
pub mod prelude;
pub mod ui;
pub mod validate;

pub use bracket::{
    find_interval, BracketSearch, Interval, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEARCH_RANGE,
};
pub use compile::{compile, is_valid, is_valid_at, CompiledFunction, RealFunction, DEFAULT_PROBE};
pub use derivative::{derivative, derivative_with_step, DEFAULT_STEP};
pub use error::{EvalCause, NumError, Result};
pub use evaluate::evaluate;
pub use expr::Expr;
pub use format::{format_number, pretty, relative_error, DEFAULT_DECIMALS};
pub use parser::{parse_expr, MAX_DEPTH};
pub use validate::{is_positive_number, is_valid_number, FieldError, FieldRule};
