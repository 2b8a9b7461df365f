//! Formatting helpers for rendering expressions and numeric results.

pub mod expr;
pub mod number;

pub use expr::pretty;
pub use number::{format_number, relative_error, DEFAULT_DECIMALS};
