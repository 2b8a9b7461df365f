//! String-based convenience API for quick experimentation.

pub use crate::ui::{bracket, cell, eval, parse, pretty, slope};
