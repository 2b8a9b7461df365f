use crate::compile::compile;
use crate::error::{EvalCause, NumError, Result};

/// Evaluate `input` at `x`.
///
/// The expression is compiled on every call. A compilation failure is
/// reported as an evaluation failure at `x` so the caller always learns the
/// point and the expression involved.
pub fn evaluate(input: &str, x: f64) -> Result<f64> {
    let function = compile(input).map_err(|err| NumError::Evaluation {
        point: x,
        expression: input.to_string(),
        cause: EvalCause::Compilation(match err {
            NumError::Compilation { message, .. } => message,
            other => other.to_string(),
        }),
    })?;
    function.evaluate(x)
}
