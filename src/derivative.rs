use crate::compile::RealFunction;
use crate::error::{NumError, Result};

/// Default step for the centered difference.
pub const DEFAULT_STEP: f64 = 1e-8;

/// Centered-difference derivative of `f` at `x` with [`DEFAULT_STEP`].
pub fn derivative<F: RealFunction + ?Sized>(f: &F, x: f64) -> Result<f64> {
    derivative_with_step(f, x, DEFAULT_STEP)
}

/// `(f(x + h) - f(x - h)) / 2h`.
///
/// The step is used as given; no attempt is made to balance truncation error
/// against cancellation. Finite samples whose difference quotient overflows
/// are reported as [`NumError::Derivative`].
pub fn derivative_with_step<F: RealFunction + ?Sized>(f: &F, x: f64, h: f64) -> Result<f64> {
    if !x.is_finite() {
        return Err(NumError::InvalidArgument(format!(
            "derivative point must be finite, got {x}"
        )));
    }
    if !h.is_finite() || h == 0.0 {
        return Err(NumError::InvalidArgument(format!(
            "derivative step must be finite and nonzero, got {h}"
        )));
    }

    let at = |point: f64| {
        f.evaluate(point).map_err(|cause| NumError::Derivative {
            point: x,
            cause: Box::new(cause),
        })
    };
    let forward = at(x + h)?;
    let backward = at(x - h)?;

    let slope = (forward - backward) / (2.0 * h);
    if !slope.is_finite() {
        return Err(NumError::Derivative {
            point: x,
            cause: Box::new(NumError::non_finite(x, "(f(x + h) - f(x - h)) / 2h", slope)),
        });
    }
    Ok(slope)
}
