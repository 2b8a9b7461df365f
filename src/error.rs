use thiserror::Error;

pub type Result<T> = std::result::Result<T, NumError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumError {
    #[error("cannot compile `{expression}`: {message}")]
    Compilation { expression: String, message: String },
    #[error("error evaluating f({point}) for `{expression}`: {cause}")]
    Evaluation {
        point: f64,
        expression: String,
        cause: EvalCause,
    },
    #[error("error computing the derivative at x = {point}: {cause}")]
    Derivative { point: f64, cause: Box<NumError> },
    #[error("no root bracket found after {attempts} attempts in ±{search_range}")]
    BracketNotFound { attempts: usize, search_range: f64 },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Why a single point evaluation failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalCause {
    #[error("{0}")]
    Compilation(String),
    #[error("the function produces a non-finite value ({0})")]
    NonFinite(f64),
}

impl NumError {
    pub fn non_finite(point: f64, expression: impl Into<String>, value: f64) -> Self {
        NumError::Evaluation {
            point,
            expression: expression.into(),
            cause: EvalCause::NonFinite(value),
        }
    }

    /// The evaluation point attached to this error, if any.
    pub fn point(&self) -> Option<f64> {
        match self {
            NumError::Evaluation { point, .. } | NumError::Derivative { point, .. } => Some(*point),
            _ => None,
        }
    }
}
