//! Numeric checks for the values a page collects before calling into the
//! core: iteration counts, tolerances, and similar fields.

use thiserror::Error;

pub fn is_valid_number(value: f64) -> bool {
    value.is_finite()
}

pub fn is_positive_number(value: f64) -> bool {
    !value.is_nan() && value > 0.0
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("field is required")]
    Required,
    #[error("must be a valid number")]
    NotANumber,
    #[error("must be a positive number")]
    NotPositive,
    #[error("must be greater than or equal to {0}")]
    BelowMin(f64),
    #[error("must be less than or equal to {0}")]
    AboveMax(f64),
}

/// Constraints for one numeric input field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldRule {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub required: bool,
    pub positive: bool,
}

impl FieldRule {
    /// Iteration counts: required, at least 1.
    pub fn iteration_count() -> Self {
        FieldRule {
            min: Some(1.0),
            required: true,
            ..FieldRule::default()
        }
    }

    /// Tolerances and error bounds: required, strictly positive.
    pub fn tolerance() -> Self {
        FieldRule {
            min: Some(0.0),
            required: true,
            positive: true,
            ..FieldRule::default()
        }
    }

    /// Check the raw text of a field.
    ///
    /// Returns `Ok(None)` for blank input on an optional field, otherwise the
    /// parsed value or the first violated constraint. Checks run in order:
    /// presence, number, positivity, minimum, maximum.
    pub fn check(&self, text: &str) -> Result<Option<f64>, FieldError> {
        let text = text.trim();
        if text.is_empty() {
            return if self.required {
                Err(FieldError::Required)
            } else {
                Ok(None)
            };
        }

        let value: f64 = text.parse().map_err(|_| FieldError::NotANumber)?;
        if !is_valid_number(value) {
            return Err(FieldError::NotANumber);
        }
        if self.positive && value <= 0.0 {
            return Err(FieldError::NotPositive);
        }
        if let Some(min) = self.min.filter(|min| value < *min) {
            return Err(FieldError::BelowMin(min));
        }
        if let Some(max) = self.max.filter(|max| value > *max) {
            return Err(FieldError::AboveMax(max));
        }
        Ok(Some(value))
    }
}
