//! Error types for fertilizer planning
//!
//! Two families of failure reach the caller:
//! - invalid input (caller contract violations: wrong lengths, out-of-range
//!   or non-finite values)
//! - lookup failures (unknown option labels, missing reference table rows)
//!
//! A zero weight sum inside the distribution engine is NOT an error; it is
//! recovered with a uniform split and flagged on the result. A weight sum
//! that overflows is invalid input.

use thiserror::Error;

/// Errors raised by the planning pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A monthly series did not have exactly 12 entries.
    #[error("{field}: expected {expected} values, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A value fell outside its permitted range.
    #[error("{field}: value {value} outside [{min}, {max}]{}", index_suffix(.index))]
    OutOfRange {
        field: &'static str,
        index: Option<usize>,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A value was NaN or infinite.
    #[error("{field}: non-finite value{}", index_suffix(.index))]
    NonFinite {
        field: &'static str,
        index: Option<usize>,
    },

    /// An option label could not be mapped to a variant.
    #[error("Unknown {kind} label: '{label}'")]
    UnknownLabel { kind: &'static str, label: String },

    /// A reference table has no row for the requested combination.
    #[error("No {table} entry for {key}")]
    MissingTableRow { table: &'static str, key: String },
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" (month {})", i + 1),
        None => String::new(),
    }
}

impl PlanError {
    /// Create an out-of-range error for a scalar field.
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            index: None,
            value,
            min,
            max,
        }
    }

    /// Caller supplied values outside the documented domain.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. } | Self::OutOfRange { .. } | Self::NonFinite { .. }
        )
    }

    /// A label or table lookup failed.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::UnknownLabel { .. } | Self::MissingTableRow { .. })
    }
}

/// Result alias used throughout the crate.
pub type PlanResult<T> = std::result::Result<T, PlanError>;

/// Check that a scalar is finite and inside `[min, max]`.
pub(crate) fn check_scalar(field: &'static str, value: f64, min: f64, max: f64) -> PlanResult<f64> {
    if !value.is_finite() {
        return Err(PlanError::NonFinite { field, index: None });
    }
    if value < min || value > max {
        return Err(PlanError::out_of_range(field, value, min, max));
    }
    Ok(value)
}

/// Check that a monthly series has 12 finite entries inside `[min, max]`.
pub(crate) fn check_monthly(
    field: &'static str,
    values: &[f64],
    min: f64,
    max: f64,
) -> PlanResult<[f64; 12]> {
    let series: [f64; 12] = values.try_into().map_err(|_| PlanError::InvalidLength {
        field,
        expected: 12,
        actual: values.len(),
    })?;

    for (i, &v) in series.iter().enumerate() {
        if !v.is_finite() {
            return Err(PlanError::NonFinite { field, index: Some(i) });
        }
        if v < min || v > max {
            return Err(PlanError::OutOfRange {
                field,
                index: Some(i),
                value: v,
                min,
                max,
            });
        }
    }

    Ok(series)
}
