//! Error types shared by the calculators.
//!
//! Messages carry the offending numbers only, never password material.

use thiserror::Error;

/// A count or rate passed to a calculator is outside its valid range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("Guess rate must be a positive finite number, got {0}")]
    GuessRate(f64),
    #[error("Account count must be at least 1")]
    ZeroAccounts,
    #[error("Employee count must be at least 1")]
    ZeroEmployees,
    #[error("{name} must be within [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },
}

/// Checks that `value` is a probability in `[0, 1]` (NaN rejected).
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<f64, RangeError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(RangeError::Probability { name, value })
    }
}
