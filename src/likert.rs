//! Shared helpers for 1-5 Likert answers: the hard boundary validator and the
//! lenient normalization used by the profile engine.

use crate::error::ScoringError;

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

/// Validate an answer vector against an expected length and the 1-5 scale.
///
/// Fails with `LengthMismatch` before looking at any value, then with
/// `OutOfRange` for the first value that is not a whole number in [1,5].
pub fn validate_answers(answers: &[f64], expected: usize) -> Result<(), ScoringError> {
    validate_scale(answers, expected, LIKERT_MIN, LIKERT_MAX)
}

/// Same contract as [`validate_answers`] for an arbitrary integer scale.
pub fn validate_scale(
    values: &[f64],
    expected: usize,
    min: u8,
    max: u8,
) -> Result<(), ScoringError> {
    if values.len() != expected {
        return Err(ScoringError::LengthMismatch {
            expected,
            got: values.len(),
        });
    }

    for (i, &value) in values.iter().enumerate() {
        if !is_whole_in_range(value, min, max) {
            return Err(ScoringError::OutOfRange {
                position: i + 1,
                value,
                min,
                max,
            });
        }
    }

    Ok(())
}

/// True for finite whole numbers inside `[min, max]`. NaN and infinities fail.
pub fn is_whole_in_range(value: f64, min: u8, max: u8) -> bool {
    value.fract() == 0.0 && value >= f64::from(min) && value <= f64::from(max)
}

/// Pull any value into [1,5].
pub fn clamp_likert(value: f64) -> f64 {
    value.clamp(f64::from(LIKERT_MIN), f64::from(LIKERT_MAX))
}

/// Flip polarity: 1<->5, 2<->4, 3 stays. Out-of-scale input is clamped first.
pub fn reverse_likert(value: f64) -> f64 {
    6.0 - clamp_likert(value)
}

/// Arithmetic mean, 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Map a 1-5 mean onto 0-100: `round((m - 1) / 4 * 100)`.
///
/// Not clamped: the 0.0 mean of an empty section maps to -25 and counts
/// as such in the overall average.
pub fn mean_to_percent(mean: f64) -> i32 {
    ((mean - 1.0) / 4.0 * 100.0).round() as i32
}
