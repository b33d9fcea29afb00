use thiserror::Error;

/// Errors raised while validating or scoring a set of answers.
///
/// Every variant is fatal to the call that produced it. No engine returns a
/// partial result alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// The answer vector has the wrong number of elements.
    #[error("expected {expected} answers, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// An answer is outside the accepted scale or is not a whole number.
    #[error("answer {position} must be a whole number between {min} and {max}, got {value}")]
    OutOfRange {
        /// 1-based position (or question number) of the offending answer
        position: usize,
        value: f64,
        min: u8,
        max: u8,
    },

    /// A positional answer is not a number (e.g. a quoted `"5"` or a stray word).
    #[error("answer {position} is not a number, got {value}")]
    NotANumber {
        /// 1-based position of the offending answer
        position: usize,
        value: String,
    },

    /// A question identifier has no numeric answer.
    #[error("missing numeric answer for '{id}'")]
    MissingValue { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = ScoringError::LengthMismatch {
            expected: 16,
            got: 15,
        };
        assert_eq!(err.to_string(), "expected 16 answers, got 15");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ScoringError::OutOfRange {
            position: 3,
            value: 6.0,
            min: 1,
            max: 5,
        };
        assert_eq!(
            err.to_string(),
            "answer 3 must be a whole number between 1 and 5, got 6"
        );
    }

    #[test]
    fn test_not_a_number_message() {
        let err = ScoringError::NotANumber {
            position: 1,
            value: "\"5\"".to_string(),
        };
        assert_eq!(err.to_string(), "answer 1 is not a number, got \"5\"");
    }

    #[test]
    fn test_missing_value_message() {
        let err = ScoringError::MissingValue {
            id: "b_q4".to_string(),
        };
        assert!(err.to_string().contains("b_q4"));
    }
}
