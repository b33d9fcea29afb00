use serde_json::Value;

use super::engine::ProfileAnswers;
use super::sections::{question_ids, PROFILE_QUESTION_COUNT};
use crate::error::ScoringError;
use crate::likert::{is_whole_in_range, validate_answers, LIKERT_MAX, LIKERT_MIN};

/// Build a profile answer map from a positional vector in A..E question order.
///
/// The vector goes through the hard validator first, so a wrong length or an
/// out-of-scale value fails here rather than being clamped later.
pub fn profile_answers_from_vector(values: &[f64]) -> Result<ProfileAnswers, ScoringError> {
    validate_answers(values, PROFILE_QUESTION_COUNT)?;

    Ok(question_ids()
        .zip(values)
        .map(|(id, &value)| (id.to_string(), Value::from(value as i64)))
        .collect())
}

/// Strict check for a profile answer map.
///
/// Every catalog question must have a numeric answer that is a whole number
/// in [1,5]. Keys outside the catalog are ignored. Errors report the first
/// problem in A..E question order.
pub fn validate_profile_answers(answers: &ProfileAnswers) -> Result<(), ScoringError> {
    for (i, id) in question_ids().enumerate() {
        let value = answers
            .get(id)
            .and_then(Value::as_f64)
            .ok_or_else(|| ScoringError::MissingValue { id: id.to_string() })?;

        if !is_whole_in_range(value, LIKERT_MIN, LIKERT_MAX) {
            return Err(ScoringError::OutOfRange {
                position: i + 1,
                value,
                min: LIKERT_MIN,
                max: LIKERT_MAX,
            });
        }
    }
    Ok(())
}
