use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{Trait, TypeCode, TRAIT_BY_INDEX};
use crate::error::ScoringError;
use crate::likert::{LIKERT_MAX, LIKERT_MIN};

/// Mean gap between the top two traits above which the result is a pure type.
pub const TYPE_DIFF_THRESHOLD: f64 = 0.45;

/// Mean raw answer per trait.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct TraitScores {
    #[serde(rename = "LBI")]
    pub lbi: f64,
    #[serde(rename = "GZI")]
    pub gzi: f64,
    #[serde(rename = "MHI")]
    pub mhi: f64,
    #[serde(rename = "DDI")]
    pub ddi: f64,
}

impl TraitScores {
    pub fn new(lbi: f64, gzi: f64, mhi: f64, ddi: f64) -> Self {
        Self { lbi, gzi, mhi, ddi }
    }

    pub fn get(&self, t: Trait) -> f64 {
        match t {
            Trait::Lbi => self.lbi,
            Trait::Gzi => self.gzi,
            Trait::Mhi => self.mhi,
            Trait::Ddi => self.ddi,
        }
    }

    fn set(&mut self, t: Trait, value: f64) {
        match t {
            Trait::Lbi => self.lbi = value,
            Trait::Gzi => self.gzi = value,
            Trait::Mhi => self.mhi = value,
            Trait::Ddi => self.ddi = value,
        }
    }

    /// Traits ordered by descending score. Equal scores keep declaration order.
    pub fn ranked(&self) -> [Trait; 4] {
        let mut ranked = Trait::ALL;
        // slice::sort_by is stable
        ranked.sort_by(|a, b| {
            self.get(*b)
                .partial_cmp(&self.get(*a))
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatResult {
    pub scores: TraitScores,
    pub main_trait: Trait,
    pub sub_trait: Trait,
    pub type_code: TypeCode,
}

/// Average the answers per trait.
///
/// Unlike the profile engine this rejects anything outside [1,5] instead of
/// clamping it.
pub fn calc_trait_scores(answers: &[f64]) -> Result<TraitScores, ScoringError> {
    if answers.len() != TRAIT_BY_INDEX.len() {
        return Err(ScoringError::LengthMismatch {
            expected: TRAIT_BY_INDEX.len(),
            got: answers.len(),
        });
    }

    let mut sum = [0.0_f64; 4];
    let mut count = [0_usize; 4];

    for (i, (&value, t)) in answers.iter().zip(TRAIT_BY_INDEX).enumerate() {
        if !(f64::from(LIKERT_MIN)..=f64::from(LIKERT_MAX)).contains(&value) {
            return Err(ScoringError::OutOfRange {
                position: i + 1,
                value,
                min: LIKERT_MIN,
                max: LIKERT_MAX,
            });
        }
        sum[t.index()] += value;
        count[t.index()] += 1;
    }

    let mut scores = TraitScores::default();
    for t in Trait::ALL {
        let n = count[t.index()];
        let avg = if n == 0 { 0.0 } else { sum[t.index()] / n as f64 };
        scores.set(t, avg);
    }

    debug!(
        lbi = scores.lbi,
        gzi = scores.gzi,
        mhi = scores.mhi,
        ddi = scores.ddi,
        "calculated trait scores"
    );

    Ok(scores)
}

/// Pick main/sub traits and the type code from trait means.
pub fn decide_type(scores: TraitScores) -> LatResult {
    let ranked = scores.ranked();
    let main_trait = ranked[0];
    let sub_trait = ranked[1];
    let diff = scores.get(main_trait) - scores.get(sub_trait);

    let type_code = if diff > TYPE_DIFF_THRESHOLD {
        TypeCode::from(main_trait)
    } else {
        type_code_for_pair(main_trait, sub_trait)
    };

    debug!(
        main = %main_trait,
        sub = %sub_trait,
        diff,
        type_code = %type_code,
        "decided type"
    );

    LatResult {
        scores,
        main_trait,
        sub_trait,
        type_code,
    }
}

/// Composite code for ring neighbours, otherwise the main trait alone.
fn type_code_for_pair(main: Trait, sub: Trait) -> TypeCode {
    if main == sub {
        return TypeCode::from(main);
    }
    TypeCode::composite(main, sub).unwrap_or_else(|| TypeCode::from(main))
}

/// Answers straight through to a classification.
pub fn compute_lat_result(answers: &[f64]) -> Result<LatResult, ScoringError> {
    let scores = calc_trait_scores(answers)?;
    Ok(decide_type(scores))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn answers(lbi: f64, gzi: f64, mhi: f64, ddi: f64) -> Vec<f64> {
        [lbi, gzi, mhi, ddi]
            .iter()
            .flat_map(|&v| std::iter::repeat(v).take(4))
            .collect()
    }

    #[test]
    fn test_trait_means() {
        let scores = calc_trait_scores(&[
            5.0, 4.0, 3.0, 2.0, // LBI
            1.0, 1.0, 1.0, 2.0, // GZI
            3.0, 3.0, 3.0, 3.0, // MHI
            5.0, 5.0, 4.0, 4.0, // DDI
        ])
        .unwrap();
        assert_eq!(scores, TraitScores::new(3.5, 1.25, 3.0, 4.5));
    }

    #[test]
    fn test_length_mismatch() {
        for len in [0, 15, 17] {
            let err = calc_trait_scores(&vec![3.0; len]).unwrap_err();
            assert_eq!(
                err,
                ScoringError::LengthMismatch {
                    expected: 16,
                    got: len
                }
            );
        }
    }

    #[test]
    fn test_out_of_range_rejected_not_clamped() {
        for bad in [0.0, 6.0, -1.0] {
            let mut input = vec![3.0; 16];
            input[7] = bad;
            match calc_trait_scores(&input) {
                Err(ScoringError::OutOfRange { position, value, .. }) => {
                    assert_eq!(position, 8);
                    assert_eq!(value, bad);
                }
                other => panic!("expected OutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_nan_rejected() {
        let mut input = vec![3.0; 16];
        input[0] = f64::NAN;
        assert!(calc_trait_scores(&input).is_err());
    }

    #[test]
    fn test_pure_type_with_tied_sub() {
        let result = compute_lat_result(&answers(5.0, 1.0, 3.0, 3.0)).unwrap();
        assert_eq!(result.scores, TraitScores::new(5.0, 1.0, 3.0, 3.0));
        assert_eq!(result.main_trait, Trait::Lbi);
        // MHI and DDI tie; declaration order puts MHI first
        assert_eq!(result.sub_trait, Trait::Mhi);
        assert_eq!(result.type_code, TypeCode::Lbi);
    }

    #[test]
    fn test_composite_for_adjacent_pair() {
        let result = decide_type(TraitScores::new(3.6, 3.3, 2.0, 2.1));
        assert_eq!(result.main_trait, Trait::Lbi);
        assert_eq!(result.sub_trait, Trait::Gzi);
        assert_eq!(result.type_code, TypeCode::LbiGzi);
    }

    #[test]
    fn test_composite_wraps_around_ring() {
        let result = decide_type(TraitScores::new(3.0, 1.0, 1.0, 3.25));
        assert_eq!(result.main_trait, Trait::Ddi);
        assert_eq!(result.sub_trait, Trait::Lbi);
        assert_eq!(result.type_code, TypeCode::DdiLbi);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 0.45 - 0.0 is exactly the threshold
        let result = decide_type(TraitScores::new(0.45, 0.0, 0.0, 0.0));
        assert_eq!(result.sub_trait, Trait::Gzi);
        assert_eq!(result.type_code, TypeCode::LbiGzi);

        let result = decide_type(TraitScores::new(3.4501, 3.0, 1.0, 1.0));
        assert_eq!(result.type_code, TypeCode::Lbi);
    }

    #[test]
    fn test_diagonal_falls_back_to_main() {
        let result = decide_type(TraitScores::new(4.0, 2.0, 3.75, 1.0));
        assert_eq!(result.main_trait, Trait::Lbi);
        assert_eq!(result.sub_trait, Trait::Mhi);
        assert_eq!(result.type_code, TypeCode::Lbi);

        let result = decide_type(TraitScores::new(1.0, 3.0, 1.0, 3.25));
        assert_eq!(result.main_trait, Trait::Ddi);
        assert_eq!(result.sub_trait, Trait::Gzi);
        assert_eq!(result.type_code, TypeCode::Ddi);
    }

    #[test]
    fn test_full_tie_resolves_by_declaration_order() {
        let result = compute_lat_result(&answers(3.0, 3.0, 3.0, 3.0)).unwrap();
        assert_eq!(result.main_trait, Trait::Lbi);
        assert_eq!(result.sub_trait, Trait::Gzi);
        assert_eq!(result.type_code, TypeCode::LbiGzi);
    }

    #[test]
    fn test_tie_for_first_between_diagonals() {
        let result = decide_type(TraitScores::new(2.0, 4.0, 1.0, 4.0));
        assert_eq!(result.main_trait, Trait::Gzi);
        assert_eq!(result.sub_trait, Trait::Ddi);
        assert_eq!(result.type_code, TypeCode::Gzi);
    }

    #[test]
    fn test_same_trait_pair_is_pure() {
        assert_eq!(type_code_for_pair(Trait::Mhi, Trait::Mhi), TypeCode::Mhi);
    }

    #[test]
    fn test_ranked_is_stable() {
        let scores = TraitScores::new(2.0, 2.0, 2.0, 2.0);
        assert_eq!(scores.ranked(), Trait::ALL);
    }

    #[test]
    fn test_result_json_shape() {
        let result = compute_lat_result(&answers(5.0, 1.0, 3.0, 3.0)).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mainTrait"], "LBI");
        assert_eq!(json["subTrait"], "MHI");
        assert_eq!(json["typeCode"], "LBI");
        assert_eq!(json["scores"]["GZI"], 1.0);
    }

    proptest! {
        #[test]
        fn property_means_in_scale_and_traits_distinct(values in prop::collection::vec(1u8..=5, 16)) {
            let input: Vec<f64> = values.into_iter().map(f64::from).collect();
            let result = compute_lat_result(&input).unwrap();

            for t in Trait::ALL {
                let score = result.scores.get(t);
                prop_assert!((1.0..=5.0).contains(&score));
            }
            prop_assert_ne!(result.main_trait, result.sub_trait);
            prop_assert!(result.scores.get(result.main_trait) >= result.scores.get(result.sub_trait));
        }

        #[test]
        fn property_pure_type_only_above_margin(values in prop::collection::vec(1u8..=5, 16)) {
            let input: Vec<f64> = values.into_iter().map(f64::from).collect();
            let result = compute_lat_result(&input).unwrap();
            let diff = result.scores.get(result.main_trait) - result.scores.get(result.sub_trait);

            if diff > TYPE_DIFF_THRESHOLD {
                prop_assert_eq!(result.type_code, TypeCode::from(result.main_trait));
            } else if let Some(code) = TypeCode::composite(result.main_trait, result.sub_trait) {
                prop_assert_eq!(result.type_code, code);
            } else {
                prop_assert_eq!(result.type_code, TypeCode::from(result.main_trait));
            }
        }
    }
}
