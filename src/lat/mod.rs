pub mod engine;
pub mod traits;

pub use engine::{
    calc_trait_scores, compute_lat_result, decide_type, LatResult, TraitScores,
    TYPE_DIFF_THRESHOLD,
};
pub use traits::{LatQuestion, Trait, TypeCode, LAT_QUESTIONS, LAT_QUESTION_COUNT, TRAIT_BY_INDEX};
