pub mod answers;
pub mod comment;
pub mod engine;
pub mod sections;

pub use answers::{profile_answers_from_vector, validate_profile_answers};
pub use comment::provisional_comment;
pub use engine::{normalize_answer, score_sections, ProfileAnswers, ScoreResult, SectionScore};
pub use sections::{
    is_reverse_coded, question_ids, Question, Section, Tier, PROFILE_QUESTION_COUNT, REVERSE_KEYS,
};
