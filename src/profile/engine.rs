use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::sections::{is_reverse_coded, Section};
use crate::likert::{clamp_likert, mean, mean_to_percent, reverse_likert};
use crate::locale::Locale;

/// Raw profile answers keyed by question identifier (`a_q1` .. `e_q6`).
///
/// Values that are not JSON numbers (null, strings, missing keys) count as
/// unanswered and are left out of their section's mean.
pub type ProfileAnswers = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionScore {
    pub section: Section,
    /// Mean of the normalized 1-5 answers, 0.0 when nothing was answered
    pub mean: f64,
    /// `mean` mapped onto 0-100
    pub score: i32,
    /// Number of answers that contributed to `mean`
    pub answered: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// One entry per section, in A..E order
    pub sections: [SectionScore; 5],
    pub overall: i32,
    pub label: String,
}

impl ScoreResult {
    pub fn score(&self, section: Section) -> i32 {
        self.sections[section.index()].score
    }

    pub fn mean(&self, section: Section) -> f64 {
        self.sections[section.index()].mean
    }

    /// Rebuild the composite label in another locale.
    pub fn label_in(&self, locale: Locale) -> String {
        build_label(&self.sections, locale)
    }
}

/// Score a profile answer set.
///
/// Every numeric answer is clamped to [1,5] and reverse-coded items are
/// flipped before averaging, so this never fails: out-of-range values are
/// pulled in and non-numeric values are skipped.
pub fn score_sections(answers: &ProfileAnswers) -> ScoreResult {
    let sections = Section::ALL.map(|section| score_section(section, answers));

    let total: i32 = sections.iter().map(|s| s.score).sum();
    let overall = (f64::from(total) / sections.len() as f64).round() as i32;
    let label = build_label(&sections, Locale::En);

    debug!(overall, label = %label, "scored profile");

    ScoreResult {
        sections,
        overall,
        label,
    }
}

fn score_section(section: Section, answers: &ProfileAnswers) -> SectionScore {
    let values: Vec<f64> = section
        .questions()
        .iter()
        .filter_map(|question| {
            let raw = answers.get(question.id).and_then(Value::as_f64)?;
            Some(normalize_answer(question.id, raw))
        })
        .collect();

    let section_mean = mean(&values);
    let score = mean_to_percent(section_mean);

    debug!(
        section = section.key(),
        answered = values.len(),
        mean = section_mean,
        score,
        "scored section"
    );

    SectionScore {
        section,
        mean: section_mean,
        score,
        answered: values.len(),
    }
}

/// Clamp to the 1-5 scale and flip reverse-coded items.
pub fn normalize_answer(id: &str, raw: f64) -> f64 {
    if is_reverse_coded(id) {
        reverse_likert(raw)
    } else {
        clamp_likert(raw)
    }
}

fn build_label(sections: &[SectionScore; 5], locale: Locale) -> String {
    Section::LABEL_ORDER
        .iter()
        .map(|&section| section.tier_word(sections[section.index()].score, locale))
        .collect::<Vec<_>>()
        .join(" / ")
}
