//! Five-item self-rating check scored on a 0-10 slider per item.

use serde::Serialize;
use tracing::debug;

use crate::error::ScoringError;
use crate::likert::validate_scale;
use crate::locale::Localized;

pub const SLIDER_MIN: u8 = 0;
pub const SLIDER_MAX: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickItem {
    pub id: &'static str,
    pub prompt: Localized,
    pub hint: Localized,
}

pub const QUICK_ITEMS: [QuickItem; 5] = [
    QuickItem {
        id: "communication",
        prompt: Localized::new(
            "I can keep a conversation going even with someone I just met",
            "初対面の人とも会話を続けられる",
        ),
        hint: Localized::new(
            "From introductions to small talk without strain",
            "自己紹介〜雑談まで自然に話せるかどうか",
        ),
    },
    QuickItem {
        id: "empathy",
        prompt: Localized::new(
            "I imagine how the other person feels and act on it",
            "相手の気持ちを想像して行動できる",
        ),
        hint: Localized::new(
            "Whether you can stand in their shoes",
            "相手の立場に立って考えられるか",
        ),
    },
    QuickItem {
        id: "self_care",
        prompt: Localized::new(
            "I pay attention to grooming and cleanliness",
            "身だしなみ・清潔感に気を配っている",
        ),
        hint: Localized::new(
            "Hair, clothes, fitness, scent",
            "髪型・服装・体型・においなどのケア",
        ),
    },
    QuickItem {
        id: "stability",
        prompt: Localized::new(
            "I stay emotionally steady and talk calmly",
            "感情が安定していて、落ち着いて話せる",
        ),
        hint: Localized::new(
            "No taking out irritation, no sudden coldness",
            "イライラをぶつけない・急に冷たくならないなど",
        ),
    },
    QuickItem {
        id: "action",
        prompt: Localized::new(
            "I actually go where I can meet people",
            "出会いの場に「行動」できている",
        ),
        hint: Localized::new(
            "Events, apps, introductions",
            "イベント・アプリ・紹介などに参加しているか",
        ),
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickResult {
    pub ratings: Vec<u8>,
    /// Share of the maximum possible total, 0-100
    pub score: i32,
}

/// Score the quick check: `round(sum / (items * 10) * 100)`.
pub fn quick_score(values: &[f64]) -> Result<QuickResult, ScoringError> {
    validate_scale(values, QUICK_ITEMS.len(), SLIDER_MIN, SLIDER_MAX)?;

    let sum: f64 = values.iter().sum();
    let max = (QUICK_ITEMS.len() * usize::from(SLIDER_MAX)) as f64;
    let score = (sum / max * 100.0).round() as i32;

    debug!(sum, score, "scored quick check");

    Ok(QuickResult {
        ratings: values.iter().map(|&v| v as u8).collect(),
        score,
    })
}
