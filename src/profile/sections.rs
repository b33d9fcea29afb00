use serde::Serialize;

use crate::locale::{Locale, Localized};

/// A single catalog entry: stable identifier plus the prompt shown to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub prompt: Localized,
}

const fn q(id: &'static str, en: &'static str, ja: &'static str) -> Question {
    Question {
        id,
        prompt: Localized::new(en, ja),
    }
}

/// One of the five scored sections of the profile quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Section {
    A,
    B,
    C,
    D,
    E,
}

/// Total number of profile questions across all sections (6+10+6+8+6).
pub const PROFILE_QUESTION_COUNT: usize = 36;

/// Identifiers whose raw answer is flipped before averaging.
/// Higher raw values on these items describe a less healthy pattern.
pub const REVERSE_KEYS: [&str; 12] = [
    "b_q1", "b_q2", "b_q3", "b_q6", "b_q8", "b_q9", // emotional patterns
    "d_q1", "d_q2", "d_q5", "d_q6", // self-disclosure
    "e_q4", "e_q5", // recovery
];

pub fn is_reverse_coded(id: &str) -> bool {
    REVERSE_KEYS.contains(&id)
}

const SECTION_A: [Question; 6] = [
    q(
        "a_q1",
        "How many people have you dated?",
        "これまでに付き合った人数は？",
    ),
    q(
        "a_q2",
        "How long was your longest relationship?",
        "最長の交際期間は？",
    ),
    q(
        "a_q3",
        "How long was your shortest relationship?",
        "最短の交際期間は？",
    ),
    q(
        "a_q4",
        "Who usually made the first confession?",
        "告白はどちらからが多かった？",
    ),
    q(
        "a_q5",
        "Have you ever lived together or been married (past included)?",
        "同棲または結婚経験は？（過去含む）",
    ),
    q(
        "a_q6",
        "Physical intimacy is an important part of romance",
        "夜の関係（スキンシップ）は恋愛の重要要素だと思う",
    ),
];

const SECTION_B: [Question; 10] = [
    q(
        "b_q1",
        "When my partner is in a bad mood I quickly blame myself",
        "相手の機嫌が悪いと、すぐ自分を責めてしまう",
    ),
    q(
        "b_q2",
        "I often feel jealous",
        "嫉妬を感じることが多い",
    ),
    q(
        "b_q3",
        "I tend to bottle up my feelings",
        "自分の感情を我慢してしまう",
    ),
    q(
        "b_q4",
        "I can openly lean on someone I like",
        "好きな人に対して素直に甘えられる",
    ),
    q(
        "b_q5",
        "When our values clash we can talk it through",
        "恋人と価値観が合わない時、話し合いで解決できる",
    ),
    q(
        "b_q6",
        "After a breakup I keep checking my ex's social media",
        "別れたあとも相手のSNSを見てしまう",
    ),
    q(
        "b_q7",
        "After a breakup we often make up after some time",
        "別れたあと、時間をおいて仲直りすることが多い",
    ),
    q(
        "b_q8",
        "I have felt I was dependent on a partner",
        "相手に「依存していた」と感じた経験がある",
    ),
    q(
        "b_q9",
        "I get anxious when my partner messages me less",
        "相手からの連絡が減ると不安になる",
    ),
    q(
        "b_q10",
        "I can put work or hobbies ahead of romance",
        "恋愛より仕事や趣味を優先できるタイプ",
    ),
];

const SECTION_C: [Question; 6] = [
    q(
        "c_q1",
        "Lots of physical affection makes me feel secure",
        "スキンシップが多いと安心する",
    ),
    q(
        "c_q2",
        "I act with my partner's comfort and wellbeing in mind",
        "相手の体調や快・不快を意識して行動できる",
    ),
    q(
        "c_q3",
        "I treat intimate time as an expression of love",
        "夜の時間を「愛情表現」として大事にする",
    ),
    q(
        "c_q4",
        "I dislike being pursued one-sidedly",
        "一方的に求められるのは苦手",
    ),
    q(
        "c_q5",
        "I can talk openly about intimacy",
        "性的な話題をオープンに話せる",
    ),
    q(
        "c_q6",
        "Physical compatibility affects how satisfied I am with a relationship",
        "恋人との肉体的相性は関係の満足度に影響する",
    ),
];

const SECTION_D: [Question; 8] = [
    q(
        "d_q1",
        "I find it hard to say no",
        "「嫌だ」と言うのが苦手",
    ),
    q(
        "d_q2",
        "I picture my partner's reaction and end up not saying what I think",
        "相手に本音を伝える前に、相手の反応を想像してやめる",
    ),
    q(
        "d_q3",
        "I am good at asking others for advice",
        "相談を人にするのが得意",
    ),
    q(
        "d_q4",
        "I can cry in front of my partner",
        "パートナーの前で泣ける",
    ),
    q(
        "d_q5",
        "Even when I trust my partner I worry about being betrayed",
        "相手を信じていても、裏切られる不安はある",
    ),
    q(
        "d_q6",
        "I feel pressure when a partner shares a secret with me",
        "相手に秘密を共有されたとき、プレッシャーを感じる",
    ),
    q(
        "d_q7",
        "I can be my real self around my partner",
        "相手の前で“素”を出せる",
    ),
    q(
        "d_q8",
        "I don't blame myself too much when romance goes wrong",
        "恋愛で失敗しても自分を責めすぎない",
    ),
];

const SECTION_E: [Question; 6] = [
    q(
        "e_q1",
        "I bounce back quickly from romantic setbacks",
        "恋愛で落ち込んだ時の立ち直りは早い方だ",
    ),
    q(
        "e_q2",
        "I put past mistakes to use the next time",
        "過去の失敗を次に活かせている",
    ),
    q(
        "e_q3",
        "I can look at myself objectively when I get emotional",
        "感情的になったとき、自分を客観視できる",
    ),
    q(
        "e_q4",
        "I find it hard to apologize to my partner",
        "相手に謝るのが苦手",
    ),
    q(
        "e_q5",
        "It takes me a long time to forgive myself",
        "自分を許すのに時間がかかる",
    ),
    q(
        "e_q6",
        "I feel romance has helped me grow as a person",
        "恋愛を通して人として成長したと感じる",
    ),
];

/// Tier a 0-100 section score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Middle,
    Low,
}

impl Tier {
    pub const HIGH_MIN: i32 = 65;
    pub const LOW_MAX: i32 = 40;

    pub fn for_score(score: i32) -> Self {
        if score >= Self::HIGH_MIN {
            Tier::High
        } else if score <= Self::LOW_MAX {
            Tier::Low
        } else {
            Tier::Middle
        }
    }
}

/// Word triple used to describe a section at each tier.
struct TierWords {
    high: Localized,
    low: Localized,
    middle: Localized,
}

impl Section {
    pub const ALL: [Section; 5] = [Section::A, Section::B, Section::C, Section::D, Section::E];

    /// Order in which tier words are joined into the composite label:
    /// stability, disclosure, resilience, experience, intimacy.
    pub const LABEL_ORDER: [Section; 5] =
        [Section::B, Section::D, Section::E, Section::A, Section::C];

    pub fn key(self) -> &'static str {
        match self {
            Section::A => "A",
            Section::B => "B",
            Section::C => "C",
            Section::D => "D",
            Section::E => "E",
        }
    }

    /// Array slot of this section inside per-section tables (A=0 .. E=4).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn questions(self) -> &'static [Question] {
        match self {
            Section::A => &SECTION_A,
            Section::B => &SECTION_B,
            Section::C => &SECTION_C,
            Section::D => &SECTION_D,
            Section::E => &SECTION_E,
        }
    }

    pub fn title(self, locale: Locale) -> &'static str {
        let title = match self {
            Section::A => Localized::new("Relationship history", "恋愛経験ヒストリー"),
            Section::B => Localized::new("Emotional patterns", "感情・関係パターン"),
            Section::C => Localized::new("Intimacy values", "親密度・性的価値観"),
            Section::D => Localized::new("Self-disclosure and trust", "自己開示・信頼"),
            Section::E => Localized::new("Recovery and growth", "回復と成長"),
        };
        title.get(locale)
    }

    fn tier_words(self) -> TierWords {
        match self {
            Section::A => TierWords {
                high: Localized::new("experienced", "経験値高め"),
                low: Localized::new("romance beginner", "恋愛ビギナー"),
                middle: Localized::new("average experience", "経験普通"),
            },
            Section::B => TierWords {
                high: Localized::new("stable", "安定型"),
                low: Localized::new("unstable", "不安定型"),
                middle: Localized::new("wavering", "波あり型"),
            },
            Section::C => TierWords {
                high: Localized::new("intimacy-oriented", "親密派"),
                low: Localized::new("distance-oriented", "距離派"),
                middle: Localized::new("balanced", "バランス派"),
            },
            Section::D => TierWords {
                high: Localized::new("high disclosure", "自己開示高め"),
                low: Localized::new("low disclosure", "自己開示低め"),
                middle: Localized::new("cautious", "慎重型"),
            },
            Section::E => TierWords {
                high: Localized::new("resilient", "回復力高め"),
                low: Localized::new("dwells on the past", "引きずり型"),
                middle: Localized::new("average recovery", "普通型"),
            },
        }
    }

    /// Descriptor for this section at the given score.
    pub fn tier_word(self, score: i32, locale: Locale) -> &'static str {
        let words = self.tier_words();
        let word = match Tier::for_score(score) {
            Tier::High => words.high,
            Tier::Low => words.low,
            Tier::Middle => words.middle,
        };
        word.get(locale)
    }
}

/// All question identifiers in section order A..E.
pub fn question_ids() -> impl Iterator<Item = &'static str> {
    Section::ALL
        .into_iter()
        .flat_map(|section| section.questions().iter().map(|q| q.id))
}
