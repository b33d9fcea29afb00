use serde::{Deserialize, Serialize};

use crate::locale::{Locale, Localized};

/// One of the four scored traits, declared in ring order.
///
/// The declaration order doubles as the tie-break priority when two traits
/// share a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Trait {
    /// Love vibes: how fast and hard feelings kick in
    #[serde(rename = "LBI")]
    Lbi,
    /// Mood swings: sensitivity to distance and replies
    #[serde(rename = "GZI")]
    Gzi,
    /// Attachment depth: getting hooked and holding on
    #[serde(rename = "MHI")]
    Mhi,
    /// Drama: intensity and volatility in conflict
    #[serde(rename = "DDI")]
    Ddi,
}

impl Trait {
    pub const ALL: [Trait; 4] = [Trait::Lbi, Trait::Gzi, Trait::Mhi, Trait::Ddi];

    pub fn code(self) -> &'static str {
        match self {
            Trait::Lbi => "LBI",
            Trait::Gzi => "GZI",
            Trait::Mhi => "MHI",
            Trait::Ddi => "DDI",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self, locale: Locale) -> &'static str {
        let name = match self {
            Trait::Lbi => Localized::new("Love vibes", "恋バイブス"),
            Trait::Gzi => Localized::new("Mood swings", "温度差ゆらぎ"),
            Trait::Mhi => Localized::new("Attachment depth", "沼り度"),
            Trait::Ddi => Localized::new("Drama", "ドラマ性"),
        };
        name.get(locale)
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Final classification: a pure trait or a composite of two ring neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TypeCode {
    #[serde(rename = "LBI")]
    Lbi,
    #[serde(rename = "GZI")]
    Gzi,
    #[serde(rename = "MHI")]
    Mhi,
    #[serde(rename = "DDI")]
    Ddi,
    #[serde(rename = "LBI_GZI")]
    LbiGzi,
    #[serde(rename = "GZI_MHI")]
    GziMhi,
    #[serde(rename = "MHI_DDI")]
    MhiDdi,
    #[serde(rename = "DDI_LBI")]
    DdiLbi,
}

/// Ring neighbours and the composite code each pair maps to.
/// LBI-MHI and GZI-DDI are diagonals and have no entry.
const ADJACENCY: [(Trait, Trait, TypeCode); 4] = [
    (Trait::Lbi, Trait::Gzi, TypeCode::LbiGzi),
    (Trait::Gzi, Trait::Mhi, TypeCode::GziMhi),
    (Trait::Mhi, Trait::Ddi, TypeCode::MhiDdi),
    (Trait::Ddi, Trait::Lbi, TypeCode::DdiLbi),
];

impl TypeCode {
    pub const ALL: [TypeCode; 8] = [
        TypeCode::Lbi,
        TypeCode::Gzi,
        TypeCode::Mhi,
        TypeCode::Ddi,
        TypeCode::LbiGzi,
        TypeCode::GziMhi,
        TypeCode::MhiDdi,
        TypeCode::DdiLbi,
    ];

    /// Composite code for an unordered trait pair, `None` for diagonals and
    /// for a trait paired with itself.
    pub fn composite(a: Trait, b: Trait) -> Option<TypeCode> {
        ADJACENCY
            .iter()
            .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
            .map(|(_, _, code)| *code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeCode::Lbi => "LBI",
            TypeCode::Gzi => "GZI",
            TypeCode::Mhi => "MHI",
            TypeCode::Ddi => "DDI",
            TypeCode::LbiGzi => "LBI_GZI",
            TypeCode::GziMhi => "GZI_MHI",
            TypeCode::MhiDdi => "MHI_DDI",
            TypeCode::DdiLbi => "DDI_LBI",
        }
    }

    /// The traits this code stands for: one for pure codes, two for composites.
    pub fn traits(self) -> Vec<Trait> {
        match self {
            TypeCode::Lbi => vec![Trait::Lbi],
            TypeCode::Gzi => vec![Trait::Gzi],
            TypeCode::Mhi => vec![Trait::Mhi],
            TypeCode::Ddi => vec![Trait::Ddi],
            composite => ADJACENCY
                .iter()
                .find(|(_, _, code)| *code == composite)
                .map(|(a, b, _)| vec![*a, *b])
                .unwrap_or_default(),
        }
    }

    pub fn is_composite(self) -> bool {
        self.traits().len() == 2
    }

    /// Display name built from the trait names, e.g. "Love vibes × Mood swings".
    pub fn name(self, locale: Locale) -> String {
        self.traits()
            .iter()
            .map(|t| t.name(locale))
            .collect::<Vec<_>>()
            .join(" × ")
    }
}

impl From<Trait> for TypeCode {
    fn from(t: Trait) -> Self {
        match t {
            Trait::Lbi => TypeCode::Lbi,
            Trait::Gzi => TypeCode::Gzi,
            Trait::Mhi => TypeCode::Mhi,
            Trait::Ddi => TypeCode::Ddi,
        }
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatQuestion {
    /// 1-based question number
    pub id: u8,
    pub measures: Trait,
    pub prompt: Localized,
}

pub const LAT_QUESTION_COUNT: usize = 16;

const fn lq(id: u8, measures: Trait, en: &'static str, ja: &'static str) -> LatQuestion {
    LatQuestion {
        id,
        measures,
        prompt: Localized::new(en, ja),
    }
}

/// Question catalog, ordered by id.
pub const LAT_QUESTIONS: [LatQuestion; LAT_QUESTION_COUNT] = [
    lq(
        1,
        Trait::Lbi,
        "When you fall for someone, your feelings kick in fast, right?",
        "恋したらさ、気持ち入るの早めじゃない？",
    ),
    lq(
        2,
        Trait::Lbi,
        "Once you like someone, you make your move quickly?",
        "好きになったら行動早くなるタイプよね？",
    ),
    lq(
        3,
        Trait::Lbi,
        "When things click, does everything else get a bit neglected?",
        "いい感じになると、他のことちょい疎かになりがちじゃない？",
    ),
    lq(
        4,
        Trait::Lbi,
        "Do you sometimes set up a date on a whim?",
        "その場のノリでデート決めることあるよね？",
    ),
    lq(
        5,
        Trait::Gzi,
        "Are there days your mood hangs on how fast they reply?",
        "相手の返信の速さで気持ち左右されちゃう日ある？",
    ),
    lq(
        6,
        Trait::Gzi,
        "Ever been told your highs and lows get huge when you're in love?",
        "恋愛中さ、テンションの波けっこうデカいって言われたことある？",
    ),
    lq(
        7,
        Trait::Gzi,
        "Super close when you're together, suddenly distant when apart?",
        "距離近い時はめっちゃ近くて、離れると急に離れるタイプ？",
    ),
    lq(
        8,
        Trait::Gzi,
        "Do you read too much into one remark and wear yourself out?",
        "相手の一言を深読みしすぎて、自分でしんどくなることない？",
    ),
    lq(
        9,
        Trait::Mhi,
        "Do you end up checking your crush's social media?",
        "気になる人のSNS、つい見ちゃうことあるよね？",
    ),
    lq(
        10,
        Trait::Mhi,
        "When you feel anxious, do your messages pile up?",
        "不安なとき連絡ちょい増えがちじゃない？",
    ),
    lq(
        11,
        Trait::Mhi,
        "Once you like someone, do you hang on for a long time?",
        "一回好きなると、わりと長く引きずる方じゃない？",
    ),
    lq(
        12,
        Trait::Mhi,
        "When you're in love, do you tend to put yourself last?",
        "恋してるとき、自分のこと後回しにしがちだったりする？",
    ),
    lq(
        13,
        Trait::Ddi,
        "In a fight, do your emotions come out strong?",
        "喧嘩すると感情つい強めに出ちゃうほう？",
    ),
    lq(
        14,
        Trait::Ddi,
        "Do people say your likes and dislikes are really clear?",
        "好き嫌いハッキリしてるってよく言われない？",
    ),
    lq(
        15,
        Trait::Ddi,
        "Does romance somehow always turn dramatic for you?",
        "恋愛ってさ、なんかドラマチックになりがちじゃない？",
    ),
    lq(
        16,
        Trait::Ddi,
        "Do you blurt things out in the moment and regret it later?",
        "勢いで言っちゃって、あとで後悔するやつ…あるよね？",
    ),
];

/// Answer position -> trait, derived from the catalog at compile time.
pub const TRAIT_BY_INDEX: [Trait; LAT_QUESTION_COUNT] = {
    let mut table = [Trait::Lbi; LAT_QUESTION_COUNT];
    let mut i = 0;
    while i < LAT_QUESTION_COUNT {
        table[i] = LAT_QUESTIONS[i].measures;
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_sequential() {
        for (i, question) in LAT_QUESTIONS.iter().enumerate() {
            assert_eq!(question.id as usize, i + 1);
        }
    }

    #[test]
    fn test_prompts_localized() {
        assert_eq!(
            LAT_QUESTIONS[0].prompt.get(Locale::Ja),
            "恋したらさ、気持ち入るの早めじゃない？"
        );
        assert_eq!(
            LAT_QUESTIONS[15].prompt.get(Locale::En),
            "Do you blurt things out in the moment and regret it later?"
        );
        for question in LAT_QUESTIONS {
            assert_ne!(question.prompt.en, question.prompt.ja, "question {}", question.id);
        }
    }

    #[test]
    fn test_four_questions_per_trait() {
        for t in Trait::ALL {
            let count = TRAIT_BY_INDEX.iter().filter(|&&x| x == t).count();
            assert_eq!(count, 4, "trait {}", t);
        }
    }

    #[test]
    fn test_trait_by_index_layout() {
        assert_eq!(TRAIT_BY_INDEX[0], Trait::Lbi);
        assert_eq!(TRAIT_BY_INDEX[4], Trait::Gzi);
        assert_eq!(TRAIT_BY_INDEX[8], Trait::Mhi);
        assert_eq!(TRAIT_BY_INDEX[15], Trait::Ddi);
    }

    #[test]
    fn test_composite_is_unordered() {
        assert_eq!(TypeCode::composite(Trait::Lbi, Trait::Gzi), Some(TypeCode::LbiGzi));
        assert_eq!(TypeCode::composite(Trait::Gzi, Trait::Lbi), Some(TypeCode::LbiGzi));
        assert_eq!(TypeCode::composite(Trait::Lbi, Trait::Ddi), Some(TypeCode::DdiLbi));
        assert_eq!(TypeCode::composite(Trait::Ddi, Trait::Mhi), Some(TypeCode::MhiDdi));
        assert_eq!(TypeCode::composite(Trait::Mhi, Trait::Gzi), Some(TypeCode::GziMhi));
    }

    #[test]
    fn test_diagonals_have_no_composite() {
        assert_eq!(TypeCode::composite(Trait::Lbi, Trait::Mhi), None);
        assert_eq!(TypeCode::composite(Trait::Mhi, Trait::Lbi), None);
        assert_eq!(TypeCode::composite(Trait::Gzi, Trait::Ddi), None);
        assert_eq!(TypeCode::composite(Trait::Ddi, Trait::Gzi), None);
        assert_eq!(TypeCode::composite(Trait::Lbi, Trait::Lbi), None);
    }

    #[test]
    fn test_each_trait_has_two_neighbours() {
        for t in Trait::ALL {
            let neighbours = Trait::ALL
                .iter()
                .filter(|&&other| TypeCode::composite(t, other).is_some())
                .count();
            assert_eq!(neighbours, 2);
        }
    }

    #[test]
    fn test_type_code_serde_strings() {
        for code in TypeCode::ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
        let parsed: TypeCode = serde_json::from_str("\"MHI_DDI\"").unwrap();
        assert_eq!(parsed, TypeCode::MhiDdi);
    }

    #[test]
    fn test_type_code_traits() {
        assert_eq!(TypeCode::Gzi.traits(), vec![Trait::Gzi]);
        assert_eq!(TypeCode::DdiLbi.traits(), vec![Trait::Ddi, Trait::Lbi]);
        assert!(TypeCode::GziMhi.is_composite());
        assert!(!TypeCode::Mhi.is_composite());
        assert_eq!(TypeCode::ALL.iter().filter(|c| c.is_composite()).count(), 4);
    }

    #[test]
    fn test_type_code_names() {
        assert_eq!(TypeCode::LbiGzi.name(Locale::En), "Love vibes × Mood swings");
        assert_eq!(TypeCode::Ddi.name(Locale::Ja), "ドラマ性");
    }

    #[test]
    fn test_pure_code_from_trait() {
        for t in Trait::ALL {
            assert_eq!(TypeCode::from(t).as_str(), t.code());
        }
    }
}
