use crate::locale::{Locale, Localized};

const HIGH: Localized = Localized::new(
    "Your relationship skills are well above average and you read people easily. \
     You tend to coast and leave things unsaid, though, so don't skip putting your affection into words.",
    "恋愛力はかなり高め。相手の心理も読めるタイプ。ただ“余裕ぶって放置”しがちなので、好意の言語化はサボるな。",
);

const MIDDLE: Localized = Localized::new(
    "Above average. Not bad, but some unconscious complacency remains. \
     If emotions (B) and trust (D) stay weak you will let good partners slip away.",
    "平均より上。悪くないけど“無意識の甘さ”が残ってる。特に感情(B)と信頼(D)が弱いと、良い相手を逃すぞ。",
);

const LOW: Localized = Localized::new(
    "Honestly, your approach to romance is sloppy. Emotional swings (B) and weak self-disclosure (D) \
     are likely holding you back. Stop waiting for the other person to move and fix it through action.",
    "正直、恋愛の設計が雑。感情(B)の揺れや自己開示(D)の弱さが足を引っ張ってる可能性大。まずは“相手の反応待ち”をやめて行動で改善しよう。",
);

/// Fixed comment shown when no externally written comment is stored for a result.
pub fn provisional_comment(overall: i32, locale: Locale) -> &'static str {
    let text = if overall >= 70 {
        HIGH
    } else if overall >= 50 {
        MIDDLE
    } else {
        LOW
    };
    text.get(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        assert_eq!(provisional_comment(100, Locale::En), HIGH.en);
        assert_eq!(provisional_comment(70, Locale::En), HIGH.en);
        assert_eq!(provisional_comment(69, Locale::En), MIDDLE.en);
        assert_eq!(provisional_comment(50, Locale::En), MIDDLE.en);
        assert_eq!(provisional_comment(49, Locale::En), LOW.en);
        assert_eq!(provisional_comment(0, Locale::En), LOW.en);
    }

    #[test]
    fn test_japanese_text() {
        assert!(provisional_comment(75, Locale::Ja).starts_with("恋愛力はかなり高め"));
    }
}
