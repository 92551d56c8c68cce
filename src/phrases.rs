//! Static phrase tables.
//!
//! Two families of read-only data:
//! - AI-flavor phrases the engine strips out, grouped by [`AiCategory`].
//! - Human-flavor phrases the engine injects, grouped by [`HumanCategory`].
//!
//! User-supplied phrases (`verbalTics`, `personalPhrases`) are never merged into these
//! tables; callers concatenate them at read time via [`human_pool`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Category of a stock AI phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AiCategory {
    Transitions,
    Qualifiers,
    Openers,
    Conclusions,
    Academic,
    Corporate,
    Filler,
}

impl AiCategory {
    pub const ALL: [AiCategory; 7] = [
        AiCategory::Transitions,
        AiCategory::Qualifiers,
        AiCategory::Openers,
        AiCategory::Conclusions,
        AiCategory::Academic,
        AiCategory::Corporate,
        AiCategory::Filler,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AiCategory::Transitions => "transition",
            AiCategory::Qualifiers => "qualifier",
            AiCategory::Openers => "opener",
            AiCategory::Conclusions => "conclusion",
            AiCategory::Academic => "academic",
            AiCategory::Corporate => "corporate",
            AiCategory::Filler => "filler",
        }
    }

    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            AiCategory::Transitions => AI_TRANSITIONS,
            AiCategory::Qualifiers => AI_QUALIFIERS,
            AiCategory::Openers => AI_OPENERS,
            AiCategory::Conclusions => AI_CONCLUSIONS,
            AiCategory::Academic => AI_ACADEMIC,
            AiCategory::Corporate => AI_CORPORATE,
            AiCategory::Filler => AI_FILLER,
        }
    }

    /// Human pool a removed phrase of this category may be swapped for.
    pub fn replacement_pool(self) -> HumanCategory {
        match self {
            AiCategory::Transitions => HumanCategory::Transitions,
            AiCategory::Qualifiers => HumanCategory::Emphasis,
            _ => HumanCategory::Conversational,
        }
    }
}

/// Category of an injectable human phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumanCategory {
    Conversational,
    Emphasis,
    Transitions,
    Questions,
    Emotional,
}

impl HumanCategory {
    pub const ALL: [HumanCategory; 5] = [
        HumanCategory::Conversational,
        HumanCategory::Emphasis,
        HumanCategory::Transitions,
        HumanCategory::Questions,
        HumanCategory::Emotional,
    ];

    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            HumanCategory::Conversational => HUMAN_CONVERSATIONAL,
            HumanCategory::Emphasis => HUMAN_EMPHASIS,
            HumanCategory::Transitions => HUMAN_TRANSITIONS,
            HumanCategory::Questions => HUMAN_QUESTIONS,
            HumanCategory::Emotional => HUMAN_EMOTIONAL,
        }
    }
}

// ---------------------------------------------------------------------------
// AI-flavor phrases
// ---------------------------------------------------------------------------

pub const AI_TRANSITIONS: &[&str] = &[
    "總而言之",
    "總的來說",
    "值得注意的是",
    "不僅如此",
    "此外",
    "綜上所述",
    "另一方面",
    "首先",
    "其次",
    "最後",
    "總結來說",
    "換句話說",
    "更重要的是",
    "與此同時",
    "因此",
    "所以說",
    "In conclusion",
    "Furthermore",
    "Moreover",
    "Additionally",
    "It is worth noting",
    "It should be noted",
];

pub const AI_QUALIFIERS: &[&str] = &[
    "深入探討",
    "至關重要",
    "強大的",
    "先進的",
    "革命性的",
    "創新的",
    "顛覆性的",
    "前所未有的",
    "極其重要的",
    "顯著的",
    "powerful",
    "revolutionary",
    "cutting-edge",
    "state-of-the-art",
];

pub const AI_OPENERS: &[&str] = &[
    "本文將探討",
    "在當今世界",
    "隨著科技發展",
    "眾所周知",
    "不可否認的是",
    "在這個時代",
    "近年來",
    "研究表明",
    "In today's world",
    "It is well known that",
    "Studies show",
];

pub const AI_CONCLUSIONS: &[&str] = &[
    "總結",
    "綜觀全文",
    "由此可見",
    "結論是",
    "In summary",
    "To conclude",
    "In closing",
];

pub const AI_ACADEMIC: &[&str] = &[
    "研究顯示",
    "數據表明",
    "分析結果指出",
    "從學術角度來看",
    "根據相關研究",
    "理論上而言",
    "Research indicates",
    "Data suggests",
];

pub const AI_CORPORATE: &[&str] = &[
    "充分利用",
    "協同效應",
    "全方位解決方案",
    "賦能",
    "打造生態",
    "核心競爭力",
    "leverage",
    "synergy",
    "holistic solution",
];

pub const AI_FILLER: &[&str] = &[
    "如前所述",
    "正如我們所知",
    "毋庸置疑",
    "不言而喻",
    "眾所皆知",
    "As mentioned earlier",
    "Needless to say",
];

/// Every blacklisted phrase, in category order.
pub fn all_ai_phrases() -> impl Iterator<Item = (AiCategory, &'static str)> {
    AiCategory::ALL
        .into_iter()
        .flat_map(|c| c.phrases().iter().map(move |p| (c, *p)))
}

/// Exact-token check used by the keyword extractor.
pub fn is_ai_phrase(word: &str) -> bool {
    all_ai_phrases().any(|(_, p)| p == word)
}

// ---------------------------------------------------------------------------
// Human-flavor phrases
// ---------------------------------------------------------------------------

pub const HUMAN_CONVERSATIONAL: &[&str] = &[
    "說實話",
    "我跟你講",
    "重點來了",
    "有趣的是",
    "你知道嗎",
    "老實說",
    "坦白講",
    "說真的",
    "其實啊",
    "話說回來",
    "對了",
    "順帶一提",
    "說到這個",
    "想想看",
    "說起來",
];

pub const HUMAN_EMPHASIS: &[&str] = &[
    "真的",
    "其實",
    "確實",
    "沒錯",
    "對吧",
    "是不是",
    "你說呢",
    "想想也是",
    "就是說",
];

pub const HUMAN_TRANSITIONS: &[&str] = &[
    "而且啊",
    "更棒的是",
    "我還發現",
    "接著說",
    "那麼",
    "這樣說吧",
    "換個角度看",
    "不過話說",
    "再說了",
    "關鍵是",
];

pub const HUMAN_QUESTIONS: &[&str] = &[
    "你有沒有想過",
    "這代表什麼呢",
    "為什麼會這樣",
    "是不是很神奇",
    "你猜怎麼著",
];

pub const HUMAN_EMOTIONAL: &[&str] = &[
    "我認為",
    "我覺得",
    "讓我驚訝的是",
    "老實講我有點意外",
    "這讓我很興奮",
    "說真的有點感動",
];

/// Fixed tokens counted as emotional markers by the scorer and the detector.
pub const EMOTIONAL_MARKERS: &[&str] = &[
    "我認為",
    "我覺得",
    "說實話",
    "其實",
    "真的",
    "！",
    "!",
    "...",
    "I think",
    "honestly",
];

// ---------------------------------------------------------------------------
// Fixed insertion pools used by individual passes
// ---------------------------------------------------------------------------

pub const OPINIONS: &[&str] = &[
    "這真的很值得思考",
    "說真的，這點蠻重要的",
    "我覺得這是關鍵",
    "這讓人印象深刻",
    "有意思的是這個現象",
    "這確實說明了問題",
];

pub const CONVERSATIONAL_ASIDES: &[&str] = &[
    "說真的，我當初也是這麼想的",
    "這讓我想起了一件事",
    "順帶一提，這很有意思",
    "對了，你可能也發現了",
    "其實仔細想想也是",
];

pub const NARRATIVE_HOOKS: &[&str] = &[
    "但故事還沒結束。",
    "接下來的發展更有意思。",
    "然後事情開始變得複雜了。",
    "這只是開始。",
    "重點來了。",
];

pub const PERSONALITY_ASIDES: &[&str] = &[
    "沒錯，就是這樣",
    "你懂我意思吧",
    "這很重要",
    "記住這點",
    "想想看",
];

pub const SELF_CORRECTIONS: &[&str] = &[
    "等等，我想我說錯了。",
    "嗯，讓我換個說法。",
    "不對，應該這樣講。",
    "好吧，這樣說不太精確。",
];

pub const TOPIC_SHIFTS: &[&str] = &[
    "說到這個...",
    "話說回來，",
    "等一下，我突然想到，",
    "扯遠了，回到正題，",
];

pub const TANGENTS: &[&str] = &[
    "（順帶一提，這讓我想起...）",
    "（不過這是另一個故事了）",
    "（我朋友也遇過類似的事）",
    "（這點我之後再聊）",
];

/// Adverbs whose clause may end with an exclamation mark instead of a full stop.
pub const EMPHASIS_ADVERBS: &[&str] = &[
    "真的", "確實", "非常", "超級", "太", "really", "indeed", "very", "truly",
];

/// Formal connectives the detector treats as stiffness signals.
pub const FORMAL_CONNECTIVES: &[&str] = &[
    "此一",
    "隨後",
    "務實而言",
    "實為",
    "藉由",
    "予以",
    "旨在",
    "鑑於",
    "thereby",
    "hence",
    "thus",
    "whereby",
    "notwithstanding",
];

/// Enumeration words; a long run of these reads like a generated outline.
pub const ENUMERATION_WORDS: &[&str] = &[
    "首先", "其次", "再者", "第一", "第二", "第三", "最後", "first", "second", "third", "finally",
];

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

/// A blacklisted phrase compiled for case-insensitive matching.
#[derive(Debug)]
pub struct CompiledPhrase {
    pub category: AiCategory,
    pub phrase: &'static str,
    /// Matches the bare phrase.
    pub bare: Regex,
    /// Matches the phrase plus one optional trailing separator and inline spacing.
    pub with_separator: Regex,
}

pub static COMPILED_AI_PHRASES: Lazy<Vec<CompiledPhrase>> = Lazy::new(|| {
    all_ai_phrases()
        .map(|(category, phrase)| {
            let esc = word_bounded(phrase);
            CompiledPhrase {
                category,
                phrase,
                bare: Regex::new(&format!("(?i){esc}")).expect("ai phrase regex"),
                with_separator: Regex::new(&format!("(?i){esc}[，,。.：:]?[ \\t]*"))
                    .expect("ai phrase regex"),
            }
        })
        .collect()
});

// Latin phrases only match whole words, so `leverage` leaves `leveraged` alone.
fn word_bounded(phrase: &str) -> String {
    let esc = regex::escape(phrase);
    if !phrase.is_ascii() {
        return esc;
    }
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
    let head = if is_word(phrase.chars().next()) { r"\b" } else { "" };
    let tail = if is_word(phrase.chars().last()) { r"\b" } else { "" };
    format!("{head}{esc}{tail}")
}

/// Built-in pool for `category` followed by the caller's extras (empty entries skipped).
pub fn human_pool<'a>(category: HumanCategory, extras: &'a [String]) -> Vec<&'a str> {
    let mut pool: Vec<&'a str> = category.phrases().to_vec();
    pool.extend(
        extras
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty()),
    );
    pool
}

/// Clause joiner matching the script of `phrase`.
pub fn joiner(phrase: &str) -> &'static str {
    if phrase.is_ascii() {
        ", "
    } else {
        "，"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ai_phrase_compiles_and_matches_itself() {
        for cp in COMPILED_AI_PHRASES.iter() {
            assert!(cp.bare.is_match(cp.phrase), "{} should match itself", cp.phrase);
        }
        assert_eq!(COMPILED_AI_PHRASES.len(), all_ai_phrases().count());
    }

    #[test]
    fn latin_phrases_match_case_insensitively() {
        let cp = COMPILED_AI_PHRASES
            .iter()
            .find(|c| c.phrase == "Furthermore")
            .unwrap();
        assert!(cp.bare.is_match("FURTHERMORE, it rained."));
        let m = cp.with_separator.find("furthermore, it rained.").unwrap();
        assert_eq!(m.as_str(), "furthermore, ");
    }

    #[test]
    fn latin_phrases_do_not_match_inside_longer_words() {
        let cp = COMPILED_AI_PHRASES
            .iter()
            .find(|c| c.phrase == "leverage")
            .unwrap();
        assert!(!cp.bare.is_match("We leveraged the data."));
        assert!(cp.bare.is_match("We leverage the data."));
        assert!(cp.with_separator.is_match("Leverage, always."));
    }

    #[test]
    fn human_pools_never_contain_blacklisted_phrases() {
        for cat in HumanCategory::ALL {
            for p in cat.phrases() {
                assert!(
                    !all_ai_phrases().any(|(_, ai)| p.contains(ai)),
                    "human phrase {p} contains an AI phrase"
                );
            }
        }
    }

    #[test]
    fn human_pool_appends_trimmed_extras() {
        let extras = vec!["  我的天啊 ".to_string(), "".to_string(), "   ".to_string()];
        let pool = human_pool(HumanCategory::Conversational, &extras);
        assert_eq!(pool.len(), HUMAN_CONVERSATIONAL.len() + 1);
        assert_eq!(*pool.last().unwrap(), "我的天啊");
    }
}
