//! AI-relevance filter for sentences.

use crate::language::LanguageTag;

/// Sentences shorter than this many characters are never AI-relevant.
pub const MIN_SENTENCE_LEN: usize = 20;

const AI_KEYWORDS_EN: &[&str] = &[
    "artificial intelligence",
    "ai",
    "machine learning",
    "deep learning",
    "neural network",
    "nlp",
    "natural language processing",
    "computer vision",
    "generative ai",
    "foundation model",
    "large language model",
    "llm",
];

const AI_KEYWORDS_DE: &[&str] = &[
    "künstliche intelligenz",
    "ki",
    "maschinelles lernen",
    "deep learning",
    "neuronales netz",
    "nlp",
    "natürliche sprachverarbeitung",
    "computer vision",
    "generative ki",
    "foundation model",
    "großes sprachmodell",
    "llm",
];

/// Keyword set for a release language. Anything not German uses English.
#[must_use]
pub fn keywords_for(lang: &LanguageTag) -> &'static [&'static str] {
    if lang.is_german() {
        AI_KEYWORDS_DE
    } else {
        AI_KEYWORDS_EN
    }
}

/// Whether a sentence talks about AI.
///
/// Requires at least [`MIN_SENTENCE_LEN`] characters and a keyword occurring
/// as a plain substring of the lowercased sentence. Short keywords therefore
/// also hit inside longer words ("ai" in "maintain", "ki" in "skills").
#[must_use]
pub fn mentions_ai(sentence: &str, lang: &LanguageTag) -> bool {
    if sentence.chars().count() < MIN_SENTENCE_LEN {
        return false;
    }
    let lower = sentence.to_lowercase();
    keywords_for(lang).iter().any(|k| lower.contains(k))
}
