//! Per-sentence sentiment scoring.
//!
//! English (and any non-German language) uses the VADER compound score.
//! German uses a small weighted lexicon with whole-word matching and sign
//! inversion on negation. Only exact word forms are matched, so inflected
//! forms such as "gute" or "guten" do not count.

use std::sync::LazyLock;

use regex::Regex;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::SentimentError;
use crate::language::LanguageTag;
use crate::types::SentimentLabel;

/// Scores at or above this value are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores at or below this value are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// German word weights. Keys are lowercase whole words.
pub(crate) const GERMAN_LEXICON: &[(&str, f64)] = &[
    ("gut", 2.0),
    ("positiv", 1.5),
    ("erfolgreich", 1.5),
    ("stark", 1.0),
    ("stärken", 1.0),
    ("verbessert", 1.2),
    ("schwach", -1.0),
    ("problem", -1.5),
    ("kritisch", -1.5),
    ("fehler", -1.5),
    ("risiko", -1.5),
    ("negativ", -1.5),
    ("verlust", -1.5),
];

/// Raw German sums are divided by this before clamping.
const GERMAN_NORMALIZER: f64 = 3.0;

static GERMAN_PATTERNS: LazyLock<Vec<(Regex, f64)>> = LazyLock::new(|| {
    GERMAN_LEXICON
        .iter()
        .map(|&(word, weight)| {
            let re = Regex::new(&format!(r"\b{}\b", regex::escape(word)))
                .expect("valid lexicon regex");
            (re, weight)
        })
        .collect()
});

static GERMAN_NEGATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(nicht|kein|keine|nie|ohne)\b").expect("valid negation regex")
});

static ENGLISH_ANALYZER: LazyLock<SentimentIntensityAnalyzer<'static>> =
    LazyLock::new(SentimentIntensityAnalyzer::new);

/// Produces a signed sentiment score for one sentence.
pub trait ScoreSentence {
    /// Score `sentence`, written in `lang`, into `[-1.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Scoring`] if the backend produces no usable value.
    fn score(&self, lang: &LanguageTag, sentence: &str) -> Result<f64, SentimentError>;
}

/// Default scorer: German lexicon for `de*`, VADER for everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl ScoreSentence for LexiconScorer {
    fn score(&self, lang: &LanguageTag, sentence: &str) -> Result<f64, SentimentError> {
        let raw = if lang.is_german() {
            german_score(sentence)
        } else {
            english_score(sentence).ok_or_else(|| SentimentError::Scoring {
                sentence: sentence.to_string(),
                reason: "VADER returned no compound score".to_string(),
            })?
        };

        if !raw.is_finite() {
            return Err(SentimentError::Scoring {
                sentence: sentence.to_string(),
                reason: format!("non-finite score {raw}"),
            });
        }
        Ok(raw.clamp(-1.0, 1.0))
    }
}

/// Weighted-lexicon score for a German sentence.
#[must_use]
pub fn german_score(sentence: &str) -> f64 {
    let lower = sentence.to_lowercase();
    let mut raw: f64 = GERMAN_PATTERNS
        .iter()
        .filter(|(re, _)| re.is_match(&lower))
        .map(|(_, weight)| weight)
        .sum();

    if GERMAN_NEGATION_RE.is_match(&lower) {
        raw = -raw;
    }

    if raw > 0.0 {
        (raw / GERMAN_NORMALIZER).min(1.0)
    } else if raw < 0.0 {
        (raw / GERMAN_NORMALIZER).max(-1.0)
    } else {
        0.0
    }
}

/// VADER compound score for an English sentence.
#[must_use]
pub fn english_score(sentence: &str) -> Option<f64> {
    ENGLISH_ANALYZER
        .polarity_scores(sentence)
        .get("compound")
        .copied()
}

/// Map a score onto a label. Used for sentences and for release aggregates.
#[must_use]
pub fn label_from_score(score: f64) -> SentimentLabel {
    if score >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
