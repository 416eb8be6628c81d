//! AI-sentiment pipeline for corporate press releases.
//!
//! Detects the release language, splits it into sentences, keeps the sentences
//! that talk about AI, scores each one (VADER for English, a weighted lexicon
//! for German) and aggregates the scores into one labelled row per release.

pub mod aggregate;
pub mod date;
pub mod error;
pub mod language;
pub mod pipeline;
pub mod relevance;
pub mod scorer;
pub mod segment;
pub mod types;

pub use aggregate::aggregate_release;
pub use date::{find_date_in_text, parse_explicit, resolve_year_month, YearMonth};
pub use error::SentimentError;
pub use language::{DetectLanguage, LanguageTag, WhatlangDetector};
pub use pipeline::{BatchReport, Pipeline, ReleaseOutcome, SkipReason};
pub use relevance::{mentions_ai, MIN_SENTENCE_LEN};
pub use scorer::{label_from_score, LexiconScorer, ScoreSentence};
pub use segment::{split_sentences, RuleSegmenter, SegmentSentences};
pub use types::{
    Examples, OutputRow, ReleaseAggregate, ReleaseItem, ScoredSentence, SentimentLabel,
};
