use chrono::NaiveDate;
use serde::Serialize;

use crate::language::LanguageTag;

/// Maximum number of example sentences kept per label.
pub const MAX_EXAMPLES_PER_LABEL: usize = 3;

/// One press release handed over by the acquisition side.
#[derive(Debug, Clone, Default)]
pub struct ReleaseItem {
    pub url: String,
    pub title: String,
    /// Plain text body. `None` when nothing could be extracted (e.g. a PDF).
    pub text: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub company: String,
    pub is_local: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

/// An AI-relevant sentence with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    pub language: LanguageTag,
    /// Always within `[-1.0, 1.0]`.
    pub score: f64,
    pub label: SentimentLabel,
}

/// Up to [`MAX_EXAMPLES_PER_LABEL`] sentences per label, in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Examples {
    pub positive: Vec<String>,
    pub neutral: Vec<String>,
    pub negative: Vec<String>,
}

impl Examples {
    /// Append `text` to the bucket for `label` unless that bucket is full.
    pub fn push(&mut self, label: SentimentLabel, text: &str) {
        let bucket = match label {
            SentimentLabel::Positive => &mut self.positive,
            SentimentLabel::Neutral => &mut self.neutral,
            SentimentLabel::Negative => &mut self.negative,
        };
        if bucket.len() < MAX_EXAMPLES_PER_LABEL {
            bucket.push(text.to_string());
        }
    }
}

/// Release-level reduction of the per-sentence scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseAggregate {
    pub label: SentimentLabel,
    /// Mean sentence score, within `[-1.0, 1.0]`.
    pub score: f64,
    /// Share of sentences with `|score| > 0.05`, within `[0.0, 1.0]`.
    pub confidence: f64,
    pub count: usize,
    pub examples: Examples,
}

/// One line of the output table. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRow {
    pub company: String,
    pub title: String,
    pub url: String,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub label: SentimentLabel,
    pub score: f64,
    pub confidence: f64,
    pub ai_sentence_count: usize,
    pub example_positive: String,
    pub example_neutral: String,
    pub example_negative: String,
}
