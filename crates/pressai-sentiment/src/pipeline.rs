//! Per-release orchestration and batch processing.

use rayon::prelude::*;

use crate::aggregate::aggregate_release;
use crate::date::resolve_year_month;
use crate::error::SentimentError;
use crate::language::{DetectLanguage, WhatlangDetector};
use crate::relevance::mentions_ai;
use crate::scorer::{label_from_score, LexiconScorer, ScoreSentence};
use crate::segment::{split_sentences, RuleSegmenter, SegmentSentences};
use crate::types::{OutputRow, ReleaseItem, ScoredSentence};

/// Releases with fewer characters of text than this are skipped.
pub const MIN_TEXT_LEN: usize = 50;

/// Separator between example sentences in one output field.
pub const EXAMPLE_DELIMITER: &str = " | ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingText,
    TextTooShort,
}

/// Result of processing one release that did not fault.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    Scored(OutputRow),
    Skipped(SkipReason),
}

/// Rows produced by a batch, in input order, plus skip and failure counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub rows: Vec<OutputRow>,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchReport {
    /// True when the batch ran but produced nothing to write.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The text-to-sentiment pipeline.
///
/// Holds the language detector, segmenter and scorer. All of them are
/// stateless, so one `Pipeline` can be shared across worker threads.
pub struct Pipeline {
    detector: Box<dyn DetectLanguage + Send + Sync>,
    segmenter: Box<dyn SegmentSentences + Send + Sync>,
    scorer: Box<dyn ScoreSentence + Send + Sync>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Pipeline with `whatlang` detection, rule-based segmentation and the lexicon scorer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_components(WhatlangDetector, RuleSegmenter, LexiconScorer)
    }

    #[must_use]
    pub fn with_components<D, G, S>(detector: D, segmenter: G, scorer: S) -> Self
    where
        D: DetectLanguage + Send + Sync + 'static,
        G: SegmentSentences + Send + Sync + 'static,
        S: ScoreSentence + Send + Sync + 'static,
    {
        Self {
            detector: Box::new(detector),
            segmenter: Box::new(segmenter),
            scorer: Box::new(scorer),
        }
    }

    /// Score every AI-relevant sentence of `text`, in sentence order.
    ///
    /// The language is detected once for the whole text and drives
    /// segmentation, keyword selection and scoring for every sentence.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Scoring`] if any sentence cannot be scored.
    pub fn score_text(&self, text: &str) -> Result<Vec<ScoredSentence>, SentimentError> {
        let language = self.detector.detect(text);
        let sentences = split_sentences(self.segmenter.as_ref(), text, &language);

        sentences
            .into_iter()
            .filter(|s| mentions_ai(s, &language))
            .map(|text| {
                let score = self.scorer.score(&language, &text)?;
                Ok(ScoredSentence {
                    label: label_from_score(score),
                    language: language.clone(),
                    score,
                    text,
                })
            })
            .collect()
    }

    /// Turn one release into an output row, or skip it when it has no usable text.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if scoring a sentence fails. Callers
    /// processing many releases should isolate this per release.
    pub fn process_release(&self, item: &ReleaseItem) -> Result<ReleaseOutcome, SentimentError> {
        let Some(text) = item.text.as_deref().filter(|t| !t.is_empty()) else {
            return Ok(ReleaseOutcome::Skipped(SkipReason::MissingText));
        };
        if text.chars().count() < MIN_TEXT_LEN {
            return Ok(ReleaseOutcome::Skipped(SkipReason::TextTooShort));
        }

        let scored = self.score_text(text)?;
        let aggregate = aggregate_release(&scored);
        let period = resolve_year_month(item.publish_date, text, &item.title, &item.url);

        tracing::debug!(
            url = %item.url,
            company = %item.company,
            ai_sentences = aggregate.count,
            label = %aggregate.label,
            "release scored"
        );

        Ok(ReleaseOutcome::Scored(OutputRow {
            company: item.company.clone(),
            title: item.title.clone(),
            url: item.url.clone(),
            year: period.map(|p| p.year),
            month: period.map(|p| p.month),
            label: aggregate.label,
            score: round_to(aggregate.score, 4),
            confidence: round_to(aggregate.confidence, 3),
            ai_sentence_count: aggregate.count,
            example_positive: aggregate.examples.positive.join(EXAMPLE_DELIMITER),
            example_neutral: aggregate.examples.neutral.join(EXAMPLE_DELIMITER),
            example_negative: aggregate.examples.negative.join(EXAMPLE_DELIMITER),
        }))
    }

    /// Process all releases in parallel on the current rayon pool.
    ///
    /// Rows keep the input order. A release that faults is logged and counted
    /// in [`BatchReport::failed`]; it never stops the others.
    #[must_use]
    pub fn run_batch(&self, items: &[ReleaseItem]) -> BatchReport {
        let outcomes: Vec<Result<ReleaseOutcome, SentimentError>> = items
            .par_iter()
            .map(|item| self.process_release(item))
            .collect();

        let mut report = BatchReport::default();
        for (item, outcome) in items.iter().zip(outcomes) {
            match outcome {
                Ok(ReleaseOutcome::Scored(row)) => report.rows.push(row),
                Ok(ReleaseOutcome::Skipped(reason)) => {
                    tracing::debug!(url = %item.url, local = item.is_local, ?reason, "skipping release");
                    report.skipped += 1;
                }
                Err(e) => {
                    tracing::warn!(url = %item.url, error = %e, "release processing failed");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            releases = items.len(),
            rows = report.rows.len(),
            skipped = report.skipped,
            failed = report.failed,
            "batch complete"
        );
        report
    }
}

/// Round to `places` decimals, sending exact ties to the even digit.
fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
