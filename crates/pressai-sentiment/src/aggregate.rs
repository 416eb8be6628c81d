//! Release-level aggregation of sentence scores.

use crate::scorer::{label_from_score, POSITIVE_THRESHOLD};
use crate::types::{Examples, ReleaseAggregate, ScoredSentence, SentimentLabel};

/// Reduce a release's scored sentences to one aggregate.
///
/// The score is the plain mean, confidence the share of sentences whose
/// magnitude exceeds the neutral band, and examples keep the first three
/// sentences of each label in input order. An empty slice is neutral with
/// zero score and confidence.
#[must_use]
pub fn aggregate_release(sentences: &[ScoredSentence]) -> ReleaseAggregate {
    let mut examples = Examples::default();
    for sentence in sentences {
        examples.push(sentence.label, &sentence.text);
    }

    if sentences.is_empty() {
        return ReleaseAggregate {
            label: SentimentLabel::Neutral,
            score: 0.0,
            confidence: 0.0,
            count: 0,
            examples,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let denom = sentences.len() as f64;
    let mean = sentences.iter().map(|s| s.score).sum::<f64>() / denom;
    let score = mean.clamp(-1.0, 1.0);

    let non_neutral = sentences
        .iter()
        .filter(|s| s.score.abs() > POSITIVE_THRESHOLD)
        .count();
    #[allow(clippy::cast_precision_loss)]
    let confidence = non_neutral as f64 / denom;

    ReleaseAggregate {
        label: label_from_score(score),
        score,
        confidence,
        count: sentences.len(),
        examples,
    }
}
