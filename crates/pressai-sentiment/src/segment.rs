//! Sentence segmentation with language-specific abbreviation handling.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::date::month_from_name;
use crate::error::SentimentError;
use crate::language::LanguageTag;

/// Abbreviations (lowercase, without the final dot) that never end an English sentence.
const ABBREVIATIONS_EN: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "inc", "corp", "ltd", "co", "jr", "sr", "st", "vs",
    "etc", "e.g", "i.e", "approx", "no", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec",
];

/// Abbreviations (lowercase, without the final dot) that never end a German sentence.
const ABBREVIATIONS_DE: &[&str] = &[
    "dr", "prof", "nr", "mio", "mrd", "bzw", "ca", "z.b", "u.a", "d.h", "usw", "vgl",
    "ggf", "inkl", "zzgl", "str", "abs", "bspw", "evtl", "sog", "jan", "feb", "mär", "apr",
    "jun", "jul", "aug", "sep", "sept", "okt", "nov", "dez", "gmbh", "co",
];

static FALLBACK_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary regex"));

/// Splits a text into sentences.
pub trait SegmentSentences {
    /// # Errors
    ///
    /// Returns [`SentimentError::Segmentation`] when the backend cannot split
    /// the text. Callers fall back to [`fallback_split`].
    fn segment(&self, text: &str, lang: &LanguageTag) -> Result<Vec<String>, SentimentError>;
}

/// UAX #29 sentence boundaries, re-joined across known abbreviations.
///
/// German text uses the German abbreviation list and also keeps ordinals such
/// as `15.` attached to the following word (`15. März`). Everything else uses
/// the English list.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter;

impl SegmentSentences for RuleSegmenter {
    fn segment(&self, text: &str, lang: &LanguageTag) -> Result<Vec<String>, SentimentError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let german = lang.is_german();
        let mut sentences = Vec::new();
        let mut pending = String::new();

        let mut pieces = text.split_sentence_bounds().peekable();
        while let Some(piece) = pieces.next() {
            pending.push_str(piece);
            let candidate = pending.trim();
            if candidate.is_empty() {
                continue;
            }
            if let Some(next) = pieces.peek() {
                if joins_next(candidate, next, german) {
                    continue;
                }
            }
            sentences.push(candidate.to_string());
            pending.clear();
        }

        let rest = pending.trim();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }

        if sentences.is_empty() {
            return Err(SentimentError::Segmentation(
                "no sentence boundaries found in non-empty text".to_string(),
            ));
        }
        Ok(sentences)
    }
}

/// Whether the boundary after `candidate` is a false one.
///
/// Listed abbreviations always continue. Initials ("J.") and German ordinals
/// ("15.") continue only into a lowercase word, and ordinals also into a
/// month name ("15. März").
fn joins_next(candidate: &str, next: &str, german: bool) -> bool {
    let Some(last) = candidate.split_whitespace().next_back() else {
        return false;
    };
    let Some(stem) = last.strip_suffix('.') else {
        return false;
    };
    let stem = stem.trim_start_matches(|c: char| !c.is_alphanumeric());
    if stem.is_empty() {
        return false;
    }

    let table = if german {
        ABBREVIATIONS_DE
    } else {
        ABBREVIATIONS_EN
    };
    if table.contains(&stem.to_lowercase().as_str()) {
        return true;
    }

    let mut chars = stem.chars();
    let initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
    let ordinal = german && stem.len() <= 2 && stem.chars().all(|c| c.is_ascii_digit());
    if !initial && !ordinal {
        return false;
    }

    let next_word = next
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_end_matches(|c: char| !c.is_alphanumeric());
    if next_word.chars().next().is_some_and(char::is_lowercase) {
        return true;
    }
    ordinal && month_from_name(next_word).is_some()
}

/// Split on `.`, `!` or `?` followed by whitespace, dropping blank fragments.
#[must_use]
pub fn fallback_split(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in FALLBACK_BOUNDARY_RE.find_iter(text) {
        // The punctuation mark is a single ASCII byte and stays with its sentence.
        sentences.push(&text[start..=boundary.start()]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Segment `text`, switching to [`fallback_split`] if the segmenter fails.
pub fn split_sentences(
    segmenter: &dyn SegmentSentences,
    text: &str,
    lang: &LanguageTag,
) -> Vec<String> {
    match segmenter.segment(text, lang) {
        Ok(sentences) => sentences,
        Err(e) => {
            tracing::debug!(error = %e, "segmenter failed, using punctuation fallback");
            fallback_split(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSegmenter;

    impl SegmentSentences for FailingSegmenter {
        fn segment(&self, _: &str, _: &LanguageTag) -> Result<Vec<String>, SentimentError> {
            Err(SentimentError::Segmentation("boom".to_string()))
        }
    }

    fn en() -> LanguageTag {
        LanguageTag::new("en")
    }

    fn de() -> LanguageTag {
        LanguageTag::new("de")
    }

    #[test]
    fn splits_simple_english_sentences() {
        let out = RuleSegmenter
            .segment("AI is here. It works well! Does it scale?", &en())
            .unwrap();
        assert_eq!(out, vec!["AI is here.", "It works well!", "Does it scale?"]);
    }

    #[test]
    fn english_abbreviation_does_not_end_sentence() {
        let out = RuleSegmenter
            .segment("Dr. Smith leads the AI lab. Sales grew.", &en())
            .unwrap();
        assert_eq!(out, vec!["Dr. Smith leads the AI lab.", "Sales grew."]);
    }

    #[test]
    fn german_ordinal_date_stays_in_one_sentence() {
        let out = RuleSegmenter
            .segment("Am 15. März startet die KI-Plattform. Sie ist neu.", &de())
            .unwrap();
        assert_eq!(out, vec!["Am 15. März startet die KI-Plattform.", "Sie ist neu."]);
    }

    #[test]
    fn german_number_at_sentence_end_splits() {
        let out = RuleSegmenter
            .segment(
                "Die Zahl unserer KI-Projekte stieg auf 12. Das Risiko bleibt dabei kritisch.",
                &de(),
            )
            .unwrap();
        assert_eq!(
            out,
            vec![
                "Die Zahl unserer KI-Projekte stieg auf 12.",
                "Das Risiko bleibt dabei kritisch."
            ]
        );
    }

    #[test]
    fn single_letter_before_capitalized_word_splits() {
        let out = RuleSegmenter
            .segment("We moved the AI workload to plan B. The rollout went well.", &en())
            .unwrap();
        assert_eq!(
            out,
            vec!["We moved the AI workload to plan B.", "The rollout went well."]
        );
    }

    #[test]
    fn german_abbreviation_does_not_end_sentence() {
        let out = RuleSegmenter
            .segment("Der Umsatz lag bei 5 Mio. Euro. Das ist gut.", &de())
            .unwrap();
        assert_eq!(out, vec!["Der Umsatz lag bei 5 Mio. Euro.", "Das ist gut."]);
    }

    #[test]
    fn blank_text_yields_no_sentences() {
        assert!(RuleSegmenter.segment("   ", &en()).unwrap().is_empty());
    }

    #[test]
    fn fallback_split_keeps_punctuation_and_drops_blanks() {
        let out = fallback_split("One. Two!  Three?   \n ");
        assert_eq!(out, vec!["One.", "Two!", "Three?"]);
    }

    #[test]
    fn fallback_split_requires_whitespace_after_punctuation() {
        assert_eq!(fallback_split("v1.2 is out. Done"), vec!["v1.2 is out.", "Done"]);
    }

    #[test]
    fn split_sentences_uses_fallback_on_error() {
        let out = split_sentences(&FailingSegmenter, "First part. Second part.", &en());
        assert_eq!(out, vec!["First part.", "Second part."]);
    }
}
