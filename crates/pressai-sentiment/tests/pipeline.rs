//! End-to-end tests of the default pipeline (whatlang + rule segmenter + lexicon scorer).

use chrono::NaiveDate;
use pressai_sentiment::{
    OutputRow, Pipeline, ReleaseItem, ReleaseOutcome, SentimentLabel, SkipReason,
};

const GERMAN_RELEASE: &str = "Walldorf, 12. März 2024. Die Einführung der neuen KI-Plattform \
    war leider nicht gut für das Geschäft. Unsere KI-Lösung ist im Markt sehr erfolgreich. \
    Das Unternehmen beschäftigt weltweit mehr als zehntausend Menschen und wächst weiter.";

const ENGLISH_RELEASE: &str = "The new AI assistant delivered excellent results and great \
    value for customers. Machine learning features helped customers improve their planning. \
    The company is headquartered in Walldorf and employs people worldwide.";

fn release(text: &str) -> ReleaseItem {
    ReleaseItem {
        url: "https://news.example.com/press/release".to_string(),
        title: "Press release".to_string(),
        text: Some(text.to_string()),
        publish_date: None,
        company: "sap".to_string(),
        is_local: false,
    }
}

fn expect_row(outcome: ReleaseOutcome) -> OutputRow {
    match outcome {
        ReleaseOutcome::Scored(row) => row,
        ReleaseOutcome::Skipped(reason) => panic!("release was skipped: {reason:?}"),
    }
}

#[test]
fn german_release_uses_lexicon_with_negation() {
    let pipeline = Pipeline::new();
    let row = expect_row(pipeline.process_release(&release(GERMAN_RELEASE)).unwrap());

    // nicht gut: -(2.0 / 3.0); erfolgreich: 1.5 / 3.0
    assert_eq!(row.ai_sentence_count, 2);
    assert_eq!(row.score, -0.0833);
    assert_eq!(row.confidence, 1.0);
    assert_eq!(row.label, SentimentLabel::Negative);
    assert_eq!(
        row.example_negative,
        "Die Einführung der neuen KI-Plattform war leider nicht gut für das Geschäft."
    );
    assert_eq!(
        row.example_positive,
        "Unsere KI-Lösung ist im Markt sehr erfolgreich."
    );
    assert_eq!((row.year, row.month), (Some(2024), Some(3)));
}

#[test]
fn german_scored_sentences_carry_release_language() {
    let scored = Pipeline::new().score_text(GERMAN_RELEASE).unwrap();
    assert_eq!(scored.len(), 2);
    assert!(scored.iter().all(|s| s.language.as_str() == "de"));
}

#[test]
fn english_release_uses_vader() {
    let row = expect_row(
        Pipeline::new()
            .process_release(&release(ENGLISH_RELEASE))
            .unwrap(),
    );
    assert_eq!(row.ai_sentence_count, 2);
    assert_eq!(row.label, SentimentLabel::Positive);
    assert!(row.score > 0.05 && row.score <= 1.0, "got {}", row.score);
    assert!(row.example_negative.is_empty());
    assert_eq!((row.year, row.month), (None, None));
}

#[test]
fn explicit_publish_date_wins_over_text() {
    let mut item = release(GERMAN_RELEASE);
    item.publish_date = NaiveDate::from_ymd_opt(2023, 9, 14);
    let row = expect_row(Pipeline::new().process_release(&item).unwrap());
    assert_eq!((row.year, row.month), (Some(2023), Some(9)));
}

#[test]
fn date_from_url_when_text_and_title_have_none() {
    let mut item = release(ENGLISH_RELEASE);
    item.url = "https://news.example.com/2022/11/ai-assistant".to_string();
    let row = expect_row(Pipeline::new().process_release(&item).unwrap());
    assert_eq!((row.year, row.month), (Some(2022), Some(11)));
}

#[test]
fn short_text_is_skipped() {
    let outcome = Pipeline::new()
        .process_release(&release("AI is great."))
        .unwrap();
    assert_eq!(outcome, ReleaseOutcome::Skipped(SkipReason::TextTooShort));
}

#[test]
fn batch_output_matches_sequential_processing() {
    let items: Vec<ReleaseItem> = (0..16)
        .map(|i| {
            if i % 2 == 0 {
                release(GERMAN_RELEASE)
            } else {
                release(ENGLISH_RELEASE)
            }
        })
        .collect();

    let pipeline = Pipeline::new();
    let report = pipeline.run_batch(&items);
    let sequential: Vec<OutputRow> = items
        .iter()
        .map(|item| expect_row(pipeline.process_release(item).unwrap()))
        .collect();

    assert_eq!(report.failed, 0);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.rows, sequential);
}

#[test]
fn output_row_serializes_label_and_period() {
    let row = expect_row(Pipeline::new().process_release(&release(GERMAN_RELEASE)).unwrap());
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["label"], "negative");
    assert_eq!(json["year"], 2024);
    assert_eq!(json["month"], 3);
    assert_eq!(json["ai_sentence_count"], 2);
}
