//! CSV output of scored releases.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use pressai_sentiment::OutputRow;

/// Write a header plus one record per row. Unresolved year/month are empty fields.
pub(crate) fn write_csv<W: Write>(writer: W, rows: &[OutputRow]) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub(crate) fn write_csv_file(path: &Path, rows: &[OutputRow]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    write_csv(file, rows).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use pressai_sentiment::SentimentLabel;

    use super::*;

    fn row() -> OutputRow {
        OutputRow {
            company: "sap".to_string(),
            title: "AI news".to_string(),
            url: "https://news.sap.com/ai".to_string(),
            year: None,
            month: None,
            label: SentimentLabel::Neutral,
            score: -0.0333,
            confidence: 0.667,
            ai_sentence_count: 3,
            example_positive: "Good AI. | Great AI.".to_string(),
            example_neutral: "Plain AI.".to_string(),
            example_negative: String::new(),
        }
    }

    #[test]
    fn writes_header_in_column_order() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[row()]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some(
                "company,title,url,year,month,label,score,confidence,ai_sentence_count,\
                 example_positive,example_neutral,example_negative"
            )
        );
        assert_eq!(
            lines.next(),
            Some("sap,AI news,https://news.sap.com/ai,,,neutral,-0.0333,0.667,3,Good AI. | Great AI.,Plain AI.,")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn resolved_period_is_written_as_numbers() {
        let mut r = row();
        r.year = Some(2024);
        r.month = Some(3);
        r.label = SentimentLabel::Positive;
        let mut buf = Vec::new();
        write_csv(&mut buf, &[r]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains(",2024,3,positive,"), "got: {out}");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let mut r = row();
        r.title = "AI, again".to_string();
        let mut buf = Vec::new();
        write_csv(&mut buf, &[r]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\"AI, again\""), "got: {out}");
    }

    #[test]
    fn write_csv_file_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv_file(&path, &[row()]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("company,title,url"));
    }
}
