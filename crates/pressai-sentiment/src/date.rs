//! Year/month resolution for press releases.
//!
//! Sources are tried in a fixed order: explicit publish date, body text,
//! title, then the URL or filename. The free-text heuristic takes the first
//! `20xx` year it sees, even if an unrelated year appears early in the body.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;

const MONTHS_EN: &[(&str, u32)] = &[
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

const MONTHS_DE: &[(&str, u32)] = &[
    ("januar", 1),
    ("februar", 2),
    ("märz", 3),
    ("maerz", 3),
    ("april", 4),
    ("mai", 5),
    ("juni", 6),
    ("juli", 7),
    ("august", 8),
    ("september", 9),
    ("oktober", 10),
    ("november", 11),
    ("dezember", 12),
];

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20\d{2}").expect("valid year regex"));
static MONTH_WORD_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-zäöüÄÖÜ]+)\s+(20\d{2})").expect("valid month-year regex")
});
static YEAR_NUMERIC_MONTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20\d{2}[.\-/](\d{1,2})").expect("valid year-month regex"));
static YMD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<y>20\d{2})[.\-/](?P<m>\d{1,2})[.\-/](?P<d>\d{1,2})").expect("valid ymd regex")
});
static DAY_MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<d>\d{1,2})\s+(?P<mon>[A-Za-zäöüÄÖÜ]+)\s+(?P<y>20\d{2})")
        .expect("valid day-month-year regex")
});
static MONTH_DAY_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<mon>[A-Za-zäöüÄÖÜ]+)\s+(?P<d>\d{1,2}),\s*(?P<y>20\d{2})")
        .expect("valid month-day-year regex")
});

/// A resolved release period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl YearMonth {
    /// First day of the month, for callers that need a concrete date.
    #[must_use]
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

/// Look up an English or German month name, case-insensitively.
#[must_use]
pub fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTHS_EN
        .iter()
        .chain(MONTHS_DE)
        .find(|(month, _)| *month == lower)
        .map(|&(_, number)| number)
}

/// Parse an explicit timestamp string such as the content of an HTML `<time>` tag.
///
/// Patterns are tried in order and the first that yields a valid calendar date
/// wins: ISO 8601, `YYYY-MM-DD` (separators `.`, `-`, `/`), `D Month YYYY`,
/// `Month D, YYYY`. Month names may be English or German.
#[must_use]
pub fn parse_explicit(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(date) = parse_iso8601(s) {
        return Some(date);
    }

    if let Some(caps) = YMD_RE.captures(s) {
        let date = ymd(&caps["y"], &caps["m"], &caps["d"]);
        if date.is_some() {
            return date;
        }
    }

    if let Some(caps) = DAY_MONTH_YEAR_RE.captures(s) {
        if let Some(month) = month_from_name(&caps["mon"]) {
            let date = named_ymd(&caps["y"], month, &caps["d"]);
            if date.is_some() {
                return date;
            }
        }
    }

    if let Some(caps) = MONTH_DAY_YEAR_RE.captures(s) {
        if let Some(month) = month_from_name(&caps["mon"]) {
            return named_ymd(&caps["y"], month, &caps["d"]);
        }
    }

    None
}

fn parse_iso8601(s: &str) -> Option<NaiveDate> {
    if let Some(date) = ["%Y-%m-%d", "%Y%m%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.date_naive());
    }
    [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y%m%dT%H%M%S",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    .map(|dt| dt.date())
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn named_ymd(year: &str, month: u32, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, day.parse().ok()?)
}

/// Guess a release period from free text.
///
/// Takes the first `20xx` year in the text. The month comes from a month name
/// directly preceding that year, else from a `YYYY.MM` style token, else
/// defaults to January. Returns `None` when the text has no year at all.
#[must_use]
pub fn find_date_in_text(text: &str) -> Option<YearMonth> {
    let year_str = YEAR_RE.find(text)?.as_str();
    let year: i32 = year_str.parse().ok()?;

    // Only the first "<word> <year>" occurrence is considered.
    if let Some(caps) = MONTH_WORD_YEAR_RE
        .captures_iter(text)
        .find(|caps| &caps[2] == year_str)
    {
        if let Some(month) = month_from_name(&caps[1]) {
            return Some(YearMonth { year, month });
        }
    }

    let month = YEAR_NUMERIC_MONTH_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .filter(|m| (1..=12).contains(m))
        .unwrap_or(1);

    Some(YearMonth { year, month })
}

/// Resolve the release period from all available sources, in priority order.
///
/// Returns `None` when no source yields a date; the caller leaves year and
/// month empty in that case.
#[must_use]
pub fn resolve_year_month(
    publish_date: Option<NaiveDate>,
    text: &str,
    title: &str,
    identifier: &str,
) -> Option<YearMonth> {
    if let Some(date) = publish_date {
        return Some(date.into());
    }
    [text, title, identifier]
        .into_iter()
        .find_map(find_date_in_text)
}
