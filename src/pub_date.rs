// src/pub_date.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const RSS_DATE_FMT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Outcome of normalizing an episode `postTime`.
///
/// Both variants carry the finished pubDate text; the variant records whether
/// the input parsed or the wall clock had to stand in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PubDate {
    Parsed(String),
    Fallback(String),
}

impl PubDate {
    pub fn into_text(self) -> String {
        match self {
            PubDate::Parsed(s) | PubDate::Fallback(s) => s,
        }
    }
}

/// Turns an ISO-8601 `postTime` into RSS pubDate text.
///
/// Zoned timestamps keep their own wall-clock fields and are labelled with a
/// literal `GMT`; the offset is dropped, not converted. Missing, empty or
/// unparsable input falls back to `now`. Never errors.
pub fn normalize(post_time: Option<&str>, now: DateTime<Utc>) -> PubDate {
    match post_time.filter(|s| !s.is_empty()).and_then(parse_iso) {
        Some(text) => PubDate::Parsed(text),
        None => PubDate::Fallback(now.format(RSS_DATE_FMT).to_string()),
    }
}

fn parse_iso(s: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.format(RSS_DATE_FMT).to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.format(RSS_DATE_FMT).to_string());
    }
    // Date-only input renders as midnight.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.format(RSS_DATE_FMT).to_string())
}
