//! Turns raw feed items into render-ready news items.
//!
//! Descriptions go through a fixed sequence: markup stripping, removal of the
//! feed generator's attribution, removal of a repeated headline, then a hard
//! cut at [`SUMMARY_CHARS`] characters. The ellipsis is appended even when
//! nothing was cut; card layouts rely on it.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use tracing::debug;

use super::types::{DisplayNewsItem, PublishedOn, RawFeedItem, PLACEHOLDER_LINK};

pub const TITLE_MAX_CHARS: usize = 60;
pub const SUMMARY_CHARS: usize = 150;
pub const ELLIPSIS: &str = "...";
pub const MISSING_TITLE: &str = "No Title";

// Applied in order; the parenthesized forms must go before the bare ones.
static ATTRIBUTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\(Feed generated with FetchRSS\)",
        r"(?i)Feed generated with FetchRSS",
        r"(?i)\(Generated with FetchRSS\)",
        r"(?i)Generated with FetchRSS",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("attribution pattern must compile"))
    .collect()
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("punctuation pattern must compile"));

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %b %Y"];

/// Per-field problems inside an otherwise usable item. Each one is replaced
/// by a default and never drops the item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionAnomaly {
    #[error("item has no title")]
    MissingTitle,
    #[error("item has no link")]
    MissingLink,
    #[error("item has no publication date")]
    MissingDate,
    #[error("unparseable publication date: {0}")]
    UnparseableDate(String),
}

/// Maps one raw item to its display form. Missing or unparseable dates fall
/// back to `today`.
pub fn normalize_item(raw: &RawFeedItem, today: NaiveDate) -> DisplayNewsItem {
    let mut anomalies = Vec::new();

    let title = raw.title.as_deref().unwrap_or_else(|| {
        anomalies.push(ExtractionAnomaly::MissingTitle);
        MISSING_TITLE
    });
    let summary = summarize(raw.description.as_deref().unwrap_or_default(), title);
    let link = raw.link.clone().unwrap_or_else(|| {
        anomalies.push(ExtractionAnomaly::MissingLink);
        PLACEHOLDER_LINK.to_string()
    });
    let date = match raw.pub_date.as_deref() {
        Some(value) => parse_publication_date(value).unwrap_or_else(|| {
            anomalies.push(ExtractionAnomaly::UnparseableDate(value.to_string()));
            today
        }),
        None => {
            anomalies.push(ExtractionAnomaly::MissingDate);
            today
        }
    };

    for anomaly in &anomalies {
        debug!(title, %anomaly, "feed item field replaced by default");
    }

    DisplayNewsItem {
        title: truncate_title(title),
        summary,
        link,
        published_on: decompose_date(date),
    }
}

pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_CHARS {
        let head: String = title.chars().take(TITLE_MAX_CHARS).collect();
        format!("{head}{ELLIPSIS}")
    } else {
        title.to_string()
    }
}

/// Full description-to-summary chain for an item with the given title.
pub fn summarize(description: &str, title: &str) -> String {
    let text = strip_markup(description);
    let text = remove_attribution(&text);
    let text = remove_leading_title(&text, title);
    let head: String = text.chars().take(SUMMARY_CHARS).collect();
    format!("{head}{ELLIPSIS}")
}

/// Parses `html` as markup and keeps only its text content.
pub fn strip_markup(html: &str) -> String {
    if !html.contains('<') && !html.contains('&') {
        return html.to_string();
    }
    Html::parse_fragment(html).root_element().text().collect()
}

pub fn remove_attribution(text: &str) -> String {
    let stripped = ATTRIBUTION_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, pattern| {
            pattern.replace_all(&acc, "").into_owned()
        });
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Drops a headline repeated at the start of the description.
///
/// Comparison ignores punctuation and case. On a match the title's word
/// count plus one word is cut from the unmodified description, which
/// tolerates a trailing colon or dash after the repeated headline. A title
/// with no word characters (emoji only, say) is an empty prefix and always
/// matches, so two words are cut.
pub fn remove_leading_title(description: &str, title: &str) -> String {
    let clean_title = NON_WORD.replace_all(title, "");
    let clean_title = clean_title.trim();

    let clean_description = NON_WORD.replace_all(description, "");
    if !clean_description
        .trim()
        .to_lowercase()
        .starts_with(&clean_title.to_lowercase())
    {
        return description.to_string();
    }

    let title_words = clean_title.split(' ').count();
    description
        .split(' ')
        .skip(title_words + 1)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

pub fn parse_publication_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.date_naive());
    }
    // Feeds sometimes carry a weekday that disagrees with the date.
    if let Some(parsed) =
        strip_weekday(value).and_then(|rest| DateTime::parse_from_rfc2822(rest).ok())
    {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|parsed| parsed.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        })
}

fn strip_weekday(value: &str) -> Option<&str> {
    let (weekday, rest) = value.split_once(',')?;
    if weekday.len() == 3 && weekday.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(rest.trim_start())
    } else {
        None
    }
}

pub fn decompose_date(date: NaiveDate) -> PublishedOn {
    PublishedOn {
        month: date.format("%b").to_string(),
        day: format!("{:02}", date.day()),
        year: date.year(),
    }
}
