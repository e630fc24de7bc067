use serde::Deserialize;

use crate::utils::dates::normalize_ymd;

/// Media classification as delivered by the feed. Values the feed may grow
/// later deserialize as `Other` instead of failing the whole document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    #[serde(other)]
    Other,
}

/// One feed record: a day's featured media plus its metadata.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Entry {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    pub media_type: MediaType,
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Inclusive date range with both bounds normalized to `YYYY-MM-DD`.
///
/// Both bounds must be supplied for filtering to take effect; a single bound
/// is treated the same as no range at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: String,
    end: String,
}

impl DateRange {
    /// Builds a range from the two raw input values. Returns `None` unless
    /// both values are present and parse as dates.
    pub fn from_inputs(start: &str, end: &str) -> Option<Self> {
        if start.trim().is_empty() || end.trim().is_empty() {
            return None;
        }

        Some(Self {
            start: normalize_ymd(start)?,
            end: normalize_ymd(end)?,
        })
    }

    /// ISO dates compare lexicographically, so a plain string comparison is
    /// chronological. A range with `start > end` matches nothing.
    pub fn contains(&self, date: &str) -> bool {
        self.start.as_str() <= date && date <= self.end.as_str()
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

/// The full entry collection, fetched once per page load and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Feed {
    entries: Vec<Entry>,
}

impl Feed {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only derivation: keeps the entries whose date falls inside the
    /// range, preserving feed order. `None` means no filter is applied.
    pub fn filter_by_range(&self, range: Option<&DateRange>) -> Vec<Entry> {
        match range {
            Some(range) => self
                .entries
                .iter()
                .filter(|e| range.contains(&e.date))
                .cloned()
                .collect(),
            None => self.entries.clone(),
        }
    }
}
