use indexmap::IndexSet;

use crate::content::{ReadingMetrics, AVERAGE_ADULT_WPM};

/// A single post, as parsed from its source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRecord {
    /// Identifies the post. It is both the post's path and the key that
    /// `next` and `prev` refer to.
    pub slug: String,
    pub title: String,
    pub category: Option<String>,
    pub tags: IndexSet<String>,
    /// The slug of the following post in a series.
    pub next: Option<String>,
    /// The slug of the preceding post in a series.
    pub prev: Option<String>,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub body: String,
}

impl ContentRecord {
    pub fn reading_metrics(&self) -> ReadingMetrics {
        ReadingMetrics::for_content(&self.body, AVERAGE_ADULT_WPM)
    }
}
