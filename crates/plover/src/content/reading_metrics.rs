use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// The reading speed of an average adult in words per minute (WPM).
pub const AVERAGE_ADULT_WPM: usize = 238;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct WordCount(pub usize);

/// Minutes needed to read a post, rounded up.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct ReadTime(pub usize);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ReadingMetrics {
    pub word_count: WordCount,
    pub read_time: ReadTime,
}

impl ReadingMetrics {
    pub fn for_content(content: &str, wpm: usize) -> Self {
        let word_count = content.unicode_words().count();

        Self {
            word_count: WordCount(word_count),
            read_time: ReadTime(word_count.div_ceil(wpm.max(1))),
        }
    }
}
