//! line-level filtering
use super::Filter;

/// Word count filter.
/// Returns `false` if provided line has less than [WordCount::min_words] whitespace-separated words.
///
/// [WordCount::min_words] is 10 by default, so that headings and other short lines are discarded.
#[derive(Debug, Clone)]
pub struct WordCount {
    min_words: usize,
}

impl WordCount {
    /// specify a minimum number of words
    pub fn with_min_words(min_words: usize) -> Self {
        Self { min_words }
    }

    /// Get a reference to the filter's min words.
    pub fn min_words(&self) -> &usize {
        &self.min_words
    }
}

impl Filter<&str> for WordCount {
    fn detect(&self, line: &str) -> bool {
        line.split_whitespace().count() >= self.min_words
    }
}

impl Default for WordCount {
    fn default() -> Self {
        WordCount { min_words: 10 }
    }
}
