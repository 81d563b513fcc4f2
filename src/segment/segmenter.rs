//! Segmenter trait and implementations.
use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences.
///
/// Returned sentences are slices of the input, trimmed, and never empty.
pub trait Segmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// UAX#29 sentence boundaries.
#[derive(Debug, Default, Clone)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }
}

/// UAX#29 boundaries, merged back when a piece ends on an abbreviation (`Dr.`, `z.B.`)
/// or on an ordinal (`3.`).
#[derive(Debug, Clone)]
pub struct AbbreviationSegmenter {
    abbreviations: HashSet<String>,
}

impl AbbreviationSegmenter {
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            abbreviations: abbreviations.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse an abbreviation list: one entry per line, `#` starts a comment.
    pub fn from_list(list: &str) -> Self {
        Self::new(
            list.lines()
                .map(|line| line.split('#').next().unwrap_or_default().trim())
                .filter(|line| !line.is_empty()),
        )
    }

    pub fn len(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
    }

    /// true if the sentence must not end after `piece`.
    fn continues(&self, piece: &str) -> bool {
        let last = match piece.split_whitespace().last() {
            Some(word) => word.trim_start_matches(|c: char| !c.is_alphanumeric()),
            None => return false,
        };

        if self.abbreviations.contains(last) {
            return true;
        }

        match last.strip_suffix('.') {
            Some(number) => !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()),
            None => false,
        }
    }
}

impl Segmenter for AbbreviationSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, piece) in text.split_sentence_bound_indices() {
            let from = *start.get_or_insert(offset);
            if self.continues(piece) {
                continue;
            }

            let sentence = text[from..offset + piece.len()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = None;
        }

        // text ending on an abbreviation
        if let Some(from) = start {
            let rest = text[from..].trim();
            if !rest.is_empty() {
                sentences.push(rest);
            }
        }

        sentences
    }
}
