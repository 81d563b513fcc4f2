//! Sentence extraction from documents.
use std::borrow::Cow;

use log::{debug, warn};

use crate::archive::DocumentEntry;
use crate::filtering::{Filter, WordCount};
use crate::segment::Segmenter;

/// Splits the long lines of a document into cleaned sentences.
///
/// Short lines (see [WordCount]) are headings, titles and other noise and are skipped.
pub struct SentenceExtractor<S: Segmenter> {
    segmenter: S,
    filter: WordCount,
}

impl<S: Segmenter> SentenceExtractor<S> {
    pub fn new(segmenter: S) -> Self {
        Self {
            segmenter,
            filter: WordCount::default(),
        }
    }

    /// Use a custom line filter.
    pub fn with_filter(segmenter: S, filter: WordCount) -> Self {
        Self { segmenter, filter }
    }

    /// Remove newlines and replace guillemets with plain double quotes.
    pub fn clean(sentence: &str) -> String {
        sentence
            .chars()
            .filter(|c| *c != '\n' && *c != '\r')
            .map(|c| match c {
                '«' | '»' => '"',
                c => c,
            })
            .collect()
    }

    /// Sentences of a single line, or nothing if the line is filtered out.
    pub fn extract_line(&self, line: &str) -> Vec<String> {
        if !self.filter.detect(line) {
            return Vec::new();
        }

        self.segmenter
            .segment(line)
            .into_iter()
            .map(Self::clean)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }

    /// Sentences of a document, in line order.
    pub fn extract(&self, doc: &DocumentEntry) -> Vec<String> {
        let mut sentences = Vec::new();
        for raw in doc.lines() {
            let line = String::from_utf8_lossy(raw);
            if let Cow::Owned(_) = line {
                warn!("{}: invalid UTF-8 replaced", doc.name());
            }
            sentences.extend(self.extract_line(&line));
        }
        debug!("{}: {} sentences", doc.name(), sentences.len());
        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::UnicodeSegmenter;

    fn extractor() -> SentenceExtractor<UnicodeSegmenter> {
        SentenceExtractor::new(UnicodeSegmenter)
    }

    #[test]
    fn clean() {
        assert_eq!(
            SentenceExtractor::<UnicodeSegmenter>::clean("Er sagte: «Nein»\r\n"),
            "Er sagte: \"Nein\""
        );
    }

    #[test]
    fn short_lines_skipped() {
        let content = "Erstes Kapitel\n\
            Der alte Mann ging langsam die Straße hinunter. Es regnete seit Stunden ohne Pause.\n\
            Ende\n";
        let doc = DocumentEntry::new("a.txt".to_string(), content.as_bytes().to_vec());
        assert_eq!(
            extractor().extract(&doc),
            vec![
                "Der alte Mann ging langsam die Straße hinunter.",
                "Es regnete seit Stunden ohne Pause."
            ]
        );
    }

    #[test]
    fn nine_words_is_a_heading() {
        let e = extractor();
        assert!(e.extract_line("one two three four five six seven eight nine.").is_empty());
        assert_eq!(
            e.extract_line("one two three four five six seven eight nine ten."),
            vec!["one two three four five six seven eight nine ten."]
        );
    }

    #[test]
    fn only_short_lines() {
        let doc = DocumentEntry::new(
            "titles.txt".to_string(),
            b"Title\nSubtitle of the book\nChapter one\n".to_vec(),
        );
        assert!(extractor().extract(&doc).is_empty());
    }

    #[test]
    fn guillemets_replaced() {
        let e = extractor();
        let line = "Sie rief laut «Komm sofort nach Hause» und schloss dann das Fenster.";
        assert_eq!(
            e.extract_line(line),
            vec!["Sie rief laut \"Komm sofort nach Hause\" und schloss dann das Fenster."]
        );
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut content = b"Dies ist ein langer Satz mit genau zehn W".to_vec();
        content.push(0xff);
        content.extend_from_slice(b"rtern hier.\n");
        let doc = DocumentEntry::new("bad.txt".to_string(), content);
        let sentences = extractor().extract(&doc);
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].contains('\u{FFFD}'));
    }
}
