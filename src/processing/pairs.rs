//! (masked, original) pair building.
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::archive::DocumentEntry;
use crate::error::Error;
use crate::segment::Segmenter;

use super::{Masker, SentenceExtractor};

/// A corrupted sentence and its original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePair {
    pub masked: String,
    pub original: String,
}

impl SentencePair {
    pub fn new(masked: String, original: String) -> Self {
        Self { masked, original }
    }
}

/// Every pair built from a sample, along with the number of documents read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pairs: Vec<SentencePair>,
    doc_count: usize,
}

impl Corpus {
    pub fn new(pairs: Vec<SentencePair>, doc_count: usize) -> Self {
        Self { pairs, doc_count }
    }

    pub fn pairs(&self) -> &[SentencePair] {
        &self.pairs
    }

    /// number of text documents iterated, including the ones that yielded no sentence.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Builds a [Corpus] from documents.
pub struct PairBuilder<S: Segmenter> {
    extractor: SentenceExtractor<S>,
    masker: Masker,
    shuffle: bool,
}

impl<S: Segmenter> PairBuilder<S> {
    pub fn new(extractor: SentenceExtractor<S>, masker: Masker, shuffle: bool) -> Self {
        Self {
            extractor,
            masker,
            shuffle,
        }
    }

    /// Extract, mask and (optionally) shuffle.
    ///
    /// Document errors are propagated.
    pub fn build<I, G>(&self, documents: I, rng: &mut G) -> Result<Corpus, Error>
    where
        I: IntoIterator<Item = Result<DocumentEntry, Error>>,
        G: Rng + ?Sized,
    {
        let mut pairs = Vec::new();
        let mut doc_count = 0;

        for doc in documents {
            let doc = doc?;
            doc_count += 1;
            for original in self.extractor.extract(&doc) {
                let masked = self.masker.mask(&original, rng);
                pairs.push(SentencePair::new(masked, original));
            }
        }

        info!(
            "Successfully read {} sentences from {} files",
            pairs.len(),
            doc_count
        );

        if self.shuffle {
            pairs.shuffle(rng);
        }

        Ok(Corpus::new(pairs, doc_count))
    }
}
