//! Sentence dump pipeline
//!
//! Extracts sentences like [super::MaskedDataset] does, and writes them one per line in a single file.
//! No masking or splitting is done.
use std::path::PathBuf;

use log::info;
use rand::seq::SliceRandom;

use crate::download::Downloader;
use crate::error::Error;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::split::write_sentences;
use crate::processing::SentenceExtractor;

use super::SourceConfig;

pub struct SentenceDump {
    source: SourceConfig,
    dst: PathBuf,
}

impl SentenceDump {
    pub fn new(source: SourceConfig, dst: PathBuf) -> Result<Self, Error> {
        source.validate()?;
        Ok(Self { source, dst })
    }
}

/// Returns the number of written sentences.
impl Pipeline<usize> for SentenceDump {
    fn run(&self) -> Result<usize, Error> {
        let downloader = Downloader::new();

        let extractor = SentenceExtractor::new(self.source.load_segmenter(&downloader)?);
        let mut rng = self.source.rng();
        let mut archive = self.source.open_archive(&downloader)?;
        let sample = archive.sample(self.source.max_docs, &mut rng)?;

        let mut sentences = Vec::new();
        let mut doc_count = 0;
        for doc in archive.documents(&sample) {
            sentences.extend(extractor.extract(&doc?));
            doc_count += 1;
        }
        info!(
            "Successfully read {} sentences from {} files",
            sentences.len(),
            doc_count
        );

        if self.source.shuffle {
            sentences.shuffle(&mut rng);
        }

        write_sentences(&self.dst, &sentences)?;
        Ok(sentences.len())
    }
}
