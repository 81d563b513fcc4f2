//! Masked dataset pipeline
//!
//! # Processing
//! 1. The segmentation model is loaded (and installed if missing).
//! 1. The archive is fetched and a sample of its documents is drawn.
//! 1. Long lines of text documents are split into sentences, each sentence gets a masked copy.
//! 1. Pairs are (optionally) shuffled, then split into validation, test and train files.
//! 1. Statistics are reported, on a best-effort basis.
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::download::Downloader;
use crate::error::Error;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::split::{DatasetWriter, SplitBoundaries, SplitMode, SplitSizes, Tags};
use crate::processing::stats::{self, Statistics};
use crate::processing::{Corpus, Masker, PairBuilder, SentenceExtractor};

use super::SourceConfig;

#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub source: SourceConfig,
    pub output_dir: PathBuf,
    pub tags: Tags,
    pub masker: Masker,
    pub validate: usize,
    pub test: usize,
    pub split_mode: SplitMode,
    /// chart destination. No statistics are computed if `None`.
    pub stats_file: Option<PathBuf>,
}

impl DatasetConfig {
    /// Defaults: 15% masking, a tenth of the corpus for validation and test each, no tags, no statistics.
    pub fn new(source: SourceConfig, output_dir: PathBuf) -> Self {
        Self {
            source,
            output_dir,
            tags: Tags::none(),
            masker: Masker::default(),
            validate: 10,
            test: 10,
            split_mode: SplitMode::Divisor,
            stats_file: None,
        }
    }
}

/// Outcome of a [MaskedDataset] run.
#[derive(Debug, Clone)]
pub struct DatasetReport {
    pub doc_count: usize,
    pub nb_sentences: usize,
    pub sizes: SplitSizes,
    pub statistics: Option<Statistics>,
}

pub struct MaskedDataset {
    config: DatasetConfig,
}

impl MaskedDataset {
    /// Fails on invalid configuration, before any I/O.
    pub fn new(config: DatasetConfig) -> Result<Self, Error> {
        config.source.validate()?;
        config
            .split_mode
            .validate(config.validate, config.test)?;

        info!(
            "masking {}% of words, splitting with {} mode ({}, {})",
            config.masker.percentage(),
            config.split_mode,
            config.validate,
            config.test
        );
        Ok(Self { config })
    }

    /// Compute statistics, render the chart and save the summary next to it.
    fn report(corpus: &Corpus, dst: &Path) -> Result<Statistics, Error> {
        let stats = Statistics::from_pairs(corpus.pairs(), corpus.doc_count());
        info!(
            "words per sentence: max {}, median {:.1}, 90% {:.1}, 99% {:.1}, {} words in total",
            stats.max, stats.median, stats.p90, stats.p99, stats.total_words
        );

        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        stats::render_histogram(&stats, dst)?;
        stats.write_json(&stats::summary_path(dst))?;
        Ok(stats)
    }
}

impl Pipeline<DatasetReport> for MaskedDataset {
    fn run(&self) -> Result<DatasetReport, Error> {
        let source = &self.config.source;
        let downloader = Downloader::new();

        let segmenter = source.load_segmenter(&downloader)?;
        let mut rng = source.rng();
        let mut archive = source.open_archive(&downloader)?;
        let sample = archive.sample(source.max_docs, &mut rng)?;

        let builder = PairBuilder::new(
            SentenceExtractor::new(segmenter),
            self.config.masker,
            source.shuffle,
        );
        let corpus = builder.build(archive.documents(&sample), &mut rng)?;
        if corpus.is_empty() {
            warn!("no sentence extracted from {} documents", corpus.doc_count());
        }

        let boundaries = SplitBoundaries::compute(
            corpus.len(),
            self.config.validate,
            self.config.test,
            self.config.split_mode,
        )?;
        let writer = DatasetWriter::new(&self.config.output_dir, self.config.tags.clone());
        let sizes = writer.write(corpus.pairs(), &boundaries)?;
        info!(
            "wrote {} validation, {} test and {} train pairs to {:?}",
            sizes.validation, sizes.test, sizes.train, self.config.output_dir
        );

        // dataset files are complete at this point, statistics can't fail the run.
        let statistics = match &self.config.stats_file {
            Some(dst) => match Self::report(&corpus, dst) {
                Ok(stats) => Some(stats),
                Err(e) => {
                    error!("could not report statistics: {}", e);
                    None
                }
            },
            None => None,
        };

        Ok(DatasetReport {
            doc_count: corpus.doc_count(),
            nb_sentences: corpus.len(),
            sizes,
            statistics,
        })
    }
}
