//! Settings shared by pipelines reading an archive.
use std::io::Cursor;
use std::path::PathBuf;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Url;

use crate::archive::ArchiveReader;
use crate::download::{ArchiveSource, Downloader};
use crate::error::Error;
use crate::segment::SegmenterModel;

/// Where documents come from and how they are sampled and segmented.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// archive url or local path
    pub input: String,
    /// segmentation model name
    pub segmenter: String,
    pub models_dir: PathBuf,
    /// base url segmentation models are installed from
    pub model_url: Option<Url>,
    pub max_docs: Option<usize>,
    pub shuffle: bool,
    /// seeds every random draw (sampling, masking, shuffling). Unseeded if `None`.
    pub seed: Option<u64>,
}

impl SourceConfig {
    pub fn new(input: String) -> Self {
        Self {
            input,
            segmenter: "de".to_string(),
            models_dir: PathBuf::from("models"),
            model_url: None,
            max_docs: None,
            shuffle: true,
            seed: None,
        }
    }

    /// Check settings that do not need I/O.
    pub fn validate(&self) -> Result<ArchiveSource, Error> {
        if self.segmenter.is_empty() {
            return Err(Error::Config("segmenter name is empty".to_string()));
        }
        ArchiveSource::from_input(&self.input)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Load the segmentation model, installing it if needed.
    pub fn load_segmenter(&self, downloader: &Downloader) -> Result<SegmenterModel, Error> {
        let model = SegmenterModel::load_or_install(
            &self.segmenter,
            &self.models_dir,
            self.model_url.as_ref(),
            downloader,
        )?;
        debug!("using segmenter {}", self.segmenter);
        Ok(model)
    }

    pub fn open_archive(
        &self,
        downloader: &Downloader,
    ) -> Result<ArchiveReader<Cursor<Vec<u8>>>, Error> {
        let source = ArchiveSource::from_input(&self.input)?;
        ArchiveReader::new(source.open(downloader)?)
    }
}
