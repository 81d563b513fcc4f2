//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use reqwest::Url;
use structopt::StructOpt;

use maskcorpus::download::DEFAULT_URL;
use maskcorpus::error::Error;
use maskcorpus::pipelines::{DatasetConfig, SourceConfig};
use maskcorpus::processing::split::{SplitMode, Tags};
use maskcorpus::processing::Masker;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "maskcorpus",
    about = "masked language modeling corpus generation tool."
)]
/// Holds every command that is callable by the `maskcorpus` command.
pub enum MaskCorpus {
    #[structopt(about = "Build masked train/validation/test files")]
    Dataset(Dataset),
    #[structopt(about = "Write extracted sentences, one per line")]
    Sentences(Sentences),
}

#[derive(Debug, StructOpt)]
/// Archive retrieval, sampling and segmentation parameters.
pub struct Source {
    #[structopt(
        long = "input-url",
        help = "zip archive url (or local path). Default is every prose work from TextGrid."
    )]
    pub input_url: Option<String>,
    #[structopt(
        long = "segmenter",
        help = "segmentation model name (`unicode`, `de`, or a list in the models folder)",
        default_value = "de"
    )]
    pub segmenter: String,
    #[structopt(
        parse(from_os_str),
        long = "models-dir",
        help = "segmentation models location",
        default_value = "models"
    )]
    pub models_dir: PathBuf,
    #[structopt(
        long = "model-url",
        help = "base url missing segmentation models are installed from"
    )]
    pub model_url: Option<String>,
    #[structopt(
        long = "max-docs",
        help = "maximum number of documents to sample. Default is all."
    )]
    pub max_docs: Option<usize>,
    #[structopt(long = "no-shuffle", help = "keep extraction order")]
    pub no_shuffle: bool,
    #[structopt(long = "seed", help = "random seed. Unseeded by default.")]
    pub seed: Option<u64>,
}

impl TryFrom<Source> for SourceConfig {
    type Error = Error;

    fn try_from(s: Source) -> Result<Self, Self::Error> {
        // joining onto a base without trailing slash would drop its last segment
        let model_url = s
            .model_url
            .map(|url| {
                if url.ends_with('/') {
                    Url::parse(&url)
                } else {
                    Url::parse(&format!("{url}/"))
                }
            })
            .transpose()?;

        Ok(SourceConfig {
            input: s.input_url.unwrap_or_else(|| DEFAULT_URL.to_string()),
            segmenter: s.segmenter,
            models_dir: s.models_dir,
            model_url,
            max_docs: s.max_docs,
            shuffle: !s.no_shuffle,
            seed: s.seed,
        })
    }
}

#[derive(Debug, StructOpt)]
/// Dataset command and parameters.
///
/// ```sh
/// maskcorpus-dataset 0.1.0
/// Build masked train/validation/test files
///
/// USAGE:
///     maskcorpus dataset [FLAGS] [OPTIONS]
///
/// FLAGS:
///         --no-shuffle    keep extraction order
///         --stats         render words per sentence statistics
/// ```
pub struct Dataset {
    #[structopt(flatten)]
    pub source: Source,
    #[structopt(
        parse(from_os_str),
        long = "output-dir",
        help = "destination of the six split files",
        default_value = "output"
    )]
    pub output_dir: PathBuf,
    #[structopt(
        long = "tags",
        help = "source and target line prefixes (none or two)"
    )]
    pub tags: Vec<String>,
    #[structopt(
        long = "mask-percentage",
        help = "probability (in %) of masking each word",
        default_value = "15"
    )]
    pub mask_percentage: u8,
    #[structopt(
        long = "validate-percentage",
        help = "validation split parameter (see --split-mode)",
        default_value = "10"
    )]
    pub validate_percentage: usize,
    #[structopt(
        long = "test-percentage",
        help = "test split parameter (see --split-mode)",
        default_value = "10"
    )]
    pub test_percentage: usize,
    #[structopt(
        long = "split-mode",
        help = "`divisor`: split sizes are len/parameter. `percent`: len*parameter/100",
        default_value = "divisor"
    )]
    pub split_mode: SplitMode,
    #[structopt(long = "stats", help = "render words per sentence statistics")]
    pub stats: bool,
    #[structopt(
        parse(from_os_str),
        long = "stats-file",
        help = "statistics chart destination",
        default_value = "words_per_sentence.svg"
    )]
    pub stats_file: PathBuf,
}

impl TryFrom<Dataset> for DatasetConfig {
    type Error = Error;

    fn try_from(d: Dataset) -> Result<Self, Self::Error> {
        let tags = Tags::try_from(d.tags)?;
        let masker = Masker::new(d.mask_percentage)?;
        let mut config = DatasetConfig::new(SourceConfig::try_from(d.source)?, d.output_dir);

        config.tags = tags;
        config.masker = masker;
        config.validate = d.validate_percentage;
        config.test = d.test_percentage;
        config.split_mode = d.split_mode;
        config.stats_file = d.stats.then_some(d.stats_file);
        Ok(config)
    }
}

#[derive(Debug, StructOpt)]
/// Sentences command and parameters.
pub struct Sentences {
    #[structopt(flatten)]
    pub source: Source,
    #[structopt(
        parse(from_os_str),
        long = "output-file",
        help = "destination file",
        default_value = "output/domain_adaptation_sentences.txt"
    )]
    pub output_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_defaults() {
        let cli = MaskCorpus::from_iter_safe(["maskcorpus", "dataset"]).unwrap();
        let d = match cli {
            MaskCorpus::Dataset(d) => d,
            _ => panic!("expected dataset command"),
        };
        assert_eq!(d.mask_percentage, 15);
        assert!(!d.stats);

        let config = DatasetConfig::try_from(d).unwrap();
        assert_eq!(config.source.input, DEFAULT_URL);
        assert!(config.source.shuffle);
        assert_eq!(config.tags, Tags::none());
        assert_eq!(config.split_mode, SplitMode::Divisor);
        assert!(config.stats_file.is_none());
    }

    #[test]
    fn dataset_options() {
        let cli = MaskCorpus::from_iter_safe([
            "maskcorpus",
            "dataset",
            "--tags",
            "<src>",
            "<tgt>",
            "--split-mode",
            "percent",
            "--no-shuffle",
            "--model-url",
            "https://example.org/models",
            "--stats",
        ])
        .unwrap();
        let d = match cli {
            MaskCorpus::Dataset(d) => d,
            _ => panic!("expected dataset command"),
        };
        let config = DatasetConfig::try_from(d).unwrap();
        assert_eq!(config.tags, Tags::new("<src>".to_string(), "<tgt>".to_string()));
        assert_eq!(config.split_mode, SplitMode::Percent);
        assert!(!config.source.shuffle);
        assert_eq!(
            config.source.model_url.unwrap().as_str(),
            "https://example.org/models/"
        );
        assert_eq!(config.stats_file, Some(PathBuf::from("words_per_sentence.svg")));
    }

    #[test]
    fn single_tag_rejected() {
        let cli = MaskCorpus::from_iter_safe(["maskcorpus", "dataset", "--tags", "<src>"]).unwrap();
        let d = match cli {
            MaskCorpus::Dataset(d) => d,
            _ => panic!("expected dataset command"),
        };
        assert!(matches!(DatasetConfig::try_from(d), Err(Error::Config(_))));
    }

    #[test]
    fn mask_percentage_out_of_range() {
        let cli =
            MaskCorpus::from_iter_safe(["maskcorpus", "dataset", "--mask-percentage", "120"])
                .unwrap();
        let d = match cli {
            MaskCorpus::Dataset(d) => d,
            _ => panic!("expected dataset command"),
        };
        assert!(matches!(DatasetConfig::try_from(d), Err(Error::Config(_))));
    }
}
