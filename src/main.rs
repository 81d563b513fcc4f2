//! # maskcorpus
//!
//! Builds a masked language modeling corpus from a zip archive of plain text documents.
//!
//! Documents are sampled from the archive, their long lines are split into sentences,
//! and each sentence is paired with a copy where words are randomly replaced by `<mask>`.
//! Pairs are written into train/validation/test source and target files.
//!
//! ## Getting started
//!
//! ```sh
//! maskcorpus 0.1.0
//! masked language modeling corpus generation tool.
//!
//! USAGE:
//!     maskcorpus <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     dataset      Build masked train/validation/test files
//!     help         Prints this message or the help of the given subcommand(s)
//!     sentences    Write extracted sentences, one per line
//! ```
//!
//! Set `RUST_LOG=info` to follow progress.
use structopt::StructOpt;

use maskcorpus::error::Error;
use maskcorpus::pipelines::{DatasetConfig, MaskedDataset, Pipeline, SentenceDump, SourceConfig};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::MaskCorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::MaskCorpus::Dataset(d) => {
            let p = MaskedDataset::new(DatasetConfig::try_from(d)?)?;
            let report = p.run()?;
            info!(
                "done: {} sentences from {} documents",
                report.nb_sentences, report.doc_count
            );
        }

        cli::MaskCorpus::Sentences(s) => {
            let dst = s.output_file;
            let p = SentenceDump::new(SourceConfig::try_from(s.source)?, dst)?;
            let nb = p.run()?;
            info!("done: {} sentences", nb);
        }
    };
    Ok(())
}
