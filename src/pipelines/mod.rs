//! Pipelines.
//!
//! Two pipelines are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
//!
//! - [MaskedDataset] builds the train/validation/test masked corpus.
//! - [SentenceDump] writes extracted sentences to a single file.
mod dataset;
pub mod pipeline;
mod sentences;
mod source;

pub use dataset::{DatasetConfig, DatasetReport, MaskedDataset};
pub use pipeline::Pipeline;
pub use sentences::SentenceDump;
pub use source::SourceConfig;
