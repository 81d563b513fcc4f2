pub mod archive;
pub mod download;
pub mod error;
pub mod filtering;
pub mod pipelines;
pub mod processing;
pub mod segment;
