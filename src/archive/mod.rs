/*! Zip archive access.

[ArchiveReader] lists an archive, draws a (possibly bounded) random [Sample] of its entries
and yields the text ones as [DocumentEntry].
!*/
mod document;
mod reader;

pub use document::DocumentEntry;
pub use reader::{ArchiveReader, Documents, Sample};
