/*! Filtering utilities

Filters operate on lines of a document, before they are split into sentences.

Filters implement [Filter]: detection returns `true` when the item is kept.
! */
mod filter;
mod line;

pub use filter::Filter;
pub use line::WordCount;
