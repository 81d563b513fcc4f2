/*! Sentence segmentation.

Splitting text into sentences is delegated to a [Segmenter].
Two are provided:
- [UnicodeSegmenter] follows UAX#29 sentence boundaries.
- [AbbreviationSegmenter] does the same but does not end sentences on known abbreviations or ordinals.

The abbreviation lists are the segmentation "models", loaded by name through [SegmenterModel].
!*/
mod model;
mod segmenter;

pub use model::SegmenterModel;
pub use segmenter::{AbbreviationSegmenter, Segmenter, UnicodeSegmenter};
