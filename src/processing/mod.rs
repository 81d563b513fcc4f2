/*! Content processing

Turns archive documents into sentences, sentences into (masked, original) pairs,
and pairs into dataset splits and statistics.

```text
DocumentEntry -> SentenceExtractor -> Masker -> PairBuilder -> DatasetWriter
                                                            \-> Statistics
```
!*/
mod extract;
mod mask;
mod pairs;
pub mod split;
pub mod stats;

pub use extract::SentenceExtractor;
pub use mask::{Masker, MASK_TOKEN};
pub use pairs::{Corpus, PairBuilder, SentencePair};
