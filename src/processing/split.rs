/*! Dataset splitting and writing.

A corpus is cut into three contiguous slices, in this order: validation, test, train.
Each slice is written as two line-aligned files, `<split>_source.txt` holding masked sentences
and `<split>_target.txt` holding the originals.

Slice sizes are derived from two parameters whose meaning depends on [SplitMode]:
- [SplitMode::Divisor]: `len / validate` and `len / test` (so `10` gives a tenth of the corpus).
- [SplitMode::Percent]: `len * validate / 100` and `len * test / 100`.
!*/
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};

use crate::error::Error;

use super::SentencePair;

/// How split parameters are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitMode {
    #[default]
    Divisor,
    Percent,
}

impl FromStr for SplitMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "divisor" => Ok(Self::Divisor),
            "percent" => Ok(Self::Percent),
            other => Err(Error::Config(format!(
                "unknown split mode {other} (expected divisor or percent)"
            ))),
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Divisor => write!(f, "divisor"),
            Self::Percent => write!(f, "percent"),
        }
    }
}

impl SplitMode {
    /// Check split parameters without needing a corpus.
    pub fn validate(&self, validate: usize, test: usize) -> Result<(), Error> {
        match self {
            Self::Divisor if validate == 0 || test == 0 => Err(Error::Config(format!(
                "split divisors must be strictly positive (got {validate} and {test})"
            ))),
            Self::Percent if validate + test > 100 => Err(Error::Config(format!(
                "validation and test percentages sum above 100 ({validate} + {test})"
            ))),
            _ => Ok(()),
        }
    }

    fn slice_len(&self, len: usize, param: usize) -> usize {
        match self {
            Self::Divisor => len / param,
            Self::Percent => len * param / 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Validation,
    Test,
    Train,
}

impl Split {
    /// Splits, in corpus order.
    pub const ALL: [Split; 3] = [Split::Validation, Split::Test, Split::Train];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation => "val",
            Self::Test => "test",
            Self::Train => "train",
        }
    }

    pub fn source_path(&self, dst: &Path) -> PathBuf {
        dst.join(format!("{}_source.txt", self.name()))
    }

    pub fn target_path(&self, dst: &Path) -> PathBuf {
        dst.join(format!("{}_target.txt", self.name()))
    }
}

/// Number of pairs per split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitSizes {
    pub validation: usize,
    pub test: usize,
    pub train: usize,
}

/// `0 <= validate_index <= test_index <= len`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitBoundaries {
    validate_index: usize,
    test_index: usize,
    len: usize,
}

impl SplitBoundaries {
    pub fn compute(len: usize, validate: usize, test: usize, mode: SplitMode) -> Result<Self, Error> {
        mode.validate(validate, test)?;

        let validate_len = mode.slice_len(len, validate);
        let test_len = mode.slice_len(len, test);

        // divisors of 1 ask for more than the corpus
        if validate_len + test_len > len {
            warn!(
                "validation ({}) and test ({}) slices exceed corpus size {}, clamping",
                validate_len, test_len, len
            );
        }
        let validate_index = validate_len.min(len);
        let test_index = (validate_index + test_len).min(len);

        Ok(Self {
            validate_index,
            test_index,
            len,
        })
    }

    pub fn validate_index(&self) -> usize {
        self.validate_index
    }

    pub fn test_index(&self) -> usize {
        self.test_index
    }

    pub fn range(&self, split: Split) -> Range<usize> {
        match split {
            Split::Validation => 0..self.validate_index,
            Split::Test => self.validate_index..self.test_index,
            Split::Train => self.test_index..self.len,
        }
    }

    pub fn sizes(&self) -> SplitSizes {
        SplitSizes {
            validation: self.range(Split::Validation).len(),
            test: self.range(Split::Test).len(),
            train: self.range(Split::Train).len(),
        }
    }
}

/// Line prefixes for source and target files. Either both or none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Option<(String, String)>);

impl Tags {
    pub fn new(source: String, target: String) -> Self {
        Self(Some((source, target)))
    }

    pub fn none() -> Self {
        Self(None)
    }

    fn tag_line(tag: Option<&str>, sentence: &str) -> String {
        match tag {
            Some(tag) => format!("{tag} {sentence}"),
            None => sentence.to_string(),
        }
    }

    fn untag_line(tag: Option<&str>, line: String) -> String {
        match tag.and_then(|tag| line.strip_prefix(&format!("{tag} "))) {
            Some(untagged) => untagged.to_string(),
            None => line,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.0.as_ref().map(|(source, _)| source.as_str())
    }

    pub fn target(&self) -> Option<&str> {
        self.0.as_ref().map(|(_, target)| target.as_str())
    }
}

impl TryFrom<Vec<String>> for Tags {
    type Error = Error;

    fn try_from(tags: Vec<String>) -> Result<Self, Self::Error> {
        let mut tags = tags.into_iter();
        match (tags.next(), tags.next(), tags.next()) {
            (None, _, _) => Ok(Self::none()),
            (Some(source), Some(target), None) => Ok(Self::new(source, target)),
            _ => Err(Error::Config(
                "tags must be either empty or a (source, target) pair".to_string(),
            )),
        }
    }
}

/// Writes split corpora into `dst`.
pub struct DatasetWriter {
    dst: PathBuf,
    tags: Tags,
}

impl DatasetWriter {
    pub fn new(dst: &Path, tags: Tags) -> Self {
        Self {
            dst: dst.to_path_buf(),
            tags,
        }
    }

    /// Write the six split files.
    ///
    /// Every file is truncated before the first line is written,
    /// so a failed run never leaves stale content appended to.
    pub fn write(
        &self,
        pairs: &[SentencePair],
        boundaries: &SplitBoundaries,
    ) -> Result<SplitSizes, Error> {
        if boundaries.len != pairs.len() {
            return Err(Error::Config(format!(
                "split boundaries were computed for {} pairs, got {}",
                boundaries.len,
                pairs.len()
            )));
        }
        std::fs::create_dir_all(&self.dst)?;

        let mut files = Split::ALL
            .iter()
            .map(|split| {
                let source = File::create(split.source_path(&self.dst))?;
                let target = File::create(split.target_path(&self.dst))?;
                Ok((*split, BufWriter::new(source), BufWriter::new(target)))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        for (split, source, target) in files.iter_mut() {
            let slice = &pairs[boundaries.range(*split)];
            info!("writing {} pairs to {} files", slice.len(), split.name());
            for pair in slice {
                writeln!(source, "{}", Tags::tag_line(self.tags.source(), &pair.masked))?;
                writeln!(target, "{}", Tags::tag_line(self.tags.target(), &pair.original))?;
            }
            source.flush()?;
            target.flush()?;
        }

        Ok(boundaries.sizes())
    }

    /// Read a written split back into pairs, removing tags.
    pub fn read_split(&self, split: Split) -> Result<Vec<SentencePair>, Error> {
        let sources = read_lines(&split.source_path(&self.dst))?;
        let targets = read_lines(&split.target_path(&self.dst))?;

        if sources.len() != targets.len() {
            return Err(Error::Custom(format!(
                "{} split is not aligned: {} source lines, {} target lines",
                split.name(),
                sources.len(),
                targets.len()
            )));
        }

        Ok(sources
            .into_iter()
            .zip(targets)
            .map(|(masked, original)| {
                SentencePair::new(
                    Tags::untag_line(self.tags.source(), masked),
                    Tags::untag_line(self.tags.target(), original),
                )
            })
            .collect())
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let reader = BufReader::new(File::open(path)?);
    Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
}

/// Write one sentence per line into `dst`, creating parent folders.
pub fn write_sentences(dst: &Path, sentences: &[String]) -> Result<(), Error> {
    if let Some(parent) = dst.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(dst)?);
    for sentence in sentences {
        writeln!(out, "{}", sentence)?;
    }
    out.flush()?;
    info!("wrote {} sentences to {:?}", sentences.len(), dst);
    Ok(())
}
