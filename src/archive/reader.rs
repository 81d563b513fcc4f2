//! Zip listing, sampling and reading.
use std::io::{Read, Seek};

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use zip::ZipArchive;

use crate::error::Error;

use super::DocumentEntry;

/// Entries selected for processing, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    entries: Vec<(usize, String)>,
    all: bool,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// true if every archive entry has been selected.
    pub fn is_all(&self) -> bool {
        self.all
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, name)| name.as_str())
    }
}

pub struct ArchiveReader<R: Read + Seek> {
    inner: ZipArchive<R>,
}

impl<R: Read + Seek> ArchiveReader<R> {
    /// Open a zip archive. Fails if the central directory can't be read.
    pub fn new(reader: R) -> Result<Self, Error> {
        let inner = ZipArchive::new(reader)?;
        debug!("archive has {} entries", inner.len());
        Ok(Self { inner })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Only plain text entries are processed.
    pub fn is_text(name: &str) -> bool {
        !name.ends_with('/') && name.to_lowercase().ends_with(".txt")
    }

    /// Entry names, in central directory order.
    pub fn names(&mut self) -> Result<Vec<String>, Error> {
        (0..self.inner.len())
            .map(|idx| Ok(self.inner.by_index_raw(idx)?.name().to_string()))
            .collect()
    }

    /// Select at most `max_docs` entries.
    ///
    /// The listing is shuffled before being truncated. If there are no more than `max_docs` entries
    /// (or `max_docs` is `None`), every entry is kept, in listing order.
    pub fn sample<G: Rng + ?Sized>(
        &mut self,
        max_docs: Option<usize>,
        rng: &mut G,
    ) -> Result<Sample, Error> {
        let mut entries: Vec<(usize, String)> = self.names()?.into_iter().enumerate().collect();
        let total = entries.len();

        let all = match max_docs {
            Some(max) if max < total => {
                entries.shuffle(rng);
                entries.truncate(max);
                false
            }
            _ => true,
        };

        if all {
            info!("Using all {} documents", total);
        } else {
            info!("Sampled {} of {} documents", entries.len(), total);
        }

        Ok(Sample { entries, all })
    }

    /// Iterate over the text entries of `sample`.
    pub fn documents<'a>(&'a mut self, sample: &'a Sample) -> Documents<'a, R> {
        Documents {
            archive: &mut self.inner,
            entries: sample.entries.iter(),
        }
    }
}

/// Iterator over the text documents of a [Sample].
pub struct Documents<'a, R: Read + Seek> {
    archive: &'a mut ZipArchive<R>,
    entries: std::slice::Iter<'a, (usize, String)>,
}

fn read_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    idx: usize,
    name: &str,
) -> Result<DocumentEntry, Error> {
    let mut file = archive.by_index(idx)?;
    let mut content = Vec::with_capacity(usize::try_from(file.size()).unwrap_or_default());
    file.read_to_end(&mut content)?;
    Ok(DocumentEntry::new(name.to_string(), content))
}

impl<'a, R: Read + Seek> Iterator for Documents<'a, R> {
    type Item = Result<DocumentEntry, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, name) in self.entries.by_ref() {
            if !ArchiveReader::<R>::is_text(name) {
                debug!("skipping {}", name);
                continue;
            }
            return Some(read_entry(self.archive, *idx, name));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    use super::*;

    type Reader = ArchiveReader<Cursor<Vec<u8>>>;

    fn archive(files: &[(&str, &str)]) -> Reader {
        let mut w = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in files {
            if name.ends_with('/') {
                w.add_directory(*name, FileOptions::default()).unwrap();
            } else {
                w.start_file(*name, FileOptions::default()).unwrap();
                w.write_all(content.as_bytes()).unwrap();
            }
        }
        let cursor = w.finish().unwrap();
        ArchiveReader::new(Cursor::new(cursor.into_inner())).unwrap()
    }

    #[test]
    fn is_text() {
        assert!(Reader::is_text("a/b/kafka.txt"));
        assert!(Reader::is_text("KAFKA.TXT"));
        assert!(!Reader::is_text("kafka.xml"));
        assert!(!Reader::is_text("kafka.txt.bak"));
        assert!(!Reader::is_text("texts.txt/"));
    }

    #[test]
    fn names_in_order() {
        let mut a = archive(&[("b.txt", "b"), ("a.txt", "a"), ("c.xml", "c")]);
        assert_eq!(a.names().unwrap(), vec!["b.txt", "a.txt", "c.xml"]);
    }

    #[test]
    fn unbounded_sample_keeps_everything() {
        let mut a = archive(&[("b.txt", "b"), ("a.txt", "a")]);
        let mut rng = StdRng::seed_from_u64(0);
        let s = a.sample(None, &mut rng).unwrap();
        assert!(s.is_all());
        assert_eq!(s.names().collect::<Vec<_>>(), vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn large_bound_keeps_everything() {
        let mut a = archive(&[("b.txt", "b"), ("a.txt", "a")]);
        let mut rng = StdRng::seed_from_u64(0);
        let s = a.sample(Some(2), &mut rng).unwrap();
        assert!(s.is_all());
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn bounded_sample() {
        let files: Vec<(String, String)> = (0..20)
            .map(|i| (format!("{i}.txt"), format!("doc {i}")))
            .collect();
        let files: Vec<(&str, &str)> = files
            .iter()
            .map(|(n, c)| (n.as_str(), c.as_str()))
            .collect();
        let mut a = archive(&files);

        let mut rng = StdRng::seed_from_u64(42);
        let s = a.sample(Some(5), &mut rng).unwrap();
        assert!(!s.is_all());
        assert_eq!(s.len(), 5);

        // same seed, same sample
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(a.sample(Some(5), &mut rng).unwrap(), s);
    }

    #[test]
    fn documents_skip_non_text() {
        let mut a = archive(&[
            ("dir/", ""),
            ("dir/one.txt", "first document"),
            ("dir/meta.xml", "<xml/>"),
            ("dir/two.txt", "second document"),
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        let s = a.sample(None, &mut rng).unwrap();
        let docs: Vec<DocumentEntry> = a.documents(&s).map(Result::unwrap).collect();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].name(), "dir/one.txt");
        assert_eq!(docs[0].content(), b"first document");
        assert_eq!(docs[1].name(), "dir/two.txt");
    }

    #[test]
    fn malformed_archive() {
        let res = ArchiveReader::new(Cursor::new(b"definitely not a zip".to_vec()));
        assert!(matches!(res, Err(Error::Zip(_))));
    }
}
