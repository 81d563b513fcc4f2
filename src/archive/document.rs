/// A single archive member, read in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    name: String,
    content: Vec<u8>,
}

impl DocumentEntry {
    pub fn new(name: String, content: Vec<u8>) -> Self {
        Self { name, content }
    }

    /// archive-relative name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Raw non-empty lines, without their `\n` terminator.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.content
            .split(|b| *b == b'\n')
            .filter(|line| !line.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentEntry;

    #[test]
    fn lines() {
        let d = DocumentEntry::new("a.txt".to_string(), b"first\n\nsecond\n".to_vec());
        let lines: Vec<&[u8]> = d.lines().collect();
        assert_eq!(lines, vec![&b"first"[..], &b"second"[..]]);
    }

    #[test]
    fn no_trailing_newline() {
        let d = DocumentEntry::new("a.txt".to_string(), b"only".to_vec());
        assert_eq!(d.lines().count(), 1);
    }

    #[test]
    fn empty() {
        let d = DocumentEntry::new("a.txt".to_string(), Vec::new());
        assert_eq!(d.lines().count(), 0);
    }
}
