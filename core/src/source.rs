use crate::error::{Error, Result};
use crate::tokenizer::StopWords;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Supplies raw document text by name.
pub trait DocumentSource {
    fn read_document(&self, document: &str) -> Result<String>;
}

/// Reads documents from disk, resolving relative names against `root`.
pub struct FsSource {
    pub root: PathBuf,
}

impl FsSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    fn path_for(&self, document: &str) -> PathBuf { self.root.join(document) }
}

impl DocumentSource for FsSource {
    fn read_document(&self, document: &str) -> Result<String> {
        fs::read_to_string(self.path_for(document)).map_err(|source| Error::DocumentUnavailable {
            document: document.to_string(),
            source,
        })
    }
}

/// Documents held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self { Self::default() }

    pub fn with_document(mut self, document: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(document, text);
        self
    }

    pub fn insert(&mut self, document: impl Into<String>, text: impl Into<String>) {
        self.docs.insert(document.into(), text.into());
    }
}

impl DocumentSource for MemorySource {
    fn read_document(&self, document: &str) -> Result<String> {
        self.docs.get(document).cloned().ok_or_else(|| Error::DocumentUnavailable {
            document: document.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such document"),
        })
    }
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Parses a document list: one name per line, blank lines ignored.
pub fn parse_document_list(text: &str) -> Vec<String> {
    non_blank_lines(text).map(str::to_string).collect()
}

pub fn load_document_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::DocumentListUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_document_list(&text))
}

/// Loads stop words, one per line.
pub fn load_stop_words<P: AsRef<Path>>(path: P) -> Result<StopWords> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::StopWordsUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(non_blank_lines(&text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_list_skips_blank_lines() {
        let docs = parse_document_list("doc1.txt\n\n  doc2.txt  \n");
        assert_eq!(docs, vec!["doc1.txt".to_string(), "doc2.txt".to_string()]);
    }

    #[test]
    fn memory_source_reports_missing_document() {
        let source = MemorySource::new().with_document("a", "alpha");
        assert_eq!(source.read_document("a").unwrap(), "alpha");
        let err = source.read_document("b").unwrap_err();
        assert!(matches!(err, Error::DocumentUnavailable { ref document, .. } if document == "b"));
    }
}
