use crate::error::Result;
use crate::extract::load_keywords_from_document;
use crate::ranked::insert_last_occurrence;
use crate::source::DocumentSource;
use crate::tokenizer::StopWords;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// How often a keyword appears in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// Keyword -> occurrences sorted by descending frequency. Read-only once built.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    keywords: HashMap<String, Vec<Occurrence>>,
    num_docs: u32,
}

impl KeywordIndex {
    /// Ranked occurrences for `keyword`, if it was indexed.
    pub fn get(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    pub fn contains(&self, keyword: &str) -> bool { self.keywords.contains_key(keyword) }

    /// Indexed keywords in lexicographic order.
    pub fn keywords(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.keywords.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }

    pub fn num_docs(&self) -> u32 { self.num_docs }
}

/// Owns a [`KeywordIndex`] while documents are merged into it.
pub struct IndexBuilder {
    index: KeywordIndex,
    stop_words: StopWords,
    seen: HashSet<String>,
}

impl IndexBuilder {
    pub fn new(stop_words: StopWords) -> Self {
        Self { index: KeywordIndex::default(), stop_words, seen: HashSet::new() }
    }

    /// Merges one document's keyword occurrences. Each occurrence is appended
    /// to its keyword's list and moved into ranked position. Occurrences for a
    /// document merged by an earlier call are dropped.
    pub fn merge_keywords(&mut self, kws: HashMap<String, Occurrence>) {
        let mut merged: HashSet<String> = HashSet::new();
        for (word, occ) in kws {
            if self.seen.contains(&occ.document) {
                tracing::warn!(document = %occ.document, keyword = %word, "document already merged, dropping occurrence");
                continue;
            }
            merged.insert(occ.document.clone());
            let occs = self.index.keywords.entry(word).or_default();
            occs.push(occ);
            insert_last_occurrence(occs);
        }
        self.seen.extend(merged);
    }

    /// Reads, extracts and merges `document`. A name already indexed is
    /// skipped so no list holds two entries for the same document.
    pub fn index_document(&mut self, source: &dyn DocumentSource, document: &str) -> Result<()> {
        if self.seen.contains(document) {
            tracing::warn!(document, "document listed more than once, skipping");
            return Ok(());
        }
        let kws = load_keywords_from_document(source, document, &self.stop_words)?;
        tracing::debug!(document, num_keywords = kws.len(), "indexed document");
        self.merge_keywords(kws);
        self.seen.insert(document.to_string());
        Ok(())
    }

    pub fn finish(mut self) -> KeywordIndex {
        self.index.num_docs = self.seen.len() as u32;
        self.index
    }
}

/// Indexes every document in order. The first unreadable document aborts the
/// build.
pub fn build_index<S: AsRef<str>>(
    source: &dyn DocumentSource,
    documents: &[S],
    stop_words: StopWords,
) -> Result<KeywordIndex> {
    let mut builder = IndexBuilder::new(stop_words);
    for document in documents {
        builder.index_document(source, document.as_ref())?;
    }
    let index = builder.finish();
    tracing::info!(num_docs = index.num_docs(), num_keywords = index.len(), "index build complete");
    Ok(index)
}
