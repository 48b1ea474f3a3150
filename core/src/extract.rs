use crate::error::Result;
use crate::index::Occurrence;
use crate::source::DocumentSource;
use crate::tokenizer::{normalize, StopWords};
use std::collections::HashMap;

/// Counts the keywords of one document. Each keyword maps to a single
/// [`Occurrence`] whose frequency is the number of tokens that normalized to it.
pub fn extract_occurrences(document: &str, text: &str, stop_words: &StopWords) -> HashMap<String, Occurrence> {
    let mut occurrences: HashMap<String, Occurrence> = HashMap::new();
    for token in text.split_whitespace() {
        let Some(word) = normalize(token, stop_words) else { continue };
        occurrences
            .entry(word)
            .or_insert_with(|| Occurrence::new(document, 0))
            .frequency += 1;
    }
    occurrences
}

/// Fetches `document` from `source` and extracts its keyword occurrences.
pub fn load_keywords_from_document(
    source: &dyn DocumentSource,
    document: &str,
    stop_words: &StopWords,
) -> Result<HashMap<String, Occurrence>> {
    let text = source.read_document(document)?;
    Ok(extract_occurrences(document, &text, stop_words))
}
