use crate::index::{KeywordIndex, Occurrence};
use std::collections::HashSet;

/// Result size used by [`KeywordIndex::top5_search`].
pub const DEFAULT_LIMIT: usize = 5;

/// Documents matching `kw1` OR `kw2`, highest frequency first, at most `limit`
/// long. Returns `None` when neither keyword is indexed.
///
/// A document present under both keywords appears once, ranked by the larger
/// of its two frequencies. Equal frequencies favour `kw1`.
pub fn top_matches(index: &KeywordIndex, kw1: &str, kw2: &str, limit: usize) -> Option<Vec<String>> {
    match (index.get(kw1), index.get(kw2)) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(
            only.iter().take(limit).map(|occ| occ.document.clone()).collect(),
        ),
        (Some(first), Some(second)) => Some(merge_ranked(first, second, limit)),
    }
}

/// Two-cursor merge of descending lists. Since both inputs are sorted, the
/// first time a document is emitted is at its highest frequency; later
/// entries for it are dropped.
fn merge_ranked(first: &[Occurrence], second: &[Occurrence], limit: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(limit.min(first.len() + second.len()));
    let mut emitted: HashSet<&str> = HashSet::new();
    let (mut i, mut j) = (0, 0);

    while out.len() < limit {
        let next = match (first.get(i), second.get(j)) {
            (None, None) => break,
            (Some(a), Some(b)) if a.frequency >= b.frequency => {
                i += 1;
                a
            }
            (Some(a), None) => {
                i += 1;
                a
            }
            (_, Some(b)) => {
                j += 1;
                b
            }
        };
        if emitted.insert(next.document.as_str()) {
            out.push(next.document.clone());
        }
    }
    out
}

impl KeywordIndex {
    pub fn top_matches(&self, kw1: &str, kw2: &str, limit: usize) -> Option<Vec<String>> {
        top_matches(self, kw1, kw2, limit)
    }

    /// [`top_matches`] with the default limit of five.
    pub fn top5_search(&self, kw1: &str, kw2: &str) -> Option<Vec<String>> {
        top_matches(self, kw1, kw2, DEFAULT_LIMIT)
    }
}
