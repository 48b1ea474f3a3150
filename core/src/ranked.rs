//! Frequency-ranked occurrence lists.
//!
//! A keyword's occurrences are kept in descending frequency order. New
//! occurrences are appended and then moved into place with a binary search over
//! the already-sorted prefix, so a list is never fully re-sorted.

use crate::index::Occurrence;

/// Moves the last element of `occs` to its ranked position. Positions
/// `0..n-1` must already be sorted by descending frequency.
pub fn insert_last_occurrence(occs: &mut Vec<Occurrence>) {
    reposition_last(occs, None);
}

/// Same as [`insert_last_occurrence`], returning the midpoints probed by the
/// binary search in probe order. Empty when the list holds fewer than two
/// elements.
pub fn insert_last_occurrence_traced(occs: &mut Vec<Occurrence>) -> Vec<usize> {
    let mut probes = Vec::new();
    reposition_last(occs, Some(&mut probes));
    probes
}

fn reposition_last(occs: &mut Vec<Occurrence>, probes: Option<&mut Vec<usize>>) {
    if occs.len() < 2 {
        return;
    }
    let last = occs.len() - 1;
    let at = insertion_point(&occs[..last], occs[last].frequency, probes);
    if at != last {
        let occ = occs.remove(last);
        occs.insert(at, occ);
    }
}

/// Binary search over `sorted` (descending). An equal frequency stops the
/// search and places the new entry just before the match; otherwise the
/// insertion point is the final lower bound.
fn insertion_point(sorted: &[Occurrence], frequency: u32, mut probes: Option<&mut Vec<usize>>) -> usize {
    // `high` is exclusive here; the probed midpoints match a closed-range search.
    let (mut low, mut high) = (0usize, sorted.len());
    while low < high {
        let mid = (low + high - 1) / 2;
        if let Some(probes) = probes.as_deref_mut() {
            probes.push(mid);
        }
        let probed = sorted[mid].frequency;
        if probed < frequency {
            high = mid;
        } else if probed > frequency {
            low = mid + 1;
        } else {
            return mid;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(freqs: &[u32]) -> Vec<Occurrence> {
        freqs
            .iter()
            .enumerate()
            .map(|(i, &f)| Occurrence::new(format!("doc{i}"), f))
            .collect()
    }

    fn freqs(occs: &[Occurrence]) -> Vec<u32> {
        occs.iter().map(|o| o.frequency).collect()
    }

    #[test]
    fn singleton_needs_no_search() {
        let mut occs = list(&[4]);
        assert!(insert_last_occurrence_traced(&mut occs).is_empty());
        assert_eq!(freqs(&occs), vec![4]);
    }

    #[test]
    fn equal_frequency_goes_before_probed_match() {
        let mut occs = list(&[5, 5, 3, 5]);
        let probes = insert_last_occurrence_traced(&mut occs);
        assert_eq!(probes, vec![1]);
        assert_eq!(freqs(&occs), vec![5, 5, 5, 3]);
        assert_eq!(occs[1].document, "doc3");
    }

    #[test]
    fn larger_frequency_moves_to_front() {
        let mut occs = list(&[8, 6, 4, 2, 9]);
        let probes = insert_last_occurrence_traced(&mut occs);
        assert_eq!(probes, vec![1, 0]);
        assert_eq!(freqs(&occs), vec![9, 8, 6, 4, 2]);
    }

    #[test]
    fn smaller_frequency_stays_last() {
        let mut occs = list(&[8, 6, 4, 2, 1]);
        let probes = insert_last_occurrence_traced(&mut occs);
        assert_eq!(probes, vec![1, 2, 3]);
        assert_eq!(freqs(&occs), vec![8, 6, 4, 2, 1]);
        assert_eq!(occs[4].document, "doc4");
    }

    #[test]
    fn middle_insertion() {
        let mut occs = list(&[12, 8, 7, 5, 3, 2, 4]);
        let probes = insert_last_occurrence_traced(&mut occs);
        assert_eq!(probes, vec![2, 4, 3]);
        assert_eq!(freqs(&occs), vec![12, 8, 7, 5, 4, 3, 2]);
    }

    #[test]
    fn untraced_matches_traced() {
        let mut a = list(&[9, 7, 7, 2, 7]);
        let mut b = a.clone();
        insert_last_occurrence(&mut a);
        insert_last_occurrence_traced(&mut b);
        assert_eq!(a, b);
    }
}
