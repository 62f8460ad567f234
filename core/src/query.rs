use crate::index::{KeywordIndex, Occurrence};

/// Result bound used when the caller does not pick one.
pub const DEFAULT_LIMIT: usize = 5;

/// Documents containing `kw1` or `kw2`, highest frequency first, at most `k` of them and
/// each document once. Equal frequencies favour `kw1`.
///
/// Returns `None` only when neither keyword is in the index.
pub fn top_k<'a>(index: &'a KeywordIndex, kw1: &str, kw2: &str, k: usize) -> Option<Vec<&'a str>> {
    let first = index.occurrences(kw1);
    let second = index.occurrences(kw2);

    let mut docs = TopDocs::new(k);
    match (first, second) {
        (None, None) => return None,
        (Some(list), None) | (None, Some(list)) => docs.drain(list),
        (Some(first), Some(second)) => {
            let (mut it1, mut it2) = (0, 0);
            while it1 < first.len() && it2 < second.len() && !docs.is_full() {
                if first[it1].frequency >= second[it2].frequency {
                    docs.offer(&first[it1]);
                    it1 += 1;
                } else {
                    docs.offer(&second[it2]);
                    it2 += 1;
                }
            }
            docs.drain(&first[it1..]);
            docs.drain(&second[it2..]);
        }
    }
    Some(docs.into_inner())
}

struct TopDocs<'a> {
    docs: Vec<&'a str>,
    limit: usize,
}

impl<'a> TopDocs<'a> {
    fn new(limit: usize) -> Self {
        Self { docs: Vec::with_capacity(limit.min(16)), limit }
    }

    fn is_full(&self) -> bool { self.docs.len() >= self.limit }

    fn offer(&mut self, occ: &'a Occurrence) {
        if !self.docs.contains(&occ.document.as_str()) {
            self.docs.push(&occ.document);
        }
    }

    fn drain(&mut self, rest: &'a [Occurrence]) {
        for occ in rest {
            if self.is_full() {
                break;
            }
            self.offer(occ);
        }
    }

    fn into_inner(self) -> Vec<&'a str> { self.docs }
}
