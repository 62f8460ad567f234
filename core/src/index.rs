use serde::Serialize;
use std::collections::HashMap;

use crate::error::Result;
use crate::keyword::NoiseWords;
use crate::scan::{scan_document, PerDocumentCounts};
use crate::source::Document;

/// How many times a keyword occurs in one document.
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

/// Keyword to occurrence list, each list in non-increasing frequency order.
///
/// Among equal frequencies the order is whatever the insertions produced; it is not
/// re-sorted by document.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    entries: HashMap<String, Vec<Occurrence>>,
    num_docs: usize,
}

impl KeywordIndex {
    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.entries.get(keyword).map(Vec::as_slice)
    }

    pub fn contains(&self, keyword: &str) -> bool { self.entries.contains_key(keyword) }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Number of documents merged into the index, including ones with no keywords.
    pub fn document_count(&self) -> usize { self.num_docs }
}

/// Moves the last element of `occs` into place, assuming `occs[..n-1]` is already in
/// non-increasing frequency order. Returns the midpoints probed by the binary search,
/// or `None` when the list has a single element and no search is needed.
///
/// On an exact frequency match the search stops and the element goes in front of the
/// matched entry.
pub fn insert_last_occurrence(occs: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    if occs.len() <= 1 {
        return None;
    }
    let last = occs.pop()?;
    let target = last.frequency;

    let mut probes = Vec::new();
    // `hi` is the lower index bound and `low` the upper one; they may cross below zero.
    let mut hi: isize = 0;
    let mut low: isize = occs.len() as isize - 1;
    let mut mid: isize = 0;
    while hi <= low {
        mid = (low + hi) / 2;
        probes.push(mid as usize);
        let end = occs[mid as usize].frequency;
        if end == target {
            break;
        }
        if end < target {
            low = mid - 1;
        } else {
            hi = mid + 1;
            mid += 1;
        }
    }

    tracing::trace!(frequency = target, ?probes, at = mid, "binary insertion");
    occs.insert(mid as usize, last);
    Some(probes)
}

/// Single writer of a [`KeywordIndex`]. Documents are scanned and merged one at a time;
/// [`IndexBuilder::finish`] hands the index over for read-only querying.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    noise_words: NoiseWords,
    index: KeywordIndex,
}

impl IndexBuilder {
    pub fn new(noise_words: NoiseWords) -> Self {
        Self { noise_words, index: KeywordIndex::default() }
    }

    /// Scans one document with this builder's noise words and merges the result.
    pub fn add_document<I>(&mut self, document: &str, tokens: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let counts = scan_document(document, tokens, &self.noise_words);
        self.merge(counts);
    }

    /// Merges one document's keyword counts. New keywords get a singleton list; an
    /// existing list gets the occurrence appended and then moved into place.
    pub fn merge(&mut self, counts: PerDocumentCounts) {
        let keywords = counts.len();
        for (keyword, occurrence) in counts {
            match self.index.entries.get_mut(&keyword) {
                Some(occs) => {
                    occs.push(occurrence);
                    insert_last_occurrence(occs);
                }
                None => {
                    self.index.entries.insert(keyword, vec![occurrence]);
                }
            }
        }
        self.index.num_docs += 1;
        tracing::debug!(keywords, total_keywords = self.index.len(), "merged document");
    }

    pub fn finish(self) -> KeywordIndex { self.index }
}

/// Builds the whole index from `documents`, in order. The first failing document aborts
/// the build and nothing is returned.
pub fn build_index<D, T>(documents: D, noise_words: NoiseWords) -> Result<KeywordIndex>
where
    D: IntoIterator<Item = Result<Document<T>>>,
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut builder = IndexBuilder::new(noise_words);
    for doc in documents {
        let doc = doc?;
        tracing::debug!(document = %doc.id, "scanning");
        builder.add_document(&doc.id, doc.tokens);
    }
    let index = builder.finish();
    if index.document_count() == 0 {
        tracing::warn!("no documents to index");
    }
    tracing::info!(num_docs = index.document_count(), num_keywords = index.len(), "index build complete");
    Ok(index)
}
