use std::collections::HashMap;

use crate::index::Occurrence;
use crate::keyword::{normalize, NoiseWords};

/// Keyword counts for a single document, consumed by [`crate::IndexBuilder::merge`].
pub type PerDocumentCounts = HashMap<String, Occurrence>;

/// Counts the keywords of one document. Rejected tokens are skipped.
pub fn scan_document<I>(document: &str, tokens: I, noise_words: &NoiseWords) -> PerDocumentCounts
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts = PerDocumentCounts::new();
    for token in tokens {
        let Some(keyword) = normalize(token.as_ref(), noise_words) else { continue };
        counts
            .entry(keyword)
            .and_modify(|occ| occ.frequency += 1)
            .or_insert_with(|| Occurrence::new(document, 1));
    }
    counts
}
