pub mod error;
pub mod index;
pub mod keyword;
pub mod query;
pub mod scan;
pub mod source;

pub use error::{IndexError, Result};
pub use index::{build_index, insert_last_occurrence, IndexBuilder, KeywordIndex, Occurrence};
pub use keyword::{normalize, NoiseWords};
pub use query::{top_k, DEFAULT_LIMIT};
pub use scan::{scan_document, PerDocumentCounts};
pub use source::{Document, DocumentList};
