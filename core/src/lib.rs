//! In-memory keyword index over a small document corpus, answering
//! two-keyword OR queries ranked by occurrence frequency.

pub mod error;
pub mod extract;
pub mod index;
pub mod ranked;
pub mod search;
pub mod source;
pub mod tokenizer;

pub use error::{Error, Result};
pub use index::{build_index, IndexBuilder, KeywordIndex, Occurrence};
pub use search::{top_matches, DEFAULT_LIMIT};
pub use source::{DocumentSource, FsSource, MemorySource};
pub use tokenizer::StopWords;
