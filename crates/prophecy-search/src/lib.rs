//! Prophecy Vision Search Layer
//!
//! Semantic verse search with a keyword fallback. The semantic side embeds
//! verse texts into vectors and answers nearest-neighbor queries over an
//! HNSW index; when no embedding model is configured (or embedding fails),
//! queries fall back to the naive keyword ranker in `prophecy-domain`,
//! which is always available and never fails.
//!
//! # Examples
//!
//! ```
//! use prophecy_search::{MockEmbeddingModel, VerseSearcher};
//! use prophecy_domain::SearchRecord;
//!
//! let corpus = vec![SearchRecord::new("Joel 2:31", "the moon into blood")];
//! let searcher = VerseSearcher::with_semantic(corpus, MockEmbeddingModel::new(64)).unwrap();
//! let outcome = searcher.search("blood moon", 5).unwrap();
//! assert!(!outcome.hits.is_empty());
//! ```

#![warn(missing_docs)]

pub mod embedding;
pub mod index;
pub mod searcher;

pub use embedding::{cosine_similarity, EmbeddingError, EmbeddingModel, MockEmbeddingModel};
pub use index::{VerseIndex, VerseIndexError};
pub use searcher::{SearchError, SearchHit, SearchMode, SearchOutcome, VerseSearcher};
