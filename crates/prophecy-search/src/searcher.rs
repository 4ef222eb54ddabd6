//! High-level verse search over the scripture corpus
//!
//! A [`VerseSearcher`] answers queries semantically when an embedding
//! model and index are available, and falls back to weighted keyword
//! matching when they are not or when embedding fails.

use crate::embedding::{EmbeddingError, EmbeddingModel};
use crate::index::{VerseIndex, VerseIndexError};
use prophecy_domain::{keyword_search, SearchRecord};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during verse search
#[derive(Error, Debug)]
pub enum SearchError {
    /// Query embedding failed and no keyword fallback was possible
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Index operation failed
    #[error("Index error: {0}")]
    Index(#[from] VerseIndexError),

    /// The searcher has no verses to search over
    #[error("Search corpus is empty")]
    EmptyCorpus,
}

/// How a query was actually answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Embedding similarity over the vector index
    Semantic,
    /// Weighted keyword overlap
    Keyword,
}

/// A single search result
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// Verse reference, e.g. "Joel 2:31"
    pub reference: String,
    /// Full verse text
    pub text: String,
    /// Relevance score. Cosine similarity for semantic results,
    /// keyword match count for keyword results.
    pub relevance: f32,
}

/// A query result with the mode that produced it
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Mode that actually answered the query
    pub mode: SearchMode,
    /// Hits in descending relevance order
    pub hits: Vec<SearchHit>,
}

/// Searches a verse corpus, preferring semantic similarity with a
/// keyword fallback.
pub struct VerseSearcher {
    records: Vec<SearchRecord>,
    semantic: Option<SemanticBackend>,
}

struct SemanticBackend {
    model: Box<dyn EmbeddingModel + Send + Sync>,
    index: VerseIndex,
}

/// Default efSearch used for index queries.
const EF_SEARCH: usize = 64;

impl VerseSearcher {
    /// Create a keyword-only searcher over the given records.
    pub fn keyword_only(records: Vec<SearchRecord>) -> Self {
        Self {
            records,
            semantic: None,
        }
    }

    /// Create a searcher with a semantic backend.
    ///
    /// Every record is embedded and indexed up front. Records whose
    /// embedding fails are skipped with a warning and remain reachable
    /// through the keyword fallback.
    pub fn with_semantic(
        records: Vec<SearchRecord>,
        model: impl EmbeddingModel + Send + Sync + 'static,
    ) -> Result<Self, SearchError> {
        let model: Box<dyn EmbeddingModel + Send + Sync> = Box::new(model);
        let index = VerseIndex::new(model.dimension());

        for (offset, record) in records.iter().enumerate() {
            match model.embed(&record.text) {
                Ok(embedding) => index.add(offset, &embedding)?,
                Err(e) => {
                    warn!(reference = %record.reference, error = %e, "Skipping unembeddable verse");
                }
            }
        }

        debug!(indexed = index.len(), total = records.len(), "Built verse index");

        Ok(Self {
            records,
            semantic: Some(SemanticBackend { model, index }),
        })
    }

    /// Number of records behind this searcher.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the searcher has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Search for the top `limit` verses matching `query`.
    ///
    /// Prefers the semantic backend when present. Falls back to keyword
    /// matching when there is no backend or when query embedding fails.
    pub fn search(&self, query: &str, limit: usize) -> Result<SearchOutcome, SearchError> {
        if self.records.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }

        if let Some(backend) = &self.semantic {
            match backend.model.embed(query) {
                Ok(embedding) => {
                    let neighbours = backend.index.search(&embedding, limit, EF_SEARCH)?;
                    let hits = neighbours
                        .into_iter()
                        .filter_map(|(offset, similarity)| {
                            self.records.get(offset).map(|record| SearchHit {
                                reference: record.reference.clone(),
                                text: record.text.clone(),
                                relevance: similarity,
                            })
                        })
                        .collect();
                    debug!(query = %query, mode = "semantic", "Answered verse query");
                    return Ok(SearchOutcome {
                        mode: SearchMode::Semantic,
                        hits,
                    });
                }
                Err(e) => {
                    warn!(query = %query, error = %e, "Embedding failed, falling back to keywords");
                }
            }
        }

        Ok(self.keyword(query, limit))
    }

    fn keyword(&self, query: &str, limit: usize) -> SearchOutcome {
        let scored = keyword_search(query, &self.records);
        let hits = scored
            .into_iter()
            .take(limit)
            .map(|s| SearchHit {
                reference: s.record.reference.clone(),
                text: s.record.text.clone(),
                relevance: s.score as f32,
            })
            .collect();
        debug!(query = %query, mode = "keyword", "Answered verse query");
        SearchOutcome {
            mode: SearchMode::Keyword,
            hits,
        }
    }
}
