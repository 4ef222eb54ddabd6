//! Keyword relevance ranking
//!
//! Naive substring-overlap scoring used when no semantic index is
//! available. The simplicity is intentional and observable behavior:
//! whitespace tokenization only, no stemming, no token deduplication,
//! substring (not whole-word) matching.

/// A short text record addressable by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    /// Identifier, e.g. "Joel 2:31"
    pub reference: String,
    /// The record body
    pub text: String,
}

impl SearchRecord {
    /// Create a new record.
    pub fn new(reference: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            text: text.into(),
        }
    }
}

/// A record paired with its relevance score for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRecord<'a> {
    /// The matched record
    pub record: &'a SearchRecord,
    /// Number of query tokens found in the record
    pub score: usize,
}

/// Score a corpus against a free-text query by keyword overlap.
///
/// The query is lowercased and split on whitespace. Each token scores one
/// point per record if it occurs as a substring of the lowercased text or
/// the lowercased reference. Repeated query tokens score repeatedly.
/// Records scoring zero are excluded; the rest come back sorted by
/// descending score, with ties keeping the corpus's original order.
///
/// An empty query yields an empty result.
///
/// # Examples
///
/// ```
/// use prophecy_domain::{keyword_search, SearchRecord};
///
/// let corpus = vec![
///     SearchRecord::new("Joel 2:31", "the moon into blood"),
///     SearchRecord::new("Psalm 19:1", "the heavens declare"),
/// ];
/// let hits = keyword_search("blood moon", &corpus);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].score, 2);
/// ```
pub fn keyword_search<'a>(query: &str, corpus: &'a [SearchRecord]) -> Vec<ScoredRecord<'a>> {
    let query_lower = query.to_lowercase();
    let tokens: Vec<&str> = query_lower.split_whitespace().collect();

    let mut results: Vec<ScoredRecord<'a>> = corpus
        .iter()
        .filter_map(|record| {
            let text = record.text.to_lowercase();
            let reference = record.reference.to_lowercase();
            let score = tokens
                .iter()
                .filter(|token| text.contains(**token) || reference.contains(**token))
                .count();
            (score > 0).then_some(ScoredRecord { record, score })
        })
        .collect();

    // Stable sort keeps corpus order for equal scores.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
