//! HNSW nearest-neighbor index over verse embeddings
//!
//! In-memory index keyed by corpus offset; rebuildable from the static
//! corpus at startup, so nothing persists.
//!
//! # HNSW parameters
//!
//! - **M**: bi-directional links per node (16)
//! - **efConstruction**: candidate list size while building (200)
//! - **efSearch**: candidate list size while querying (caller-supplied)

use hnsw_rs::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

const DEFAULT_M: usize = 16;
const DEFAULT_EF_CONSTRUCTION: usize = 200;
const DEFAULT_MAX_ELEMENTS: usize = 10_000;

/// Errors that can occur during index operations
#[derive(Error, Debug)]
pub enum VerseIndexError {
    /// Embedding has the wrong dimension for this index
    #[error("Invalid embedding dimension: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        actual: usize,
    },
}

/// HNSW wrapper mapping corpus offsets to embeddings
///
/// Stores (corpus_offset, embedding) pairs and answers k-nearest-neighbor
/// queries with cosine distance, returned as similarity scores.
pub struct VerseIndex {
    dimension: usize,
    hnsw: Arc<Mutex<Hnsw<'static, f32, DistCosine>>>,
    id_map: Arc<Mutex<HashMap<usize, usize>>>,
    next_id: Arc<Mutex<usize>>,
}

impl VerseIndex {
    /// Create a new index for embeddings of the given dimension.
    pub fn new(dimension: usize) -> Self {
        let nb_layer = 16.min((DEFAULT_MAX_ELEMENTS as f32).ln().trunc() as usize);

        let hnsw = Hnsw::<'static, f32, DistCosine>::new(
            DEFAULT_M,
            DEFAULT_MAX_ELEMENTS,
            nb_layer,
            DEFAULT_EF_CONSTRUCTION,
            DistCosine {},
        );

        Self {
            dimension,
            hnsw: Arc::new(Mutex::new(hnsw)),
            id_map: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a verse embedding, keyed by its offset into the corpus.
    pub fn add(&self, corpus_offset: usize, embedding: &[f32]) -> Result<(), VerseIndexError> {
        if embedding.len() != self.dimension {
            return Err(VerseIndexError::DimensionMismatch {
                expected: self.dimension,
                actual: embedding.len(),
            });
        }

        let mut next_id = self.next_id.lock().unwrap();
        let internal_id = *next_id;
        *next_id += 1;
        drop(next_id);

        let mut id_map = self.id_map.lock().unwrap();
        id_map.insert(internal_id, corpus_offset);
        drop(id_map);

        let embedding_vec = embedding.to_vec();
        let hnsw = self.hnsw.lock().unwrap();
        hnsw.insert((&embedding_vec, internal_id));

        Ok(())
    }

    /// k-nearest-neighbor search.
    ///
    /// Returns (corpus_offset, similarity) pairs sorted by descending
    /// similarity, where similarity = 1 - cosine distance.
    pub fn search(
        &self,
        query: &[f32],
        k: usize,
        ef_search: usize,
    ) -> Result<Vec<(usize, f32)>, VerseIndexError> {
        if query.len() != self.dimension {
            return Err(VerseIndexError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let hnsw = self.hnsw.lock().unwrap();
        let id_map = self.id_map.lock().unwrap();

        let results = hnsw.search(query, k, ef_search);

        Ok(results
            .into_iter()
            .filter_map(|neighbour| {
                id_map
                    .get(&neighbour.d_id)
                    .map(|&offset| (offset, 1.0 - neighbour.distance))
            })
            .collect())
    }

    /// Number of vectors in the index.
    pub fn len(&self) -> usize {
        self.id_map.lock().unwrap().len()
    }

    /// Whether the index holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_starts_empty() {
        let index = VerseIndex::new(64);
        assert!(index.is_empty());
    }

    #[test]
    fn test_add_and_search_exact_match() {
        let index = VerseIndex::new(64);

        let a: Vec<f32> = (0..64).map(|i| (i as f32) / 64.0).collect();
        let mut b = a.clone();
        b[0] = 0.9;

        index.add(0, &a).unwrap();
        index.add(1, &b).unwrap();
        assert_eq!(index.len(), 2);

        let results = index.search(&a, 2, 64).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, 0);
        assert!(results[0].1 > 0.99);
    }

    #[test]
    fn test_dimension_mismatch() {
        let index = VerseIndex::new(64);
        let wrong = vec![0.1; 32];
        assert!(matches!(
            index.add(0, &wrong),
            Err(VerseIndexError::DimensionMismatch { expected: 64, actual: 32 })
        ));
        assert!(index.search(&wrong, 1, 16).is_err());
    }
}
