//! Embedding models for verse vectorization
//!
//! Text-to-vector conversion behind a trait, so the semantic layer does not
//! care whether vectors come from a real sentence-transformer service or
//! the deterministic hash-based stand-in used for tests and offline runs.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors that can occur during embedding generation
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Input text cannot be embedded
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model inference failed
    #[error("Model inference failed: {0}")]
    InferenceFailed(String),
}

/// Trait for embedding models
pub trait EmbeddingModel {
    /// Generate an embedding vector for the given text
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Dimension of the vectors this model produces
    fn dimension(&self) -> usize;
}

/// Deterministic hash-based embedding model
///
/// Generates pseudo-random but reproducible unit vectors by hashing the
/// input text with per-component seeds. Same text, same vector; different
/// texts, diverse vectors. Good enough to exercise the full semantic
/// pipeline without model files or a network.
pub struct MockEmbeddingModel {
    dimension: usize,
}

impl MockEmbeddingModel {
    /// Create a model producing vectors of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn hash_with_seed(text: &str, seed: u64) -> f32 {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        seed.hash(&mut hasher);
        let hash_value = hasher.finish();

        // Map the hash into [-1, 1]
        ((hash_value as f64 / u64::MAX as f64) * 2.0 - 1.0) as f32
    }
}

impl EmbeddingModel for MockEmbeddingModel {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.is_empty() {
            return Err(EmbeddingError::InvalidInput(
                "Empty text cannot be embedded".to_string(),
            ));
        }

        let mut embedding: Vec<f32> = (0..self.dimension)
            .map(|i| Self::hash_with_seed(text, i as u64))
            .collect();

        // Normalize to unit length for cosine similarity
        let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for value in &mut embedding {
                *value /= magnitude;
            }
        }

        Ok(embedding)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Returns 0.0 when either vector has zero magnitude.
///
/// # Panics
///
/// Panics if the vectors have different lengths.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have same length");

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_embedding_deterministic() {
        let model = MockEmbeddingModel::new(128);
        let a = model.embed("the moon became as blood").unwrap();
        let b = model.embed("the moon became as blood").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mock_embedding_dimension() {
        let model = MockEmbeddingModel::new(64);
        assert_eq!(model.embed("test").unwrap().len(), 64);
        assert_eq!(model.dimension(), 64);
    }

    #[test]
    fn test_mock_embedding_normalized() {
        let model = MockEmbeddingModel::new(128);
        let embedding = model.embed("signs in the sun and moon").unwrap();
        let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((magnitude - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_mock_embedding_diverse() {
        let model = MockEmbeddingModel::new(128);
        let a = model.embed("blood moon").unwrap();
        let b = model.embed("morning star").unwrap();
        assert_ne!(a, b);
        assert!(cosine_similarity(&a, &b).abs() < 0.9);
    }

    #[test]
    fn test_empty_text_rejected() {
        let model = MockEmbeddingModel::new(128);
        assert!(model.embed("").is_err());
    }

    #[test]
    fn test_cosine_similarity_extremes() {
        let v = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-4);
        assert!(cosine_similarity(&v, &[0.0, 1.0, 0.0]).abs() < 1e-4);
        assert!((cosine_similarity(&v, &[-1.0, 0.0, 0.0]) + 1.0).abs() < 1e-4);
        assert_eq!(cosine_similarity(&v, &[0.0, 0.0, 0.0]), 0.0);
    }
}
