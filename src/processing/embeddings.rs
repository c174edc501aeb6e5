//! Embeddings generation using Model2Vec
//!
//! The embedding model is an injected capability behind the [`Embedder`]
//! trait, so rankers stay testable without a live model on disk.

use crate::error::{Result, ResumeRankerError};
use log::info;
use model2vec_rs::model::StaticModel;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

/// A pretrained sentence-embedding model: deterministic fixed-length vectors
/// for identical input.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Vec<f32>;
}

pub struct Model2VecEmbedder {
    model: StaticModel,
}

impl Model2VecEmbedder {
    pub fn load(model_path: &Path) -> Result<Self> {
        let start_time = Instant::now();
        info!("Loading Model2Vec embedding model from: {}", model_path.display());

        let model = StaticModel::from_pretrained(
            model_path,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| {
            ResumeRankerError::ModelUnavailable(format!(
                "Failed to load embedding model from {}: {}",
                model_path.display(),
                e
            ))
        })?;

        info!("Embedding model loaded in {:.2?}", start_time.elapsed());
        Ok(Self { model })
    }
}

impl Embedder for Model2VecEmbedder {
    fn embed(&self, text: &str) -> Vec<f32> {
        self.model.encode_single(text)
    }
}

/// Caching wrapper around an [`Embedder`]; repeated texts within one run are
/// encoded once.
pub struct EmbeddingEngine {
    embedder: Box<dyn Embedder>,
    cache: HashMap<String, Vec<f32>>,
}

impl EmbeddingEngine {
    pub fn new(embedder: Box<dyn Embedder>) -> Self {
        Self {
            embedder,
            cache: HashMap::new(),
        }
    }

    pub fn embed_cached(&mut self, text: &str) -> Vec<f32> {
        if let Some(cached) = self.cache.get(text) {
            return cached.clone();
        }
        let embedding = self.embedder.embed(text);
        self.cache.insert(text.to_string(), embedding.clone());
        embedding
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Cosine similarity in [-1, 1]; zero vectors compare as 0.
    pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
        if a.len() != b.len() {
            return Err(ResumeRankerError::Embedding(format!(
                "Embedding dimensions don't match: {} vs {}",
                a.len(),
                b.len()
            )));
        }

        if a.is_empty() {
            return Ok(0.0);
        }

        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            Ok(0.0)
        } else {
            Ok(dot_product / (norm_a * norm_b))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingEmbedder(std::sync::atomic::AtomicUsize);

    impl Embedder for CountingEmbedder {
        fn embed(&self, text: &str) -> Vec<f32> {
            self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            vec![text.len() as f32, 1.0]
        }
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let score = EmbeddingEngine::cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let score = EmbeddingEngine::cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(score.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let score = EmbeddingEngine::cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_cosine_dimension_mismatch_fails() {
        let result = EmbeddingEngine::cosine_similarity(&[1.0], &[1.0, 2.0]);
        assert!(matches!(result, Err(ResumeRankerError::Embedding(_))));
    }

    #[test]
    fn test_cache_prevents_reencoding() {
        let mut engine = EmbeddingEngine::new(Box::new(CountingEmbedder(Default::default())));
        let first = engine.embed_cached("hello world");
        let second = engine.embed_cached("hello world");
        assert_eq!(first, second);
        assert_eq!(engine.cache_size(), 1);
    }
}
