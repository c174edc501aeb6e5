//! Embedding-based semantic ranking of resumes against a job description

use crate::error::Result;
use crate::processing::embeddings::{Embedder, EmbeddingEngine};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub filename: String,
    /// Cosine similarity rescaled to a 0-100 percentage, two decimals.
    pub similarity: f64,
}

pub struct SemanticRanker {
    engine: EmbeddingEngine,
}

impl SemanticRanker {
    pub fn new(embedder: Box<dyn Embedder>) -> Self {
        Self {
            engine: EmbeddingEngine::new(embedder),
        }
    }

    /// Rank resumes by semantic similarity to the job description.
    ///
    /// Output length equals input length, sorted descending; the sort is
    /// stable so exact ties keep their input order.
    pub fn rank(&mut self, job_text: &str, resumes: &[(String, String)]) -> Result<Vec<SimilarityResult>> {
        let job_embedding = self.engine.embed_cached(job_text);

        let mut results = Vec::with_capacity(resumes.len());
        for (filename, resume_text) in resumes {
            let resume_embedding = self.engine.embed_cached(resume_text);
            let score = EmbeddingEngine::cosine_similarity(&job_embedding, &resume_embedding)?;

            results.push(SimilarityResult {
                filename: filename.clone(),
                similarity: round_percent(score),
            });
        }

        results.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });

        Ok(results)
    }
}

fn round_percent(score: f32) -> f64 {
    (f64::from(score) * 100.0 * 100.0).round() / 100.0
}
