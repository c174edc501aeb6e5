//! Extraction, scoring, and ranking pipeline

pub mod analyzer;
pub mod certifications;
pub mod contact;
pub mod education;
pub mod embeddings;
pub mod experience;
pub mod ranker;
pub mod scorer;
pub mod sections;
pub mod skills;
pub mod taxonomy;

pub use analyzer::{ResumeAnalyzer, ResumeProfile};
pub use contact::ContactInfo;
pub use embeddings::{Embedder, EmbeddingEngine, Model2VecEmbedder};
pub use ranker::{SemanticRanker, SimilarityResult};
pub use scorer::{ResumeScorer, ScoreBreakdown};
pub use sections::{SectionAnalysis, SectionAnalyzer};
pub use skills::{EntityRecognizer, NullRecognizer, SkillExtractor};
