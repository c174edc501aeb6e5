//! Heuristic resume scoring
//!
//! Additive score: section completeness (max 40) plus keyword overlap with
//! the job description (max 30). The `experience_relevance` and `skill_match`
//! components are carried in the breakdown but never computed, so the
//! reachable total is 70 even though the breakdown reads like a 100-point
//! scale. Kept for compatibility with the established output shape.

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::processing::sections::{SectionAnalysis, SectionAnalyzer};
use crate::processing::taxonomy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub content_completeness: f32,
    pub keyword_relevance: f32,
    pub experience_relevance: f32,
    pub skill_match: f32,
    pub total_score: f32,
}

pub struct ResumeScorer {
    sections: SectionAnalyzer,
    stopwords: HashSet<&'static str>,
    config: ScoringConfig,
}

impl ResumeScorer {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        Ok(Self {
            sections: SectionAnalyzer::new()?,
            stopwords: taxonomy::SCORING_STOPWORDS.iter().copied().collect(),
            config,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(crate::config::Config::default().scoring)
    }

    pub fn score(&self, resume_text: &str, job_text: &str) -> ScoreBreakdown {
        let sections = self.sections.analyze(resume_text);
        let content_completeness = self.completeness(&sections);
        let keyword_relevance = self.keyword_relevance(resume_text, job_text);

        ScoreBreakdown {
            content_completeness,
            keyword_relevance,
            experience_relevance: 0.0,
            skill_match: 0.0,
            total_score: content_completeness + keyword_relevance,
        }
    }

    fn completeness(&self, sections: &SectionAnalysis) -> f32 {
        let mut score = 0.0;
        if sections.has_summary {
            score += self.config.summary_points;
        }
        if sections.has_experience {
            score += self.config.experience_points;
        }
        if sections.has_education {
            score += self.config.education_points;
        }
        if sections.has_skills {
            score += self.config.skills_points;
        }
        score
    }

    fn keyword_relevance(&self, resume_text: &str, job_text: &str) -> f32 {
        let job_words = self.keywords(job_text);
        if job_words.is_empty() {
            return 0.0;
        }
        let resume_words = self.keywords(resume_text);

        let matched = job_words.intersection(&resume_words).count();
        let ratio = matched as f32 / job_words.len() as f32;
        (ratio * self.config.keyword_relevance_max).min(self.config.keyword_relevance_max)
    }

    fn keywords(&self, text: &str) -> HashSet<String> {
        text.to_lowercase()
            .unicode_words()
            .filter(|word| !self.stopwords.contains(word))
            .map(|word| word.to_string())
            .collect()
    }
}
