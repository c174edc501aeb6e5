//! Skill extraction from resume text
//!
//! Closed-taxonomy matching is case-insensitive substring search over the
//! technical and soft-skill tables. An optional entity recognizer can widen
//! the net with organization/product spans; when none is available the
//! `NullRecognizer` contributes nothing and extraction degrades silently.

use crate::error::{Result, ResumeRankerError};
use crate::processing::taxonomy::{self, title_case};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityLabel {
    Organization,
    Product,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub span: String,
    pub label: EntityLabel,
}

/// Optional open-vocabulary capability. Absence never fails the pipeline.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Null object used when no recognizer is available.
pub struct NullRecognizer;

impl EntityRecognizer for NullRecognizer {
    fn recognize(&self, _text: &str) -> Vec<Entity> {
        Vec::new()
    }
}

pub struct SkillExtractor {
    matcher: AhoCorasick,
    terms: Vec<&'static str>,
    recognizer: Box<dyn EntityRecognizer>,
}

impl SkillExtractor {
    pub fn new() -> Result<Self> {
        Self::with_recognizer(Box::new(NullRecognizer))
    }

    pub fn with_recognizer(recognizer: Box<dyn EntityRecognizer>) -> Result<Self> {
        let terms = taxonomy::all_skill_terms();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&terms)
            .map_err(|e| ResumeRankerError::InvalidInput(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            matcher,
            terms,
            recognizer,
        })
    }

    /// Extract deduplicated, title-cased skills from resume text.
    ///
    /// With a non-empty job description, skills mentioned in it come first;
    /// both partitions are sorted lexicographically so runs are reproducible.
    /// Without a job description the whole list is sorted.
    pub fn extract(&self, resume_text: &str, job_text: &str) -> Vec<String> {
        let mut found: HashSet<String> = HashSet::new();

        // Overlapping matches mirror independent substring checks per term,
        // so "java" still matches inside "javascript".
        for mat in self.matcher.find_overlapping_iter(resume_text) {
            found.insert(title_case(self.terms[mat.pattern().as_usize()]));
        }

        for entity in self.recognizer.recognize(resume_text) {
            if !matches!(entity.label, EntityLabel::Organization | EntityLabel::Product) {
                continue;
            }
            let candidate = entity.span.trim();
            if candidate.chars().count() > 2 && candidate.chars().all(|c| c.is_alphabetic()) {
                found.insert(title_case(candidate));
            }
        }

        let mut skills: Vec<String> = found.into_iter().collect();
        skills.sort();

        if job_text.is_empty() {
            return skills;
        }

        let job_lower = job_text.to_lowercase();
        let (job_skills, other_skills): (Vec<String>, Vec<String>) = skills
            .into_iter()
            .partition(|skill| job_lower.contains(&skill.to_lowercase()));

        job_skills.into_iter().chain(other_skills).collect()
    }
}
