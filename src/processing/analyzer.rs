//! Aggregated resume analysis
//!
//! Bundles all field extractors and the scorer into one pass over a resume,
//! producing the profile the CLI and report layer consume.

use crate::config::Config;
use crate::error::Result;
use crate::processing::certifications::CertificationExtractor;
use crate::processing::contact::ContactInfo;
use crate::processing::education::EducationExtractor;
use crate::processing::experience::ExperienceExtractor;
use crate::processing::scorer::{ResumeScorer, ScoreBreakdown};
use crate::processing::sections::{SectionAnalysis, SectionAnalyzer};
use crate::processing::skills::{EntityRecognizer, SkillExtractor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub filename: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: String,
    pub certifications: Vec<String>,
    pub sections: SectionAnalysis,
    pub score: ScoreBreakdown,
}

impl ResumeProfile {
    pub fn contact_info(&self) -> &ContactInfo {
        &self.sections.contact_info
    }
}

pub struct ResumeAnalyzer {
    skills: SkillExtractor,
    experience: ExperienceExtractor,
    education: EducationExtractor,
    certifications: CertificationExtractor,
    sections: SectionAnalyzer,
    scorer: ResumeScorer,
}

impl ResumeAnalyzer {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            skills: SkillExtractor::new()?,
            experience: ExperienceExtractor::new(
                config.extraction.current_year,
                config.extraction.max_experience_years,
            )?,
            education: EducationExtractor::new(config.extraction.max_education_entries)?,
            certifications: CertificationExtractor::new(config.extraction.max_certifications)?,
            sections: SectionAnalyzer::new()?,
            scorer: ResumeScorer::new(config.scoring.clone())?,
        })
    }

    /// Same as [`ResumeAnalyzer::new`] but with an open-vocabulary entity
    /// recognizer feeding the skill extractor.
    pub fn with_recognizer(config: &Config, recognizer: Box<dyn EntityRecognizer>) -> Result<Self> {
        let mut analyzer = Self::new(config)?;
        analyzer.skills = SkillExtractor::with_recognizer(recognizer)?;
        Ok(analyzer)
    }

    pub fn analyze(&self, filename: &str, resume_text: &str, job_text: &str) -> ResumeProfile {
        ResumeProfile {
            filename: filename.to_string(),
            skills: self.skills.extract(resume_text, job_text),
            experience_years: self.experience.extract(resume_text),
            education: self.education.extract(resume_text),
            certifications: self.certifications.extract(resume_text),
            sections: self.sections.analyze(resume_text),
            score: self.scorer.score(resume_text, job_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
Jane Doe
jane@example.com | linkedin.com/in/jane-doe
Summary: Backend engineer, 6 years of experience.
Skills: Python, Django, PostgreSQL, Docker
Education: Bachelor's degree in Computer Science, University of Springfield
Certifications: AWS Certified Solutions Architect";

    #[test]
    fn test_full_profile() {
        let analyzer = ResumeAnalyzer::new(&Config::default()).unwrap();
        let profile = analyzer.analyze("jane.pdf", SAMPLE_RESUME, "We need python and docker");

        assert_eq!(profile.filename, "jane.pdf");
        assert_eq!(profile.experience_years, 6);
        assert!(profile.skills.contains(&"Python".to_string()));
        assert!(profile.skills.contains(&"Django".to_string()));
        assert!(profile.education.contains("Bachelor's Degree"));
        assert!(profile.education.contains("in Computer Science"));
        assert!(!profile.certifications.is_empty());
        assert!(profile.sections.has_summary);
        assert!(profile.sections.has_skills);
        assert_eq!(profile.contact_info().email.as_deref(), Some("jane@example.com"));
        assert!(profile.score.total_score > 0.0);
    }

    #[test]
    fn test_empty_resume_gives_defaults() {
        let analyzer = ResumeAnalyzer::new(&Config::default()).unwrap();
        let profile = analyzer.analyze("empty.pdf", "", "");

        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience_years, 0);
        assert_eq!(profile.education, "Not specified");
        assert!(profile.certifications.is_empty());
        assert_eq!(profile.score.total_score, 0.0);
    }
}
