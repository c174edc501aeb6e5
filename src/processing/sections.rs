//! Resume section presence analysis

use crate::error::Result;
use crate::processing::contact::{ContactExtractor, ContactInfo};
use crate::processing::taxonomy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub has_summary: bool,
    pub has_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
    pub has_projects: bool,
    pub has_certifications: bool,
    pub contact_info: ContactInfo,
}

pub struct SectionAnalyzer {
    contact: ContactExtractor,
}

impl SectionAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            contact: ContactExtractor::new()?,
        })
    }

    pub fn analyze(&self, resume_text: &str) -> SectionAnalysis {
        let text = resume_text.to_lowercase();
        let has_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

        SectionAnalysis {
            has_summary: has_any(taxonomy::SUMMARY_KEYWORDS),
            has_experience: has_any(taxonomy::EXPERIENCE_KEYWORDS),
            has_education: has_any(taxonomy::EDUCATION_KEYWORDS),
            has_skills: has_any(taxonomy::SKILLS_KEYWORDS),
            has_projects: has_any(taxonomy::PROJECTS_KEYWORDS),
            has_certifications: has_any(taxonomy::CERTIFICATIONS_KEYWORDS),
            contact_info: self.contact.extract(resume_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_all_false() {
        let analyzer = SectionAnalyzer::new().unwrap();
        let analysis = analyzer.analyze("");

        assert!(!analysis.has_summary);
        assert!(!analysis.has_experience);
        assert!(!analysis.has_education);
        assert!(!analysis.has_skills);
        assert!(!analysis.has_projects);
        assert!(!analysis.has_certifications);
        assert_eq!(analysis.contact_info, ContactInfo::default());
    }

    #[test]
    fn test_typical_resume_sections() {
        let analyzer = SectionAnalyzer::new().unwrap();
        let text = "Professional Summary\nWork Experience\nEducation\nTechnical Skills\nProjects";
        let analysis = analyzer.analyze(text);

        assert!(analysis.has_summary);
        assert!(analysis.has_experience);
        assert!(analysis.has_education);
        assert!(analysis.has_skills);
        assert!(analysis.has_projects);
        assert!(!analysis.has_certifications);
    }

    #[test]
    fn test_keyword_detection_is_case_insensitive() {
        let analyzer = SectionAnalyzer::new().unwrap();
        let analysis = analyzer.analyze("OBJECTIVE: find a job. CERTIFIED engineer.");

        assert!(analysis.has_summary);
        assert!(analysis.has_certifications);
    }

    #[test]
    fn test_github_counts_as_projects() {
        let analyzer = SectionAnalyzer::new().unwrap();
        let analysis = analyzer.analyze("See github.com/janedoe for code samples");

        assert!(analysis.has_projects);
        assert_eq!(analysis.contact_info.github.as_deref(), Some("github.com/janedoe"));
    }
}
