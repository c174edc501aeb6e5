//! Education extraction
//!
//! Produces an unstructured summary string: degree levels, fields of study,
//! and institutions found in the text, joined with "; " and truncated.

use crate::error::{Result, ResumeRankerError};
use crate::processing::taxonomy::{self, title_case};
use regex::Regex;

pub const NOT_SPECIFIED: &str = "Not specified";

pub struct EducationExtractor {
    university_patterns: Vec<Regex>,
    max_entries: usize,
}

impl EducationExtractor {
    pub fn new(max_entries: usize) -> Result<Self> {
        let university_patterns = taxonomy::UNIVERSITY_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| ResumeRankerError::InvalidInput(format!("Invalid university pattern: {}", e)))?;

        Ok(Self {
            university_patterns,
            max_entries,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(3)
    }

    /// Semicolon-joined education summary, or `"Not specified"`.
    ///
    /// Pass order is fixed: degree levels, then fields ("in X"), then
    /// institutions ("from X"); only the first `max_entries` survive.
    pub fn extract(&self, resume_text: &str) -> String {
        let text = resume_text.to_lowercase();
        let mut found: Vec<String> = Vec::new();

        for (keyword, display_name) in taxonomy::EDUCATION_LEVELS {
            if text.contains(keyword) {
                found.push((*display_name).to_string());
            }
        }

        for field in taxonomy::DEGREE_FIELDS {
            if text.contains(field) {
                found.push(format!("in {}", title_case(field)));
            }
        }

        for pattern in &self.university_patterns {
            for caps in pattern.captures_iter(&text) {
                let Some(m) = caps.get(1) else { continue };
                let name = m.as_str().trim();
                if name.chars().count() > 3 {
                    found.push(format!("from {}", title_case(name)));
                }
            }
        }

        if found.is_empty() {
            NOT_SPECIFIED.to_string()
        } else {
            found.truncate(self.max_entries);
            found.join("; ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> EducationExtractor {
        EducationExtractor::with_defaults().unwrap()
    }

    #[test]
    fn test_empty_input_not_specified() {
        assert_eq!(extractor().extract(""), NOT_SPECIFIED);
        assert_eq!(extractor().extract("no relevant content here"), NOT_SPECIFIED);
    }

    #[test]
    fn test_degree_level_and_field() {
        let summary = extractor().extract("Bachelor of Science in Computer Science");
        assert!(summary.starts_with("Bachelor's Degree"));
        assert!(summary.contains("in Computer Science"));
    }

    #[test]
    fn test_university_of_pattern() {
        let summary = extractor().extract("Graduated from the University of Washington");
        assert!(summary.contains("from Washington"));
    }

    #[test]
    fn test_truncated_to_three_entries() {
        let text = "PhD, Master, Bachelor, MBA from Stanford University";
        let summary = extractor().extract(text);
        assert_eq!(summary.split("; ").count(), 3);
        // Pass order: degree levels first, table order.
        assert_eq!(summary, "Ph.D.; Master's Degree; MBA");
    }

    #[test]
    fn test_multiple_levels_all_reported() {
        let summary = extractor().extract("master degree after a bachelor degree");
        assert!(summary.contains("Master's Degree"));
        assert!(summary.contains("Bachelor's Degree"));
    }

    #[test]
    fn test_short_university_captures_dropped() {
        // Capture "mit " trimmed to "mit" is only 3 chars and is dropped.
        assert_eq!(extractor().extract("mit college"), NOT_SPECIFIED);
    }
}
