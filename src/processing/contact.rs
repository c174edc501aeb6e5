//! Contact information extraction
//!
//! Each field is the first match in document order, or `None`. The phone
//! pattern is deliberately permissive (7-15 digits, optional leading `+`)
//! and will happily match years or zip codes; tightening it would change
//! long-standing behavior, so it stays.

use crate::error::{Result, ResumeRankerError};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

pub struct ContactExtractor {
    email: Regex,
    phone: Regex,
    linkedin: Regex,
    github: Regex,
}

impl ContactExtractor {
    pub fn new() -> Result<Self> {
        let build = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| ResumeRankerError::InvalidInput(format!("Invalid contact pattern: {}", e)))
        };

        Ok(Self {
            email: build(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?,
            phone: build(r"\+?[1-9]?[0-9]{7,14}")?,
            linkedin: build(r"linkedin\.com/in/([a-zA-Z0-9\-]+)")?,
            github: build(r"github\.com/([a-zA-Z0-9\-]+)")?,
        })
    }

    pub fn extract(&self, resume_text: &str) -> ContactInfo {
        let lowered = resume_text.to_lowercase();

        ContactInfo {
            email: self
                .email
                .find(resume_text)
                .map(|m| m.as_str().to_string()),
            phone: self
                .phone
                .find(resume_text)
                .map(|m| m.as_str().to_string()),
            linkedin: self
                .linkedin
                .captures(&lowered)
                .and_then(|caps| caps.get(1))
                .map(|m| format!("linkedin.com/in/{}", m.as_str())),
            github: self
                .github
                .captures(&lowered)
                .and_then(|caps| caps.get(1))
                .map(|m| format!("github.com/{}", m.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ContactExtractor {
        ContactExtractor::new().unwrap()
    }

    #[test]
    fn test_empty_input_all_none() {
        let contact = extractor().extract("");
        assert_eq!(contact, ContactInfo::default());
    }

    #[test]
    fn test_email_first_match() {
        let contact = extractor().extract("Reach me at john@example.com or jane@example.com");
        assert_eq!(contact.email.as_deref(), Some("john@example.com"));
    }

    #[test]
    fn test_phone_extraction() {
        let contact = extractor().extract("Call +14155551234 anytime");
        assert_eq!(contact.phone.as_deref(), Some("+14155551234"));
    }

    #[test]
    fn test_phone_pattern_is_permissive() {
        // Known weakness: any long digit run matches, not just phones.
        let contact = extractor().extract("Employee ID 1234567890, started 2019");
        assert_eq!(contact.phone.as_deref(), Some("1234567890"));
    }

    #[test]
    fn test_linkedin_and_github_handles() {
        let text = "Profiles: LinkedIn.com/in/jane-doe and GitHub.com/janedoe";
        let contact = extractor().extract(text);
        assert_eq!(contact.linkedin.as_deref(), Some("linkedin.com/in/jane-doe"));
        assert_eq!(contact.github.as_deref(), Some("github.com/janedoe"));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let contact = extractor().extract("john@example.com");
        assert!(contact.email.is_some());
        assert!(contact.linkedin.is_none());
        assert!(contact.github.is_none());
    }
}
