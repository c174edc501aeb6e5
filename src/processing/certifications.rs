//! Certification extraction
//!
//! Known certification names plus generic "certified X" patterns, deduplicated
//! and sorted lexicographically before truncation so the kept subset is
//! deterministic.

use crate::error::{Result, ResumeRankerError};
use crate::processing::taxonomy::{self, title_case};
use regex::Regex;
use std::collections::HashSet;

const CERT_PATTERNS: &[&str] = &[
    r"certified\s+([a-z\s]+)",
    r"([a-z\s]+)\s+certified",
    r"certification\s*[:\-]\s*([a-z\s]+)",
];

pub struct CertificationExtractor {
    patterns: Vec<Regex>,
    max_entries: usize,
}

impl CertificationExtractor {
    pub fn new(max_entries: usize) -> Result<Self> {
        let patterns = CERT_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| ResumeRankerError::InvalidInput(format!("Invalid certification pattern: {}", e)))?;

        Ok(Self {
            patterns,
            max_entries,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(5)
    }

    /// Up to `max_entries` unique, title-cased certifications.
    pub fn extract(&self, resume_text: &str) -> Vec<String> {
        let text = resume_text.to_lowercase();
        let mut found: HashSet<String> = HashSet::new();

        for cert in taxonomy::KNOWN_CERTIFICATIONS {
            if text.contains(cert) {
                found.insert(title_case(cert));
            }
        }

        for pattern in &self.patterns {
            for caps in pattern.captures_iter(&text) {
                let Some(m) = caps.get(1) else { continue };
                let name = m.as_str().trim();
                if name.chars().count() > 2 {
                    found.insert(title_case(name));
                }
            }
        }

        let mut certs: Vec<String> = found.into_iter().collect();
        certs.sort();
        certs.truncate(self.max_entries);
        certs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> CertificationExtractor {
        CertificationExtractor::with_defaults().unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_known_certifications() {
        let certs = extractor().extract("Holds PMP and CISSP, studying for CCNA");
        assert!(certs.contains(&"Pmp".to_string()));
        assert!(certs.contains(&"Cissp".to_string()));
        assert!(certs.contains(&"Ccna".to_string()));
    }

    #[test]
    fn test_generic_certified_pattern() {
        let certs = extractor().extract("certified kubernetes administrator");
        assert!(certs.iter().any(|c| c.contains("Kubernetes Administrator")));
    }

    #[test]
    fn test_at_most_five() {
        let text = "pmp cissp ccna ccnp ccie itil prince2 comptia cfa cpa";
        let certs = extractor().extract(text);
        assert_eq!(certs.len(), 5);
    }

    #[test]
    fn test_output_is_sorted_and_deduplicated() {
        let certs = extractor().extract("PMP certification. pmp again. CISA too");
        let mut sorted = certs.clone();
        sorted.sort();
        assert_eq!(certs, sorted);
        assert_eq!(certs.iter().filter(|c| *c == "Pmp").count(), 1);
    }
}
