//! Years-of-experience extraction
//!
//! Explicit "N years" phrasing wins; when no phrase matches, employment date
//! ranges are summed instead. Overlapping ranges double-count — a known
//! limitation of the heuristic, kept as-is. Zero means "not determined",
//! not "zero experience".

use crate::error::{Result, ResumeRankerError};
use regex::Regex;

pub const DEFAULT_CURRENT_YEAR: i32 = 2024;
pub const MAX_EXPERIENCE_YEARS: u32 = 50;

const PHRASE_PATTERNS: &[&str] = &[
    r"(\d+)\+?\s*years?\s*(?:of\s*)?(?:professional\s*)?experience",
    r"(\d+)\+?\s*years?\s*(?:in|with|of)",
    r"experience\s*[:\-]\s*(\d+)\+?\s*years?",
    r"(\d+)\+?\s*yrs?\s*(?:of\s*)?(?:professional\s*)?experience",
    r"over\s*(\d+)\s*years?",
    r"more than\s*(\d+)\s*years?",
    r"(\d+)\+\s*years?",
];

const RANGE_PATTERN: &str = r"(\d{4})\s*[-\u{2013}\u{2014}]\s*(\d{4}|present|current)";

pub struct ExperienceExtractor {
    phrase_patterns: Vec<Regex>,
    range_pattern: Regex,
    current_year: i32,
    cap: u32,
}

impl ExperienceExtractor {
    pub fn new(current_year: i32, cap: u32) -> Result<Self> {
        let phrase_patterns = PHRASE_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| ResumeRankerError::InvalidInput(format!("Invalid experience pattern: {}", e)))?;

        let range_pattern = Regex::new(RANGE_PATTERN)
            .map_err(|e| ResumeRankerError::InvalidInput(format!("Invalid range pattern: {}", e)))?;

        Ok(Self {
            phrase_patterns,
            range_pattern,
            current_year,
            cap,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_CURRENT_YEAR, MAX_EXPERIENCE_YEARS)
    }

    /// Years of experience in `[0, cap]`; 0 when nothing matched.
    pub fn extract(&self, resume_text: &str) -> u32 {
        let text = resume_text.to_lowercase();

        let mut max_years: u32 = 0;
        for pattern in &self.phrase_patterns {
            for caps in pattern.captures_iter(&text) {
                let Some(m) = caps.get(1) else { continue };
                // A match that fails numeric conversion is skipped, never fatal.
                if let Ok(years) = m.as_str().parse::<u32>() {
                    max_years = max_years.max(years);
                }
            }
        }

        if max_years == 0 {
            max_years = self.years_from_date_ranges(&text);
        }

        max_years.min(self.cap)
    }

    fn years_from_date_ranges(&self, text: &str) -> u32 {
        let mut total_months: i64 = 0;

        for caps in self.range_pattern.captures_iter(text) {
            let (Some(start_m), Some(end_m)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let Ok(start) = start_m.as_str().parse::<i32>() else {
                continue;
            };
            let end = match end_m.as_str() {
                "present" | "current" => self.current_year,
                year => match year.parse::<i32>() {
                    Ok(y) => y,
                    Err(_) => continue,
                },
            };

            if end >= start {
                total_months += i64::from(end - start) * 12;
            }
        }

        (total_months / 12).max(0) as u32
    }
}
