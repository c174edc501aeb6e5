//! Ranking report rendering (console and JSON)

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::analyzer::ResumeProfile;
use crate::processing::ranker::SimilarityResult;
use colored::Colorize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankReport {
    pub job_file: String,
    pub results: Vec<SimilarityResult>,
    /// Only present with `--detailed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<ResumeProfile>>,
    /// Files that failed extraction and were excluded from ranking.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<String>,
}

impl RankReport {
    pub fn render(&self, format: &OutputFormat, color: bool) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Console => Ok(self.render_console(color)),
        }
    }

    fn render_console(&self, color: bool) -> String {
        colored::control::set_override(color);

        let mut out = String::new();
        out.push_str(&format!("{}\n", "Resume Ranking".bold()));
        out.push_str(&format!("Job description: {}\n\n", self.job_file));

        for (rank, result) in self.results.iter().enumerate() {
            let similarity = format!("{:>6.2}%", result.similarity);
            let similarity = if result.similarity >= 70.0 {
                similarity.green()
            } else if result.similarity >= 40.0 {
                similarity.yellow()
            } else {
                similarity.red()
            };
            out.push_str(&format!("{:>3}. {} {}\n", rank + 1, similarity, result.filename));
        }

        if let Some(profiles) = &self.profiles {
            for profile in profiles {
                out.push('\n');
                out.push_str(&render_profile(profile));
            }
        }

        for skipped in &self.skipped {
            out.push_str(&format!("\n{} {}\n", "skipped:".yellow(), skipped));
        }

        colored::control::unset_override();
        out
    }
}

pub fn render_profile(profile: &ResumeProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", profile.filename.bold()));
    out.push_str(&format!("  Experience: {} years\n", profile.experience_years));
    out.push_str(&format!("  Education: {}\n", profile.education));
    out.push_str(&format!("  Skills: {}\n", profile.skills.join(", ")));

    if !profile.certifications.is_empty() {
        out.push_str(&format!("  Certifications: {}\n", profile.certifications.join(", ")));
    }

    let contact = profile.contact_info();
    if let Some(email) = &contact.email {
        out.push_str(&format!("  Email: {}\n", email));
    }
    if let Some(phone) = &contact.phone {
        out.push_str(&format!("  Phone: {}\n", phone));
    }
    if let Some(linkedin) = &contact.linkedin {
        out.push_str(&format!("  LinkedIn: {}\n", linkedin));
    }
    if let Some(github) = &contact.github {
        out.push_str(&format!("  GitHub: {}\n", github));
    }

    out.push_str(&format!(
        "  Score: {:.1} (completeness {:.1}, keyword relevance {:.1})\n",
        profile.score.total_score, profile.score.content_completeness, profile.score.keyword_relevance
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RankReport {
        RankReport {
            job_file: "job.pdf".to_string(),
            results: vec![
                SimilarityResult {
                    filename: "a.pdf".to_string(),
                    similarity: 82.5,
                },
                SimilarityResult {
                    filename: "b.pdf".to_string(),
                    similarity: 41.0,
                },
            ],
            profiles: None,
            skipped: vec!["broken.docx".to_string()],
        }
    }

    #[test]
    fn test_console_rendering() {
        let text = report().render(&OutputFormat::Console, false).unwrap();
        assert!(text.contains("job.pdf"));
        assert!(text.contains("a.pdf"));
        assert!(text.contains("82.50%"));
        assert!(text.contains("broken.docx"));
    }

    #[test]
    fn test_json_rendering_roundtrip() {
        let json = report().render(&OutputFormat::Json, false).unwrap();
        let parsed: RankReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].similarity, 82.5);
        assert_eq!(parsed.skipped, vec!["broken.docx".to_string()]);
    }
}
