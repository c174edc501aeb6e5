//! Configuration management for the resume ranker

use crate::error::{Result, ResumeRankerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub scoring: ScoringConfig,
    pub ranking: RankingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Anchor year for open-ended "2019 - present" employment ranges.
    pub current_year: i32,
    /// Upper bound on extracted years of experience.
    pub max_experience_years: u32,
    /// How many education entries survive truncation.
    pub max_education_entries: usize,
    /// How many certifications survive truncation.
    pub max_certifications: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub summary_points: f32,
    pub experience_points: f32,
    pub education_points: f32,
    pub skills_points: f32,
    pub keyword_relevance_max: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    pub models_dir: PathBuf,
    pub default_embedding_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resume-ranker")
            .join("models");

        Self {
            extraction: ExtractionConfig {
                current_year: 2024,
                max_experience_years: 50,
                max_education_entries: 3,
                max_certifications: 5,
            },
            scoring: ScoringConfig {
                summary_points: 5.0,
                experience_points: 15.0,
                education_points: 10.0,
                skills_points: 10.0,
                keyword_relevance_max: 30.0,
            },
            ranking: RankingConfig {
                models_dir,
                default_embedding_model: "minishlab/M2V_base_output".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeRankerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ranker")
            .join("config.toml")
    }

    /// Filesystem path of the embedding model to load.
    pub fn embedding_model_path(&self, model_override: Option<&str>) -> PathBuf {
        let name = model_override.unwrap_or(&self.ranking.default_embedding_model);
        let local = self.ranking.models_dir.join(name);
        if local.exists() {
            local
        } else {
            // Treat the name as a path the user handed us directly.
            PathBuf::from(name)
        }
    }
}
