//! Resume ranker: extract, score, and rank resumes against a job description

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeRankerError};
use input::manager::InputManager;
use log::{error, info, warn};
use output::report::{render_profile, RankReport};
use processing::analyzer::ResumeAnalyzer;
use processing::embeddings::Model2VecEmbedder;
use processing::ranker::SemanticRanker;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Rank {
            job,
            resumes,
            model,
            detailed,
            output,
        } => rank_command(&config, job, resumes, model, detailed, &output).await,

        Commands::Parse { file, output } => parse_command(&config, file, &output).await,

        Commands::Score { job, resume, output } => score_command(&config, job, resume, &output).await,

        Commands::Config { action } => config_command(config, action),
    }
}

async fn rank_command(
    config: &Config,
    job: PathBuf,
    resumes: Vec<PathBuf>,
    model: Option<String>,
    detailed: bool,
    output: &str,
) -> Result<()> {
    cli::validate_file_extension(&job, &["pdf", "docx"])
        .map_err(|e| ResumeRankerError::InvalidInput(format!("Job description file: {}", e)))?;

    let output_format = cli::parse_output_format(output).map_err(ResumeRankerError::InvalidInput)?;

    info!("Ranking {} resumes against {}", resumes.len(), job.display());

    let mut input_manager = InputManager::new();

    // A job description that fails extraction is fatal for the whole run.
    let job_text = input_manager.extract_text(&job).await?;

    // A single broken resume must not abort ranking of the rest.
    let mut resume_texts: Vec<(String, String)> = Vec::with_capacity(resumes.len());
    let mut skipped: Vec<String> = Vec::new();
    for path in &resumes {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        match input_manager.extract_text(path).await {
            Ok(text) => resume_texts.push((filename, text)),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                skipped.push(format!("{} ({})", filename, e));
            }
        }
    }

    let model_path = config.embedding_model_path(model.as_deref());
    let embedder = Model2VecEmbedder::load(&model_path)?;
    let mut ranker = SemanticRanker::new(Box::new(embedder));
    let results = ranker.rank(&job_text, &resume_texts)?;

    let profiles = if detailed {
        let analyzer = ResumeAnalyzer::new(config)?;
        Some(
            resume_texts
                .iter()
                .map(|(filename, text)| analyzer.analyze(filename, text, &job_text))
                .collect(),
        )
    } else {
        None
    };

    let report = RankReport {
        job_file: job.to_string_lossy().to_string(),
        results,
        profiles,
        skipped,
    };

    println!("{}", report.render(&output_format, config.output.color_output)?);
    Ok(())
}

async fn parse_command(config: &Config, file: PathBuf, output: &str) -> Result<()> {
    let output_format = cli::parse_output_format(output).map_err(ResumeRankerError::InvalidInput)?;

    let mut input_manager = InputManager::new();
    let text = input_manager.extract_text(&file).await?;

    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file.to_string_lossy().to_string());

    let analyzer = ResumeAnalyzer::new(config)?;
    let profile = analyzer.analyze(&filename, &text, "");

    match output_format {
        config::OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        config::OutputFormat::Console => print!("{}", render_profile(&profile)),
    }
    Ok(())
}

async fn score_command(config: &Config, job: PathBuf, resume: PathBuf, output: &str) -> Result<()> {
    let output_format = cli::parse_output_format(output).map_err(ResumeRankerError::InvalidInput)?;

    let mut input_manager = InputManager::new();
    let job_text = input_manager.extract_text(&job).await?;
    let resume_text = input_manager.extract_text(&resume).await?;

    let scorer = processing::scorer::ResumeScorer::new(config.scoring.clone())?;
    let breakdown = scorer.score(&resume_text, &job_text);

    match output_format {
        config::OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&breakdown)?),
        config::OutputFormat::Console => {
            println!("Content completeness: {:.1}", breakdown.content_completeness);
            println!("Keyword relevance:    {:.1}", breakdown.keyword_relevance);
            println!("Total score:          {:.1}", breakdown.total_score);
        }
    }
    Ok(())
}

fn config_command(config: Config, action: Option<ConfigAction>) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(&config)
                .map_err(|e| ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e)))?;
            println!("{}", content);
        }
        ConfigAction::Reset => {
            let defaults = Config::default();
            defaults.save()?;
            println!("Configuration reset to defaults");
        }
    }
    Ok(())
}
