//! Integration tests for the resume ranker

use resume_ranker::config::Config;
use resume_ranker::error::ResumeRankerError;
use resume_ranker::input::manager::InputManager;
use resume_ranker::input::text_extractor::extract_text_from_bytes;
use resume_ranker::processing::analyzer::ResumeAnalyzer;
use resume_ranker::processing::embeddings::Embedder;
use resume_ranker::processing::ranker::SemanticRanker;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Build a minimal DOCX (zip with word/document.xml) from paragraph texts.
fn write_docx(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{}</w:body></w:document>"#,
        body
    );

    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("word/document.xml", zip::write::FileOptions::default())
        .unwrap();
    zip.write_all(xml.as_bytes()).unwrap();
    zip.finish().unwrap();
    path
}

const SAMPLE_RESUME: &[&str] = &[
    "John Doe",
    "john@example.com | github.com/johndoe",
    "Summary: Software Engineer with 5+ years of experience",
    "Skills: Python, React, Node.js, Docker",
    "Education: Bachelor's degree in Computer Science",
];

#[tokio::test]
async fn test_text_extraction_from_docx() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(dir.path(), "resume.docx", SAMPLE_RESUME);

    let mut manager = InputManager::new();
    let text = manager.extract_text(&path).await.unwrap();

    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Paragraphs joined with a single newline.
    assert!(text.contains("John Doe\njohn@example.com"));
}

#[tokio::test]
async fn test_extraction_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(dir.path(), "resume.docx", SAMPLE_RESUME);
    let bytes = std::fs::read(&path).unwrap();

    let first = extract_text_from_bytes(&bytes, "docx").unwrap();
    let second = extract_text_from_bytes(&bytes, "docx").unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_caching_functionality() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(dir.path(), "resume.docx", SAMPLE_RESUME);

    let mut manager = InputManager::new();
    let text1 = manager.extract_text(&path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(&path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.txt");
    std::fs::write(&path, "plain text resume").unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(matches!(result, Err(ResumeRankerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("does/not/exist.pdf")).await;
    assert!(result.is_err());
}

#[test]
fn test_unsupported_format_hint_from_bytes() {
    let result = extract_text_from_bytes(b"anything", "txt");
    assert!(matches!(result, Err(ResumeRankerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_docx_to_profile_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(dir.path(), "john.docx", SAMPLE_RESUME);

    let mut manager = InputManager::new();
    let text = manager.extract_text(&path).await.unwrap();

    let analyzer = ResumeAnalyzer::new(&Config::default()).unwrap();
    let profile = analyzer.analyze("john.docx", &text, "Looking for a python engineer with docker");

    assert_eq!(profile.experience_years, 5);
    assert!(profile.skills.contains(&"Python".to_string()));
    assert!(profile.skills.contains(&"Docker".to_string()));
    // Job-mentioned skills come before the rest.
    let python_pos = profile.skills.iter().position(|s| s == "Python").unwrap();
    let react_pos = profile.skills.iter().position(|s| s == "React").unwrap();
    assert!(python_pos < react_pos);

    assert!(profile.education.contains("Bachelor's Degree"));
    assert_eq!(profile.contact_info().email.as_deref(), Some("john@example.com"));
    assert_eq!(profile.contact_info().github.as_deref(), Some("github.com/johndoe"));
    assert!(profile.score.total_score > 0.0);
}

/// Deterministic stand-in for the embedding model.
struct KeywordEmbedder;

impl Embedder for KeywordEmbedder {
    fn embed(&self, text: &str) -> Vec<f32> {
        let lower = text.to_lowercase();
        vec![
            lower.matches("python").count() as f32,
            lower.matches("accountant").count() as f32,
            1.0,
        ]
    }
}

#[tokio::test]
async fn test_extraction_to_ranking_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let engineer = write_docx(
        dir.path(),
        "engineer.docx",
        &["Python developer", "python services in production"],
    );
    let accountant = write_docx(dir.path(), "accountant.docx", &["Senior accountant"]);

    let mut manager = InputManager::new();
    let resumes = vec![
        (
            "engineer.docx".to_string(),
            manager.extract_text(&engineer).await.unwrap(),
        ),
        (
            "accountant.docx".to_string(),
            manager.extract_text(&accountant).await.unwrap(),
        ),
    ];

    let mut ranker = SemanticRanker::new(Box::new(KeywordEmbedder));
    let results = ranker.rank("We need a python engineer", &resumes).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].filename, "engineer.docx");
    assert!(results[0].similarity > results[1].similarity);
    assert!(results[0].similarity <= 100.0);
}
