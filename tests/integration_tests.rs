//! Integration tests for the CV analyzer

use cv_analyzer::error::CvAnalyzerError;
use cv_analyzer::input::InputManager;
use cv_analyzer::output::ReportGenerator;
use cv_analyzer::config::OutputFormat;
use cv_analyzer::{AnalysisEngine, AnalysisInput, CvRecord, OptimizeOptions};
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jordan Lee"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.starts_with("Jordan Lee"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains('`'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(CvAnalyzerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_binary_document_rejected() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/resume.pdf");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(CvAnalyzerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(CvAnalyzerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_full_resume_analysis() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let analysis = AnalysisEngine::new().analyze(&AnalysisInput::new(text));
    let stats = &analysis.stats;
    let contact = &stats.contact;

    assert_eq!(contact.name.as_deref(), Some("Jordan Lee"));
    assert_eq!(contact.email.as_deref(), Some("jordan.lee@example.com"));
    assert_eq!(contact.phone.as_deref(), Some("(206) 555-0142"));
    assert_eq!(contact.location.as_deref(), Some("Seattle, WA"));
    assert_eq!(contact.linkedin.as_deref(), Some("linkedin.com/in/jordanlee"));
    assert_eq!(contact.website.as_deref(), Some("https://jordanlee.dev"));
    assert_eq!(stats.experience_years, 11);

    let present: Vec<bool> = stats.section_coverage.iter().map(|c| c.present).collect();
    assert_eq!(present, vec![true, true, true, true, false, false]);

    let report = &analysis.report;
    for keyword in ["leadership", "communication", "agile", "scrum", "mentoring"] {
        assert!(
            report.keywords_matched.iter().any(|k| k == keyword),
            "expected {} to match",
            keyword
        );
    }
    assert!(report.score >= 30 && report.score <= 100);
    assert_eq!(report.section_recommendations.len(), 2);
}

#[tokio::test]
async fn test_job_description_terms_join_catalogue() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();

    let input = AnalysisInput::new(resume).with_job_description(job);
    let analysis = AnalysisEngine::new().analyze(&input);
    let report = &analysis.report;

    assert!(report.keywords_matched.iter().any(|k| k == "rust"));
    let kubernetes = analysis
        .stats
        .keyword_matches
        .iter()
        .find(|m| m.keyword == "kubernetes")
        .expect("job description term in catalogue");
    assert!(!kubernetes.found);
    assert!(report.missing_keywords.len() <= 12);
}

#[test]
fn test_empty_document_floor() {
    let analysis = AnalysisEngine::new().analyze(&AnalysisInput::new(""));

    assert_eq!(analysis.stats.word_count, 0);
    assert_eq!(analysis.stats.sentence_count, 1);
    assert_eq!(analysis.report.score, 39);
    assert_eq!(analysis.report.section_recommendations.len(), 6);
    assert!(analysis.report.keywords_matched.is_empty());
}

#[test]
fn test_idempotent_apart_from_timestamp() {
    let engine = AnalysisEngine::new();
    let input = AnalysisInput::new("Jane Doe\nExperience\nLed agile delivery, 2019 to 2022.")
        .with_job_target("Delivery Manager")
        .with_custom_keywords(vec!["Jira".to_string()]);

    let first = engine.analyze(&input);
    let second = engine.analyze(&input);

    assert_eq!(first.stats, second.stats);
    assert_eq!(first.report.score, second.report.score);
    assert_eq!(first.report.keywords_matched, second.report.keywords_matched);
    assert_eq!(first.report.missing_keywords, second.report.missing_keywords);
    assert_eq!(first.report.breakdown, second.report.breakdown);
}

#[test]
fn test_metacharacter_keywords_are_literal() {
    let input = AnalysisInput::new("Skills: C++, ASP.NET, a.b+c*d and (unclosed[group")
        .with_custom_keywords(vec![
            "a.b+c*".to_string(),
            "C++".to_string(),
            ".NET".to_string(),
            "(unclosed[group".to_string(),
            "aXb".to_string(),
        ]);

    let analysis = AnalysisEngine::new().analyze(&input);
    let found = |keyword: &str| {
        analysis
            .stats
            .keyword_matches
            .iter()
            .find(|m| m.keyword == keyword)
            .map(|m| m.found)
    };

    // word boundaries hold on both sides of the escaped keyword
    assert_eq!(found("a.b+c*"), Some(true));
    assert_eq!(found(".NET"), Some(true));
    assert_eq!(found("C++"), Some(false));
    assert_eq!(found("(unclosed[group"), Some(false));
    assert_eq!(found("aXb"), Some(false));
}

#[test]
fn test_case_insensitive_keyword_dedup() {
    let input = AnalysisInput::new("Python developer")
        .with_job_target("Python Developer")
        .with_custom_keywords(vec!["python".to_string(), "PYTHON".to_string()]);

    let analysis = AnalysisEngine::new().analyze(&input);
    let pythons: Vec<&str> = analysis
        .stats
        .keyword_matches
        .iter()
        .filter(|m| m.keyword.eq_ignore_ascii_case("python"))
        .map(|m| m.keyword.as_str())
        .collect();

    assert_eq!(pythons, vec!["Python"]);
}

#[test]
fn test_bounds_hold_for_varied_input() {
    let engine = AnalysisEngine::new();
    let samples = [
        "",
        "a",
        "!!!???...",
        "\u{0}\u{1}\u{fffd} binary \u{7f} garbage",
        "Supercalifragilisticexpialidocious antidisestablishmentarianism.",
        "I am. I go. I do. I see. I win.",
        "Summary Experience Education Skills Projects Certifications leadership agile scrum",
    ];

    for sample in samples {
        let analysis = engine.analyze(&AnalysisInput::new(sample));
        let report = &analysis.report;

        assert!((30..=100).contains(&report.score), "score out of range for {:?}", sample);
        assert!((0.0..=100.0).contains(&report.readability));
        assert_eq!(analysis.stats.section_coverage.len(), 6);
        let weight_sum: f64 = analysis.stats.section_coverage.iter().map(|c| c.weight).sum();
        assert!((weight_sum - 1.0).abs() < 1e-9);
        assert!(report.missing_keywords.len() <= 12);
    }
}

#[test]
fn test_optimization_limits_and_emphasis() {
    let engine = AnalysisEngine::new();
    let analysis = engine.analyze(&AnalysisInput::new("Jane Doe\nExperience\nShipped features."));
    let options = OptimizeOptions {
        emphasize_sections: vec!["projects".to_string()],
        custom_keywords: vec!["Rust".to_string(), "Kubernetes".to_string()],
    };

    let result = engine.optimize(&analysis.stats, &analysis.report, &options);

    assert!(result.keyword_recommendations.len() <= 10);
    assert!(result.raised_score >= analysis.report.score);
    assert!(result.raised_score <= 100);
    assert!(!result.formatting_tips.is_empty());
}

#[test]
fn test_record_lifecycle_and_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jordan.json");
    let engine = AnalysisEngine::new();

    let analysis = engine.analyze(&AnalysisInput::new("Jordan Lee\nSkills\nRust, leadership."));
    let mut record = CvRecord::new("jordan");
    let version = record.apply_analysis(0, analysis.clone()).unwrap();
    let optimization = engine.optimize(&analysis.stats, &analysis.report, &OptimizeOptions::default());
    record.apply_optimization(version, optimization).unwrap();
    record.save(&path, 0).unwrap();

    let mut loaded = CvRecord::load(&path).unwrap();
    assert_eq!(loaded, record);

    let stale = loaded.apply_analysis(0, analysis.clone());
    assert!(matches!(stale, Err(CvAnalyzerError::VersionConflict { .. })));

    let generator = ReportGenerator::with_options(false, true, true, true);
    let json = generator.generate_report(&loaded, &OutputFormat::Json).unwrap();
    assert!(json.contains("\"documentId\": \"jordan\""));

    let markdown = generator.generate_report(&loaded, &OutputFormat::Markdown).unwrap();
    assert!(markdown.contains("## Optimization"));
}
