// Tests for the crate-root re-exports used by the CLI and external callers
// WHY: Public API functions must be tested to ensure they work correctly for external users

use quire::report::OutputDir;
use quire::{
    extract_title, process_document, process_files_parallel, AnalysisResult, BookAnalyzer,
    BoundaryRules, Document, DocumentError, DocumentStats, FileStatus, SchedulerConfig,
};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_document_api() {
    let document = Document::new("book.txt", "Title: Walden\nI went to the woods. I wished to live deliberately!");

    assert_eq!(document.title(), "Walden");
    assert_eq!(extract_title(document.text()), "Walden");

    let stats = document.stats();
    assert_eq!(stats, DocumentStats::from_text(document.text()));
    assert_eq!(stats.sentences, 2);
}

#[test]
fn test_analyzer_api() {
    let analyzer = BookAnalyzer::new(BoundaryRules::default()).expect("Default rules should compile");
    let result: AnalysisResult = analyzer.analyze("Title: Walden\nI went to the woods. I wished to live deliberately!");

    assert_eq!(result.longest_sentences.len(), 2);
    assert_eq!(result.longest_sentences[1], "I wished to live deliberately!");
    assert_eq!(result.longest_words[0], "deliberately");
    assert!(result.word_frequencies.contains(&("i".to_string(), 2)));
}

#[test]
fn test_unguarded_analyzer_splits_titles() {
    let rules = BoundaryRules {
        guard_title_abbreviations: false,
    };
    let analyzer = BookAnalyzer::new(rules).expect("Unguarded rules should compile");
    let result = analyzer.analyze("Dr. Watson took notes. Holmes said nothing.");

    assert!(result.shortest_sentences.contains(&"Watson took notes.".to_string()));
    assert!(!result.longest_sentences.iter().any(|s| s.starts_with("Dr.")));
}

#[tokio::test]
async fn test_process_document_api() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("walden.txt");
    std::fs::write(&source, "Title: Walden\nI went to the woods. I wished to live deliberately!")
        .expect("Failed to write source file");

    let output = OutputDir::new(temp_dir.path().join("reports"));
    let analyzer = Arc::new(BookAnalyzer::with_default_rules().unwrap());

    let processed = process_document(&source, analyzer, &output, Default::default())
        .await
        .expect("Processing should succeed");
    assert_eq!(processed.title, "Walden");
    assert_eq!(processed.report_path, temp_dir.path().join("reports/Walden.txt"));
}

#[tokio::test]
async fn test_process_files_parallel_api() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let present = temp_dir.path().join("walden.txt");
    std::fs::write(&present, "Title: Walden\nI went to the woods. I wished to live deliberately!")
        .expect("Failed to write source file");
    let missing = temp_dir.path().join("missing.txt");

    let config = SchedulerConfig {
        output_dir: temp_dir.path().join("reports"),
        max_concurrency: 1,
        ..Default::default()
    };
    let analyzer = Arc::new(BookAnalyzer::with_default_rules().unwrap());
    let summary = process_files_parallel(vec![present, missing], analyzer, &config).await;

    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.files_failed, 1);
    let failed = summary
        .file_stats
        .iter()
        .find(|s| s.status == FileStatus::Failed)
        .unwrap();
    assert!(failed.path.ends_with("missing.txt"));
    assert_eq!(failed.error_kind.as_deref(), Some("read"));
}

#[test]
fn test_document_error_kinds() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    assert_eq!(DocumentError::read("a.txt", io).kind(), "read");
    assert_eq!(DocumentError::analysis("boom").kind(), "analysis");
}
