// WHY: Per-document pipeline and the concurrent batch driver
// Each document runs read -> analyze -> write in its own task; failures stay inside that task

use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::analysis::{AnalysisResult, BookAnalyzer};
use crate::document::DocumentStats;
use crate::error::DocumentError;
use crate::reader::{AsyncFileReader, ReaderConfig};
use crate::report::{report_file_name, OutputDir, DEFAULT_OUTPUT_DIR};

/// Configuration for the batch scheduler
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Directory receiving one report per document
    pub output_dir: PathBuf,
    /// Upper bound on documents in flight at once
    pub max_concurrency: usize,
    pub reader: ReaderConfig,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_concurrency: num_cpus::get(),
            reader: ReaderConfig::default(),
        }
    }
}

/// Outcome of one document task
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Success,
    Failed,
}

/// Per-file processing statistics
#[derive(Serialize, Debug, Clone)]
pub struct FileStats {
    /// Source file path
    pub path: String,
    /// Title found in the document, empty when absent
    pub title: String,
    /// Report written for this document
    pub report_path: Option<String>,
    /// Informational counts, zero when the read failed
    pub counts: DocumentStats,
    /// Wall time for read, analysis and write in milliseconds
    pub processing_time_ms: u64,
    /// Analysis time in milliseconds (subset of processing_time_ms)
    pub analysis_time_ms: u64,
    pub status: FileStatus,
    /// Error category and message if processing failed
    pub error_kind: Option<String>,
    pub error: Option<String>,
}

impl FileStats {
    fn failed(path: &Path, err: &DocumentError, elapsed_ms: u64) -> Self {
        Self {
            path: path.display().to_string(),
            title: String::new(),
            report_path: None,
            counts: DocumentStats::default(),
            processing_time_ms: elapsed_ms,
            analysis_time_ms: 0,
            status: FileStatus::Failed,
            error_kind: Some(err.kind().to_string()),
            error: Some(err.to_string()),
        }
    }
}

/// Totals for one batch run
#[derive(Serialize, Debug, Clone, Default)]
pub struct BatchSummary {
    pub files_processed: usize,
    pub files_failed: usize,
    pub total_chars_processed: usize,
    pub total_processing_time_ms: u64,
    pub file_stats: Vec<FileStats>,
}

impl BatchSummary {
    fn from_stats(mut file_stats: Vec<FileStats>, elapsed_ms: u64) -> Self {
        // Completion order is arbitrary; sort so summaries are comparable between runs
        file_stats.sort_by(|a, b| a.path.cmp(&b.path));

        let files_failed = file_stats
            .iter()
            .filter(|s| s.status == FileStatus::Failed)
            .count();

        Self {
            files_processed: file_stats.len() - files_failed,
            files_failed,
            total_chars_processed: file_stats.iter().map(|s| s.counts.bytes).sum(),
            total_processing_time_ms: elapsed_ms,
            file_stats,
        }
    }
}

/// Successful result of one document
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub title: String,
    pub report_path: PathBuf,
    pub counts: DocumentStats,
    pub result: AnalysisResult,
    pub analysis_time_ms: u64,
}

/// Read, analyze and write the report for one document.
/// Analysis runs on the blocking pool; only the read and the write yield to the scheduler.
pub async fn process_document(
    path: &Path,
    analyzer: Arc<BookAnalyzer>,
    output: &OutputDir,
    reader_config: ReaderConfig,
) -> Result<ProcessedDocument, DocumentError> {
    info!("Processing {}...", path.display());

    let reader = AsyncFileReader::new(reader_config);
    let (document, read_stats) = reader.read_document(path).await?;

    let title = document.title().to_string();
    info!(
        "File {} read ({} bytes in {}ms). Title: {}",
        read_stats.file_path, read_stats.bytes_read, read_stats.duration_ms, title
    );

    let analysis_start = Instant::now();
    let (document, result) = tokio::task::spawn_blocking(move || {
        let result = analyzer.analyze(document.text());
        (document, result)
    })
    .await
    .map_err(|e| DocumentError::analysis(format!("analysis task for {} failed: {}", path.display(), e)))?;
    let analysis_time_ms = analysis_start.elapsed().as_millis() as u64;

    let counts = document.stats();
    info!(
        path = %path.display(),
        bytes = counts.bytes,
        words = counts.words,
        sentences = counts.sentences,
        "Analysis completed"
    );

    let file_name = report_file_name(&title, path);
    // Same-title books share a report name; the collision is logged and the last write wins
    output.claim_report_name(&file_name, path);
    let report_path = output.write_report(&file_name, &result).await?;

    info!("Processing of {} completed", path.display());

    Ok(ProcessedDocument {
        title,
        report_path,
        counts,
        result,
        analysis_time_ms,
    })
}

/// Run one document and fold any failure into its stats record
async fn process_file(
    path: PathBuf,
    analyzer: Arc<BookAnalyzer>,
    output: Arc<OutputDir>,
    reader_config: ReaderConfig,
) -> FileStats {
    let start = Instant::now();

    match process_document(&path, analyzer, &output, reader_config).await {
        Ok(processed) => FileStats {
            path: path.display().to_string(),
            title: processed.title,
            report_path: Some(processed.report_path.display().to_string()),
            counts: processed.counts,
            processing_time_ms: start.elapsed().as_millis() as u64,
            analysis_time_ms: processed.analysis_time_ms,
            status: FileStatus::Success,
            error_kind: None,
            error: None,
        },
        Err(e) => {
            warn!("Error processing {}: {}", path.display(), e);
            FileStats::failed(&path, &e, start.elapsed().as_millis() as u64)
        }
    }
}

/// Process all files concurrently and wait for every one of them.
/// One failing document never stops its siblings.
pub async fn process_files_parallel(
    paths: Vec<PathBuf>,
    analyzer: Arc<BookAnalyzer>,
    config: &SchedulerConfig,
) -> BatchSummary {
    let start = Instant::now();
    let output = Arc::new(OutputDir::new(&config.output_dir));
    let max_concurrency = config.max_concurrency.max(1);

    info!(
        "Starting parallel processing of {} files (max {} concurrent)",
        paths.len(),
        max_concurrency
    );

    let file_stats: Vec<FileStats> = stream::iter(paths)
        .map(|path| {
            let analyzer = Arc::clone(&analyzer);
            let output = Arc::clone(&output);
            let reader_config = config.reader.clone();

            async move {
                // WHY: spawning gives each document its own task so work spreads across worker threads
                let task = tokio::spawn(process_file(path.clone(), analyzer, output, reader_config));
                match task.await {
                    Ok(stats) => stats,
                    Err(e) => {
                        let err = DocumentError::analysis(format!("task failed: {e}"));
                        warn!("Error processing {}: {}", path.display(), err);
                        FileStats::failed(&path, &err, 0)
                    }
                }
            }
        })
        .buffer_unordered(max_concurrency)
        .collect()
        .await;

    let summary = BatchSummary::from_stats(file_stats, start.elapsed().as_millis() as u64);

    info!(
        "Parallel processing completed: {} successful, {} failed",
        summary.files_processed, summary.files_failed
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn analyzer() -> Arc<BookAnalyzer> {
        Arc::new(BookAnalyzer::with_default_rules().unwrap())
    }

    #[tokio::test]
    async fn test_process_document_writes_named_report() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("book.txt");
        std::fs::write(&source, "Title: Test Book\nHello world. Mr. Smith runs fast! Hi.").unwrap();
        let output = OutputDir::new(temp_dir.path().join("out"));

        let processed = process_document(&source, analyzer(), &output, ReaderConfig::default())
            .await
            .unwrap();

        assert_eq!(processed.title, "Test Book");
        assert!(processed.report_path.ends_with("out/Test_Book.txt"));
        assert!(processed.report_path.exists());
        assert_eq!(processed.result.longest_sentences.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let output = OutputDir::new(temp_dir.path().join("out"));

        let err = process_document(&temp_dir.path().join("gone.txt"), analyzer(), &output, ReaderConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DocumentError::Read { .. }));
        // Nothing was written
        assert!(!temp_dir.path().join("out").exists());
    }

    #[tokio::test]
    async fn test_batch_isolates_failures() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.txt");
        let bad = temp_dir.path().join("bad.txt");
        std::fs::write(&good, "Title: Good Book\nIt was a dark night. The end came soon.").unwrap();
        std::fs::write(&bad, [0xFF, 0xFE, 0xFD]).unwrap();

        let config = SchedulerConfig {
            output_dir: temp_dir.path().join("reports"),
            max_concurrency: 2,
            ..Default::default()
        };
        let summary = process_files_parallel(vec![good, bad], analyzer(), &config).await;

        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.files_failed, 1);
        assert_eq!(summary.file_stats.len(), 2);

        // Sorted by path: bad.txt first
        assert_eq!(summary.file_stats[0].status, FileStatus::Failed);
        assert_eq!(summary.file_stats[0].error_kind.as_deref(), Some("read"));
        assert_eq!(summary.file_stats[1].status, FileStatus::Success);
        assert_eq!(summary.file_stats[1].title, "Good Book");
        assert!(temp_dir.path().join("reports/Good_Book.txt").exists());
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let temp_dir = TempDir::new().unwrap();
        let config = SchedulerConfig {
            output_dir: temp_dir.path().join("reports"),
            ..Default::default()
        };

        let summary = process_files_parallel(Vec::new(), analyzer(), &config).await;
        assert_eq!(summary.files_processed, 0);
        assert_eq!(summary.files_failed, 0);
        assert!(summary.file_stats.is_empty());
    }

    #[test]
    fn test_summary_serializes_status_lowercase() {
        let err = DocumentError::analysis("boom");
        let summary = BatchSummary::from_stats(vec![FileStats::failed(Path::new("a.txt"), &err, 3)], 5);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["files_failed"], 1);
        assert_eq!(json["file_stats"][0]["status"], "failed");
        assert_eq!(json["file_stats"][0]["error_kind"], "analysis");
    }
}
