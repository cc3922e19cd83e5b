pub mod analysis;
pub mod discovery;
pub mod document;
pub mod error;
pub mod processing;
pub mod reader;
pub mod report;

// Re-export main types for convenient access
pub use analysis::{AnalysisResult, BookAnalyzer, BoundaryRules};
pub use document::{extract_title, Document, DocumentStats};
pub use error::DocumentError;

// Re-export parallel processing types and functions for the CLI and benchmarks
pub use processing::{
    BatchSummary, FileStats, FileStatus, ProcessedDocument, SchedulerConfig,
    process_document, process_files_parallel
};
