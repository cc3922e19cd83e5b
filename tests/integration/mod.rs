// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod fixtures;

/// Test fixture with separate input and report directories inside one temp dir
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub books_path: PathBuf,
    pub reports_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let books_path = temp_dir.path().join("books");
        let reports_path = temp_dir.path().join("AnalyzedBooks");
        fs::create_dir_all(&books_path).expect("Failed to create books directory");

        Self {
            temp_dir,
            books_path,
            reports_path,
        }
    }

    /// Create a book file with given content
    pub fn create_book<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        self.create_book_bytes(relative_path, content.as_bytes())
    }

    /// Create a book file with raw bytes, e.g. for invalid UTF-8
    pub fn create_book_bytes<P: AsRef<Path>>(&self, relative_path: P, content: &[u8]) -> PathBuf {
        let file_path = self.books_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    pub fn report_path(&self, file_name: &str) -> PathBuf {
        self.reports_path.join(file_name)
    }

    pub fn read_report(&self, file_name: &str) -> Result<String, std::io::Error> {
        fs::read_to_string(self.report_path(file_name))
    }

    /// Names of all reports written so far, sorted
    pub fn report_names(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.reports_path) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

/// Compare two strings line by line, providing detailed diff on mismatch
pub fn assert_golden_file(actual: &str, expected: &str, context: &str) {
    let actual_lines: Vec<&str> = actual.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();

    if actual_lines.len() != expected_lines.len() {
        panic!(
            "{}: Line count mismatch. Expected {} lines, got {} lines\n{}",
            context, expected_lines.len(), actual_lines.len(), actual
        );
    }

    for (i, (actual_line, expected_line)) in actual_lines.iter().zip(expected_lines.iter()).enumerate() {
        if actual_line != expected_line {
            panic!(
                "{}: Line {} mismatch\nExpected: {}\nActual:   {}",
                context, i + 1, expected_line, actual_line
            );
        }
    }
}
