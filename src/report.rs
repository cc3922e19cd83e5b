//! Plain-text report rendering and the shared output directory.
//!
//! Report layout, sections separated by a blank line:
//!
//! ```text
//! Top 10 Longest Sentences by Characters:
//! 29 chars
//!
//! Top 10 Shortest Sentences by Words:
//! Mr. Smith runs fast!
//!
//! Top 10 Longest Words:
//! title
//!
//! Top 10 Most Common Letters:
//! t: 6 occurrences
//!
//! Top 10 Words by Frequency:
//! title: 1
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::analysis::{normalize_sentence_into, AnalysisResult};
use crate::error::DocumentError;

pub const LONGEST_SENTENCES_HEADER: &str = "Top 10 Longest Sentences by Characters:";
pub const SHORTEST_SENTENCES_HEADER: &str = "Top 10 Shortest Sentences by Words:";
pub const LONGEST_WORDS_HEADER: &str = "Top 10 Longest Words:";
pub const COMMON_LETTERS_HEADER: &str = "Top 10 Most Common Letters:";
pub const WORD_FREQUENCY_HEADER: &str = "Top 10 Words by Frequency:";

/// Default directory for reports, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "AnalyzedBooks";

/// Render the full report text
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let mut buffer = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{LONGEST_SENTENCES_HEADER}");
    for sentence in &result.longest_sentences {
        let _ = writeln!(out, "{} chars", sentence.chars().count());
    }

    let _ = writeln!(out, "\n{SHORTEST_SENTENCES_HEADER}");
    for sentence in &result.shortest_sentences {
        // One line per sentence even when the source wrapped it
        normalize_sentence_into(sentence, &mut buffer);
        let _ = writeln!(out, "{buffer}");
    }

    let _ = writeln!(out, "\n{LONGEST_WORDS_HEADER}");
    for word in &result.longest_words {
        let _ = writeln!(out, "{word}");
    }

    let _ = writeln!(out, "\n{COMMON_LETTERS_HEADER}");
    for (letter, count) in &result.common_letters {
        let _ = writeln!(out, "{letter}: {count} occurrences");
    }

    let _ = writeln!(out, "\n{WORD_FREQUENCY_HEADER}");
    for (word, count) in &result.word_frequencies {
        let _ = writeln!(out, "{word}: {count}");
    }

    out
}

/// Report file name: title with spaces and path separators replaced by `_`, plus `.txt`.
/// An empty title falls back to the source file stem so reports never collide on `.txt`.
/// Two books with the same title map to the same name; the later write replaces the
/// earlier report (see [`OutputDir::claim_report_name`]).
pub fn report_file_name(title: &str, source_path: &Path) -> String {
    let base = if title.is_empty() {
        source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
    } else {
        title
    };

    let sanitized: String = base
        .chars()
        .map(|c| if matches!(c, ' ' | '/' | '\\') { '_' } else { c })
        .collect();
    format!("{sanitized}.txt")
}

/// Output directory shared by all document tasks.
/// Creation happens at most once; concurrent first callers wait on the same attempt.
#[derive(Debug)]
pub struct OutputDir {
    path: PathBuf,
    created: OnceCell<()>,
    /// Report file name -> source document that claimed it
    claimed: Mutex<HashMap<String, PathBuf>>,
}

impl OutputDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            created: OnceCell::new(),
            claimed: Mutex::new(HashMap::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory if absent. Idempotent and tolerant of other processes racing us.
    pub async fn ensure(&self) -> Result<(), DocumentError> {
        self.created
            .get_or_try_init(|| async {
                tokio::fs::create_dir_all(&self.path)
                    .await
                    .map_err(|e| DocumentError::write(&self.path, e))?;
                info!("Output directory ready: {}", self.path.display());
                Ok::<(), DocumentError>(())
            })
            .await
            .map(|_| ())
    }

    /// Record that `source` writes `file_name`.
    /// Returns the other source that already claimed the name in this run, if any.
    pub fn claim_report_name(&self, file_name: &str, source: &Path) -> Option<PathBuf> {
        let mut claimed = self.claimed.lock().unwrap_or_else(|e| e.into_inner());
        match claimed.get(file_name) {
            Some(previous) if previous != source => {
                warn!(
                    "Report {} from {} replaces the one written for {}",
                    file_name,
                    source.display(),
                    previous.display()
                );
                let previous = previous.clone();
                claimed.insert(file_name.to_string(), source.to_path_buf());
                Some(previous)
            }
            Some(_) => None,
            None => {
                claimed.insert(file_name.to_string(), source.to_path_buf());
                None
            }
        }
    }

    /// Render and write one report, returning its path
    pub async fn write_report(
        &self,
        file_name: &str,
        result: &AnalysisResult,
    ) -> Result<PathBuf, DocumentError> {
        self.ensure().await?;

        let report_path = self.path.join(file_name);
        let content = render_report(result);

        let file = tokio::fs::File::create(&report_path)
            .await
            .map_err(|e| DocumentError::write(&report_path, e))?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(content.as_bytes())
            .await
            .map_err(|e| DocumentError::write(&report_path, e))?;
        writer
            .flush()
            .await
            .map_err(|e| DocumentError::write(&report_path, e))?;

        debug!("Wrote report {} ({} bytes)", report_path.display(), content.len());
        Ok(report_path)
    }
}
