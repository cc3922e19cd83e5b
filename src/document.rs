use serde::Serialize;
use std::path::{Path, PathBuf};

/// Literal marker introducing the book title
const TITLE_MARKER: &str = "Title:";

/// A book's full text together with the path it was read from
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: String,
}

/// Informational counts logged per document
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Characters in the text
    pub bytes: usize,
    /// Tokens split on space, tab, CR and LF
    pub words: usize,
    /// Pieces split on `.`, `!`, `?` and `*`
    pub sentences: usize,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn title(&self) -> &str {
        extract_title(&self.text)
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats::from_text(&self.text)
    }
}

/// Rest of the line after the first `Title:` marker, trimmed; empty when there is no marker
pub fn extract_title(text: &str) -> &str {
    let Some(pos) = text.find(TITLE_MARKER) else {
        return "";
    };

    let rest = &text[pos + TITLE_MARKER.len()..];
    // Leading spaces/tabs belong to the title line; a bare newline means an empty title
    let rest = rest.trim_start_matches([' ', '\t']);
    let line_end = rest.find('\n').unwrap_or(rest.len());
    rest[..line_end].trim()
}

impl DocumentStats {
    /// Coarse counts for progress logging; segmentation here is cruder than the analyzer's
    /// and additionally treats `*` as a sentence delimiter
    pub fn from_text(text: &str) -> Self {
        Self {
            bytes: text.chars().count(),
            words: text
                .split([' ', '\n', '\r', '\t'])
                .filter(|w| !w.is_empty())
                .count(),
            sentences: text
                .split(['.', '!', '?', '*'])
                .filter(|s| !s.is_empty())
                .count(),
        }
    }
}
