// WHY: Pattern-based word and sentence splitting over a whole document
// Uses regex-automata meta regexes compiled once per analyzer and shared across tasks

use anyhow::Result;
use regex_automata::{meta::Regex, Input};
use std::collections::HashSet;
use tracing::debug;

use super::abbreviations::AbbreviationChecker;

/// Whole-word pattern: runs of ASCII letters and apostrophes not embedded in a larger word
const WORD_PATTERN: &str = r"\b[a-zA-Z']+\b";

/// Sentence boundary: `.`, `!` or `?`, a whitespace run, then an uppercase letter
const BOUNDARY_PATTERN: &str = r"[.!?]\s+[A-Z]";

/// Configuration for sentence boundary detection rules
#[derive(Debug, Clone)]
pub struct BoundaryRules {
    /// Suppress a `.` boundary when the word before it is a title abbreviation ("Mr. Smith")
    pub guard_title_abbreviations: bool,
}

impl Default for BoundaryRules {
    fn default() -> Self {
        Self {
            guard_title_abbreviations: true,
        }
    }
}

/// Splits raw text into lowercase words and filtered sentence candidates
#[derive(Debug)]
pub struct Tokenizer {
    rules: BoundaryRules,
    boundary: Regex,
    word: Regex,
    abbreviations: AbbreviationChecker,
}

impl Tokenizer {
    /// Compile boundary and word patterns for the given rules
    pub fn new(rules: BoundaryRules) -> Result<Self> {
        let boundary = Regex::new(BOUNDARY_PATTERN)?;
        let word = Regex::new(WORD_PATTERN)?;

        debug!("Compiled sentence boundary pattern: {}", BOUNDARY_PATTERN);

        Ok(Self {
            rules,
            boundary,
            word,
            abbreviations: AbbreviationChecker::new(),
        })
    }

    /// Create tokenizer with default rules
    pub fn with_default_rules() -> Result<Self> {
        Self::new(BoundaryRules::default())
    }

    /// All whole words in the text, folded to lowercase, in document order
    pub fn split_words(&self, text: &str) -> Vec<String> {
        self.word
            .find_iter(text)
            .map(|m| text[m.range()].to_ascii_lowercase())
            .collect()
    }

    /// Raw pieces between sentence boundaries, before any filtering.
    /// The whitespace run separating two sentences is dropped; the uppercase letter opens the next piece.
    pub fn split_raw_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut sentence_start = 0;
        let mut search_pos = 0;

        while let Some(m) = self.boundary.find(Input::new(text).range(search_pos..)) {
            // End punctuation and the uppercase letter are both single-byte
            let punct_pos = m.start();
            let next_start = m.end() - 1;
            search_pos = next_start;

            if self.rules.guard_title_abbreviations
                && text.as_bytes()[punct_pos] == b'.'
                && self
                    .abbreviations
                    .ends_with_title_abbreviation(&text[sentence_start..=punct_pos])
            {
                continue;
            }

            pieces.push(&text[sentence_start..=punct_pos]);
            sentence_start = next_start;
        }

        pieces.push(&text[sentence_start..]);
        pieces
    }

    /// Sentence candidates: trimmed, non-empty, not a bare abbreviation,
    /// at least two whitespace-separated tokens, exact duplicates removed
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut seen = HashSet::new();

        self.split_raw_sentences(text)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter(|s| !self.abbreviations.is_abbreviation(s))
            .filter(|s| token_count(s) > 1)
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

/// Number of whitespace-separated tokens
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}
