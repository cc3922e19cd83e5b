// WHY: Single entry point composing tokenizer, rankers and letter counter into one result
// Each component is side-effect free over the same text, so one analyzer is shared by all tasks

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

pub mod abbreviations;
pub mod counter;
pub mod letters;
pub mod normalization;
pub mod sentences;
pub mod tokenizer;
pub mod words;

pub use abbreviations::AbbreviationChecker;
pub use counter::OrderedCounter;
pub use normalization::{normalize_sentence, normalize_sentence_into, sentence_key};
pub use sentences::{is_valid_sentence, rank_sentences, SentenceRanking};
pub use tokenizer::{BoundaryRules, Tokenizer};
pub use words::{rank_words, WordRanking};

/// Length of every ranked list in a report
pub const TOP_N: usize = 10;

/// Aggregate analysis of one document, immutable once built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Deduplicated sentences by character count, descending
    pub longest_sentences: Vec<String>,
    /// Valid deduplicated sentences by word count, then character count, ascending
    pub shortest_sentences: Vec<String>,
    /// Distinct words by length, descending
    pub longest_words: Vec<String>,
    /// Letters by occurrence count, descending
    pub common_letters: Vec<(char, usize)>,
    /// Words by occurrence count, descending
    pub word_frequencies: Vec<(String, usize)>,
}

/// Main analyzer interface
#[derive(Debug)]
pub struct BookAnalyzer {
    tokenizer: Tokenizer,
}

impl BookAnalyzer {
    /// Create new analyzer with custom boundary rules
    pub fn new(rules: BoundaryRules) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new(rules)?,
        })
    }

    /// Create analyzer with default rules
    pub fn with_default_rules() -> Result<Self> {
        Self::new(BoundaryRules::default())
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Run every analysis pass over the full text
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let candidates = self.tokenizer.split_sentences(text);
        let words = self.tokenizer.split_words(text);

        debug!(
            "Tokenized {} characters into {} sentence candidates and {} words",
            text.len(),
            candidates.len(),
            words.len()
        );

        let SentenceRanking { longest, shortest } = rank_sentences(&candidates, TOP_N);
        let WordRanking { longest: longest_words, frequencies } = rank_words(&words, TOP_N);

        AnalysisResult {
            longest_sentences: longest,
            shortest_sentences: shortest,
            longest_words,
            common_letters: letters::most_common_letters(text, TOP_N),
            word_frequencies: frequencies,
        }
    }
}
