// WHY: Centralized abbreviation handling for sentence candidate filtering
// Title abbreviations are the main source of false sentence splits in fiction ("Mr. Darcy")

use std::collections::HashSet;

/// Title abbreviations, lowercase and without the trailing period
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "dr", "prof", "rev", "ms", "jr", "sr", "st"
];

/// Efficient abbreviation lookup using HashSet for O(1) performance
#[derive(Debug, Clone)]
pub struct AbbreviationChecker {
    title_abbreviations: HashSet<&'static str>,
}

impl AbbreviationChecker {
    /// Create new abbreviation checker with the default title set
    pub fn new() -> Self {
        Self {
            title_abbreviations: TITLE_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Exact, case-insensitive match of the whole text against the abbreviation set.
    /// `"Mr"` and `"MR"` match; `"Mr."` does not.
    pub fn is_abbreviation(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.title_abbreviations.contains(lowered.as_str())
    }

    /// Check if text ends with a title abbreviation followed by its period
    /// WHY: Examines the last word so "said Mr." is caught but "Mr" mid-sentence is not
    pub fn ends_with_title_abbreviation(&self, text: &str) -> bool {
        let Some(last_word) = text.split_whitespace().last() else {
            return false;
        };

        // Remove quotes and opening brackets to get clean word
        let clean_word = last_word.trim_start_matches(|c: char| {
            matches!(c, '"' | '\'' | '(' | '[' | '\u{201C}' | '\u{2018}')
        });

        match clean_word.strip_suffix('.') {
            Some(stem) => self.is_abbreviation(stem),
            None => false,
        }
    }
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new()
    }
}
