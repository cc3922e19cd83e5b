//! Sentence deduplication and longest/shortest ranking.
//!
//! Longest and shortest are two independent passes over the same deduplicated set.
//! Only the shortest pass applies [`is_valid_sentence`]; the longest pass takes every
//! deduplicated candidate.

use std::collections::HashSet;

use super::normalization::sentence_key;
use super::tokenizer::token_count;

/// Ranked sentences for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceRanking {
    pub longest: Vec<String>,
    pub shortest: Vec<String>,
}

/// More than one token, or a single token ending in `!` or `?`
pub fn is_valid_sentence(sentence: &str) -> bool {
    match token_count(sentence) {
        0 => false,
        1 => sentence.ends_with('!') || sentence.ends_with('?'),
        _ => true,
    }
}

/// Keep the first candidate for each normalized key, in encounter order
pub fn deduplicate<'a>(candidates: &[&'a str]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .copied()
        .filter(|candidate| seen.insert(sentence_key(candidate)))
        .collect()
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Up to `n` sentences by character count descending; ties keep encounter order
pub fn longest_sentences(sentences: &[&str], n: usize) -> Vec<String> {
    let mut ranked = sentences.to_vec();
    ranked.sort_by_key(|s| std::cmp::Reverse(char_len(s)));
    ranked.into_iter().take(n).map(str::to_string).collect()
}

/// Up to `n` valid sentences by token count, then character count, both ascending
pub fn shortest_sentences(sentences: &[&str], n: usize) -> Vec<String> {
    let mut ranked: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|s| is_valid_sentence(s))
        .collect();
    ranked.sort_by_key(|s| (token_count(s), char_len(s)));
    ranked.into_iter().take(n).map(str::to_string).collect()
}

/// Deduplicate candidates and run both ranking passes
pub fn rank_sentences(candidates: &[&str], n: usize) -> SentenceRanking {
    let unique = deduplicate(candidates);
    SentenceRanking {
        longest: longest_sentences(&unique, n),
        shortest: shortest_sentences(&unique, n),
    }
}
