use super::counter::OrderedCounter;

/// Ranked words for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRanking {
    pub longest: Vec<String>,
    pub frequencies: Vec<(String, usize)>,
}

/// Count every word and rank both views from the same first-seen-order counter
pub fn rank_words(words: &[String], n: usize) -> WordRanking {
    let counter: OrderedCounter<&str> = words.iter().map(String::as_str).collect();

    WordRanking {
        longest: longest_words(&counter, n),
        frequencies: counter
            .most_common(n)
            .into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect(),
    }
}

/// Distinct words by character count descending; ties keep first-seen order
fn longest_words(counter: &OrderedCounter<&str>, n: usize) -> Vec<String> {
    let mut distinct: Vec<&str> = counter.keys().copied().collect();
    distinct.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
    distinct.into_iter().take(n).map(str::to_string).collect()
}
