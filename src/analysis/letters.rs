use super::counter::OrderedCounter;

/// Most frequent letters, case-insensitive; anything non-alphabetic is ignored
pub fn most_common_letters(text: &str, n: usize) -> Vec<(char, usize)> {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .map(fold_letter)
        .collect::<OrderedCounter<char>>()
        .most_common(n)
}

/// Single-character lowercase mapping; letters whose lowercase form expands keep their first char
fn fold_letter(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
