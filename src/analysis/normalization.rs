// WHY: standalone normalization logic shared by deduplication and report rendering
// Dedup keys and display text are normalized differently and must never be mixed

/// Word characters for key trimming: alphanumerics and underscore
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Deduplication key: leading/trailing non-word characters stripped, lowercased.
/// Never used for display.
pub fn sentence_key(text: &str) -> String {
    text.trim_matches(|c: char| !is_word_char(c)).to_lowercase()
}

/// Normalize sentence for single-line display by collapsing hard line breaks and whitespace runs
pub fn normalize_sentence(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_sentence_into(text, &mut result);
    result
}

/// Normalize sentence into supplied buffer to avoid allocation
/// WHY: enables buffer reuse when rendering many sentences
pub fn normalize_sentence_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut chars = text.chars().peekable();
    let mut prev_was_space = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                // Handle \r\n as single break
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if !prev_was_space {
                    buffer.push(' ');
                    prev_was_space = true;
                }
            }
            _ if ch.is_whitespace() => {
                if !prev_was_space {
                    buffer.push(' ');
                    prev_was_space = true;
                }
            }
            _ => {
                buffer.push(ch);
                prev_was_space = false;
            }
        }
    }

    let trimmed_len = buffer.trim_end().len();
    buffer.truncate(trimmed_len);
    let leading = buffer.len() - buffer.trim_start().len();
    buffer.drain(..leading);
}
