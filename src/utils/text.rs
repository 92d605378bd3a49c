/// Pure text helpers for speech synthesis

/// Split text into pieces of at most `max_chars` characters.
///
/// Pieces break at whitespace; words longer than the limit are cut.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for mut word in text.split_whitespace() {
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let split = word
                .char_indices()
                .nth(max_chars)
                .map_or(word.len(), |(index, _)| index);
            chunks.push(word[..split].to_string());
            word = &word[split..];
        }

        if word.is_empty() {
            continue;
        }

        let word_len = word.chars().count();
        if !current.is_empty() && current_len + 1 + word_len > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(chunk_text("hello world", 100), vec!["hello world"]);
    }

    #[test]
    fn test_whitespace_is_normalized() {
        assert_eq!(chunk_text("  hello \n  world  ", 100), vec!["hello world"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(chunk_text("", 100).is_empty());
        assert!(chunk_text("   \t", 100).is_empty());
    }

    #[test]
    fn test_breaks_at_whitespace() {
        assert_eq!(
            chunk_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_exact_fit() {
        assert_eq!(chunk_text("abc def", 7), vec!["abc def"]);
    }

    #[test]
    fn test_long_word_is_cut() {
        let word = "a".repeat(250);
        let chunks = chunk_text(&word, 100);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 100);
        assert_eq!(chunks[1].len(), 100);
        assert_eq!(chunks[2].len(), 50);
    }

    #[test]
    fn test_long_word_flushes_pending_text() {
        assert_eq!(
            chunk_text("hi abcdefgh yo", 4),
            vec!["hi", "abcd", "efgh", "yo"]
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let chunks = chunk_text("éééé éééé", 4);
        assert_eq!(chunks, vec!["éééé", "éééé"]);
    }
}
