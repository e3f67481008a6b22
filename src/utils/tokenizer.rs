use crate::index::types::Alphabet;

/// Reduce a whitespace-delimited token to its cropped key.
///
/// Scans the token's characters in order, keeping only those the alphabet
/// accepts, and stops as soon as `max_len` characters have accumulated
/// (the rest of the token is not examined). Returns `None` when nothing
/// alphabetic survives, in which case the token consumes no ordinal.
pub fn crop_token(token: &str, alphabet: Alphabet, max_len: usize) -> Option<String> {
    let mut cropped = String::new();
    let mut len = 0;
    for ch in token.chars() {
        if alphabet.contains(ch) {
            cropped.push(ch);
            len += 1;
            if len == max_len {
                break;
            }
        }
    }
    if cropped.is_empty() { None } else { Some(cropped) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop(token: &str) -> Option<String> {
        crop_token(token, Alphabet::Unicode, 5)
    }

    #[test]
    fn short_word_passes_through() {
        assert_eq!(crop("cat").as_deref(), Some("cat"));
    }

    #[test]
    fn long_word_is_truncated() {
        assert_eq!(crop("elephant").as_deref(), Some("eleph"));
    }

    #[test]
    fn non_alphabetic_characters_are_stripped() {
        assert_eq!(crop("don't").as_deref(), Some("dont"));
        assert_eq!(crop("x86-style").as_deref(), Some("xstyl"));
        assert_eq!(crop("42nd").as_deref(), Some("nd"));
    }

    #[test]
    fn symbol_only_tokens_yield_nothing() {
        assert_eq!(crop("1234"), None);
        assert_eq!(crop("---"), None);
        assert_eq!(crop(""), None);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(crop("железный").as_deref(), Some("желез"));
    }

    #[test]
    fn ascii_alphabet_drops_non_ascii_letters() {
        assert_eq!(crop_token("жcatж", Alphabet::Ascii, 5).as_deref(), Some("cat"));
        assert_eq!(crop_token("железный", Alphabet::Ascii, 5), None);
    }

    #[test]
    fn scan_stops_at_the_length_bound() {
        // Characters after the fifth letter are never examined.
        assert_eq!(crop("abcdefghij").as_deref(), Some("abcde"));
        assert_eq!(crop("ab-cd-ef-gh").as_deref(), Some("abcde"));
    }
}
