// ============================================================
// Layer 4 — Word Tokenizer
// ============================================================
// Turns arbitrary text into lowercase alphabetic words.
//
// Rules (applied in order):
//   1. Lowercase the whole string
//   2. Every character outside a-z is a separator
//   3. Each maximal run of a-z letters is one token
//
// Digits, punctuation, apostrophes and non-ASCII letters are all
// separators, so "Ohm's" becomes ["ohm", "s"] and "2" disappears.
//
// Example:
//   "Sun, Sun!! orbit 2 planets" → ["sun", "sun", "orbit", "planets"]

/// Split text into lowercase ASCII-letter tokens.
/// Any string is valid input; empty input gives an empty Vec.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_drops_digits_and_punctuation() {
        assert_eq!(
            tokenize("Sun, Sun!! orbit 2 planets"),
            vec!["sun", "sun", "orbit", "planets"]
        );
    }

    #[test]
    fn test_apostrophe_splits_word() {
        assert_eq!(tokenize("Ohm's Law"), vec!["ohm", "s", "law"]);
    }

    #[test]
    fn test_digits_inside_word_separate_runs() {
        assert_eq!(tokenize("abc123def"), vec!["abc", "def"]);
    }

    #[test]
    fn test_multiline_and_tabs() {
        assert_eq!(
            tokenize("  The Sun\n\tat the\r\ncenter.  "),
            vec!["the", "sun", "at", "the", "center"]
        );
    }

    #[test]
    fn test_non_ascii_letters_are_separators() {
        // '×' and 'é' are not a-z
        assert_eq!(tokenize("V = I × R"), vec!["v", "i", "r"]);
        assert_eq!(tokenize("café"), vec!["caf"]);
    }

    #[test]
    fn test_only_separators() {
        assert!(tokenize("123 !!! ... \n").is_empty());
    }
}
