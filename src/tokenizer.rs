/// Unicode whitespace plus the information separators U+001C..=U+001F.
#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Whitespace tokenizer with optional Unicode case folding.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tokenizer {
    fold_case: bool,
}

impl Tokenizer {
    pub const fn new() -> Self {
        Self { fold_case: false }
    }

    /// Lowercases every token before it is returned.
    pub fn fold_case(mut self, yes: bool) -> Self {
        self.fold_case = yes;
        self
    }

    /// Splits `content` into tokens.
    ///
    /// Lines are trimmed and blank lines skipped; the remaining lines are split
    /// on runs of whitespace. Token order follows the input.
    ///
    /// ```
    /// use wordgrams::Tokenizer;
    ///
    /// let tokens = Tokenizer::new().fold_case(true).tokenize("The cat\n\n  the dog ");
    /// assert_eq!(tokens, ["the", "cat", "the", "dog"]);
    /// ```
    pub fn tokenize(&self, content: &str) -> Vec<String> {
        content
            .lines()
            .map(|line| line.trim_matches(is_separator))
            .filter(|line| !line.is_empty())
            .flat_map(|line| line.split(is_separator).filter(|token| !token.is_empty()))
            .map(|token| {
                if self.fold_case {
                    token.to_lowercase()
                } else {
                    token.to_owned()
                }
            })
            .collect()
    }
}

/// Splits `content` into case-preserving whitespace tokens.
pub fn tokenize(content: &str) -> Vec<String> {
    Tokenizer::new().tokenize(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_preserves_order_across_lines() {
        let tokens = tokenize("the cat sat\nthe cat ran\n");
        assert_eq!(tokens, ["the", "cat", "sat", "the", "cat", "ran"]);
    }

    #[test]
    fn test_runs_of_whitespace() {
        let tokens = tokenize("  a \t\tb   c\r\n\u{3000}d\u{a0}e ");
        assert_eq!(tokens, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_information_separators_split() {
        assert_eq!(tokenize("a\u{1c}b\u{1f}c"), ["a", "b", "c"]);
        assert_eq!(tokenize("\u{1d}\n\u{1e}x\u{1e}\u{1e}y\u{1f}"), ["x", "y"]);
    }

    #[test]
    fn test_case_is_preserved_by_default() {
        assert_eq!(tokenize("The the"), ["The", "the"]);
    }

    #[test]
    fn test_fold_case_is_unicode_aware() {
        let tokens = Tokenizer::new().fold_case(true).tokenize("ÆBLE Øl ÉTÉ");
        assert_eq!(tokens, ["æble", "øl", "été"]);
    }
}
