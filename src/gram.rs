use std::borrow::Borrow;
use std::fmt;

/// Separator placed between tokens when a gram is rendered.
pub const TOKEN_SEPARATOR: char = ' ';

/// A word n-gram: a borrowed window of consecutive tokens.
///
/// Equality, hashing and ordering are structural over the tokens. Ordering is
/// lexicographic token by token, so a strict prefix sorts before any longer
/// gram it starts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordGram<'a> {
    tokens: &'a [String],
}

impl<'a> WordGram<'a> {
    /// Creates a [`WordGram`] over the given tokens.
    #[inline]
    pub const fn new(tokens: &'a [String]) -> Self {
        Self { tokens }
    }

    /// The tokens of the gram, in order.
    #[inline]
    pub fn tokens(&self) -> &'a [String] {
        self.tokens
    }

    /// The order *n* of the gram.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Lets tables keyed by [`WordGram`] be queried with a plain token slice.
impl Borrow<[String]> for WordGram<'_> {
    fn borrow(&self) -> &[String] {
        self.tokens
    }
}

impl fmt::Display for WordGram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tokens = self.tokens.iter();
        if let Some(first) = tokens.next() {
            f.write_str(first)?;
        }
        for token in tokens {
            write!(f, "{}{}", TOKEN_SEPARATOR, token)?;
        }
        Ok(())
    }
}

impl fmt::Debug for WordGram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordGram")
            .field("tokens", &self.tokens)
            .finish()
    }
}
