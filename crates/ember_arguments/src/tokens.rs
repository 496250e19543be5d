//! The argument list: an ordered token sequence with a consumed-prefix cursor.

use std::fmt;

/// The ordered token sequence a command was invoked with.
///
/// Tokens are held in supplied order and duplicates are allowed. Front
/// consumption (the pop family) advances a cursor rather than shifting the
/// buffer, so "what has been consumed so far" stays observable through
/// [`consumed`](ArgumentList::consumed); only the mid-sequence search pop
/// actually splices tokens out. All index access is checked - no operation
/// on this type panics on any input.
///
/// Each instance is private to one command invocation; it is an owned value
/// and is not meant to be shared across concurrent operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentList {
    pub(crate) tokens: Vec<String>,
    pub(crate) cursor: usize,
}

impl ArgumentList {
    /// Creates an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits raw argument text into tokens on whitespace.
    ///
    /// A backslash-escaped space (`foo\ bar`) is kept inside a single token
    /// as a literal space. This is the inverse of the [`Display`] escaping;
    /// any other backslash passes through untouched, so the pair is
    /// lossless only for the space escape.
    #[must_use]
    pub fn tokenize(input: &str) -> Self {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\\' if chars.peek() == Some(&' ') => {
                    chars.next();
                    current.push(' ');
                }
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                c => current.push(c),
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }

        Self { tokens, cursor: 0 }
    }

    /// The number of remaining (unconsumed) tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    /// Whether no unconsumed tokens remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The token at the given position among the remaining tokens, if any.
    #[must_use]
    pub fn get(&self, at: usize) -> Option<&str> {
        // Checked: cursor + at can overflow for positions near usize::MAX
        self.cursor
            .checked_add(at)
            .and_then(|index| self.tokens.get(index))
            .map(String::as_str)
    }

    /// Appends a token to the end of the list.
    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// The number of tokens consumed from the front so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Consumes `count` tokens from the front by advancing the cursor.
    pub(crate) fn advance(&mut self, count: usize) {
        debug_assert!(count <= self.len());
        self.cursor += count;
    }

    /// Splices the literal/value pair at remaining position `at` out of the
    /// buffer, preserving the order of everything around it.
    pub(crate) fn remove_pair(&mut self, at: usize) {
        debug_assert!(at + 2 <= self.len());
        self.tokens.drain(self.cursor + at..self.cursor + at + 2);
    }
}

impl fmt::Display for ArgumentList {
    /// Re-joins the remaining tokens with single spaces, escaping any
    /// literal space inside a token with a backslash.
    ///
    /// This is display-oriented; round-tripping back through
    /// [`tokenize`](ArgumentList::tokenize) is guaranteed only for the
    /// space escape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens[self.cursor..].iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token.replace(' ', "\\ "))?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for ArgumentList {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens, cursor: 0 }
    }
}

impl FromIterator<String> for ArgumentList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> FromIterator<&'a str> for ArgumentList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}
