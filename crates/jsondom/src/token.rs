//! Lexical tokens and token-kind sets.
//!
//! [`Token`]s are produced by the tokenizer and consumed exactly once by the
//! parser. The parser reasons about upcoming input in terms of [`TokenKind`]
//! and [`ExpectedSet`], which also feed error messages.

use alloc::string::String;
use core::fmt;

/// The decoded payload of a lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A string literal with all escape sequences resolved.
    String(String),
    /// A number literal, decoded to its `f64` value.
    Number(f64),
    /// The bare keyword `true` or `false`.
    Boolean(bool),
    /// The bare keyword `null`.
    Null,
}

/// One token plus the byte offset of its first source character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The decoded payload.
    pub value: TokenValue,
    /// Byte offset of the start of the lexeme in the source text.
    pub offset: usize,
}

impl Token {
    pub(crate) fn new(value: TokenValue, offset: usize) -> Self {
        Self { value, offset }
    }

    /// The kind of this token, with payloads stripped.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self.value {
            TokenValue::BraceOpen => TokenKind::BraceOpen,
            TokenValue::BraceClose => TokenKind::BraceClose,
            TokenValue::BracketOpen => TokenKind::BracketOpen,
            TokenValue::BracketClose => TokenKind::BracketClose,
            TokenValue::Colon => TokenKind::Colon,
            TokenValue::Comma => TokenKind::Comma,
            TokenValue::String(_) => TokenKind::String,
            TokenValue::Number(_) => TokenKind::Number,
            TokenValue::Boolean(_) => TokenKind::Boolean,
            TokenValue::Null => TokenKind::Null,
        }
    }
}

/// A token classification without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// Any string literal.
    String,
    /// Any number literal.
    Number,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
}

impl TokenKind {
    const ALL: [Self; 10] = [
        Self::BraceOpen,
        Self::BraceClose,
        Self::BracketOpen,
        Self::BracketClose,
        Self::Colon,
        Self::Comma,
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Null,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::BraceOpen => "'{'",
            Self::BraceClose => "'}'",
            Self::BracketOpen => "'['",
            Self::BracketClose => "']'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::String => "a string",
            Self::Number => "a number",
            Self::Boolean => "a boolean",
            Self::Null => "'null'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of token kinds the parser is prepared to accept next.
///
/// Recomputed after every consumed token; an empty set means only end of
/// input is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpectedSet(u16);

impl ExpectedSet {
    /// The set accepting no token at all, i.e. end of input.
    pub const EMPTY: Self = Self(0);

    /// Builds a set from the given kinds.
    #[must_use]
    pub fn of(kinds: &[TokenKind]) -> Self {
        let mut set = Self::EMPTY;
        for &kind in kinds {
            set = set.with(kind);
        }
        set
    }

    pub(crate) fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | 1 << kind as u16)
    }

    /// Returns `true` if `kind` is a member of the set.
    #[must_use]
    pub fn contains(self, kind: TokenKind) -> bool {
        self.0 & 1 << kind as u16 != 0
    }

    /// Returns `true` if no kind is acceptable.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ExpectedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("end of input");
        }
        let mut first = true;
        for kind in TokenKind::ALL {
            if self.contains(kind) {
                if !first {
                    f.write_str(" or ")?;
                }
                first = false;
                f.write_str(kind.name())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ExpectedSet, TokenKind};

    #[test]
    fn membership() {
        let set = ExpectedSet::of(&[TokenKind::Comma, TokenKind::BraceClose]);
        assert!(set.contains(TokenKind::Comma));
        assert!(set.contains(TokenKind::BraceClose));
        assert!(!set.contains(TokenKind::String));
        assert!(!set.is_empty());
        assert!(ExpectedSet::EMPTY.is_empty());
    }

    #[test]
    fn display_lists_members() {
        let set = ExpectedSet::of(&[TokenKind::String, TokenKind::BraceClose]);
        assert_eq!(set.to_string(), "'}' or a string");
        assert_eq!(ExpectedSet::EMPTY.to_string(), "end of input");
    }
}
