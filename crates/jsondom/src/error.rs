//! Error types for lexical and syntactic analysis.
//!
//! Both families are fatal for the current parse attempt: neither phase
//! recovers or returns a partially built tree. Every variant carries enough
//! context for an actionable message, including the byte offset of the
//! offending lexeme where one exists.

use alloc::string::String;
use thiserror::Error;

use crate::token::{ExpectedSet, TokenKind};

/// Errors produced while splitting source text into tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A character run that is neither a literal, a keyword, nor punctuation.
    #[error("unrecognized token `{lexeme}` at byte {offset}")]
    UnrecognizedToken {
        /// The offending character run.
        lexeme: String,
        /// Byte offset of its first character.
        offset: usize,
    },
    /// A number lexeme that does not match the JSON number grammar.
    #[error("malformed number `{lexeme}` at byte {offset}")]
    MalformedNumber {
        /// The offending lexeme.
        lexeme: String,
        /// Byte offset of its first character.
        offset: usize,
    },
    /// End of input inside a string literal.
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedLiteral {
        /// Byte offset of the opening quote.
        offset: usize,
    },
    /// A backslash followed by a character that does not start a JSON escape.
    #[error("invalid escape character {found:?} at byte {offset}")]
    InvalidEscape {
        /// The character following the backslash.
        found: char,
        /// Byte offset of that character.
        offset: usize,
    },
    /// A `\uXXXX` escape that does not denote a Unicode scalar value, such
    /// as a lone or out-of-order surrogate half.
    #[error("invalid unicode escape \\u{code:04X} at byte {offset}")]
    InvalidUnicodeEscape {
        /// The offending code point or code unit.
        code: u32,
        /// Byte offset of the escape introducer.
        offset: usize,
    },
    /// An unescaped control character (below U+0020) inside a string.
    #[error("unescaped control character {found:?} in string at byte {offset}")]
    ControlCharacterInString {
        /// The control character.
        found: char,
        /// Byte offset of that character.
        offset: usize,
    },
}

/// Errors produced while assembling tokens into a value tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A token outside the set the grammar allows at this point.
    #[error("unexpected {found} at byte {offset}, expected {expected}")]
    UnexpectedToken {
        /// Kind of the offending token.
        found: TokenKind,
        /// The kinds that would have been accepted instead.
        expected: ExpectedSet,
        /// Byte offset of the offending token.
        offset: usize,
    },
    /// A closing bracket that does not match the innermost open container.
    #[error("mismatched {found} at byte {offset}: does not close the innermost open container")]
    MismatchedBracket {
        /// Kind of the offending closer.
        found: TokenKind,
        /// Byte offset of the offending token.
        offset: usize,
    },
    /// An object key that is the empty string.
    #[error("empty object key at byte {offset}")]
    EmptyKey {
        /// Byte offset of the key token.
        offset: usize,
    },
    /// End of input before any document was found.
    #[error("empty input: no JSON document found")]
    EmptyInput,
    /// End of input while containers were still open.
    #[error("unterminated container at end of input")]
    UnterminatedContainer,
    /// A repeated object key, reported only when duplicate rejection is
    /// enabled via [`ParseOptions`](crate::ParseOptions).
    #[error("duplicate object key `{key}` at byte {offset}")]
    DuplicateKey {
        /// The repeated key.
        key: String,
        /// Byte offset of the second occurrence.
        offset: usize,
    },
}

/// Any failure from the combined text-to-value pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The tokenizer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token sequence.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
