//! Syntactic analysis: a stack of open-container frames driven by an
//! expected-token-kind set.
//!
//! Each open `{` or `[` pushes a [`Frame`] carrying its own container kind
//! and, for objects, its own pending-key slot. Tracking both per frame is
//! what makes arrays of arrays and arbitrarily mixed nesting work; nothing
//! about the current context lives in a global flag. After every consumed
//! token the set of legal next kinds is recomputed, so every grammar
//! violation is caught before any action is taken on the token.

use alloc::{string::String, vec::Vec};

use crate::{
    error::{Error, ParseError},
    token::{ExpectedSet, Token, TokenKind, TokenValue},
    tokenizer::tokenize,
    value::{Map, Value},
};

/// Behavior knobs for the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject a repeated object key with [`ParseError::DuplicateKey`]
    /// instead of letting the later value overwrite the earlier one.
    pub reject_duplicate_keys: bool,
}

/// One open container under construction, together with the state that is
/// private to it.
#[derive(Debug)]
enum Frame {
    Array(Vec<Value>),
    Object {
        map: Map,
        /// Key consumed but whose value has not arrived yet.
        pending_key: Option<String>,
    },
}

struct Parser {
    stack: Vec<Frame>,
    root: Option<Value>,
    expected: ExpectedSet,
    options: ParseOptions,
}

fn expect_value() -> ExpectedSet {
    ExpectedSet::of(&[
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Boolean,
        TokenKind::Null,
        TokenKind::BraceOpen,
        TokenKind::BracketOpen,
    ])
}

/// Both closers are admitted after a value; a closer that does not match
/// the innermost frame is reported as a mismatch rather than as unexpected.
fn expect_after_value() -> ExpectedSet {
    ExpectedSet::of(&[
        TokenKind::Comma,
        TokenKind::BraceClose,
        TokenKind::BracketClose,
    ])
}

impl Parser {
    fn new(options: ParseOptions) -> Self {
        Self {
            stack: Vec::new(),
            root: None,
            expected: ExpectedSet::of(&[TokenKind::BraceOpen, TokenKind::BracketOpen]),
            options,
        }
    }

    fn advance(&mut self, token: Token) -> Result<(), ParseError> {
        let kind = token.kind();
        if !self.expected.contains(kind) {
            return Err(ParseError::UnexpectedToken {
                found: kind,
                expected: self.expected,
                offset: token.offset,
            });
        }
        match token.value {
            TokenValue::BraceOpen => {
                self.stack.push(Frame::Object {
                    map: Map::new(),
                    pending_key: None,
                });
                self.expected = ExpectedSet::of(&[TokenKind::BraceClose, TokenKind::String]);
            }
            TokenValue::BracketOpen => {
                self.stack.push(Frame::Array(Vec::new()));
                self.expected = expect_value().with(TokenKind::BracketClose);
            }
            TokenValue::BraceClose | TokenValue::BracketClose => {
                self.close(kind, token.offset)?;
            }
            TokenValue::Colon => {
                self.expected = expect_value();
            }
            TokenValue::Comma => {
                self.expected = match self.stack.last() {
                    Some(Frame::Object { .. }) => ExpectedSet::of(&[TokenKind::String]),
                    _ => expect_value(),
                };
            }
            TokenValue::String(s) => match self.stack.last_mut() {
                Some(Frame::Object { map, pending_key }) if pending_key.is_none() => {
                    if s.is_empty() {
                        return Err(ParseError::EmptyKey {
                            offset: token.offset,
                        });
                    }
                    if self.options.reject_duplicate_keys && map.contains_key(&s) {
                        return Err(ParseError::DuplicateKey {
                            key: s,
                            offset: token.offset,
                        });
                    }
                    *pending_key = Some(s);
                    self.expected = ExpectedSet::of(&[TokenKind::Colon]);
                }
                _ => self.attach(Value::String(s)),
            },
            TokenValue::Number(n) => self.attach(Value::Number(n)),
            TokenValue::Boolean(b) => self.attach(Value::Boolean(b)),
            TokenValue::Null => self.attach(Value::Null),
        }
        Ok(())
    }

    /// Attaches a finished value to the innermost open container: appended
    /// for arrays, stored under the pending key for objects. Child
    /// containers arrive here the same way literals do, via [`close`].
    ///
    /// [`close`]: Parser::close
    fn attach(&mut self, value: Value) {
        match self.stack.last_mut() {
            Some(Frame::Array(items)) => items.push(value),
            Some(Frame::Object { map, pending_key }) => {
                let Some(key) = pending_key.take() else {
                    unreachable!("object values are gated behind a pending key");
                };
                map.insert(key, value);
            }
            None => unreachable!("value tokens are gated by the expected set"),
        }
        self.expected = expect_after_value();
    }

    /// Pops the innermost frame for a closer, verifying that the closer's
    /// kind matches the frame's container kind.
    fn close(&mut self, found: TokenKind, offset: usize) -> Result<(), ParseError> {
        let Some(frame) = self.stack.pop() else {
            unreachable!("closers are gated by the expected set");
        };
        let value = match (found, frame) {
            (TokenKind::BraceClose, Frame::Object { map, .. }) => Value::Object(map),
            (TokenKind::BracketClose, Frame::Array(items)) => Value::Array(items),
            _ => return Err(ParseError::MismatchedBracket { found, offset }),
        };
        if self.stack.is_empty() {
            self.root = Some(value);
            self.expected = ExpectedSet::EMPTY;
        } else {
            self.attach(value);
        }
        Ok(())
    }

    fn finish(self) -> Result<Value, ParseError> {
        if !self.stack.is_empty() {
            return Err(ParseError::UnterminatedContainer);
        }
        self.root.ok_or(ParseError::EmptyInput)
    }
}

/// Consumes a token sequence and builds the document tree, with default
/// [`ParseOptions`].
///
/// # Errors
///
/// Returns a [`ParseError`] on the first grammar violation; no partial tree
/// is ever produced.
///
/// # Examples
///
/// ```
/// use jsondom::{parse, tokenize};
///
/// let tokens = tokenize("[null, true]").unwrap();
/// let tree = parse(tokens).unwrap();
/// assert!(tree.is_array());
/// ```
pub fn parse<I>(tokens: I) -> Result<Value, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    parse_with_options(tokens, ParseOptions::default())
}

/// [`parse`] with explicit [`ParseOptions`].
///
/// # Errors
///
/// Returns a [`ParseError`] on the first grammar violation.
pub fn parse_with_options<I>(tokens: I, options: ParseOptions) -> Result<Value, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    let mut parser = Parser::new(options);
    for token in tokens {
        parser.advance(token)?;
    }
    parser.finish()
}

/// Tokenizes and parses a complete JSON document in one call.
///
/// # Errors
///
/// Returns [`Error::Lex`] if tokenization fails and [`Error::Parse`] if the
/// token sequence violates the grammar.
///
/// # Examples
///
/// ```
/// use jsondom::parse_str;
///
/// let tree = parse_str(r#"{"a": 1, "b": [true, null]}"#).unwrap();
/// assert!(tree.is_object());
/// ```
pub fn parse_str(text: &str) -> Result<Value, Error> {
    let tokens = tokenize(text)?;
    Ok(parse(tokens)?)
}

/// [`parse_str`] with explicit [`ParseOptions`].
///
/// # Errors
///
/// As [`parse_str`].
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<Value, Error> {
    let tokens = tokenize(text)?;
    Ok(parse_with_options(tokens, options)?)
}
