//! Lexical analysis: a single left-to-right pass over the source text.
//!
//! The scanner has two exclusive modes, string and number; outside both,
//! every character dispatches immediately with at most one character of
//! lookahead. String escapes are decoded as they are consumed, so an escaped
//! backslash followed by a real closing quote (`\\"`) terminates correctly
//! without any separate parity bookkeeping. Number lexemes are taken as the
//! maximal run over the JSON number alphabet and then validated against the
//! RFC 8259 grammar, which rejects forms like `018` that a bare `f64` parse
//! would accept.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{iter::Peekable, str::CharIndices};

use crate::{
    error::LexError,
    escape_buffer::UnicodeEscapeBuffer,
    token::{Token, TokenValue},
};

/// Splits `text` into an ordered token sequence.
///
/// A single linear pass with no backtracking. Whitespace between tokens is
/// skipped; leading and trailing whitespace is tolerated.
///
/// # Errors
///
/// Returns a [`LexError`] on the first malformed lexeme; no tokens are
/// returned alongside an error.
///
/// # Examples
///
/// ```
/// use jsondom::{tokenize, TokenValue};
///
/// let tokens = tokenize(r#"[1, "two"]"#).unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[1].value, TokenValue::Number(1.0));
/// assert_eq!(tokens[3].value, TokenValue::String("two".into()));
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(text).run()
}

struct Tokenizer<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(&(offset, c)) = self.chars.peek() {
            match c {
                ' ' | '\t' | '\n' | '\r' => {
                    self.chars.next();
                }
                '{' | '}' | '[' | ']' | ':' | ',' => {
                    self.chars.next();
                    let value = match c {
                        '{' => TokenValue::BraceOpen,
                        '}' => TokenValue::BraceClose,
                        '[' => TokenValue::BracketOpen,
                        ']' => TokenValue::BracketClose,
                        ':' => TokenValue::Colon,
                        _ => TokenValue::Comma,
                    };
                    tokens.push(Token::new(value, offset));
                }
                '"' => tokens.push(self.read_string(offset)?),
                '-' | '0'..='9' => tokens.push(self.read_number(offset)?),
                c if c.is_ascii_alphabetic() => tokens.push(self.read_keyword(offset)?),
                other => {
                    return Err(LexError::UnrecognizedToken {
                        lexeme: other.to_string(),
                        offset,
                    });
                }
            }
        }
        Ok(tokens)
    }

    /// Consumes a string literal, decoding escapes into the token payload.
    /// `start` is the offset of the opening quote, which is still pending.
    fn read_string(&mut self, start: usize) -> Result<Token, LexError> {
        self.chars.next();
        let mut decoded = String::new();
        loop {
            match self.chars.next() {
                None => return Err(LexError::UnterminatedLiteral { offset: start }),
                Some((_, '"')) => return Ok(Token::new(TokenValue::String(decoded), start)),
                Some((escape_offset, '\\')) => match self.chars.next() {
                    None => return Err(LexError::UnterminatedLiteral { offset: start }),
                    Some((_, '"')) => decoded.push('"'),
                    Some((_, '\\')) => decoded.push('\\'),
                    Some((_, '/')) => decoded.push('/'),
                    Some((_, 'b')) => decoded.push('\u{0008}'),
                    Some((_, 'f')) => decoded.push('\u{000C}'),
                    Some((_, 'n')) => decoded.push('\n'),
                    Some((_, 'r')) => decoded.push('\r'),
                    Some((_, 't')) => decoded.push('\t'),
                    Some((_, 'u')) => decoded.push(self.read_unicode_escape(start, escape_offset)?),
                    Some((offset, found)) => return Err(LexError::InvalidEscape { found, offset }),
                },
                Some((offset, c)) if (c as u32) < 0x20 => {
                    return Err(LexError::ControlCharacterInString { found: c, offset });
                }
                Some((_, c)) => decoded.push(c),
            }
        }
    }

    /// Decodes the `XXXX` of a `\uXXXX` escape whose `\u` has been consumed,
    /// combining surrogate pairs into a single scalar value.
    fn read_unicode_escape(
        &mut self,
        string_start: usize,
        escape_offset: usize,
    ) -> Result<char, LexError> {
        let mut buf = UnicodeEscapeBuffer::new();
        let hi = self.read_code_unit(&mut buf, string_start)?;
        let code = match hi {
            0xD800..=0xDBFF => {
                // A high surrogate must be followed immediately by a `\uXXXX`
                // low surrogate.
                if !matches!(self.chars.next(), Some((_, '\\')))
                    || !matches!(self.chars.next(), Some((_, 'u')))
                {
                    return Err(LexError::InvalidUnicodeEscape {
                        code: u32::from(hi),
                        offset: escape_offset,
                    });
                }
                let lo = self.read_code_unit(&mut buf, string_start)?;
                if !(0xDC00..=0xDFFF).contains(&lo) {
                    return Err(LexError::InvalidUnicodeEscape {
                        code: u32::from(lo),
                        offset: escape_offset,
                    });
                }
                0x10000 + ((u32::from(hi) - 0xD800) << 10) + (u32::from(lo) - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(LexError::InvalidUnicodeEscape {
                    code: u32::from(hi),
                    offset: escape_offset,
                });
            }
            _ => u32::from(hi),
        };
        char::from_u32(code).ok_or(LexError::InvalidUnicodeEscape {
            code,
            offset: escape_offset,
        })
    }

    fn read_code_unit(
        &mut self,
        buf: &mut UnicodeEscapeBuffer,
        string_start: usize,
    ) -> Result<u16, LexError> {
        loop {
            let Some((offset, c)) = self.chars.next() else {
                return Err(LexError::UnterminatedLiteral {
                    offset: string_start,
                });
            };
            match buf.feed(c) {
                Ok(Some(unit)) => return Ok(unit),
                Ok(None) => {}
                Err(found) => return Err(LexError::InvalidEscape { found, offset }),
            }
        }
    }

    /// Consumes the maximal run over the number alphabet and validates it.
    /// The terminating character is left for the main loop to re-dispatch.
    fn read_number(&mut self, start: usize) -> Result<Token, LexError> {
        let mut end = start;
        while let Some(&(offset, c)) = self.chars.peek() {
            if matches!(c, '0'..='9' | '.' | 'e' | 'E' | '+' | '-') {
                self.chars.next();
                end = offset + c.len_utf8();
            } else {
                break;
            }
        }
        let lexeme = &self.src[start..end];
        if !is_valid_number(lexeme) {
            return Err(LexError::MalformedNumber {
                lexeme: lexeme.into(),
                offset: start,
            });
        }
        match lexeme.parse::<f64>() {
            Ok(value) => Ok(Token::new(TokenValue::Number(value), start)),
            Err(_) => Err(LexError::MalformedNumber {
                lexeme: lexeme.into(),
                offset: start,
            }),
        }
    }

    /// Consumes the maximal alphabetic run and matches it against the bare
    /// keywords. Quoted keywords never reach this path; they are plain
    /// string literals.
    fn read_keyword(&mut self, start: usize) -> Result<Token, LexError> {
        let mut end = start;
        while let Some(&(offset, c)) = self.chars.peek() {
            if c.is_ascii_alphabetic() {
                self.chars.next();
                end = offset + c.len_utf8();
            } else {
                break;
            }
        }
        let lexeme = &self.src[start..end];
        let value = match lexeme {
            "true" => TokenValue::Boolean(true),
            "false" => TokenValue::Boolean(false),
            "null" => TokenValue::Null,
            _ => {
                return Err(LexError::UnrecognizedToken {
                    lexeme: lexeme.into(),
                    offset: start,
                });
            }
        };
        Ok(Token::new(value, start))
    }
}

/// Checks a lexeme against the RFC 8259 number grammar: optional `-`, an
/// integer part with no leading zero unless it is exactly `0`, an optional
/// fraction with at least one digit, an optional exponent with at least one
/// digit.
fn is_valid_number(lexeme: &str) -> bool {
    let mut s = lexeme.as_bytes();
    if let [b'-', rest @ ..] = s {
        s = rest;
    }
    let int_digits = leading_digits(s);
    if int_digits == 0 || (int_digits > 1 && s[0] == b'0') {
        return false;
    }
    s = &s[int_digits..];
    if let [b'.', rest @ ..] = s {
        let frac_digits = leading_digits(rest);
        if frac_digits == 0 {
            return false;
        }
        s = &rest[frac_digits..];
    }
    if let [b'e' | b'E', rest @ ..] = s {
        let rest = if let [b'+' | b'-', signed @ ..] = rest {
            signed
        } else {
            rest
        };
        let exp_digits = leading_digits(rest);
        if exp_digits == 0 {
            return false;
        }
        s = &rest[exp_digits..];
    }
    s.is_empty()
}

fn leading_digits(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::is_valid_number;

    #[test]
    fn number_grammar() {
        for ok in [
            "0", "-0", "9", "10", "105", "0.5", "-0.5", "1e9", "1E-9", "12.34e+5", "0e0",
        ] {
            assert!(is_valid_number(ok), "{ok}");
        }
        for bad in [
            "", "-", "018", "01", "0.", ".5", "1e", "1e+", "+1", "1.2.3", "--1", "1ee2", "1.e5",
            "-.5", "1e5e2", "1-2",
        ] {
            assert!(!is_valid_number(bad), "{bad}");
        }
    }
}
