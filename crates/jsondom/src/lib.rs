//! Strict two-phase JSON parsing: text to tokens, tokens to a value tree.
//!
//! The [`tokenize`] pass splits raw text into typed [`Token`]s in a single
//! left-to-right scan. The [`parse`] pass consumes those tokens under a
//! stack-based state machine, building a [`Value`] tree and rejecting
//! malformed input with a structured error. [`parse_str`] composes both.
//!
//! Neither pass performs I/O, shares state between calls, or recovers from
//! errors: the result is always a complete owned tree or a single error.
//!
//! # Examples
//!
//! ```
//! use jsondom::{parse_str, Value};
//!
//! let tree = parse_str(r#"{"pi": 3.14, "tags": ["a", "b"]}"#).unwrap();
//! assert_eq!(tree.as_object().unwrap()["pi"].as_f64(), Some(3.14));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod escape_buffer;
mod parser;
mod token;
mod tokenizer;
mod value;

#[cfg(test)]
mod tests;

pub use error::{Error, LexError, ParseError};
pub use parser::{ParseOptions, parse, parse_str, parse_str_with_options, parse_with_options};
pub use token::{ExpectedSet, Token, TokenKind, TokenValue};
pub use tokenizer::tokenize;
pub use value::{Array, Map, Value};

impl core::str::FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}
