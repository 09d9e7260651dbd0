//! Accumulator for the four hex digits of a `\uXXXX` escape.
//!
//! The buffer is fed one character at a time and yields a UTF-16 code unit
//! once exactly four hex digits have arrived, resetting itself for the next
//! escape. Surrogate-pair combination is the tokenizer's job; this type only
//! decodes digits.

#[derive(Debug)]
pub(crate) struct UnicodeEscapeBuffer {
    code: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self { code: 0, len: 0 }
    }

    /// Feeds one character.
    ///
    /// Returns `Ok(Some(unit))` on the fourth digit, `Ok(None)` before that,
    /// and `Err(c)` if `c` is not an ASCII hex digit.
    pub(crate) fn feed(&mut self, c: char) -> Result<Option<u16>, char> {
        let Some(digit) = c.to_digit(16) else {
            return Err(c);
        };
        #[allow(clippy::cast_possible_truncation)]
        {
            self.code = self.code << 4 | digit as u16;
        }
        self.len += 1;
        if self.len == 4 {
            let code = self.code;
            self.code = 0;
            self.len = 0;
            Ok(Some(code))
        } else {
            Ok(None)
        }
    }
}
