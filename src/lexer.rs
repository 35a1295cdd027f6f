use thiserror::Error;

use crate::numeric::{parse_digits, parse_fraction};
use crate::timezone::{Zone, parse_zone};
use crate::types::Fraction;

/// Structural or range violation found while reading a literal.
///
/// Internal to the crate's grammars: the datatype boundary turns it into an
/// [`InvalidValueError`](crate::error::InvalidValueError).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} (at offset {offset})")]
pub struct LexicalError {
    pub message: String,
    pub offset: usize,
}

impl LexicalError {
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

/// Byte cursor over an ASCII lexical form.
pub struct Scanner<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            bytes: source.as_bytes(),
            offset: 0,
        }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.peek();
        if byte.is_some() {
            self.offset += 1;
        }
        byte
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    pub fn error(&self, message: impl Into<String>) -> LexicalError {
        LexicalError::new(message, self.offset)
    }

    /// Consumes `byte` if it is next.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, byte: u8, message: &str) -> Result<(), LexicalError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    pub fn expect_str(&mut self, prefix: &str, message: &str) -> Result<(), LexicalError> {
        for &byte in prefix.as_bytes() {
            self.expect(byte, message)?;
        }
        Ok(())
    }

    /// Reads exactly `width` digits.
    pub fn fixed_digits(&mut self, width: usize, message: &str) -> Result<i64, LexicalError> {
        let start = self.offset;
        let end = start + width;
        if end > self.bytes.len() || !self.bytes[start..end].iter().all(u8::is_ascii_digit) {
            return Err(self.error(message));
        }
        self.offset = end;
        parse_digits(self.bytes, start, end)
    }

    /// Consumes a maximal run of digits and returns its bounds.
    pub fn digit_run(&mut self) -> (usize, usize) {
        let start = self.offset;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.offset += 1;
        }
        (start, self.offset)
    }

    /// Reads `.d+` if present.
    pub fn optional_fraction(&mut self) -> Result<Fraction, LexicalError> {
        if !self.eat(b'.') {
            return Ok(Fraction::ZERO);
        }
        let (start, end) = self.digit_run();
        if start == end {
            return Err(self.error("'.' must be followed by at least one digit"));
        }
        parse_fraction(self.bytes, start, end)
    }

    /// Reads a timezone suffix running to the end of input, if any text is left.
    pub fn zone_suffix(&mut self) -> Result<Option<Zone>, LexicalError> {
        if self.is_at_end() {
            return Ok(None);
        }
        let zone = parse_zone(self.bytes, self.offset)?;
        self.offset = self.bytes.len();
        Ok(Some(zone))
    }
}
