//! Forward-only text scanner shared by the HTML and CSS parsers.
//!
//! The input is held as a vector of `char`s so that `peek`, `advance` and
//! `starts_with` are O(1) in the offset. Both grammars are ASCII-only in
//! their structural parts (tag names, identifiers, hex digits), so indexing
//! by code point is safe.

use crate::error::{ParseError, ParseResult};

/// A cursor over an immutable text buffer.
///
/// The offset only ever moves forward; parsers built on top of it never
/// need to backtrack.
#[derive(Debug, Clone)]
pub struct Cursor {
    input: Vec<char>,
    pos: usize,
}

impl Cursor {
    /// Create a cursor positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    /// Current offset, in characters from the start of the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// True once every character has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The current character, or `None` at end of input.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    /// Return the current character without consuming it.
    ///
    /// # Errors
    ///
    /// Fails with [`ParseError::UnexpectedEndOfInput`] at end of input.
    pub fn peek(&self) -> ParseResult<char> {
        self.current().ok_or(ParseError::UnexpectedEndOfInput { position: self.pos })
    }

    /// Consume and return the current character.
    ///
    /// # Errors
    ///
    /// Fails with [`ParseError::UnexpectedEndOfInput`] at end of input.
    pub fn advance(&mut self) -> ParseResult<char> {
        let c = self.peek()?;
        self.pos += 1;
        Ok(c)
    }

    /// Consume the current character, which must be `expected`.
    ///
    /// # Errors
    ///
    /// Fails with [`ParseError::UnexpectedCharacter`] if a different
    /// character is found, or [`ParseError::UnexpectedEndOfInput`] at end of
    /// input. The offset is left untouched on failure.
    pub fn expect(&mut self, expected: char) -> ParseResult<()> {
        let found = self.peek()?;
        if found != expected {
            return Err(ParseError::UnexpectedCharacter {
                expected: format!("'{expected}'"),
                found,
                position: self.pos,
            });
        }
        self.pos += 1;
        Ok(())
    }

    /// Consume the maximal run of characters satisfying `test`.
    ///
    /// Always succeeds; the returned string may be empty.
    pub fn consume_while(&mut self, test: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.current().is_some_and(&test) {
            self.pos += 1;
        }
        self.input[start..self.pos].iter().collect()
    }

    /// Consume up to `count` characters, stopping early at end of input.
    pub fn advance_by(&mut self, count: usize) -> String {
        let end = (self.pos + count).min(self.input.len());
        let taken = self.input[self.pos..end].iter().collect();
        self.pos = end;
        taken
    }

    /// Skip any run of whitespace.
    pub fn skip_whitespace(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Check whether the remaining input begins with `literal`.
    #[must_use]
    pub fn starts_with(&self, literal: &str) -> bool {
        let mut offset = self.pos;
        for expected in literal.chars() {
            if self.input.get(offset) != Some(&expected) {
                return false;
            }
            offset += 1;
        }
        true
    }
}
