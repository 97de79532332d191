//! Forward-only character reader used by the address and domain parsers.

use crate::error::{ErrorKind, ParseError, Result};

/// Bounded cursor over the characters of an input string.
///
/// Positions are character offsets into the whole input, so errors raised by
/// a cursor opened on a window still point into the original string.
pub struct Cursor<'a> {
    source: &'a str,
    chars: &'a [char],
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over the whole input.
    ///
    /// `chars` must be the characters of `source`.
    #[must_use]
    pub const fn new(source: &'a str, chars: &'a [char]) -> Self {
        Self::with_window(source, chars, 0, chars.len())
    }

    /// Creates a cursor over `[start, end)`.
    #[must_use]
    pub const fn with_window(source: &'a str, chars: &'a [char], start: usize, end: usize) -> Self {
        Self {
            source,
            chars,
            pos: start,
            end,
        }
    }

    /// Returns the current position in the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns true if at end of input.
    #[must_use]
    pub const fn end_reached(&self) -> bool {
        self.pos >= self.end
    }

    /// Returns the current character without consuming it.
    pub fn peek(&self) -> Result<char> {
        if self.end_reached() {
            return Err(self.error(ErrorKind::UnexpectedEndOfInput, "Unexpected end of input"));
        }
        Ok(self.chars[self.pos])
    }

    /// Returns true if the current character satisfies `predicate`.
    ///
    /// Always false at end of input.
    pub fn peek_matches(&self, predicate: impl Fn(char) -> bool) -> bool {
        !self.end_reached() && predicate(self.chars[self.pos])
    }

    /// Consumes and returns the current character.
    pub fn read(&mut self) -> Result<char> {
        let c = self.peek()?;
        self.pos += 1;
        Ok(c)
    }

    /// Consumes `expected`, failing if the current character is anything else.
    pub fn expect(&mut self, expected: char) -> Result<()> {
        if self.peek()? == expected {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(
                ErrorKind::UnexpectedCharacter,
                format!("Expected '{expected}' ({})", u32::from(expected)),
            ))
        }
    }

    /// Consumes one character satisfying `predicate`.
    ///
    /// `description` names the expected character class in the error message.
    pub fn expect_matching(
        &mut self,
        description: &str,
        predicate: impl Fn(char) -> bool,
    ) -> Result<char> {
        let c = self.peek()?;
        if predicate(c) {
            self.pos += 1;
            Ok(c)
        } else {
            Err(self.error(
                ErrorKind::UnexpectedCharacter,
                format!("Expected {description}"),
            ))
        }
    }

    /// Advances while `predicate` holds. Zero matches is not an error.
    pub fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_matches(&predicate) {
            self.pos += 1;
        }
    }

    /// Runs `block` and returns the characters it consumed.
    pub fn capture<F>(&mut self, block: F) -> Result<String>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let start = self.pos;
        block(self)?;
        Ok(self.chars[start..self.pos].iter().collect())
    }

    /// Runs `block` on a child cursor opened at the current position.
    ///
    /// The parent position is moved to wherever the child stopped, whether
    /// `block` succeeded or not.
    pub fn delegate<T, F>(&mut self, block: F) -> Result<T>
    where
        F: FnOnce(&mut Cursor<'a>) -> Result<T>,
    {
        let mut child = Cursor::with_window(self.source, self.chars, self.pos, self.end);
        let result = block(&mut child);
        self.pos = child.pos;
        result
    }

    /// Creates an error at the current position.
    pub fn error(&self, kind: ErrorKind, message: impl Into<String>) -> ParseError {
        self.error_at(kind, self.pos, message)
    }

    /// Creates an error at `position`.
    pub fn error_at(&self, kind: ErrorKind, position: usize, message: impl Into<String>) -> ParseError {
        ParseError::new(kind, self.source, position, message)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_peek_and_read() {
        let input = "ab";
        let chars = chars(input);
        let mut cursor = Cursor::new(input, &chars);

        assert_eq!(cursor.peek().unwrap(), 'a');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read().unwrap(), 'a');
        assert_eq!(cursor.read().unwrap(), 'b');
        assert!(cursor.end_reached());

        let error = cursor.read().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(error.position(), 2);
        assert_eq!(error.input(), "ab");
    }

    #[test]
    fn test_expect() {
        let input = "@x";
        let chars = chars(input);
        let mut cursor = Cursor::new(input, &chars);

        cursor.expect('@').unwrap();
        assert_eq!(cursor.position(), 1);

        let error = cursor.expect('@').unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnexpectedCharacter);
        assert_eq!(error.message(), "Expected '@' (64)");
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_expect_at_end() {
        let input = "";
        let chars = chars(input);
        let mut cursor = Cursor::new(input, &chars);

        let error = cursor.expect('"').unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_expect_matching() {
        let input = "1a";
        let chars = chars(input);
        let mut cursor = Cursor::new(input, &chars);

        assert_eq!(cursor.expect_matching("digit", |c| c.is_ascii_digit()).unwrap(), '1');

        let error = cursor
            .expect_matching("digit", |c| c.is_ascii_digit())
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnexpectedCharacter);
        assert_eq!(error.message(), "Expected digit");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_skip_while_and_capture() {
        let input = "abc123";
        let chars = chars(input);
        let mut cursor = Cursor::new(input, &chars);

        cursor.skip_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.position(), 0);

        let letters = cursor
            .capture(|c| {
                c.skip_while(|ch| ch.is_ascii_alphabetic());
                Ok(())
            })
            .unwrap();
        assert_eq!(letters, "abc");

        cursor.skip_while(|c| c.is_ascii_digit());
        assert!(cursor.end_reached());
    }

    #[test]
    fn test_window() {
        let input = "abcdef";
        let chars = chars(input);
        let mut cursor = Cursor::with_window(input, &chars, 2, 4);

        assert_eq!(cursor.read().unwrap(), 'c');
        assert_eq!(cursor.read().unwrap(), 'd');
        assert!(cursor.end_reached());
        assert_eq!(cursor.peek().unwrap_err().position(), 4);
    }

    #[test]
    fn test_delegate_resynchronizes_on_success() {
        let input = "ab#cd";
        let chars = chars(input);
        let mut cursor = Cursor::new(input, &chars);

        cursor.read().unwrap();
        let captured = cursor
            .delegate(|child| {
                child.capture(|c| {
                    c.skip_while(|ch| ch != '#');
                    Ok(())
                })
            })
            .unwrap();

        assert_eq!(captured, "b");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_delegate_resynchronizes_on_error() {
        let input = "abc";
        let chars = chars(input);
        let mut cursor = Cursor::new(input, &chars);

        let error = cursor
            .delegate(|child| {
                child.read()?;
                child.read()?;
                child.expect('x')
            })
            .unwrap_err();

        assert_eq!(error.position(), 2);
        assert_eq!(cursor.position(), 2);
    }
}
