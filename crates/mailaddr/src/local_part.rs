//! Local part grammar.
//!
//! ```text
//! Local-part    = Dot-string / Quoted-string
//! Dot-string    = Atom *("." Atom)
//! Quoted-string = DQUOTE *QcontentSMTP DQUOTE
//! QcontentSMTP  = qtextSMTP / quoted-pairSMTP
//! ```

use crate::config::ParserConfig;
use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError, Result};
use crate::syntax::{BACKSLASH, DQUOTE, is_atext, is_qtext, is_quoted_pair_char};

/// Reads a local part and returns its decoded value.
///
/// Quoted strings are returned without the surrounding quotes and with
/// quoted-pairs unescaped.
pub fn read_local_part(cursor: &mut Cursor<'_>, config: ParserConfig) -> Result<String> {
    if cursor.end_reached() || cursor.peek_matches(is_atext) {
        return read_dot_string(cursor);
    }

    if cursor.peek()? == DQUOTE {
        if !config.allow_quoted_local_part {
            return Err(cursor.error(
                ErrorKind::QuotedStringInLocalPart,
                "Quoted string in local part is not allowed by config",
            ));
        }
        return read_quoted_string(cursor);
    }

    Err(cursor.error(
        ErrorKind::InvalidLocalPart,
        "Expected 'Dot-string' or 'Quoted-string'",
    ))
}

fn read_dot_string(cursor: &mut Cursor<'_>) -> Result<String> {
    cursor.capture(|c| {
        read_atom(c)?;
        while c.peek_matches(|ch| ch == '.') {
            c.expect('.')?;
            read_atom(c)?;
        }
        Ok(())
    })
}

fn read_atom(cursor: &mut Cursor<'_>) -> Result<()> {
    let start = cursor.position();
    cursor.skip_while(is_atext);
    if cursor.position() == start {
        return Err(cursor.error(ErrorKind::InvalidDotString, "Expected 'Dot-string'"));
    }
    Ok(())
}

fn read_quoted_string(cursor: &mut Cursor<'_>) -> Result<String> {
    cursor.expect(DQUOTE)?;

    let mut value = String::new();
    loop {
        let c = cursor.peek()?;
        if c == DQUOTE {
            break;
        } else if is_qtext(c) {
            cursor.read()?;
            value.push(c);
        } else if c == BACKSLASH {
            cursor.read()?;
            if cursor.end_reached() {
                return Err(invalid_quoted_string(cursor));
            }
            let escaped = cursor.read()?;
            if !is_quoted_pair_char(escaped) {
                return Err(invalid_quoted_string(cursor));
            }
            value.push(escaped);
        } else {
            return Err(invalid_quoted_string(cursor));
        }
    }

    cursor.expect(DQUOTE)?;
    Ok(value)
}

fn invalid_quoted_string(cursor: &Cursor<'_>) -> ParseError {
    cursor.error(ErrorKind::InvalidQuotedString, "Expected 'Quoted-string'")
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

    fn read(input: &str, config: ParserConfig) -> (Result<String>, usize) {
        let chars: Vec<char> = input.chars().collect();
        let mut cursor = Cursor::new(input, &chars);
        let result = read_local_part(&mut cursor, config);
        (result, cursor.position())
    }

    #[test]
    fn test_dot_string_stops_at_at_sign() {
        let (result, position) = read("first.last@domain.example", ParserConfig::RELAXED);
        assert_eq!(result.unwrap(), "first.last");
        assert_eq!(position, 10);
    }

    #[test]
    fn test_quoted_string_is_decoded() {
        let (result, position) = read("\"a\\\"b c\"@x", ParserConfig::RELAXED);
        assert_eq!(result.unwrap(), "a\"b c");
        assert_eq!(position, 8);
    }

    #[test]
    fn test_empty_quoted_string() {
        let (result, _) = read("\"\"@x", ParserConfig::RELAXED);
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn test_empty_input_is_invalid_dot_string() {
        let (result, _) = read("", ParserConfig::RELAXED);
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidDotString);
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_quoted_string_rejected_by_config() {
        let (result, _) = read("\"foo bar\"@x", ParserConfig::LIMITED);
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::QuotedStringInLocalPart);
        assert_eq!(error.position(), 0);
        assert_eq!(
            error.message(),
            "Quoted string in local part is not allowed by config"
        );
    }

    #[test]
    fn test_consecutive_dots() {
        let (result, _) = read("a..b@x", ParserConfig::RELAXED);
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidDotString);
        assert_eq!(error.position(), 2);
    }

    #[test]
    fn test_backslash_at_end_of_input() {
        let (result, _) = read("\"ab\\", ParserConfig::RELAXED);
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidQuotedString);
        assert_eq!(error.position(), 4);
    }

    #[test]
    fn test_control_character_in_quoted_string() {
        let (result, _) = read("\"a\tb\"@x", ParserConfig::RELAXED);
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidQuotedString);
        assert_eq!(error.position(), 2);
    }

    #[test]
    fn test_missing_closing_quote() {
        let (result, _) = read("\"abc", ParserConfig::RELAXED);
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(error.position(), 4);
    }
}
