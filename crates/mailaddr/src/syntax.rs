//! Character classes of the RFC 5321 mailbox grammar.
//!
//! All classes are ASCII-only; any other character is rejected by every
//! predicate here.

/// Maximum length of a local part, in characters.
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Maximum length of a complete address, in characters.
///
/// RFC 5321 limits a path to 256 octets including the angle brackets.
pub const MAX_EMAIL_ADDRESS_LENGTH: usize = 254;

/// Double quote.
pub const DQUOTE: char = '"';

/// Backslash, introducing a quoted-pair.
pub const BACKSLASH: char = '\\';

/// Returns true if the character is `atext`.
///
/// Printable ASCII minus space and the specials `()<>[]:;@\,."`.
#[must_use]
pub const fn is_atext(c: char) -> bool {
    matches!(c, '!'..='~')
        && !matches!(
            c,
            '(' | ')' | '<' | '>' | '[' | ']' | ':' | ';' | '@' | '\\' | ',' | '.' | '"'
        )
}

/// Returns true if the character may appear unescaped inside a quoted string.
#[must_use]
pub const fn is_qtext(c: char) -> bool {
    matches!(c, ' '..='~') && c != DQUOTE && c != BACKSLASH
}

/// Returns true if the character may follow a backslash inside a quoted string.
#[must_use]
pub const fn is_quoted_pair_char(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Returns true if the character is a `Let-dig`.
#[must_use]
pub const fn is_let_dig(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns true if the character may appear inside a domain label.
#[must_use]
pub const fn is_ldh(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Returns true if the string is a non-empty `Dot-string`.
#[must_use]
pub fn is_dot_string(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

/// Renders a local part as a `Quoted-string`, escaping everything that is not qtext.
#[must_use]
pub fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push(DQUOTE);
    for c in s.chars() {
        if !is_qtext(c) {
            quoted.push(BACKSLASH);
        }
        quoted.push(c);
    }
    quoted.push(DQUOTE);
    quoted
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

    #[test]
    fn test_is_atext() {
        for c in "aZ0!#$%&'*+-/=?^_`{|}~".chars() {
            assert!(is_atext(c), "{c:?} should be atext");
        }
        for c in "()<>[]:;@\\,.\" \t\x7fä".chars() {
            assert!(!is_atext(c), "{c:?} should not be atext");
        }
    }

    #[test]
    fn test_is_qtext() {
        assert!(is_qtext(' '));
        assert!(is_qtext('@'));
        assert!(is_qtext('.'));
        assert!(!is_qtext('"'));
        assert!(!is_qtext('\\'));
        assert!(!is_qtext('\t'));
        assert!(!is_qtext('ä'));
    }

    #[test]
    fn test_is_quoted_pair_char() {
        assert!(is_quoted_pair_char('"'));
        assert!(is_quoted_pair_char('\\'));
        assert!(is_quoted_pair_char(' '));
        assert!(!is_quoted_pair_char('\n'));
        assert!(!is_quoted_pair_char('ä'));
    }

    #[test]
    fn test_domain_classes() {
        assert!(is_let_dig('a'));
        assert!(is_let_dig('7'));
        assert!(!is_let_dig('-'));
        assert!(is_ldh('-'));
        assert!(!is_ldh('_'));
        assert!(!is_ldh('.'));
    }

    #[test]
    fn test_is_dot_string() {
        assert!(is_dot_string("user"));
        assert!(is_dot_string("first.last"));
        assert!(is_dot_string("a+b=c"));
        assert!(!is_dot_string(""));
        assert!(!is_dot_string(".user"));
        assert!(!is_dot_string("user."));
        assert!(!is_dot_string("a..b"));
        assert!(!is_dot_string("foo bar"));
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("foo bar"), "\"foo bar\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote(""), "\"\"");
    }
}
