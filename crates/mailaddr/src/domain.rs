//! Domain grammar and the [`EmailDomain`] value.
//!
//! ```text
//! Domain     = sub-domain *("." sub-domain)
//! sub-domain = Let-dig [Ldh-str]
//! Ldh-str    = *( ALPHA / DIGIT / "-" ) Let-dig
//! ```
//!
//! Address literals (`[192.0.2.1]`, `[IPv6:...]`) are rejected.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError, Result};
use crate::syntax::{is_ldh, is_let_dig};

/// A syntactically valid domain.
///
/// Equality and hashing use the normalized (lower-cased) form, since domain
/// names are case-insensitive. [`Display`](fmt::Display) renders the domain as
/// it was written.
#[derive(Debug, Clone)]
pub struct EmailDomain {
    value: String,
    normalized: String,
}

impl EmailDomain {
    fn new(value: String) -> Self {
        let normalized = value.to_ascii_lowercase();
        Self { value, normalized }
    }

    /// Parses a complete domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid domain or contains
    /// trailing characters.
    pub fn parse(domain: &str) -> Result<Self> {
        let chars: Vec<char> = domain.chars().collect();
        let mut cursor = Cursor::new(domain, &chars);
        let parsed = read_domain(&mut cursor)?;
        if !cursor.end_reached() {
            return Err(cursor.error(ErrorKind::ExpectedEndOfInput, "Expected end of input"));
        }
        Ok(parsed)
    }

    /// Parses a complete domain, discarding the error.
    #[must_use]
    pub fn parse_or_none(domain: &str) -> Option<Self> {
        Self::parse(domain).ok()
    }

    /// Returns the domain as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the lower-cased domain.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Returns the dot-separated labels, as written.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.value.split('.')
    }
}

impl PartialEq for EmailDomain {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for EmailDomain {}

impl Hash for EmailDomain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for EmailDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for EmailDomain {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Reads a domain, stopping at the first character that cannot continue it.
pub fn read_domain(cursor: &mut Cursor<'_>) -> Result<EmailDomain> {
    if cursor.peek_matches(|c| c == '[') {
        return Err(cursor.error(
            ErrorKind::AddressLiteralsNotSupported,
            "Address literals are not supported",
        ));
    }
    if !cursor.peek_matches(is_let_dig) {
        return Err(cursor.error(
            ErrorKind::InvalidDomainPart,
            "Expected 'Domain' or 'address-literal'",
        ));
    }

    let value = cursor.capture(|c| {
        read_sub_domain(c)?;
        while c.peek_matches(|ch| ch == '.') {
            c.expect('.')?;
            if !c.peek_matches(is_let_dig) {
                return Err(c.error(ErrorKind::InvalidDomainPart, "Expected 'sub-domain'"));
            }
            read_sub_domain(c)?;
        }
        Ok(())
    })?;

    Ok(EmailDomain::new(value))
}

fn read_sub_domain(cursor: &mut Cursor<'_>) -> Result<()> {
    let label = cursor.capture(|c| {
        c.expect_matching("'Let-dig'", is_let_dig)?;
        c.skip_while(is_ldh);
        Ok(())
    })?;

    // Ldh-str must end with a Let-dig
    if label.ends_with('-') {
        let hyphen = cursor.position() - 1;
        return Err(cursor.error_at(ErrorKind::InvalidDomainPart, hyphen, "Expected 'Let-dig'"));
    }
    Ok(())
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
    fn test_parse_simple_domain() {
        let domain = EmailDomain::parse("domain.example").unwrap();
        assert_eq!(domain.as_str(), "domain.example");
        assert_eq!(domain.labels().collect::<Vec<_>>(), vec!["domain", "example"]);
    }

    #[test]
    fn test_single_label() {
        let domain = EmailDomain::parse("localhost").unwrap();
        assert_eq!(domain.labels().count(), 1);
    }

    #[test]
    fn test_interior_hyphens() {
        let domain = EmailDomain::parse("my-host.sub--domain.example").unwrap();
        assert_eq!(domain.to_string(), "my-host.sub--domain.example");
    }

    #[test]
    fn test_normalized_and_equality() {
        let domain = EmailDomain::parse("Domain.EXAMPLE").unwrap();
        assert_eq!(domain.as_str(), "Domain.EXAMPLE");
        assert_eq!(domain.normalized(), "domain.example");
        assert_eq!(domain, EmailDomain::parse("domain.example").unwrap());
    }

    #[test]
    fn test_label_ending_with_hyphen() {
        let error = EmailDomain::parse("host-.example").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidDomainPart);
        assert_eq!(error.position(), 4);
        assert_eq!(error.message(), "Expected 'Let-dig'");
    }

    #[test]
    fn test_label_starting_with_hyphen() {
        let error = EmailDomain::parse("-host.example").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidDomainPart);
        assert_eq!(error.position(), 0);

        let error = EmailDomain::parse("host.-example").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidDomainPart);
        assert_eq!(error.position(), 5);
        assert_eq!(error.message(), "Expected 'sub-domain'");
    }

    #[test]
    fn test_trailing_dot() {
        let error = EmailDomain::parse("domain.example.").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidDomainPart);
        assert_eq!(error.position(), 15);
    }

    #[test]
    fn test_empty_label() {
        let error = EmailDomain::parse("domain..example").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidDomainPart);
        assert_eq!(error.position(), 7);
    }

    #[test]
    fn test_empty_domain() {
        let error = EmailDomain::parse("").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidDomainPart);
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_address_literal() {
        let error = EmailDomain::parse("[127.0.0.1]").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::AddressLiteralsNotSupported);
        assert_eq!(error.message(), "Address literals are not supported");
    }

    #[test]
    fn test_trailing_characters() {
        let error = EmailDomain::parse("domain.example_x").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ExpectedEndOfInput);
        assert_eq!(error.position(), 14);
        assert!(EmailDomain::parse_or_none("domain.example_x").is_none());
    }

    #[test]
    fn test_from_str() {
        let domain: EmailDomain = "Mail.Domain.Example".parse().unwrap();
        assert_eq!(domain.normalized(), "mail.domain.example");
    }
}
