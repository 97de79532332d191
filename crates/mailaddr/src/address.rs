//! The [`EmailAddress`] value and its warnings.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::config::ParserConfig;
use crate::domain::EmailDomain;
use crate::error::{ParseError, Result};
use crate::parser;
use crate::syntax::{MAX_EMAIL_ADDRESS_LENGTH, MAX_LOCAL_PART_LENGTH, is_dot_string, quote};

/// A property of a parsed address that a [`ParserConfig`] may reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Warning {
    /// The local part is longer than 64 characters.
    LocalPartExceedsLengthLimit,
    /// The address is longer than 254 characters.
    EmailAddressExceedsLengthLimit,
    /// The local part can only be written as a quoted string.
    QuotedStringInLocalPart,
    /// The local part is empty.
    EmptyLocalPart,
}

/// A parsed mailbox: `Local-part "@" Domain`.
///
/// Two addresses are equal when their decoded local parts are identical and
/// their domains are equal. Derived forms are not part of the identity.
#[derive(Debug, Clone)]
pub struct EmailAddress {
    local_part: String,
    domain: EmailDomain,
    encoded_local_part: String,
    address: String,
    normalized_address: String,
    warnings: BTreeSet<Warning>,
}

impl EmailAddress {
    pub(crate) fn new(local_part: String, domain: EmailDomain) -> Self {
        let encoded_local_part = if is_dot_string(&local_part) {
            local_part.clone()
        } else {
            quote(&local_part)
        };
        let address = format!("{encoded_local_part}@{domain}");
        let normalized_address = format!("{encoded_local_part}@{}", domain.normalized());

        let mut warnings = BTreeSet::new();
        if local_part.len() > MAX_LOCAL_PART_LENGTH {
            warnings.insert(Warning::LocalPartExceedsLengthLimit);
        }
        if address.len() > MAX_EMAIL_ADDRESS_LENGTH {
            warnings.insert(Warning::EmailAddressExceedsLengthLimit);
        }
        if encoded_local_part != local_part {
            warnings.insert(Warning::QuotedStringInLocalPart);
        }
        if local_part.is_empty() {
            warnings.insert(Warning::EmptyLocalPart);
        }

        Self {
            local_part,
            domain,
            encoded_local_part,
            address,
            normalized_address,
            warnings,
        }
    }

    /// Parses an address under `config`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first grammar or policy violation.
    pub fn parse(input: &str, config: ParserConfig) -> Result<Self> {
        parser::parse(input, config)
    }

    /// Parses an address under `config`, discarding the error.
    #[must_use]
    pub fn parse_or_none(input: &str, config: ParserConfig) -> Option<Self> {
        parser::parse_or_none(input, config)
    }

    /// Returns the decoded local part.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Returns the domain.
    #[must_use]
    pub const fn domain(&self) -> &EmailDomain {
        &self.domain
    }

    /// Returns the local part as it must be written in an address: a
    /// dot-string where possible, otherwise a quoted string.
    #[must_use]
    pub fn encoded_local_part(&self) -> &str {
        &self.encoded_local_part
    }

    /// Returns the address in canonical written form.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the address with a lower-cased domain.
    ///
    /// The local part is left alone; its case sensitivity is up to the
    /// receiving domain.
    #[must_use]
    pub fn normalized_address(&self) -> &str {
        &self.normalized_address
    }

    /// Returns the warnings computed for this address.
    #[must_use]
    pub const fn warnings(&self) -> &BTreeSet<Warning> {
        &self.warnings
    }

    /// Returns true if `warning` applies to this address.
    #[must_use]
    pub fn has_warning(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }
}

impl PartialEq for EmailAddress {
    fn eq(&self, other: &Self) -> bool {
        self.local_part == other.local_part && self.domain == other.domain
    }
}

impl Eq for EmailAddress {}

impl Hash for EmailAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.local_part.hash(state);
        self.domain.hash(state);
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl FromStr for EmailAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, ParserConfig::RELAXED)
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

    fn domain(s: &str) -> EmailDomain {
        EmailDomain::parse(s).unwrap()
    }

    #[test]
    fn test_dot_string_local_part() {
        let address = EmailAddress::new("first.last".to_string(), domain("Domain.Example"));

        assert_eq!(address.encoded_local_part(), "first.last");
        assert_eq!(address.address(), "first.last@Domain.Example");
        assert_eq!(address.normalized_address(), "first.last@domain.example");
        assert!(address.warnings().is_empty());
    }

    #[test]
    fn test_local_part_requiring_quotes() {
        let address = EmailAddress::new("a\"b c".to_string(), domain("domain.example"));

        assert_eq!(address.encoded_local_part(), "\"a\\\"b c\"");
        assert_eq!(address.address(), "\"a\\\"b c\"@domain.example");
        assert!(address.has_warning(Warning::QuotedStringInLocalPart));
        assert_eq!(address.warnings().len(), 1);
    }

    #[test]
    fn test_empty_local_part() {
        let address = EmailAddress::new(String::new(), domain("domain.example"));

        assert_eq!(address.address(), "\"\"@domain.example");
        assert!(address.has_warning(Warning::EmptyLocalPart));
        assert!(address.has_warning(Warning::QuotedStringInLocalPart));
    }

    #[test]
    fn test_length_warnings() {
        let address = EmailAddress::new("x".repeat(64), domain("domain.example"));
        assert!(!address.has_warning(Warning::LocalPartExceedsLengthLimit));

        let address = EmailAddress::new("x".repeat(65), domain("domain.example"));
        assert!(address.has_warning(Warning::LocalPartExceedsLengthLimit));
        assert!(!address.has_warning(Warning::EmailAddressExceedsLengthLimit));

        let long_domain = format!("{}.example", "d".repeat(240));
        let address = EmailAddress::new("user".to_string(), domain(&long_domain));
        assert_eq!(address.address().len(), 253);
        assert!(!address.has_warning(Warning::EmailAddressExceedsLengthLimit));

        let long_domain = format!("{}.example", "d".repeat(242));
        let address = EmailAddress::new("user".to_string(), domain(&long_domain));
        assert_eq!(address.address().len(), 255);
        assert!(address.has_warning(Warning::EmailAddressExceedsLengthLimit));
    }

    #[test]
    fn test_equality_ignores_domain_case() {
        let a = EmailAddress::new("user".to_string(), domain("DOMAIN.example"));
        let b = EmailAddress::new("user".to_string(), domain("domain.EXAMPLE"));
        let c = EmailAddress::new("User".to_string(), domain("domain.example"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let address = EmailAddress::new("user".to_string(), domain("domain.example"));
        assert_eq!(address.to_string(), "user@domain.example");
    }
}
