//! Error types for email address parsing.

use std::fmt;

use thiserror::Error;

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// The kind of failure reported by the parser.
///
/// Every failure path of the grammar and of the policy checks maps to exactly
/// one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Input ended while more characters were required.
    UnexpectedEndOfInput,
    /// A specific character or character class was not found.
    UnexpectedCharacter,
    /// The local part starts with neither atom text nor a double quote.
    InvalidLocalPart,
    /// An atom inside a dot-string is empty.
    InvalidDotString,
    /// Malformed quoted-pair or disallowed character inside a quoted string.
    InvalidQuotedString,
    /// A quoted local part was found but quoting is disabled.
    QuotedStringInLocalPart,
    /// The domain (or one of its labels) is malformed.
    InvalidDomainPart,
    /// The domain is a bracketed address literal.
    AddressLiteralsNotSupported,
    /// Characters remain after a complete address.
    ExpectedEndOfInput,
    /// The address is longer than 254 characters.
    TotalLengthExceeded,
    /// The local part is longer than 64 characters.
    LocalPartLengthExceeded,
    /// The local part can only be written as a quoted string.
    LocalPartRequiresQuotedString,
    /// The local part is empty.
    EmptyLocalPart,
}

impl ErrorKind {
    /// Returns the stable name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            Self::UnexpectedCharacter => "UnexpectedCharacter",
            Self::InvalidLocalPart => "InvalidLocalPart",
            Self::InvalidDotString => "InvalidDotString",
            Self::InvalidQuotedString => "InvalidQuotedString",
            Self::QuotedStringInLocalPart => "QuotedStringInLocalPart",
            Self::InvalidDomainPart => "InvalidDomainPart",
            Self::AddressLiteralsNotSupported => "AddressLiteralsNotSupported",
            Self::ExpectedEndOfInput => "ExpectedEndOfInput",
            Self::TotalLengthExceeded => "TotalLengthExceeded",
            Self::LocalPartLengthExceeded => "LocalPartLengthExceeded",
            Self::LocalPartRequiresQuotedString => "LocalPartRequiresQuotedString",
            Self::EmptyLocalPart => "EmptyLocalPart",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A located parse failure.
///
/// Carries the complete input, the failure kind and the character offset at
/// which the failure was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    kind: ErrorKind,
    input: String,
    position: usize,
    message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(
        kind: ErrorKind,
        input: impl Into<String>,
        position: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            input: input.into(),
            position,
            message: message.into(),
        }
    }

    /// Returns the failure kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the character offset at which the failure was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
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

    #[test]
    fn test_display_is_message() {
        let error = ParseError::new(
            ErrorKind::ExpectedEndOfInput,
            "test@domain.example#",
            19,
            "Expected end of input",
        );

        assert_eq!(error.to_string(), "Expected end of input");
        assert_eq!(error.kind(), ErrorKind::ExpectedEndOfInput);
        assert_eq!(error.input(), "test@domain.example#");
        assert_eq!(error.position(), 19);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::EmptyLocalPart.to_string(), "EmptyLocalPart");
        assert_eq!(
            ErrorKind::AddressLiteralsNotSupported.as_str(),
            "AddressLiteralsNotSupported"
        );
    }
}
