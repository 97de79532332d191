//! Error types for validation.

use mailaddr::{ErrorKind, ParseError};
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Why a user-entered email address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailInputError {
    /// Nothing was entered.
    Empty,
    /// The address or its local part is too long.
    TooLong,
    /// The local part is quoted, or would have to be.
    QuotedLocalPart,
    /// The part before `@` is malformed.
    InvalidLocalPart {
        /// Character position of the problem.
        position: usize,
    },
    /// The part after `@` is malformed.
    InvalidDomain {
        /// Character position of the problem.
        position: usize,
    },
    /// The domain is an IP address literal.
    AddressLiteral,
    /// The input is not shaped like `local@domain`.
    Malformed {
        /// Character position of the problem.
        position: usize,
    },
}

impl EmailInputError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Email address is required",
            Self::TooLong => "Email address is too long",
            Self::QuotedLocalPart => "Quoted email addresses are not supported",
            Self::InvalidLocalPart { .. } => "The part before @ is not valid",
            Self::InvalidDomain { .. } => "The part after @ is not a valid domain",
            Self::AddressLiteral => "IP addresses are not supported as the domain",
            Self::Malformed { .. } => "Invalid email address format",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn field(&self) -> &'static str {
        "email"
    }

    /// Get the character position of the problem, if known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidLocalPart { position }
            | Self::InvalidDomain { position }
            | Self::Malformed { position } => Some(*position),
            _ => None,
        }
    }
}

impl From<&ParseError> for EmailInputError {
    fn from(error: &ParseError) -> Self {
        let position = error.position();
        match error.kind() {
            ErrorKind::TotalLengthExceeded | ErrorKind::LocalPartLengthExceeded => Self::TooLong,
            ErrorKind::QuotedStringInLocalPart | ErrorKind::LocalPartRequiresQuotedString => {
                Self::QuotedLocalPart
            }
            ErrorKind::InvalidLocalPart
            | ErrorKind::InvalidDotString
            | ErrorKind::InvalidQuotedString
            | ErrorKind::EmptyLocalPart => Self::InvalidLocalPart { position },
            ErrorKind::InvalidDomainPart => Self::InvalidDomain { position },
            ErrorKind::AddressLiteralsNotSupported => Self::AddressLiteral,
            ErrorKind::UnexpectedEndOfInput
            | ErrorKind::UnexpectedCharacter
            | ErrorKind::ExpectedEndOfInput => Self::Malformed { position },
        }
    }
}

impl std::fmt::Display for EmailInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EmailInputError {}

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
    use mailaddr::{EmailAddress, ParserConfig};

    fn input_error(input: &str) -> EmailInputError {
        let error = EmailAddress::parse(input, ParserConfig::LIMITED).unwrap_err();
        EmailInputError::from(&error)
    }

    #[test]
    fn test_mapping() {
        assert_eq!(input_error("\"a b\"@domain.example"), EmailInputError::QuotedLocalPart);
        assert_eq!(input_error("user@[10.0.0.1]"), EmailInputError::AddressLiteral);
        assert_eq!(
            input_error("user@-domain.example"),
            EmailInputError::InvalidDomain { position: 5 }
        );
        assert_eq!(
            input_error(".user@domain.example"),
            EmailInputError::InvalidLocalPart { position: 0 }
        );
        assert_eq!(input_error("user"), EmailInputError::Malformed { position: 4 });
        assert_eq!(
            input_error(&format!("{}@domain.example", "a".repeat(65))),
            EmailInputError::TooLong
        );
    }

    #[test]
    fn test_display_and_position() {
        let error = EmailInputError::InvalidDomain { position: 7 };
        assert_eq!(error.to_string(), "The part after @ is not a valid domain");
        assert_eq!(error.position(), Some(7));
        assert_eq!(EmailInputError::Empty.position(), None);
        assert_eq!(error.field(), "email");
        assert_eq!(EmailInputError::TooLong.field(), "email");
    }

    #[test]
    fn test_settings_error_wraps_json() {
        let json_error = serde_json::from_str::<u8>("not json").unwrap_err();
        let error = SettingsError::from(json_error);
        assert!(error.to_string().starts_with("Serialization error:"));
    }
}
