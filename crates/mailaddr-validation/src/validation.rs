//! Validation of user-entered addresses.

use mailaddr::EmailAddress;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EmailInputError;
use crate::settings::ValidationSettings;

/// Sender identity entered during account setup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name.
    pub name: String,
    /// Email address, as typed.
    pub email: String,
}

impl Identity {
    /// Create an identity.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Validation error for an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Display name is empty.
    EmptyName,
    /// Email address was rejected.
    Email(EmailInputError),
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyName => "Name is required",
            Self::Email(error) => error.message(),
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::Email(error) => error.field(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Validate a user-entered email address.
///
/// # Errors
///
/// Returns an [`EmailInputError`] describing why the address was rejected.
pub fn validate_email(
    input: &str,
    settings: &ValidationSettings,
) -> Result<EmailAddress, EmailInputError> {
    let input = if settings.trim_whitespace {
        input.trim()
    } else {
        input
    };

    if input.is_empty() {
        debug!("Rejected empty email address");
        return Err(EmailInputError::Empty);
    }

    EmailAddress::parse(input, settings.parser_config()).map_err(|error| {
        debug!(
            kind = %error.kind(),
            position = error.position(),
            "Rejected email address"
        );
        EmailInputError::from(&error)
    })
}

/// Validate an identity.
///
/// Returns the parsed address if valid, or all errors found.
///
/// # Errors
///
/// Returns a vector of `ValidationError` if any fields are invalid.
pub fn validate_identity(
    identity: &Identity,
    settings: &ValidationSettings,
) -> Result<EmailAddress, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if identity.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }

    match validate_email(&identity.email, settings) {
        Ok(address) if errors.is_empty() => Ok(address),
        Ok(_) => Err(errors),
        Err(error) => {
            errors.push(ValidationError::Email(error));
            Err(errors)
        }
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
    use crate::settings::Policy;

    #[test]
    fn test_valid_email() {
        let settings = ValidationSettings::default();
        let address = validate_email("  user@Domain.Example ", &settings).unwrap();
        assert_eq!(address.address(), "user@Domain.Example");
    }

    #[test]
    fn test_empty_email() {
        let settings = ValidationSettings::default();
        assert_eq!(validate_email("   ", &settings), Err(EmailInputError::Empty));
    }

    #[test]
    fn test_whitespace_kept_without_trimming() {
        let settings = ValidationSettings {
            trim_whitespace: false,
            ..ValidationSettings::default()
        };
        assert_eq!(
            validate_email(" user@domain.example", &settings),
            Err(EmailInputError::InvalidLocalPart { position: 0 })
        );
    }

    #[test]
    fn test_policy_is_applied() {
        let limited = ValidationSettings::default();
        assert_eq!(
            validate_email("\"foo bar\"@domain.example", &limited),
            Err(EmailInputError::QuotedLocalPart)
        );

        let relaxed = ValidationSettings {
            policy: Policy::Relaxed,
            ..ValidationSettings::default()
        };
        let address = validate_email("\"foo bar\"@domain.example", &relaxed).unwrap();
        assert_eq!(address.local_part(), "foo bar");
    }

    #[test]
    fn test_validate_empty_identity() {
        let result = validate_identity(&Identity::default(), &ValidationSettings::default());
        let errors = result.unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyName));
        assert!(errors.contains(&ValidationError::Email(EmailInputError::Empty)));
        assert_eq!(errors[1].field(), "email");
    }

    #[test]
    fn test_validate_complete_identity() {
        let identity = Identity::new("Alice", "alice@domain.example");
        let address = validate_identity(&identity, &ValidationSettings::default()).unwrap();
        assert_eq!(address.local_part(), "alice");
    }

    #[test]
    fn test_validate_identity_missing_name() {
        let identity = Identity::new(" ", "alice@domain.example");
        let errors = validate_identity(&identity, &ValidationSettings::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyName]);
        assert_eq!(errors[0].to_string(), "Name is required");
    }
}
