//! Mailbox parsing and policy checks.

use crate::address::{EmailAddress, Warning};
use crate::config::ParserConfig;
use crate::cursor::Cursor;
use crate::domain::read_domain;
use crate::error::{ErrorKind, Result};
use crate::local_part::read_local_part;

/// Parses `input` as `Local-part "@" Domain` and applies `config`.
///
/// Policy checks run after a successful grammar parse, in this order: total
/// length, local part length, quoting requirement, empty local part. The
/// first violated check is reported.
///
/// # Errors
///
/// Returns an error naming the first grammar or policy violation.
pub fn parse(input: &str, config: ParserConfig) -> Result<EmailAddress> {
    let chars: Vec<char> = input.chars().collect();
    let mut cursor = Cursor::new(input, &chars);

    let local_part = read_local_part(&mut cursor, config)?;
    let at_sign = cursor.position();
    cursor.expect('@')?;
    let domain = cursor.delegate(read_domain)?;

    if !cursor.end_reached() {
        return Err(cursor.error(ErrorKind::ExpectedEndOfInput, "Expected end of input"));
    }

    let address = EmailAddress::new(local_part, domain);

    if config.check_email_address_length
        && address.has_warning(Warning::EmailAddressExceedsLengthLimit)
    {
        return Err(cursor.error(
            ErrorKind::TotalLengthExceeded,
            "The email address exceeds the maximum length of 254 characters",
        ));
    }

    if config.check_local_part_length && address.has_warning(Warning::LocalPartExceedsLengthLimit)
    {
        return Err(cursor.error_at(
            ErrorKind::LocalPartLengthExceeded,
            at_sign,
            "Local part exceeds maximum length of 64 characters",
        ));
    }

    if !config.allow_local_part_requiring_quoted_string
        && address.has_warning(Warning::QuotedStringInLocalPart)
    {
        return Err(cursor.error_at(
            ErrorKind::LocalPartRequiresQuotedString,
            0,
            "Local part requiring the use of a quoted string is not allowed by config",
        ));
    }

    if !config.allow_empty_local_part && address.has_warning(Warning::EmptyLocalPart) {
        return Err(cursor.error_at(
            ErrorKind::EmptyLocalPart,
            1,
            "Empty local part is not allowed by config",
        ));
    }

    Ok(address)
}

/// Parses `input` under `config`, discarding the error.
#[must_use]
pub fn parse_or_none(input: &str, config: ParserConfig) -> Option<EmailAddress> {
    parse(input, config).ok()
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
    use crate::EmailDomain;

    const LONG_LOCAL_PART: &str =
        "1xxxxxxxxx2xxxxxxxxx3xxxxxxxxx4xxxxxxxxx5xxxxxxxxx6xxxxxxxxx12345";

    fn long_address() -> String {
        format!(
            "{}@{}.{}.{}",
            "1xxxxxxxxx2xxxxxxxxx3xxxxxxxxx4xxxxxxxxx5xxxxxxxxx6xxxxxxxxx1234",
            "1xxxxxxxxx2xxxxxxxxx3xxxxxxxxx4xxxxxxxxx5xxxxxxxxx6xxxxxxxxx123",
            "1xxxxxxxxx2xxxxxxxxx3xxxxxxxxx4xxxxxxxxx5xxxxxxxxx6xxxxxxxxx123",
            "1xxxxxxxxx2xxxxxxxxx3xxxxxxxxx4xxxxxxxxx5xxxxxxxxx6xxxxxxxxx12",
        )
    }

    #[test]
    fn test_simple_address() {
        let address = parse("alice@domain.example", ParserConfig::RELAXED).unwrap();

        assert_eq!(address.local_part(), "alice");
        assert_eq!(address.domain(), &EmailDomain::parse("domain.example").unwrap());
        assert!(address.warnings().is_empty());
    }

    #[test]
    fn test_local_part_containing_dot() {
        let address = parse("alice.lastname@domain.example", ParserConfig::RELAXED).unwrap();
        assert_eq!(address.local_part(), "alice.lastname");
    }

    #[test]
    fn test_quoted_local_part() {
        let address = parse("\"one two\"@domain.example", ParserConfig::RELAXED).unwrap();

        assert_eq!(address.local_part(), "one two");
        assert_eq!(address.address(), "\"one two\"@domain.example");
        assert!(address.has_warning(Warning::QuotedStringInLocalPart));
    }

    #[test]
    fn test_local_part_requiring_quotes_not_allowed() {
        let config = ParserConfig::RELAXED.with_local_part_requiring_quoted_string(false);
        let error = parse("\"one two\"@domain.example", config).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::LocalPartRequiresQuotedString);
        assert_eq!(error.position(), 0);
        assert_eq!(
            error.message(),
            "Local part requiring the use of a quoted string is not allowed by config"
        );
    }

    #[test]
    fn test_unnecessarily_quoted_local_part() {
        let config = ParserConfig::RELAXED.with_local_part_requiring_quoted_string(false);
        let address = parse("\"user\"@domain.example", config).unwrap();

        assert_eq!(address.local_part(), "user");
        assert_eq!(address.address(), "user@domain.example");
        assert!(address.warnings().is_empty());
    }

    #[test]
    fn test_unnecessarily_quoted_local_part_not_allowed() {
        let error = parse("\"user\"@domain.example", ParserConfig::LIMITED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::QuotedStringInLocalPart);
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_quoted_local_part_containing_double_quote() {
        let address = parse("\"a\\\"b\"@domain.example", ParserConfig::RELAXED).unwrap();

        assert_eq!(address.local_part(), "a\"b");
        assert_eq!(address.address(), "\"a\\\"b\"@domain.example");
    }

    #[test]
    fn test_empty_local_part_allowed() {
        let config = ParserConfig::RELAXED.with_empty_local_part(true);
        let address = parse("\"\"@domain.example", config).unwrap();

        assert_eq!(address.local_part(), "");
        assert_eq!(address.address(), "\"\"@domain.example");
        assert!(address.has_warning(Warning::EmptyLocalPart));
    }

    #[test]
    fn test_empty_local_part_not_allowed() {
        let error = parse("\"\"@domain.example", ParserConfig::RELAXED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::EmptyLocalPart);
        assert_eq!(error.position(), 1);
        assert_eq!(error.message(), "Empty local part is not allowed by config");
    }

    #[test]
    fn test_address_literals() {
        for input in [
            "user@[255.0.100.23]",
            "user@[IPv6:2001:0db8:0000:0000:0000:ff00:0042:8329]",
        ] {
            let error = parse(input, ParserConfig::RELAXED).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::AddressLiteralsNotSupported);
            assert_eq!(error.position(), 5);
            assert_eq!(error.message(), "Address literals are not supported");
        }
    }

    #[test]
    fn test_domain_starting_with_unsupported_character() {
        let error = parse("user@ä", ParserConfig::RELAXED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidDomainPart);
        assert_eq!(error.position(), 5);
        assert_eq!(error.message(), "Expected 'Domain' or 'address-literal'");
    }

    #[test]
    fn test_obsolete_syntax() {
        let error = parse("\"quoted\".atom@domain.example", ParserConfig::RELAXED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UnexpectedCharacter);
        assert_eq!(error.position(), 8);
        assert_eq!(error.message(), "Expected '@' (64)");
    }

    #[test]
    fn test_local_part_starting_with_dot() {
        let error = parse(".invalid@domain.example", ParserConfig::RELAXED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidLocalPart);
        assert_eq!(error.position(), 0);
        assert_eq!(error.message(), "Expected 'Dot-string' or 'Quoted-string'");
    }

    #[test]
    fn test_local_part_ending_with_dot() {
        let error = parse("invalid.@domain.example", ParserConfig::RELAXED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidDotString);
        assert_eq!(error.position(), 8);
        assert_eq!(error.message(), "Expected 'Dot-string'");
    }

    #[test]
    fn test_missing_closing_double_quote() {
        let error = parse("\"invalid@domain.example", ParserConfig::RELAXED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(error.position(), 23);
    }

    #[test]
    fn test_quoted_text_containing_unsupported_character() {
        let error = parse("\"ä\"@domain.example", ParserConfig::RELAXED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidQuotedString);
        assert_eq!(error.position(), 1);
        assert_eq!(error.message(), "Expected 'Quoted-string'");
    }

    #[test]
    fn test_quoted_text_containing_unsupported_escaped_character() {
        let error = parse("\"\\ä\"@domain.example", ParserConfig::RELAXED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidQuotedString);
        assert_eq!(error.position(), 3);
    }

    #[test]
    fn test_local_part_length_check_enabled() {
        let input = format!("{LONG_LOCAL_PART}@domain.example");
        let config = ParserConfig::RELAXED.with_local_part_length_check(true);
        let error = parse(&input, config).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::LocalPartLengthExceeded);
        assert_eq!(error.position(), 65);
        assert_eq!(
            error.message(),
            "Local part exceeds maximum length of 64 characters"
        );
    }

    #[test]
    fn test_local_part_length_error_points_at_separator() {
        let input = format!("\"{}b\"@domain.example", "a@".repeat(32));
        let config = ParserConfig::RELAXED.with_local_part_length_check(true);
        let error = parse(&input, config).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::LocalPartLengthExceeded);
        assert_eq!(error.position(), 67);
    }

    #[test]
    fn test_local_part_length_check_disabled() {
        let input = format!("{LONG_LOCAL_PART}@domain.example");
        let address = parse(&input, ParserConfig::RELAXED).unwrap();

        assert_eq!(address.local_part(), LONG_LOCAL_PART);
        assert_eq!(address.address(), input);
        assert!(address.has_warning(Warning::LocalPartExceedsLengthLimit));
    }

    #[test]
    fn test_total_length_check_enabled() {
        let input = long_address();
        let config = ParserConfig::RELAXED.with_email_address_length_check(true);
        let error = parse(&input, config).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::TotalLengthExceeded);
        assert_eq!(error.position(), 255);
        assert_eq!(
            error.message(),
            "The email address exceeds the maximum length of 254 characters"
        );
    }

    #[test]
    fn test_total_length_check_disabled() {
        let input = long_address();
        let address = parse(&input, ParserConfig::RELAXED).unwrap();

        assert_eq!(address.address(), input);
        assert!(address.has_warning(Warning::EmailAddressExceedsLengthLimit));
    }

    #[test]
    fn test_total_length_checked_before_local_part_length() {
        let input = format!("{LONG_LOCAL_PART}@{}.example", "d".repeat(190));
        let error = parse(&input, ParserConfig::LIMITED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::TotalLengthExceeded);
    }

    #[test]
    fn test_additional_character() {
        let error = parse("test@domain.example#", ParserConfig::RELAXED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ExpectedEndOfInput);
        assert_eq!(error.position(), 19);
        assert_eq!(error.message(), "Expected end of input");
    }

    #[test]
    fn test_second_at_sign() {
        let error = parse("a@b@c", ParserConfig::RELAXED).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ExpectedEndOfInput);
        assert_eq!(error.position(), 3);
    }

    #[test]
    fn test_missing_at_sign() {
        let error = parse("user", ParserConfig::RELAXED).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(error.position(), 4);
    }

    #[test]
    fn test_missing_local_part() {
        let error = parse("@domain.example", ParserConfig::RELAXED).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidLocalPart);

        let error = parse("", ParserConfig::RELAXED).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidDotString);
    }

    #[test]
    fn test_missing_domain() {
        let error = parse("user@", ParserConfig::RELAXED).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidDomainPart);
        assert_eq!(error.position(), 5);
    }

    #[test]
    fn test_parse_or_none() {
        assert!(parse_or_none("test@domain.example", ParserConfig::LIMITED).is_some());
        assert!(parse_or_none("test@domain.example.", ParserConfig::RELAXED).is_none());
    }
}
