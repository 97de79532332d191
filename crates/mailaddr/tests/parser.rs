//! Integration tests for address parsing.
//!
//! Covers the documented scenarios of both presets and the properties every
//! successful parse must satisfy.

#![allow(clippy::unwrap_used)]

use mailaddr::{EmailAddress, EmailDomain, ErrorKind, ParserConfig, Warning};
use proptest::prelude::*;

const RELAXED: ParserConfig = ParserConfig::RELAXED;
const LIMITED: ParserConfig = ParserConfig::LIMITED;

fn error_kind(input: &str, config: ParserConfig) -> ErrorKind {
    EmailAddress::parse(input, config).unwrap_err().kind()
}

#[test]
fn simple_address() {
    let address = EmailAddress::parse("test@domain.example", RELAXED).unwrap();

    assert_eq!(address.address(), "test@domain.example");
    assert_eq!(address.local_part(), "test");
    assert_eq!(address.domain().as_str(), "domain.example");
    assert!(address.warnings().is_empty());
}

#[test]
fn quoted_local_part_relaxed() {
    let address = EmailAddress::parse("\"foo bar\"@domain.example", RELAXED).unwrap();

    assert_eq!(address.local_part(), "foo bar");
    assert!(address.warnings().contains(&Warning::QuotedStringInLocalPart));
}

#[test]
fn quoted_local_part_limited() {
    assert_eq!(
        error_kind("\"foo bar\"@domain.example", LIMITED),
        ErrorKind::QuotedStringInLocalPart
    );
}

#[test]
fn empty_quoted_local_part_relaxed() {
    let error = EmailAddress::parse("\"\"@domain.example", RELAXED).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::EmptyLocalPart);
    assert_eq!(error.position(), 1);
    assert_eq!(error.message(), "Empty local part is not allowed by config");
}

#[test]
fn empty_quoted_local_part_with_empty_allowed() {
    let config = RELAXED.with_empty_local_part(true);
    let address = EmailAddress::parse("\"\"@domain.example", config).unwrap();

    assert!(address.warnings().contains(&Warning::EmptyLocalPart));
    assert_eq!(address.local_part(), "");
}

#[test]
fn empty_quoted_local_part_limited() {
    assert_eq!(
        error_kind("\"\"@domain.example", LIMITED),
        ErrorKind::QuotedStringInLocalPart
    );
}

#[test]
fn trailing_dot_in_domain() {
    assert_eq!(
        error_kind("test@domain.example.", RELAXED),
        ErrorKind::InvalidDomainPart
    );
}

#[test]
fn address_literal_rejected_by_every_config() {
    let permissive = RELAXED.with_empty_local_part(true);
    for config in [RELAXED, LIMITED, permissive] {
        assert_eq!(
            error_kind("user@[127.0.0.1]", config),
            ErrorKind::AddressLiteralsNotSupported
        );
    }
}

#[test]
fn local_part_length_boundary() {
    let exact = format!("{}@domain.example", "a".repeat(64));
    let address = EmailAddress::parse(&exact, LIMITED).unwrap();
    assert!(!address.has_warning(Warning::LocalPartExceedsLengthLimit));

    let over = format!("{}@domain.example", "a".repeat(65));
    let error = EmailAddress::parse(&over, LIMITED).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LocalPartLengthExceeded);
    assert_eq!(error.position(), 65);
}

#[test]
fn total_length_boundary() {
    // "user@" + label + ".example"
    let exact = format!("user@{}.example", "d".repeat(241));
    assert_eq!(exact.len(), 254);
    let address = EmailAddress::parse(&exact, LIMITED).unwrap();
    assert!(!address.has_warning(Warning::EmailAddressExceedsLengthLimit));

    let over = format!("user@{}.example", "d".repeat(242));
    assert_eq!(over.len(), 255);
    let error = EmailAddress::parse(&over, LIMITED).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::TotalLengthExceeded);
    assert_eq!(error.position(), 255);
}

#[test]
fn normalized_address_keeps_local_part_case() {
    let address = EmailAddress::parse("Alice.Smith@Mail.Domain.EXAMPLE", RELAXED).unwrap();

    assert_eq!(address.address(), "Alice.Smith@Mail.Domain.EXAMPLE");
    assert_eq!(address.normalized_address(), "Alice.Smith@mail.domain.example");
    assert_eq!(address.domain(), &EmailDomain::parse("mail.domain.example").unwrap());
}

#[test]
fn error_carries_input() {
    let error = EmailAddress::parse("user@@domain.example", RELAXED).unwrap_err();

    assert_eq!(error.input(), "user@@domain.example");
    assert_eq!(error.kind(), ErrorKind::InvalidDomainPart);
    assert_eq!(error.position(), 5);
}

#[test]
fn from_str_uses_relaxed() {
    let address: EmailAddress = "\"foo bar\"@domain.example".parse().unwrap();
    assert_eq!(address.address(), "\"foo bar\"@domain.example");
    assert_eq!(address.to_string(), "\"foo bar\"@domain.example");
}

#[test]
fn free_functions_match_associated_functions() {
    let a = mailaddr::parse("user@domain.example", LIMITED).unwrap();
    let b = EmailAddress::parse("user@domain.example", LIMITED).unwrap();
    assert_eq!(a, b);
    assert!(mailaddr::parse_or_none("user@", LIMITED).is_none());
    assert!(EmailAddress::parse_or_none("user@", LIMITED).is_none());
}

fn dot_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]{1,12}(\\.[a-zA-Z0-9_+-]{1,8}){0,3}"
}

fn quoted_string() -> impl Strategy<Value = String> {
    "[ -~]{1,20}".prop_map(|content| {
        let mut quoted = String::from("\"");
        for c in content.chars() {
            if c == '"' || c == '\\' {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('"');
        quoted
    })
}

fn domain() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]([a-zA-Z0-9-]{0,10}[a-zA-Z0-9])?(\\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,10}[a-zA-Z0-9])?){0,3}"
}

fn address() -> impl Strategy<Value = String> {
    (prop_oneof![dot_string(), quoted_string()], domain())
        .prop_map(|(local_part, domain)| format!("{local_part}@{domain}"))
}

proptest! {
    #[test]
    fn generated_addresses_parse(input in address()) {
        prop_assert!(EmailAddress::parse(&input, RELAXED).is_ok());
    }

    #[test]
    fn address_round_trips(input in address()) {
        let parsed = EmailAddress::parse(&input, RELAXED).unwrap();
        let reparsed = EmailAddress::parse(parsed.address(), RELAXED).unwrap();

        prop_assert_eq!(&reparsed, &parsed);
        prop_assert_eq!(reparsed.address(), parsed.address());
    }

    #[test]
    fn arbitrary_input_round_trips(input in "[ -~]{0,40}") {
        if let Ok(parsed) = EmailAddress::parse(&input, RELAXED) {
            let reparsed = EmailAddress::parse(parsed.address(), RELAXED).unwrap();
            prop_assert_eq!(reparsed, parsed);
        }
    }

    #[test]
    fn normalization_is_idempotent(input in address()) {
        for config in [RELAXED, LIMITED] {
            if let Ok(parsed) = EmailAddress::parse(&input, config) {
                let again = EmailAddress::parse(parsed.normalized_address(), config).unwrap();
                prop_assert_eq!(again.normalized_address(), parsed.normalized_address());
            }
        }
    }

    #[test]
    fn limited_implies_relaxed(input in address()) {
        if let Ok(limited) = EmailAddress::parse(&input, LIMITED) {
            let relaxed = EmailAddress::parse(&input, RELAXED).unwrap();
            prop_assert_eq!(relaxed, limited);
        }
    }

    #[test]
    fn dot_strings_have_no_quoting_warning(local_part in dot_string(), domain in domain()) {
        let parsed = EmailAddress::parse(&format!("{local_part}@{domain}"), RELAXED).unwrap();

        prop_assert_eq!(parsed.local_part(), local_part.as_str());
        prop_assert_eq!(parsed.encoded_local_part(), local_part.as_str());
        prop_assert!(!parsed.has_warning(Warning::QuotedStringInLocalPart));
    }
}
