//! Integration tests for account-setup validation.
//!
//! Settings are loaded from JSON the way an application would load them.

#![allow(clippy::unwrap_used)]

use mailaddr_validation::{
    EmailInputError, Identity, ValidationError, ValidationSettings, collect_addresses,
    validate_email, validate_identity,
};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("mailaddr_validation=trace")
        .with_test_writer()
        .try_init();
}

#[test]
fn limited_settings_from_json() {
    init_tracing();
    let settings = ValidationSettings::from_json(r#"{"policy": "limited"}"#).unwrap();

    let address = validate_email("alice@domain.example", &settings).unwrap();
    assert_eq!(address.address(), "alice@domain.example");

    assert_eq!(
        validate_email("\"\"@domain.example", &settings),
        Err(EmailInputError::QuotedLocalPart)
    );
    assert_eq!(
        validate_email("alice@domain.example.", &settings),
        Err(EmailInputError::InvalidDomain { position: 21 })
    );
}

#[test]
fn custom_settings_allow_empty_local_part() {
    init_tracing();
    let json = r#"{
        "policy": {
            "custom": {
                "check_local_part_length": false,
                "check_email_address_length": false,
                "allow_quoted_local_part": true,
                "allow_local_part_requiring_quoted_string": true,
                "allow_empty_local_part": true
            }
        }
    }"#;
    let settings = ValidationSettings::from_json(json).unwrap();

    let address = validate_email("\"\"@domain.example", &settings).unwrap();
    assert_eq!(address.local_part(), "");
}

#[test]
fn identity_with_invalid_email() {
    init_tracing();
    let identity = Identity::new("Alice", "alice@@domain.example");
    let errors = validate_identity(&identity, &ValidationSettings::default()).unwrap_err();

    assert_eq!(
        errors,
        vec![ValidationError::Email(EmailInputError::InvalidDomain {
            position: 6
        })]
    );
    assert_eq!(errors[0].field(), "email");
}

#[test]
fn header_addresses_are_relaxed() {
    init_tracing();
    let addresses = collect_addresses(["\"foo bar\"@domain.example", "user@"]);

    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0].local_part(), "foo bar");
}

proptest! {
    #[test]
    fn accepted_input_is_accepted_by_headers(
        local in "[a-z0-9]{1,10}(\\.[a-z0-9]{1,5}){0,2}",
        domain in "[a-z0-9]{1,10}\\.[a-z]{2,6}",
    ) {
        let input = format!("{local}@{domain}");
        let validated = validate_email(&input, &ValidationSettings::default()).unwrap();
        let collected = collect_addresses([input.as_str()]);

        prop_assert_eq!(collected, vec![validated]);
    }
}
