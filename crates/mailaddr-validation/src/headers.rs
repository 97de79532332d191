//! Addresses taken from message headers.

use std::collections::HashSet;

use mailaddr::{EmailAddress, ParserConfig};
use tracing::{trace, warn};

/// Parses already-extracted header address values with
/// [`ParserConfig::RELAXED`].
///
/// Values that do not parse are skipped. The result keeps input order and
/// contains each address once.
pub fn collect_addresses<'a, I>(values: I) -> Vec<EmailAddress>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut addresses: Vec<EmailAddress> = Vec::new();
    let mut seen: HashSet<EmailAddress> = HashSet::new();

    for value in values {
        match EmailAddress::parse(value.trim(), ParserConfig::RELAXED) {
            Ok(address) => {
                if !address.warnings().is_empty() {
                    trace!(warnings = ?address.warnings(), "Header address has warnings");
                }
                if seen.insert(address.clone()) {
                    addresses.push(address);
                }
            }
            Err(error) => {
                warn!(
                    kind = %error.kind(),
                    position = error.position(),
                    "Skipping unparsable header address"
                );
            }
        }
    }

    addresses
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
    fn test_collect_skips_invalid() {
        let addresses = collect_addresses([
            "alice@domain.example",
            "not an address",
            "\"bob smith\"@domain.example",
            "carol@[10.0.0.1]",
        ]);

        let rendered: Vec<&str> = addresses.iter().map(EmailAddress::address).collect();
        assert_eq!(
            rendered,
            vec!["alice@domain.example", "\"bob smith\"@domain.example"]
        );
    }

    #[test]
    fn test_collect_removes_duplicates() {
        let addresses = collect_addresses([
            "alice@domain.example",
            " alice@DOMAIN.example ",
            "\"alice\"@domain.example",
            "Alice@domain.example",
        ]);

        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].address(), "alice@domain.example");
        assert_eq!(addresses[1].address(), "Alice@domain.example");
    }

    #[test]
    fn test_collect_many_duplicates_keeps_first_occurrence_order() {
        let values: Vec<String> = (0..500)
            .map(|i| format!("user{}@Domain.Example", i % 50))
            .collect();
        let addresses = collect_addresses(values.iter().map(String::as_str));

        assert_eq!(addresses.len(), 50);
        for (i, address) in addresses.iter().enumerate() {
            assert_eq!(address.local_part(), format!("user{i}"));
        }
    }

    #[test]
    fn test_collect_empty() {
        assert!(collect_addresses(std::iter::empty()).is_empty());
    }
}
