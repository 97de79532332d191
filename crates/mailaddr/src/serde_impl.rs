//! Serde support for the address values.
//!
//! Addresses and domains are serialized as strings. Addresses are parsed
//! with [`ParserConfig::RELAXED`] plus empty local parts when deserialized,
//! so any address a config accepted reads back.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{EmailAddress, EmailDomain, ParserConfig};

const DESERIALIZE_CONFIG: ParserConfig = ParserConfig::RELAXED.with_empty_local_part(true);

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.address())
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s, DESERIALIZE_CONFIG).map_err(D::Error::custom)
    }
}

impl Serialize for EmailDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EmailDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
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
    fn test_address_as_string() {
        let address: EmailAddress = "\"foo bar\"@Domain.Example".parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, r#""\"foo bar\"@Domain.Example""#);

        let back: EmailAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn test_empty_local_part_reads_back() {
        let config = ParserConfig::RELAXED.with_empty_local_part(true);
        let address = EmailAddress::parse("\"\"@domain.example", config).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, r#""\"\"@domain.example""#);

        let back: EmailAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
        assert_eq!(back.local_part(), "");
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let result: Result<EmailAddress, _> = serde_json::from_str(r#""user@[127.0.0.1]""#);
        assert!(result.unwrap_err().to_string().contains("Address literals are not supported"));
    }

    #[test]
    fn test_domain_as_string() {
        let domain: EmailDomain = serde_json::from_str(r#""Domain.Example""#).unwrap();
        assert_eq!(domain.normalized(), "domain.example");
        assert_eq!(serde_json::to_string(&domain).unwrap(), r#""Domain.Example""#);
    }

    #[test]
    fn test_config_fields() {
        let json = serde_json::to_value(ParserConfig::LIMITED).unwrap();
        assert_eq!(json["check_local_part_length"], true);
        assert_eq!(json["allow_quoted_local_part"], false);

        let config: ParserConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config, ParserConfig::LIMITED);
    }
}
