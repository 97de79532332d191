//! # mailaddr
//!
//! RFC 5321 email address parsing with configurable strictness.
//!
//! ## Features
//!
//! - **Mailbox grammar**: dot-string and quoted-string local parts, DNS-style domains
//! - **Policies**: [`ParserConfig::RELAXED`] for stored addresses,
//!   [`ParserConfig::LIMITED`] for user input
//! - **Warnings**: length limits, quoting and empty local parts are reported on
//!   every parsed address
//! - **Diagnostics**: every failure carries its [`ErrorKind`] and character position
//!
//! Address literals (`user@[192.0.2.1]`), internationalized domain names and
//! non-ASCII local parts are not supported.
//!
//! ## Quick Start
//!
//! ```
//! use mailaddr::{EmailAddress, ErrorKind, ParserConfig, Warning};
//!
//! let address = EmailAddress::parse("\"foo bar\"@Domain.Example", ParserConfig::RELAXED)?;
//! assert_eq!(address.local_part(), "foo bar");
//! assert_eq!(address.normalized_address(), "\"foo bar\"@domain.example");
//! assert!(address.has_warning(Warning::QuotedStringInLocalPart));
//!
//! let error = EmailAddress::parse("\"foo bar\"@domain.example", ParserConfig::LIMITED)
//!     .unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::QuotedStringInLocalPart);
//! assert_eq!(error.position(), 0);
//! # Ok::<(), mailaddr::ParseError>(())
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ParserConfig`], [`Warning`] and
//!   [`ErrorKind`]; addresses and domains serialize as strings.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod address;
mod config;
mod cursor;
mod domain;
mod error;
mod local_part;
mod parser;
#[cfg(feature = "serde")]
mod serde_impl;

pub mod syntax;

pub use address::{EmailAddress, Warning};
pub use config::ParserConfig;
pub use domain::EmailDomain;
pub use error::{ErrorKind, ParseError, Result};
pub use parser::{parse, parse_or_none};
