//! # mailaddr-validation
//!
//! Address validation for the places that consume [`mailaddr`]:
//!
//! - **Account setup** - user-entered addresses, validated with
//!   [`ParserConfig::LIMITED`](mailaddr::ParserConfig::LIMITED) by default
//! - **Message headers** - stored addresses, parsed with
//!   [`ParserConfig::RELAXED`](mailaddr::ParserConfig::RELAXED)
//! - **Settings** - the validation policy, loadable from JSON

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod headers;
mod settings;
pub mod validation;

pub use error::{EmailInputError, SettingsError};
pub use headers::collect_addresses;
pub use settings::{Policy, ValidationSettings};
pub use validation::{Identity, ValidationError, validate_email, validate_identity};
