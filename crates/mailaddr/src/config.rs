//! Parser policy.

/// Decides which address warnings are turned into parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct ParserConfig {
    /// Reject local parts longer than 64 characters.
    pub check_local_part_length: bool,
    /// Reject addresses longer than 254 characters.
    pub check_email_address_length: bool,
    /// Accept local parts written as a quoted string.
    pub allow_quoted_local_part: bool,
    /// Accept local parts that can only be written as a quoted string.
    ///
    /// Has no effect unless `allow_quoted_local_part` is set.
    pub allow_local_part_requiring_quoted_string: bool,
    /// Accept an empty local part (`""@domain.example`).
    ///
    /// Has no effect unless both quoting flags are set.
    pub allow_empty_local_part: bool,
}

impl ParserConfig {
    /// Permissive policy for addresses that are already stored or trusted,
    /// e.g. taken from a message header.
    pub const RELAXED: Self = Self {
        check_local_part_length: false,
        check_email_address_length: false,
        allow_quoted_local_part: true,
        allow_local_part_requiring_quoted_string: true,
        allow_empty_local_part: false,
    };

    /// Restrictive policy for addresses typed in by a user, e.g. during
    /// account setup.
    pub const LIMITED: Self = Self {
        check_local_part_length: true,
        check_email_address_length: true,
        allow_quoted_local_part: false,
        allow_local_part_requiring_quoted_string: false,
        allow_empty_local_part: false,
    };

    /// Sets whether the local part length is checked.
    #[must_use]
    pub const fn with_local_part_length_check(mut self, enabled: bool) -> Self {
        self.check_local_part_length = enabled;
        self
    }

    /// Sets whether the total address length is checked.
    #[must_use]
    pub const fn with_email_address_length_check(mut self, enabled: bool) -> Self {
        self.check_email_address_length = enabled;
        self
    }

    /// Sets whether quoted local parts are accepted.
    #[must_use]
    pub const fn with_quoted_local_part(mut self, allowed: bool) -> Self {
        self.allow_quoted_local_part = allowed;
        self
    }

    /// Sets whether local parts that need quoting are accepted.
    #[must_use]
    pub const fn with_local_part_requiring_quoted_string(mut self, allowed: bool) -> Self {
        self.allow_local_part_requiring_quoted_string = allowed;
        self
    }

    /// Sets whether an empty local part is accepted.
    #[must_use]
    pub const fn with_empty_local_part(mut self, allowed: bool) -> Self {
        self.allow_empty_local_part = allowed;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::RELAXED
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
    fn test_default_is_relaxed() {
        assert_eq!(ParserConfig::default(), ParserConfig::RELAXED);
    }

    #[test]
    fn test_builders() {
        let config = ParserConfig::LIMITED
            .with_quoted_local_part(true)
            .with_local_part_requiring_quoted_string(true)
            .with_empty_local_part(true)
            .with_local_part_length_check(false)
            .with_email_address_length_check(false);

        assert_eq!(config, ParserConfig::RELAXED.with_empty_local_part(true));
    }
}
