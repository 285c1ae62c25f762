//! Username rules - length bounds, character class, reserved words
//!
//! The availability check needs the backend and lives in the user repository;
//! everything else is decided here without I/O.

use std::collections::HashSet;
use std::fmt;

/// Names that can never be claimed, compared case-insensitively
pub const DEFAULT_RESERVED_USERNAMES: &[&str] = &[
    "admin",
    "administrator",
    "root",
    "system",
    "support",
    "help",
    "moderator",
    "mod",
    "staff",
    "official",
    "partygallery",
    "party_gallery",
    "api",
    "www",
    "null",
    "undefined",
];

/// Outcome of validating a requested username
///
/// The first failing check wins, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsernameValidation {
    Valid,
    TooShort,
    TooLong,
    InvalidCharacters,
    Reserved,
    AlreadyTaken,
}

impl UsernameValidation {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Stable code for clients
    pub fn code(&self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::TooShort => "TOO_SHORT",
            Self::TooLong => "TOO_LONG",
            Self::InvalidCharacters => "INVALID_CHARACTERS",
            Self::Reserved => "RESERVED",
            Self::AlreadyTaken => "ALREADY_TAKEN",
        }
    }
}

impl fmt::Display for UsernameValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Valid => "username is valid",
            Self::TooShort => "username is too short",
            Self::TooLong => "username is too long",
            Self::InvalidCharacters => "username may only contain letters, digits and underscores",
            Self::Reserved => "username is reserved",
            Self::AlreadyTaken => "username is already taken",
        };
        f.write_str(msg)
    }
}

/// Username policy used by the user repository
///
/// A failed availability lookup is reported as an error unless
/// `fail_open_on_lookup_error` is set. Older clients accepted the name in
/// that case; set the flag (`USERNAME_FAIL_OPEN=true`) to keep that behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernamePolicy {
    pub min_length: usize,
    pub max_length: usize,
    /// Lowercased reserved words
    reserved: HashSet<String>,
    /// Report `Valid` instead of an error when the availability lookup fails
    pub fail_open_on_lookup_error: bool,
}

impl Default for UsernamePolicy {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 30,
            reserved: DEFAULT_RESERVED_USERNAMES
                .iter()
                .map(|word| (*word).to_string())
                .collect(),
            fail_open_on_lookup_error: false,
        }
    }
}

impl UsernamePolicy {
    /// Create a policy with custom bounds and the default reserved words
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            ..Default::default()
        }
    }

    /// Replace the reserved word list
    pub fn with_reserved<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reserved = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        self
    }

    pub fn with_fail_open(mut self, fail_open: bool) -> Self {
        self.fail_open_on_lookup_error = fail_open;
        self
    }

    /// Case-insensitive reserved word lookup
    pub fn is_reserved(&self, username: &str) -> bool {
        self.reserved.contains(&username.to_lowercase())
    }

    /// Run the offline checks (length, charset, reserved).
    ///
    /// Returns the first failure, or `None` when only the availability check
    /// remains.
    pub fn check_format(&self, username: &str) -> Option<UsernameValidation> {
        let length = username.chars().count();
        if length < self.min_length {
            return Some(UsernameValidation::TooShort);
        }
        if length > self.max_length {
            return Some(UsernameValidation::TooLong);
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Some(UsernameValidation::InvalidCharacters);
        }
        if self.is_reserved(username) {
            return Some(UsernameValidation::Reserved);
        }
        None
    }
}
