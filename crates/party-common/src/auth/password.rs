//! Credential hashing for account backends
//!
//! Passwords are stored as Argon2id PHC strings.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Check a password against a stored PHC string
///
/// # Errors
/// Returns an error if the stored hash cannot be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password rules applied at sign-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRules {
    pub min_length: usize,
    pub require_letter: bool,
    pub require_digit: bool,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_letter: true,
            require_digit: true,
        }
    }
}

impl PasswordRules {
    /// First rule the password breaks, as a user-facing message
    #[must_use]
    pub fn violation(&self, password: &str) -> Option<String> {
        if password.chars().count() < self.min_length {
            return Some(format!(
                "Password must be at least {} characters long",
                self.min_length
            ));
        }
        if self.require_letter && !password.chars().any(char::is_alphabetic) {
            return Some("Password must contain a letter".to_string());
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Some("Password must contain a digit".to_string());
        }
        None
    }
}

/// Check a password against the default rules
///
/// # Errors
/// Returns `AppError::Validation` naming the first broken rule
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    match PasswordRules::default().violation(password) {
        Some(msg) => Err(AppError::Validation(msg)),
        None => Ok(()),
    }
}

/// Hashing service shared by account backends
#[derive(Debug, Clone, Default)]
pub struct PasswordService {
    rules: PasswordRules,
}

impl PasswordService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rules(rules: PasswordRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> PasswordRules {
        self.rules
    }

    /// Reject passwords that break this service's rules
    ///
    /// # Errors
    /// Returns `AppError::Validation` naming the first broken rule
    pub fn check_strength(&self, password: &str) -> Result<(), AppError> {
        match self.rules.violation(password) {
            Some(msg) => Err(AppError::Validation(msg)),
            None => Ok(()),
        }
    }

    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    /// # Errors
    /// Returns an error if the stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        verify_password(password, hash)
    }

    /// Verify a password and return an error if invalid
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if self.verify(password, hash)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}
