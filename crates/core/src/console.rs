//! Admin console gate: a single shared passphrase.
//!
//! There are no user accounts, sessions, or expiry. The gate holds one
//! passphrase, sourced from the environment at startup, and answers
//! yes/no to each attempt. A gate with no configured passphrase denies
//! every attempt rather than admitting everyone.

use crate::error::CoreError;

/// Environment variable holding the shared console passphrase.
pub const ADMIN_PASSPHRASE_ENV: &str = "ADMIN_PASSPHRASE";

/// Passphrase check guarding the admin console surface.
#[derive(Debug, Clone)]
pub struct AdminGate {
    passphrase: Option<String>,
}

impl AdminGate {
    /// Gate with a known passphrase.
    pub fn new(passphrase: impl Into<String>) -> Self {
        AdminGate {
            passphrase: Some(passphrase.into()),
        }
    }

    /// Gate with no passphrase configured. Every attempt is denied.
    pub fn locked() -> Self {
        AdminGate { passphrase: None }
    }

    /// Build the gate from `ADMIN_PASSPHRASE`. An unset or empty variable
    /// leaves the gate locked.
    pub fn from_env() -> Self {
        match std::env::var(ADMIN_PASSPHRASE_ENV) {
            Ok(value) if !value.is_empty() => AdminGate::new(value),
            _ => AdminGate::locked(),
        }
    }

    /// Whether a passphrase is configured at all.
    pub fn is_configured(&self) -> bool {
        self.passphrase.is_some()
    }

    /// Check an attempt against the configured passphrase.
    pub fn verify(&self, attempt: &str) -> bool {
        match &self.passphrase {
            Some(expected) => attempt == expected,
            None => false,
        }
    }

    /// As [`AdminGate::verify`], but as a propagatable error for callers
    /// that gate an operation rather than a login form.
    pub fn require(&self, attempt: &str) -> Result<(), CoreError> {
        if self.verify(attempt) {
            Ok(())
        } else {
            Err(CoreError::Unauthorized(
                "Invalid access code".to_string(),
            ))
        }
    }
}
