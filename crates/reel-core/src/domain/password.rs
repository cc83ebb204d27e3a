use std::fmt;

use crate::error::DomainError;

const MIN_PASSWORD_LEN: usize = 6;
const MAX_PASSWORD_LEN: usize = 100;

/// Plain-text password as supplied by a client. Never printed.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(plain: impl Into<String>) -> Result<Self, DomainError> {
        let plain = plain.into();
        let len = plain.chars().count();
        if len == 0 {
            return Err(DomainError::validation("password must not be empty"));
        }
        if len < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if len > MAX_PASSWORD_LEN {
            return Err(DomainError::validation(
                "password exceeds maximum length",
            ));
        }
        Ok(Self(plain))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Encoded password hash as produced by a `PasswordService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn from_hash(hash: impl Into<String>) -> Result<Self, DomainError> {
        let hash = hash.into();
        if hash.is_empty() {
            return Err(DomainError::validation("password hash must not be empty"));
        }
        Ok(Self(hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
