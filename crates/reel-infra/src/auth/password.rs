//! Argon2 password hashing implementation.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use reel_core::domain::{Password, PasswordHash};
use reel_core::ports::{AuthError, PasswordService};

/// Argon2-based password service producing PHC strings.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let encoded = self
            .argon2
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|e| AuthError::HashingError(e.to_string()))?
            .to_string();

        PasswordHash::from_hash(encoded).map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &Password, hash: &PasswordHash) -> Result<bool, AuthError> {
        let parsed_hash =
            PhcHash::new(hash.as_str()).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.expose().as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = Argon2PasswordService::new();
        let password = Password::new("secure_password_123").unwrap();

        let hash = service.hash(&password).unwrap();
        assert!(hash.as_str().starts_with("$argon2"));
        assert!(service.verify(&password, &hash).unwrap());

        let wrong = Password::new("wrong_password").unwrap();
        assert!(!service.verify(&wrong, &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let service = Argon2PasswordService::new();
        let password = Password::new("secret123").unwrap();

        let first = service.hash(&password).unwrap();
        let second = service.hash(&password).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let service = Argon2PasswordService::new();
        let password = Password::new("secret123").unwrap();
        let garbage = PasswordHash::from_hash("not-a-phc-string").unwrap();

        assert!(matches!(
            service.verify(&password, &garbage),
            Err(AuthError::HashingError(_))
        ));
    }
}
