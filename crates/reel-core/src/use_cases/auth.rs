//! Signup, login and current-user use cases.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Email, Password, Role, User};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, TokenService, UserRepository};

#[derive(Debug)]
pub struct SignUpInput {
    pub email: Email,
    pub password: Password,
    pub role: Option<Role>,
}

/// Registers a new account.
#[derive(Clone)]
pub struct SignUpUseCase {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl SignUpUseCase {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }

    pub async fn execute(&self, input: SignUpInput) -> Result<User, DomainError> {
        if self.users.exists_by_email(&input.email).await? {
            return Err(duplicate_email(&input.email));
        }

        let hash = self
            .passwords
            .hash(&input.password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let user = User::new(input.email, hash, input.role.unwrap_or_default());
        let saved = self.users.insert(user).await.map_err(|e| match e {
            // Lost a race with a concurrent signup for the same address.
            RepoError::Constraint(_) => DomainError::Duplicate("email is already registered".into()),
            other => other.into(),
        })?;

        tracing::info!(
            user_id = %saved.id,
            user_email = %saved.email.masked(),
            role = %saved.role,
            "User registered"
        );
        Ok(saved)
    }
}

fn duplicate_email(email: &Email) -> DomainError {
    DomainError::Duplicate(format!("email {email} is already registered"))
}

#[derive(Debug)]
pub struct LoginInput {
    pub email: Email,
    pub password: Password,
}

#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub access_token: String,
    pub expires_in: i64,
}

/// Exchanges credentials for an access token.
#[derive(Clone)]
pub struct LoginUseCase {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl LoginUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, DomainError> {
        // Unknown email and wrong password are indistinguishable to the caller.
        let Some(user) = self.users.find_by_email(&input.email).await? else {
            tracing::debug!(user_email = %input.email.masked(), "Login for unknown email");
            return Err(DomainError::Unauthorized);
        };

        let valid = self
            .passwords
            .verify(&input.password, &user.password_hash)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        if !valid {
            tracing::debug!(user_id = %user.id, "Login with wrong password");
            return Err(DomainError::Unauthorized);
        }

        let access_token = self
            .tokens
            .generate_token(&user)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(LoginOutput {
            access_token,
            expires_in: self.tokens.expiration_seconds(),
        })
    }
}

/// Loads the account behind an authenticated token.
#[derive(Clone)]
pub struct CurrentUserUseCase {
    users: Arc<dyn UserRepository>,
}

impl CurrentUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, user_id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "User",
                id: user_id,
            })
    }
}
