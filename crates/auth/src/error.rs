use bcrypt::BcryptError;
use thiserror::Error;

use storefront_core::{DomainError, UserId};

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("username {0} is already taken")]
    UsernameTaken(String),

    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("password hashing failed: {0}")]
    Hashing(#[from] BcryptError),
}
