//! Password hashing.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::AuthResult;

/// bcrypt with a fixed work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher {
    /// `cost` must be within bcrypt's `4..=31`; out-of-range costs fail on first hash.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn hash(&self, password: &str) -> AuthResult<String> {
        Ok(hash(password, self.cost)?)
    }

    pub fn verify(&self, password: &str, password_hash: &str) -> AuthResult<bool> {
        Ok(verify(password, password_hash)?)
    }
}
