//! User accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, UserId};

use crate::Role;

/// A registered account. The password is only ever held as a bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub last_login: DateTime<Utc>,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing, default)]
    password_hash: String,
}

impl User {
    pub(crate) fn new(
        id: UserId,
        username: impl Into<String>,
        role: Role,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Self {
        let username = username.into();
        Self {
            id,
            email: format!("{username}@example.com"),
            username,
            role,
            last_login: now,
            phone: None,
            first_name: None,
            last_name: None,
            created_at: now,
            password_hash,
        }
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// "First Last", falling back to the username.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => self.username.clone(),
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl Registration {
    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.username.trim().is_empty() {
            return Err(DomainError::validation("username cannot be empty"));
        }
        if self.password.is_empty() {
            return Err(DomainError::validation("password cannot be empty"));
        }
        Ok(())
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

impl User {
    pub(crate) fn from_registration(
        id: UserId,
        registration: Registration,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Self {
        let mut user = Self::new(id, registration.username, Role::User, password_hash, now);
        user.first_name = non_empty(registration.first_name);
        user.last_name = non_empty(registration.last_name);
        user.phone = non_empty(registration.phone);
        user
    }
}
