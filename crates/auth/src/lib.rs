//! `storefront-auth`: shopper and admin accounts.
//!
//! In-process user registry with bcrypt-hashed passwords and a single
//! signed-in session. No HTTP, no tokens.

pub mod error;
pub mod password;
pub mod roles;
pub mod store;
pub mod user;

pub use error::{AuthError, AuthResult};
pub use password::PasswordHasher;
pub use roles::Role;
pub use store::AuthStore;
pub use user::{Registration, User};
