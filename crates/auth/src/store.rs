//! Account registry and the signed-in session.

use chrono::{TimeZone, Utc};

use storefront_core::{find_by_id, find_by_id_mut, position_by_id, DomainError, UserId};

use crate::error::{AuthError, AuthResult};
use crate::password::PasswordHasher;
use crate::roles::Role;
use crate::user::{Registration, User};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct AuthStore {
    users: Vec<User>,
    /// Signed-in user. The role is always read from `users`, so promotions
    /// and demotions apply to the live session.
    current: Option<UserId>,
    hasher: PasswordHasher,
}

impl AuthStore {
    /// Empty registry.
    pub fn new(hasher: PasswordHasher) -> Self {
        Self {
            users: Vec::new(),
            current: None,
            hasher,
        }
    }

    /// Registry seeded with the built-in `admin` account.
    pub fn with_default_admin(hasher: PasswordHasher) -> AuthResult<Self> {
        let mut store = Self::new(hasher);
        let password_hash = store.hasher.hash(DEFAULT_ADMIN_PASSWORD)?;
        let created_at = Utc
            .with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);

        let mut admin = User::new(
            UserId::new("1")?,
            DEFAULT_ADMIN_USERNAME,
            Role::Admin,
            password_hash,
            Utc::now(),
        );
        admin.created_at = created_at;
        admin.phone = Some("0912345678".to_string());
        admin.first_name = Some("Admin".to_string());
        admin.last_name = Some("User".to_string());
        store.users.push(admin);
        Ok(store)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        find_by_id(&self.users, id)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref().and_then(|id| self.user(id))
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(User::is_admin)
    }

    /// Sign in. Unknown usernames and wrong passwords fail the same way.
    pub fn login(&mut self, username: &str, password: &str) -> AuthResult<&User> {
        let Some(index) = self.users.iter().position(|u| u.username == username) else {
            tracing::info!(username, "login rejected");
            return Err(AuthError::InvalidCredentials);
        };
        if !self.hasher.verify(password, self.users[index].password_hash())? {
            tracing::info!(username, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let user = &mut self.users[index];
        user.last_login = Utc::now();
        self.current = Some(user.id.clone());
        tracing::info!(user_id = %user.id, role = %user.role, "user signed in");
        Ok(&self.users[index])
    }

    pub fn logout(&mut self) {
        if let Some(id) = self.current.take() {
            tracing::info!(user_id = %id, "user signed out");
        }
    }

    /// Create a shopper account and sign it in.
    pub fn register(&mut self, registration: Registration) -> AuthResult<&User> {
        registration.validate()?;
        if self.users.iter().any(|u| u.username == registration.username) {
            return Err(AuthError::UsernameTaken(registration.username));
        }

        let password_hash = self.hasher.hash(&registration.password)?;
        let id = self.next_id()?;
        let user = User::from_registration(id.clone(), registration, password_hash, Utc::now());
        tracing::info!(user_id = %id, username = %user.username, "user registered");

        self.users.push(user);
        self.current = Some(id);
        let index = self.users.len() - 1;
        Ok(&self.users[index])
    }

    pub fn promote_user(&mut self, id: &UserId) -> AuthResult<()> {
        self.set_role(id, Role::Admin)
    }

    pub fn demote_user(&mut self, id: &UserId) -> AuthResult<()> {
        self.set_role(id, Role::User)
    }

    /// Delete an account. Removing the signed-in user ends the session.
    pub fn remove_user(&mut self, id: &UserId) -> AuthResult<User> {
        let index = position_by_id(&self.users, id)
            .ok_or_else(|| AuthError::UserNotFound(id.clone()))?;
        if self.current.as_ref() == Some(id) {
            self.current = None;
        }
        tracing::info!(user_id = %id, "user removed");
        Ok(self.users.remove(index))
    }

    fn set_role(&mut self, id: &UserId, role: Role) -> AuthResult<()> {
        let user = find_by_id_mut(&mut self.users, id)
            .ok_or_else(|| AuthError::UserNotFound(id.clone()))?;
        user.role = role;
        tracing::info!(user_id = %id, %role, "user role changed");
        Ok(())
    }

    /// `count + 1`, skipping ids still held after removals.
    fn next_id(&self) -> Result<UserId, DomainError> {
        let mut candidate = self.users.len() + 1;
        while self.users.iter().any(|u| u.id.as_str() == candidate.to_string()) {
            candidate += 1;
        }
        UserId::new(candidate.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> AuthStore {
        AuthStore::with_default_admin(PasswordHasher::new(4)).unwrap()
    }

    fn registration(username: &str) -> Registration {
        Registration {
            username: username.to_string(),
            password: "hunter2".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: String::new(),
        }
    }

    fn uid(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn default_admin_can_sign_in() {
        let mut auth = store();
        assert!(!auth.is_authenticated());

        let admin = auth.login("admin", "admin123").unwrap();
        assert_eq!(admin.email, "admin@example.com");
        assert_ne!(admin.password_hash(), "admin123");
        assert!(auth.is_authenticated());
        assert!(auth.is_admin());

        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(!auth.is_admin());
    }

    #[test]
    fn wrong_password_and_unknown_user_are_rejected() {
        let mut auth = store();
        assert!(matches!(auth.login("admin", "nope"), Err(AuthError::InvalidCredentials)));
        assert!(matches!(auth.login("ghost", "admin123"), Err(AuthError::InvalidCredentials)));
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn register_signs_the_new_user_in() {
        let mut auth = store();
        let user = auth.register(registration("jane")).unwrap();
        assert_eq!(user.id.as_str(), "2");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.phone, None);
        assert_eq!(auth.current_user().unwrap().username, "jane");
        assert!(!auth.is_admin());

        auth.logout();
        auth.login("jane", "hunter2").unwrap();
        assert!(auth.is_authenticated());
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let mut auth = store();
        auth.register(registration("jane")).unwrap();
        match auth.register(registration("jane")) {
            Err(AuthError::UsernameTaken(name)) => assert_eq!(name, "jane"),
            other => panic!("Expected UsernameTaken error, got {other:?}"),
        }
        assert_eq!(auth.users().len(), 2);
    }

    #[test]
    fn role_changes_apply_to_the_live_session() {
        let mut auth = store();
        auth.register(registration("jane")).unwrap();
        assert!(!auth.is_admin());

        auth.promote_user(&uid("2")).unwrap();
        assert!(auth.is_admin());

        auth.demote_user(&uid("2")).unwrap();
        assert!(!auth.is_admin());

        assert!(matches!(auth.promote_user(&uid("99")), Err(AuthError::UserNotFound(_))));
    }

    #[test]
    fn removing_the_current_user_ends_the_session() {
        let mut auth = store();
        auth.register(registration("jane")).unwrap();
        let removed = auth.remove_user(&uid("2")).unwrap();
        assert_eq!(removed.username, "jane");
        assert!(!auth.is_authenticated());
        assert!(auth.remove_user(&uid("2")).is_err());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut auth = store();
        auth.register(registration("a")).unwrap();
        auth.register(registration("b")).unwrap();
        auth.remove_user(&uid("2")).unwrap();
        let user = auth.register(registration("c")).unwrap();
        assert_eq!(user.id.as_str(), "4");
    }

    #[test]
    fn empty_registration_is_a_domain_error() {
        let mut auth = store();
        assert!(matches!(
            auth.register(Registration::default()),
            Err(AuthError::Domain(DomainError::Validation(_)))
        ));
    }
}
