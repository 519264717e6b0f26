//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use kernel::identity::CurrentUser;
use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;

/// Account entity
///
/// Carries the password hash; everything leaving the crate goes through
/// [`CurrentUser`] or a DTO, which never include it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    /// Login identifier, unique
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: HashedPassword,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, password_hash: HashedPassword, display_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email,
            password_hash,
            display_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public identity projection (no password hash)
    pub fn identity(&self) -> CurrentUser {
        CurrentUser {
            id: self.id,
            email: self.email.as_str().to_string(),
            display_name: self.display_name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
