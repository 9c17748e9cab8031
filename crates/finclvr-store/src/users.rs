//! User records.

use chrono::Utc;
use finclvr_core::{NewUser, User};

use crate::{MemStore, StoreError};

impl MemStore {
    #[must_use]
    pub fn get_user(&self, id: i64) -> Option<User> {
        self.tables.read().users.get(&id).cloned()
    }

    /// Scan for a user by email. Comparison is exact; callers normalise first.
    #[must_use]
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.tables
            .read()
            .users
            .values()
            .find(|user| user.email == email)
            .cloned()
    }

    /// Insert a user. No uniqueness checks happen here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdExhausted`] if no user id is left.
    pub fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write();
        let id = tables.user_ids.advance()?;
        let user = User {
            id,
            username: new.username,
            email: new.email,
            password: new.password,
            created_at: Utc::now(),
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }
}
