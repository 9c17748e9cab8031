use finclvr_core::{NewUser, User};

use crate::{MemStore, StoreError};

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_USER_EMAIL: &str = "demo@finclvr.app";

/// Ensure the demo account used by onboarding exists.
///
/// Returns the existing user when one with [`DEMO_USER_EMAIL`] is already
/// stored; on a fresh store this becomes user id 1.
///
/// # Errors
///
/// Returns [`StoreError::IdExhausted`] if a user id cannot be assigned.
pub fn seed_demo_user(store: &MemStore) -> Result<User, StoreError> {
    if let Some(existing) = store.get_user_by_email(DEMO_USER_EMAIL) {
        return Ok(existing);
    }

    store.create_user(NewUser {
        username: DEMO_USERNAME.to_string(),
        email: DEMO_USER_EMAIL.to_string(),
        password: String::new(),
    })
}
