//! # Mock account backend
//!
//! [`AccountService`] is the whole "server" of the demo. It keeps three values
//! in a [`KeyValueStore`]:
//!
//! | Key (default) | Value |
//! |---------------|-------|
//! | `orayze_users` | JSON array of [`UserRecord`] |
//! | `orayze_current_user` | JSON [`SessionUser`], the session pointer |
//! | `orayze_remember` | `true` when "remember me" was ticked |
//!
//! Every mutation reads the whole value, changes it in memory and writes it
//! back. Nothing spans two keys atomically, and two tabs writing at once can
//! lose an update. Absent or malformed values read as empty.
//!
//! The service itself is synchronous; the simulated network latency is
//! applied by the caller through a [`crate::Scheduler`].

use store::{load_json, save_json, KeyValueStore, StorageKeys, StoreError};

use crate::auth::validation::{SignUpForm, ValidationError};
use crate::clock::{Clock, SystemClock};
use crate::models::{SessionUser, UserRecord};

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Email already exists. Please use a different email.")]
    DuplicateEmail,
    /// Deliberately identical for unknown emails and wrong passwords.
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
    #[error("Could not save your changes. Please try again.")]
    Storage(#[from] StoreError),
}

/// Registration and authentication against a local key-value store.
pub struct AccountService<S, C = SystemClock> {
    store: S,
    clock: C,
    keys: StorageKeys,
}

impl<S: KeyValueStore> AccountService<S, SystemClock> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self::with_clock(store, SystemClock, keys)
    }
}

impl<S: KeyValueStore, C: Clock> AccountService<S, C> {
    pub fn with_clock(store: S, clock: C, keys: StorageKeys) -> Self {
        Self { store, clock, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All stored accounts, oldest first.
    pub fn users(&self) -> Vec<UserRecord> {
        load_json(&self.store, &self.keys.users_key).unwrap_or_default()
    }

    /// The signed-in account, if any.
    ///
    /// The pointer is trusted as-is: it is not checked against the user list.
    pub fn current_session(&self) -> Option<SessionUser> {
        load_json(&self.store, &self.keys.session_key)
    }

    /// Whether "remember me" was ticked at the last sign-in.
    ///
    /// Nothing in the app changes behavior based on this flag.
    pub fn is_remembered(&self) -> bool {
        load_json::<bool, _>(&self.store, &self.keys.remember_key).unwrap_or(false)
    }

    /// Validate the form and append a new account.
    pub fn sign_up(&self, form: &SignUpForm) -> Result<UserRecord, AccountError> {
        form.validate()?;

        let mut users = self.users();
        if users.iter().any(|u| u.email == form.email) {
            tracing::info!("Sign-up rejected: email already registered");
            return Err(AccountError::DuplicateEmail);
        }

        let now = self.clock.now();
        let user = UserRecord {
            id: now.timestamp_millis().to_string(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            created_at: now,
        };
        users.push(user.clone());
        save_json(&self.store, &self.keys.users_key, &users)?;

        tracing::info!("Created account {} ({} total)", user.id, users.len());
        Ok(user)
    }

    /// Exact, case-sensitive match on email and password.
    ///
    /// On failure the existing session, if any, is left untouched.
    pub fn sign_in(
        &self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> Result<SessionUser, AccountError> {
        let session = self
            .users()
            .iter()
            .find(|u| u.email == email && u.password == password)
            .map(UserRecord::to_session)
            .ok_or(AccountError::InvalidCredentials)?;

        save_json(&self.store, &self.keys.session_key, &session)?;
        if remember {
            save_json(&self.store, &self.keys.remember_key, &true)?;
        }

        tracing::info!("Signed in account {}", session.id);
        Ok(session)
    }

    /// Clear the session pointer and the remember marker.
    pub fn log_out(&self) -> Result<(), AccountError> {
        self.store.remove_item(&self.keys.session_key)?;
        self.store.remove_item(&self.keys.remember_key)?;
        tracing::info!("Signed out");
        Ok(())
    }
}
