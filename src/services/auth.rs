//! Session handling on top of the data store.
//!
//! Only the active user id is kept (in memory and in the session slot). The
//! user record is looked up in the current snapshot on every read, so a user
//! deleted while signed in reads as signed out from then on.

use std::sync::{Arc, PoisonError, RwLock};

use crate::api::errors::AuthError;
use crate::db::models::User;
use crate::db::types::Role;
use crate::repositories;
use crate::storage::SlotStorage;
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

#[derive(Clone)]
pub struct AuthService {
    inner: Arc<InnerAuth>,
}

struct InnerAuth {
    store: DataStore,
    storage: Arc<dyn SlotStorage>,
    session_key: String,
    active_user_id: RwLock<Option<String>>,
}

impl AuthService {
    /// Starts anonymous; call [`AuthService::restore`] to pick up a persisted session.
    pub fn new(
        store: DataStore,
        storage: Arc<dyn SlotStorage>,
        session_key: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(InnerAuth {
                store,
                storage,
                session_key: session_key.into(),
                active_user_id: RwLock::new(None),
            }),
        }
    }

    /// Replaces the live session with whatever the session slot holds. An
    /// empty, unreadable or dangling slot signs the user out, and a dangling
    /// id is dropped from the slot as well.
    pub fn restore(&self) -> Session {
        let stored = match self.inner.storage.get(&self.inner.session_key) {
            Ok(value) => value.map(|id| id.trim().to_string()).filter(|id| !id.is_empty()),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read persisted session; staying signed out");
                None
            }
        };

        let Some(user_id) = stored else {
            self.set_active(None);
            return Session::Anonymous;
        };

        let snapshot = self.inner.store.snapshot();
        if repositories::users::find_by_id(&snapshot, &user_id).is_none() {
            tracing::info!(user_id = %user_id, "Persisted session user no longer exists");
            self.set_active(None);
            self.clear_persisted();
            return Session::Anonymous;
        }

        tracing::info!(user_id = %user_id, "Restored session");
        self.set_active(Some(user_id));
        self.session()
    }

    /// Case-insensitive email, exact password. A failed attempt leaves any
    /// existing session untouched.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let snapshot = self.inner.store.snapshot();
        let Some(user) = repositories::users::find_by_credentials(&snapshot, email, password)
        else {
            tracing::warn!(email = %email, "Rejected login attempt");
            return Err(AuthError::InvalidCredentials);
        };

        let user = user.clone();
        self.set_active(Some(user.id.clone()));
        if let Err(err) = self.inner.storage.set(&self.inner.session_key, &user.id) {
            tracing::warn!(error = %err, user_id = %user.id, "Failed to persist session");
        }

        tracing::info!(user_id = %user.id, role = %user.role, "User signed in");
        Ok(user)
    }

    pub fn logout(&self) {
        if let Some(user_id) = self.active_user_id() {
            tracing::info!(user_id = %user_id, "User signed out");
        }
        self.set_active(None);
        self.clear_persisted();
    }

    /// Re-resolved from the latest snapshot on every call.
    pub fn current_user(&self) -> Option<User> {
        let user_id = self.active_user_id()?;
        let snapshot = self.inner.store.snapshot();
        repositories::users::find_by_id(&snapshot, &user_id).cloned()
    }

    pub fn session(&self) -> Session {
        match self.current_user() {
            Some(user) => Session::Authenticated(user),
            None => Session::Anonymous,
        }
    }

    pub fn active_user_id(&self) -> Option<String> {
        self.inner.active_user_id.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_active(&self, user_id: Option<String>) {
        *self.inner.active_user_id.write().unwrap_or_else(PoisonError::into_inner) = user_id;
    }

    fn clear_persisted(&self) {
        if let Err(err) = self.inner.storage.remove(&self.inner.session_key) {
            tracing::warn!(error = %err, "Failed to clear persisted session");
        }
    }
}
