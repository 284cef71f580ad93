use std::sync::Arc;

use crate::api::router::{self, Route};
use crate::core::{config::Settings, telemetry};
use crate::services::auth::{AuthService, Session};
use crate::storage::{self, SlotStorage};
use crate::store::DataStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    store: DataStore,
    auth: AuthService,
}

impl AppState {
    /// Loads the data slot (or seed) and restores any persisted session.
    pub fn new(settings: Settings, storage: Arc<dyn SlotStorage>) -> Self {
        let store = DataStore::load(storage.clone(), settings.storage().data_key.clone());
        let auth = AuthService::new(store.clone(), storage, settings.storage().session_key.clone());
        auth.restore();

        Self { inner: Arc::new(InnerState { settings, store, auth }) }
    }

    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub fn store(&self) -> &DataStore {
        &self.inner.store
    }

    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    pub fn session(&self) -> Session {
        self.inner.auth.session()
    }

    /// Route shown for `path`, checked against the session as it is right now.
    pub fn navigate(&self, path: &str) -> Route {
        router::resolve(&self.session(), Route::parse(path))
    }
}

/// Environment-driven startup: `.env`, settings, tracing, slot storage.
pub fn bootstrap() -> anyhow::Result<AppState> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;

    let storage = storage::from_settings(&settings)?;
    let state = AppState::new(settings, storage);

    tracing::info!(
        environment = %state.settings().runtime().environment.as_str(),
        signed_in = state.session().is_authenticated(),
        "LMS state ready"
    );

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlotStorage;
    use crate::test_support;

    #[test]
    fn new_restores_persisted_session() {
        let settings = Settings::in_memory();
        let storage = Arc::new(MemorySlotStorage::new());
        storage.set(&settings.storage().session_key, "u-admin").expect("set");

        let state = AppState::new(settings, storage);

        let session = state.session();
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("u-admin"));
        assert_eq!(state.navigate("/users"), Route::Users);
    }

    #[test]
    fn navigate_follows_live_session() {
        let state = test_support::seeded_state();
        assert_eq!(state.navigate("/courses"), Route::Login);

        state.auth().login("teacher@example.com", "password123").expect("login");
        assert_eq!(state.navigate("/courses"), Route::Courses);
        assert_eq!(state.navigate("/users"), Route::Dashboard);
        assert_eq!(state.navigate("/login"), Route::Dashboard);

        state.store().delete_user("u-teacher");
        assert_eq!(state.navigate("/courses"), Route::Login);
    }

    #[test]
    fn clones_share_one_store() {
        let state = test_support::seeded_state();
        let other = state.clone();

        other.store().delete_course("c-js");

        assert_eq!(state.store().snapshot().courses.len(), 1);
    }
}
