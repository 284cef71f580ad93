//! Core of a small learning-management app: a persisted in-process data
//! store, a session service and a role gate for navigation.

pub mod api;
pub mod core;
pub mod db;
pub mod repositories;
pub mod schemas;
pub mod services;
pub mod storage;
pub mod store;

#[cfg(test)]
mod test_support;

pub use crate::api::errors::{AccessError, AuthError};
pub use crate::api::guards::{authorize, Decision};
pub use crate::api::router::Route;
pub use crate::core::config::Settings;
pub use crate::core::state::{bootstrap, AppState};
pub use crate::db::models::{Assignment, Course, DataState, Submission, User};
pub use crate::db::types::{Role, SubmissionStatus};
pub use crate::services::auth::{AuthService, Session};
pub use crate::store::{DataAction, DataStore};
