use crate::db::models::{DataState, User};
use crate::db::types::Role;

pub const UNKNOWN_USER: &str = "Unknown";

pub fn find_by_id<'a>(state: &'a DataState, id: &str) -> Option<&'a User> {
    state.users.iter().find(|user| user.id == id)
}

/// Case-insensitive; with duplicate emails the earliest user wins.
pub fn find_by_email<'a>(state: &'a DataState, email: &str) -> Option<&'a User> {
    state.users.iter().find(|user| user.email.to_lowercase() == email.to_lowercase())
}

/// Login lookup: case-insensitive email, exact password.
pub fn find_by_credentials<'a>(
    state: &'a DataState,
    email: &str,
    password: &str,
) -> Option<&'a User> {
    state
        .users
        .iter()
        .find(|user| user.email.to_lowercase() == email.to_lowercase() && user.password == password)
}

pub fn with_role(state: &DataState, role: Role) -> impl Iterator<Item = &User> {
    state.users.iter().filter(move |user| user.role == role)
}

pub fn teachers(state: &DataState) -> Vec<&User> {
    with_role(state, Role::Teacher).collect()
}

pub fn name_or_unknown<'a>(state: &'a DataState, id: &str) -> &'a str {
    find_by_id(state, id).map(|user| user.name.as_str()).unwrap_or(UNKNOWN_USER)
}
