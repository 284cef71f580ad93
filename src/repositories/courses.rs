use crate::db::models::{Course, DataState, User};
use crate::db::types::Role;

pub const UNKNOWN_COURSE: &str = "Unknown course";

pub fn find_by_id<'a>(state: &'a DataState, id: &str) -> Option<&'a Course> {
    state.courses.iter().find(|course| course.id == id)
}

pub fn taught_by<'a>(state: &'a DataState, teacher_id: &str) -> Vec<&'a Course> {
    state.courses.iter().filter(|course| course.teacher_id == teacher_id).collect()
}

/// Teachers see their own courses; admins and students see all of them.
pub fn visible_to<'a>(state: &'a DataState, user: &User) -> Vec<&'a Course> {
    match user.role {
        Role::Teacher => taught_by(state, &user.id),
        Role::Admin | Role::Student => state.courses.iter().collect(),
    }
}

pub fn title_or_unknown<'a>(state: &'a DataState, id: &str) -> &'a str {
    find_by_id(state, id).map(|course| course.title.as_str()).unwrap_or(UNKNOWN_COURSE)
}
