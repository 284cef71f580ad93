//! Role-to-capability rules the views apply around store mutators.
//!
//! Admins manage everything. Teachers manage the courses they teach and the
//! assignments inside them. Students only read, and submit for themselves.

use crate::api::errors::AccessError;
use crate::db::models::{Assignment, Course, DataState, User};
use crate::db::types::Role;
use crate::repositories;

pub fn can_manage_users(user: &User) -> bool {
    user.role == Role::Admin
}

pub fn can_manage_course(user: &User, course: &Course) -> bool {
    can_create_course_for(user, &course.teacher_id)
}

/// Teachers may only create courses they teach themselves.
pub fn can_create_course_for(user: &User, teacher_id: &str) -> bool {
    match user.role {
        Role::Admin => true,
        Role::Teacher => user.id == teacher_id,
        Role::Student => false,
    }
}

pub fn can_manage_assignment(state: &DataState, user: &User, assignment: &Assignment) -> bool {
    can_create_assignment_in(state, user, &assignment.course_id)
}

/// A teacher needs an existing course they teach; admins may use any course id.
pub fn can_create_assignment_in(state: &DataState, user: &User, course_id: &str) -> bool {
    match user.role {
        Role::Admin => true,
        Role::Teacher => repositories::courses::find_by_id(state, course_id)
            .is_some_and(|course| course.teacher_id == user.id),
        Role::Student => false,
    }
}

pub fn can_submit(user: &User, student_id: &str) -> bool {
    user.role == Role::Student && user.id == student_id
}

/// Courses offered in the user's "create assignment" picker.
pub fn manageable_courses<'a>(state: &'a DataState, user: &User) -> Vec<&'a Course> {
    match user.role {
        Role::Admin => state.courses.iter().collect(),
        Role::Teacher => repositories::courses::taught_by(state, &user.id),
        Role::Student => Vec::new(),
    }
}

pub fn require_user_manager(user: &User) -> Result<(), AccessError> {
    if can_manage_users(user) {
        Ok(())
    } else {
        Err(AccessError::Forbidden("Admin access required"))
    }
}

pub fn require_course_manager<'a>(
    state: &'a DataState,
    user: &User,
    course_id: &str,
) -> Result<&'a Course, AccessError> {
    let course =
        repositories::courses::find_by_id(state, course_id).ok_or(AccessError::NotFound("Course"))?;

    if can_manage_course(user, course) {
        Ok(course)
    } else {
        Err(AccessError::Forbidden("Not enough permissions for this course"))
    }
}

pub fn require_assignment_manager<'a>(
    state: &'a DataState,
    user: &User,
    assignment_id: &str,
) -> Result<&'a Assignment, AccessError> {
    let assignment = repositories::assignments::find_by_id(state, assignment_id)
        .ok_or(AccessError::NotFound("Assignment"))?;

    if can_manage_assignment(state, user, assignment) {
        Ok(assignment)
    } else {
        Err(AccessError::Forbidden("Not enough permissions for this assignment"))
    }
}
