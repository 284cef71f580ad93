use crate::core::time::days_from_now_rfc3339;
use crate::db::models::{Assignment, Course, DataState, User};
use crate::db::types::Role;

pub const SEED_PASSWORD: &str = "password123";

/// Fixed dataset used on first start and whenever persisted data is unusable.
pub fn seed_state() -> DataState {
    DataState {
        users: vec![
            seed_user("u-admin", "Admin User", "admin@example.com", Role::Admin),
            seed_user("u-teacher", "Jane Teacher", "teacher@example.com", Role::Teacher),
            seed_user("u-student", "John Student", "student@example.com", Role::Student),
        ],
        courses: vec![
            Course {
                id: "c-js".to_string(),
                title: "Intro to JavaScript".to_string(),
                description: Some("Basics of JavaScript for the web.".to_string()),
                teacher_id: "u-teacher".to_string(),
            },
            Course {
                id: "c-math".to_string(),
                title: "Algebra I".to_string(),
                description: Some("Core algebra concepts.".to_string()),
                teacher_id: "u-teacher".to_string(),
            },
        ],
        assignments: vec![
            Assignment {
                id: "a-1".to_string(),
                course_id: "c-js".to_string(),
                title: "Variables & Types".to_string(),
                description: Some("Practice with let, const, and data types.".to_string()),
                due_date: Some(days_from_now_rfc3339(3)),
            },
            Assignment {
                id: "a-2".to_string(),
                course_id: "c-math".to_string(),
                title: "Linear Equations".to_string(),
                description: Some("Solve basic linear equations.".to_string()),
                due_date: Some(days_from_now_rfc3339(5)),
            },
        ],
        submissions: Vec::new(),
    }
}

fn seed_user(id: &str, name: &str, email: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: SEED_PASSWORD.to_string(),
        role,
        class_group: None,
    }
}
