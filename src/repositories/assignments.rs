use crate::db::models::{Assignment, DataState, User};
use crate::db::types::Role;

pub fn find_by_id<'a>(state: &'a DataState, id: &str) -> Option<&'a Assignment> {
    state.assignments.iter().find(|assignment| assignment.id == id)
}

pub fn for_course<'a>(state: &'a DataState, course_id: &str) -> Vec<&'a Assignment> {
    state.assignments.iter().filter(|assignment| assignment.course_id == course_id).collect()
}

/// Teachers see assignments of courses they teach; everyone else sees all.
/// Assignments whose course was deleted are hidden from teachers.
pub fn visible_to<'a>(state: &'a DataState, user: &User) -> Vec<&'a Assignment> {
    match user.role {
        Role::Teacher => state
            .assignments
            .iter()
            .filter(|assignment| {
                state
                    .courses
                    .iter()
                    .any(|course| course.id == assignment.course_id && course.teacher_id == user.id)
            })
            .collect(),
        Role::Admin | Role::Student => state.assignments.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Course;
    use crate::db::seed::seed_state;
    use crate::repositories::users;

    #[test]
    fn for_course_filters_by_course_id() {
        let state = seed_state();
        let ids: Vec<&str> = for_course(&state, "c-js").iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a-1"]);
        assert!(for_course(&state, "c-none").is_empty());
    }

    #[test]
    fn teacher_visibility_follows_course_ownership() {
        let mut state = seed_state();
        state.courses.push(Course {
            id: "c-art".to_string(),
            title: "Art".to_string(),
            description: None,
            teacher_id: "u-other".to_string(),
        });
        state.assignments.push(Assignment {
            id: "a-art".to_string(),
            course_id: "c-art".to_string(),
            title: "Sketch".to_string(),
            description: None,
            due_date: None,
        });
        state.assignments.push(Assignment {
            id: "a-orphan".to_string(),
            course_id: "c-deleted".to_string(),
            title: "Orphan".to_string(),
            description: None,
            due_date: None,
        });
        let teacher = users::find_by_id(&state, "u-teacher").expect("teacher").clone();
        let admin = users::find_by_id(&state, "u-admin").expect("admin").clone();

        let ids: Vec<&str> = visible_to(&state, &teacher).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a-1", "a-2"]);
        assert_eq!(visible_to(&state, &admin).len(), 4);
    }
}
