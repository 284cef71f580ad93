use serde::Serialize;

use crate::core::time::date_label;
use crate::db::models::{DataState, User};
use crate::db::types::Role;
use crate::repositories;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMetrics {
    pub students: usize,
    pub teachers: usize,
    pub courses: usize,
    pub assignments: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCard {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub assignment_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCard {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// `YYYY-MM-DD`, absent when there is no due date or it does not parse.
    pub due: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", content = "data", rename_all = "lowercase")]
pub enum Dashboard {
    Admin(AdminMetrics),
    Teacher(Vec<CourseCard>),
    Student(Vec<AssignmentCard>),
}

pub fn summarize(state: &DataState, user: &User) -> Dashboard {
    match user.role {
        Role::Admin => Dashboard::Admin(AdminMetrics {
            students: repositories::users::with_role(state, Role::Student).count(),
            teachers: repositories::users::with_role(state, Role::Teacher).count(),
            courses: state.courses.len(),
            assignments: state.assignments.len(),
        }),
        Role::Teacher => Dashboard::Teacher(
            repositories::courses::taught_by(state, &user.id)
                .into_iter()
                .map(|course| CourseCard {
                    id: course.id.clone(),
                    title: course.title.clone(),
                    description: course.description.clone(),
                    assignment_count: repositories::assignments::for_course(state, &course.id)
                        .len(),
                })
                .collect(),
        ),
        Role::Student => Dashboard::Student(
            state
                .assignments
                .iter()
                .map(|assignment| AssignmentCard {
                    id: assignment.id.clone(),
                    title: assignment.title.clone(),
                    description: assignment.description.clone(),
                    due: date_label(assignment.due_date.as_deref()),
                })
                .collect(),
        ),
    }
}
