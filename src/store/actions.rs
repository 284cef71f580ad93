use crate::db::models::{Assignment, Course, DataState, Submission, User};
use crate::schemas::assignment::AssignmentUpdate;
use crate::schemas::course::CourseUpdate;
use crate::schemas::user::UserUpdate;

/// Every transition the store knows about.
#[derive(Debug, Clone)]
pub enum DataAction {
    SetState(DataState),
    AddUser(User),
    UpdateUser { id: String, patch: UserUpdate },
    DeleteUser { id: String },
    AddCourse(Course),
    UpdateCourse { id: String, patch: CourseUpdate },
    DeleteCourse { id: String },
    AddAssignment(Assignment),
    UpdateAssignment { id: String, patch: AssignmentUpdate },
    /// Also removes the assignment's submissions.
    DeleteAssignment { id: String },
    AddSubmission(Submission),
}

impl DataAction {
    pub fn kind(&self) -> &'static str {
        match self {
            DataAction::SetState(_) => "set_state",
            DataAction::AddUser(_) => "add_user",
            DataAction::UpdateUser { .. } => "update_user",
            DataAction::DeleteUser { .. } => "delete_user",
            DataAction::AddCourse(_) => "add_course",
            DataAction::UpdateCourse { .. } => "update_course",
            DataAction::DeleteCourse { .. } => "delete_course",
            DataAction::AddAssignment(_) => "add_assignment",
            DataAction::UpdateAssignment { .. } => "update_assignment",
            DataAction::DeleteAssignment { .. } => "delete_assignment",
            DataAction::AddSubmission(_) => "add_submission",
        }
    }
}

/// Pure transition: the input snapshot is never touched.
///
/// Updates and deletes for unknown ids return an equal snapshot. Deleting a
/// user or course leaves referencing entities in place.
pub fn reduce(state: &DataState, action: DataAction) -> DataState {
    let mut next = state.clone();
    match action {
        DataAction::SetState(replacement) => return replacement,
        DataAction::AddUser(user) => next.users.push(user),
        DataAction::UpdateUser { id, patch } => {
            if let Some(user) = next.users.iter_mut().find(|user| user.id == id) {
                patch.apply_to(user);
            }
        }
        DataAction::DeleteUser { id } => next.users.retain(|user| user.id != id),
        DataAction::AddCourse(course) => next.courses.push(course),
        DataAction::UpdateCourse { id, patch } => {
            if let Some(course) = next.courses.iter_mut().find(|course| course.id == id) {
                patch.apply_to(course);
            }
        }
        DataAction::DeleteCourse { id } => next.courses.retain(|course| course.id != id),
        DataAction::AddAssignment(assignment) => next.assignments.push(assignment),
        DataAction::UpdateAssignment { id, patch } => {
            if let Some(assignment) = next.assignments.iter_mut().find(|item| item.id == id) {
                patch.apply_to(assignment);
            }
        }
        DataAction::DeleteAssignment { id } => {
            next.assignments.retain(|assignment| assignment.id != id);
            next.submissions.retain(|submission| submission.assignment_id != id);
        }
        DataAction::AddSubmission(submission) => next.submissions.push(submission),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::seed_state;
    use crate::db::types::{Role, SubmissionStatus};

    fn submission(id: &str, assignment_id: &str) -> Submission {
        Submission {
            id: id.to_string(),
            assignment_id: assignment_id.to_string(),
            student_id: "u-student".to_string(),
            status: SubmissionStatus::Submitted,
            grade: None,
            submitted_at: None,
        }
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let state = seed_state();
        let course = Course {
            id: "c-bio".to_string(),
            title: "Biology".to_string(),
            description: None,
            teacher_id: "u-teacher".to_string(),
        };

        let next = reduce(&state, DataAction::AddCourse(course));

        assert_eq!(next.courses.len(), state.courses.len() + 1);
        assert_eq!(next.courses.last().map(|c| c.id.as_str()), Some("c-bio"));
        assert_eq!(state.courses.len(), 2, "input snapshot untouched");
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let state = seed_state();
        let patch = UserUpdate { name: Some("Ghost".to_string()), ..Default::default() };

        let next = reduce(&state, DataAction::UpdateUser { id: "missing".to_string(), patch });

        assert_eq!(next, state);
    }

    #[test]
    fn update_merges_fields_into_matching_user() {
        let state = seed_state();
        let patch = UserUpdate { role: Some(Role::Admin), ..Default::default() };

        let next = reduce(&state, DataAction::UpdateUser { id: "u-student".to_string(), patch });

        let user = next.users.iter().find(|user| user.id == "u-student").expect("user");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.email, "student@example.com");
    }

    #[test]
    fn delete_user_does_not_cascade() {
        let state = seed_state();

        let next = reduce(&state, DataAction::DeleteUser { id: "u-teacher".to_string() });

        assert_eq!(next.users.len(), 2);
        assert!(next.courses.iter().all(|course| course.teacher_id == "u-teacher"));
    }

    #[test]
    fn delete_assignment_cascades_to_its_submissions_only() {
        let mut state = seed_state();
        state.submissions = vec![
            submission("s-1", "a-1"),
            submission("s-2", "a-2"),
            submission("s-3", "a-1"),
        ];

        let next = reduce(&state, DataAction::DeleteAssignment { id: "a-1".to_string() });

        assert!(next.assignments.iter().all(|assignment| assignment.id != "a-1"));
        let remaining: Vec<&str> = next.submissions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(remaining, vec!["s-2"]);
    }

    #[test]
    fn delete_course_leaves_assignments_dangling() {
        let state = seed_state();

        let next = reduce(&state, DataAction::DeleteCourse { id: "c-js".to_string() });

        assert!(next.courses.iter().all(|course| course.id != "c-js"));
        assert!(next.assignments.iter().any(|assignment| assignment.course_id == "c-js"));
    }

    #[test]
    fn set_state_replaces_everything() {
        let state = seed_state();

        let next = reduce(&state, DataAction::SetState(DataState::default()));

        assert_eq!(next, DataState::default());
    }
}
