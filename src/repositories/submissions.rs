use crate::db::models::{DataState, Submission};

pub fn for_assignment<'a>(state: &'a DataState, assignment_id: &str) -> Vec<&'a Submission> {
    state.submissions.iter().filter(|item| item.assignment_id == assignment_id).collect()
}

pub fn for_student<'a>(state: &'a DataState, student_id: &str) -> Vec<&'a Submission> {
    state.submissions.iter().filter(|item| item.student_id == student_id).collect()
}

/// Most recent record for a student and assignment (submissions are append-only).
pub fn latest_for<'a>(
    state: &'a DataState,
    assignment_id: &str,
    student_id: &str,
) -> Option<&'a Submission> {
    state
        .submissions
        .iter()
        .rev()
        .find(|item| item.assignment_id == assignment_id && item.student_id == student_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::seed_state;
    use crate::db::types::SubmissionStatus;

    fn submission(id: &str, assignment_id: &str, student_id: &str) -> Submission {
        Submission {
            id: id.to_string(),
            assignment_id: assignment_id.to_string(),
            student_id: student_id.to_string(),
            status: SubmissionStatus::Submitted,
            grade: None,
            submitted_at: None,
        }
    }

    #[test]
    fn filters_and_latest() {
        let mut state = seed_state();
        state.submissions = vec![
            submission("s-1", "a-1", "u-student"),
            submission("s-2", "a-2", "u-student"),
            submission("s-3", "a-1", "u-student"),
            submission("s-4", "a-1", "u-other"),
        ];

        assert_eq!(for_assignment(&state, "a-1").len(), 3);
        assert_eq!(for_student(&state, "u-student").len(), 3);
        assert_eq!(latest_for(&state, "a-1", "u-student").map(|s| s.id.as_str()), Some("s-3"));
        assert!(latest_for(&state, "a-2", "u-other").is_none());
    }
}
