use serde::Deserialize;
use validator::Validate;

use crate::db::models::Assignment;
use crate::schemas::{deserialize_some, non_blank};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCreate {
    #[validate(length(min = 1, message = "course is required"))]
    pub course_id: String,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl AssignmentCreate {
    pub(crate) fn into_assignment(self, id: String) -> Assignment {
        Assignment {
            id,
            course_id: self.course_id,
            title: self.title,
            description: non_blank(self.description),
            due_date: non_blank(self.due_date),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentUpdate {
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<String>>,
}

impl AssignmentUpdate {
    pub(crate) fn apply_to(self, assignment: &mut Assignment) {
        if let Some(course_id) = self.course_id {
            assignment.course_id = course_id;
        }
        if let Some(title) = self.title {
            assignment.title = title;
        }
        if let Some(description) = self.description {
            assignment.description = non_blank(description);
        }
        if let Some(due_date) = self.due_date {
            assignment.due_date = non_blank(due_date);
        }
    }
}
