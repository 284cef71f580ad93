use serde::Deserialize;
use validator::Validate;

use crate::db::models::Course;
use crate::schemas::{deserialize_some, non_blank};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseCreate {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "teacher is required"))]
    pub teacher_id: String,
}

impl CourseCreate {
    pub(crate) fn into_course(self, id: String) -> Course {
        Course {
            id,
            title: self.title,
            description: non_blank(self.description),
            teacher_id: self.teacher_id,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub teacher_id: Option<String>,
}

impl CourseUpdate {
    pub(crate) fn apply_to(self, course: &mut Course) {
        if let Some(title) = self.title {
            course.title = title;
        }
        if let Some(description) = self.description {
            course.description = non_blank(description);
        }
        if let Some(teacher_id) = self.teacher_id {
            course.teacher_id = teacher_id;
        }
    }
}
