use serde::Deserialize;
use validator::Validate;

use crate::db::models::User;
use crate::db::types::Role;
use crate::schemas::{deserialize_some, non_blank};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub class_group: Option<String>,
}

impl UserCreate {
    pub(crate) fn into_user(self, id: String) -> User {
        // Class groups only mean something for students.
        let class_group = match self.role {
            Role::Student => non_blank(self.class_group),
            Role::Admin | Role::Teacher => None,
        };
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role,
            class_group,
        }
    }
}

/// Fields left `None` keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub class_group: Option<Option<String>>,
}

impl UserUpdate {
    pub(crate) fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(class_group) = self.class_group {
            user.class_group = non_blank(class_group);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn student() -> User {
        User {
            id: "u-1".to_string(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "pw".to_string(),
            role: Role::Student,
            class_group: Some("9B".to_string()),
        }
    }

    #[test]
    fn create_validation_flags_missing_fields() {
        let input: UserCreate = serde_json::from_value(json!({
            "name": "",
            "email": "not-an-email",
            "password": "",
            "role": "student"
        }))
        .expect("parse input");

        let errors = input.validate().expect_err("invalid input");
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn create_drops_class_group_for_staff() {
        let input: UserCreate = serde_json::from_value(json!({
            "name": "Tom",
            "email": "tom@example.com",
            "password": "pw",
            "role": "teacher",
            "classGroup": "10A"
        }))
        .expect("parse input");
        assert!(input.validate().is_ok());

        let user = input.into_user("u-2".to_string());
        assert_eq!(user.class_group, None);
    }

    #[test]
    fn update_merges_only_given_fields() {
        let patch: UserUpdate =
            serde_json::from_value(json!({ "name": "Anna" })).expect("parse patch");
        let mut user = student();
        patch.apply_to(&mut user);

        assert_eq!(user.name, "Anna");
        assert_eq!(user.email, "ann@example.com");
        assert_eq!(user.class_group, Some("9B".to_string()));
    }

    #[test]
    fn update_null_clears_class_group() {
        let patch: UserUpdate =
            serde_json::from_value(json!({ "classGroup": null })).expect("parse patch");
        assert_eq!(patch.class_group, Some(None));

        let mut user = student();
        patch.apply_to(&mut user);
        assert_eq!(user.class_group, None);
    }
}
