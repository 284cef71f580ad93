use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use uuid::Uuid;

use crate::core::{config::Settings, state::AppState};
use crate::db::types::Role;
use crate::schemas::assignment::AssignmentCreate;
use crate::schemas::course::CourseCreate;
use crate::schemas::user::UserCreate;
use crate::storage::{MemorySlotStorage, SlotStorage, StorageError};

pub(crate) const TEST_PASSWORD: &str = "secret";

/// Serialises tests that touch process environment variables.
pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn temp_data_dir() -> PathBuf {
    std::env::temp_dir().join(format!("students-lms-test-{}", Uuid::new_v4()))
}

pub(crate) fn remove_dir(dir: &Path) {
    let _ = std::fs::remove_dir_all(dir);
}

/// Seeded state over fresh in-memory slots.
pub(crate) fn seeded_state() -> AppState {
    AppState::new(Settings::in_memory(), Arc::new(MemorySlotStorage::new()))
}

pub(crate) fn user_input(name: &str, email: &str, role: Role) -> UserCreate {
    UserCreate {
        name: name.to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        role,
        class_group: None,
    }
}

pub(crate) fn student_input(name: &str, email: &str, class_group: &str) -> UserCreate {
    UserCreate { class_group: Some(class_group.to_string()), ..user_input(name, email, Role::Student) }
}

pub(crate) fn course_input(title: &str, teacher_id: &str) -> CourseCreate {
    CourseCreate { title: title.to_string(), description: None, teacher_id: teacher_id.to_string() }
}

pub(crate) fn assignment_input(course_id: &str, title: &str) -> AssignmentCreate {
    AssignmentCreate {
        course_id: course_id.to_string(),
        title: title.to_string(),
        description: None,
        due_date: None,
    }
}

/// Slot storage whose writes always fail; reads see nothing.
pub(crate) struct ReadOnlySlots;

impl SlotStorage for ReadOnlySlots {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.set(key, "")
    }
}
