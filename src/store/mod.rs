//! Process-wide data store.
//!
//! The store owns the latest [`DataState`] snapshot behind a `watch` channel.
//! Mutators build a dispatch action, run it through [`actions::reduce`], commit
//! the resulting snapshot and rewrite the whole data slot before returning.
//! Readers get `Arc` snapshots that never change under them.

pub mod actions;

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;

use crate::core::ids::create_id;
use crate::core::time::now_rfc3339;
use crate::db::models::{Assignment, Course, DataState, Submission, User};
use crate::db::seed::seed_state;
use crate::db::types::SubmissionStatus;
use crate::schemas::assignment::{AssignmentCreate, AssignmentUpdate};
use crate::schemas::course::{CourseCreate, CourseUpdate};
use crate::schemas::user::{UserCreate, UserUpdate};
use crate::storage::{self, SlotStorage, StorageError};

pub use actions::{reduce, DataAction};

#[derive(Clone)]
pub struct DataStore {
    inner: Arc<InnerStore>,
}

struct InnerStore {
    state: watch::Sender<Arc<DataState>>,
    /// Serialises reduce-persist-commit so concurrent mutators never lose updates.
    writer: Mutex<()>,
    storage: Arc<dyn SlotStorage>,
    data_key: String,
}

impl DataStore {
    /// Restores the persisted snapshot, falling back to seed data when the slot
    /// is empty, unreadable or malformed. Never fails.
    pub fn load(storage: Arc<dyn SlotStorage>, data_key: impl Into<String>) -> Self {
        let data_key = data_key.into();
        let restored = match restore(storage.as_ref(), &data_key) {
            Ok(Some(state)) => {
                tracing::info!(
                    users = state.users.len(),
                    courses = state.courses.len(),
                    assignments = state.assignments.len(),
                    submissions = state.submissions.len(),
                    "Restored persisted data"
                );
                Some(state)
            }
            Ok(None) => {
                tracing::info!(key = %data_key, "No persisted data; starting from seed data");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "Discarding persisted data; starting from seed data");
                None
            }
        };

        let seeded = restored.is_none();
        let initial = Arc::new(restored.unwrap_or_else(seed_state));
        let (state, _) = watch::channel(Arc::clone(&initial));
        let inner = InnerStore { state, writer: Mutex::new(()), storage, data_key };
        let store = Self { inner: Arc::new(inner) };
        if seeded {
            store.persist(&initial);
        }
        store
    }

    pub fn snapshot(&self) -> Arc<DataState> {
        Arc::clone(&self.inner.state.borrow())
    }

    /// Receiver that sees every committed snapshot.
    ///
    /// Do not hold a `borrow()` guard from this receiver across a mutator
    /// call: committing takes the channel's write lock.
    pub fn subscribe(&self) -> watch::Receiver<Arc<DataState>> {
        self.inner.state.subscribe()
    }

    /// Reduces `action` against the current snapshot, persists the result,
    /// commits it and returns it. The slot write happens outside the channel
    /// lock, so readers are never blocked on I/O.
    pub fn dispatch(&self, action: DataAction) -> Arc<DataState> {
        tracing::debug!(action = action.kind(), "Dispatching data action");

        let _writer = self.inner.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.snapshot();
        let next = Arc::new(reduce(current.as_ref(), action));
        self.persist(&next);
        self.inner.state.send_replace(Arc::clone(&next));
        next
    }

    pub fn replace_state(&self, state: DataState) {
        self.dispatch(DataAction::SetState(state));
    }

    pub fn add_user(&self, input: UserCreate) -> User {
        let user = input.into_user(create_id());
        self.dispatch(DataAction::AddUser(user.clone()));
        user
    }

    pub fn update_user(&self, id: &str, patch: UserUpdate) {
        self.dispatch(DataAction::UpdateUser { id: id.to_string(), patch });
    }

    pub fn delete_user(&self, id: &str) {
        self.dispatch(DataAction::DeleteUser { id: id.to_string() });
    }

    pub fn add_course(&self, input: CourseCreate) -> Course {
        let course = input.into_course(create_id());
        self.dispatch(DataAction::AddCourse(course.clone()));
        course
    }

    pub fn update_course(&self, id: &str, patch: CourseUpdate) {
        self.dispatch(DataAction::UpdateCourse { id: id.to_string(), patch });
    }

    pub fn delete_course(&self, id: &str) {
        self.dispatch(DataAction::DeleteCourse { id: id.to_string() });
    }

    pub fn add_assignment(&self, input: AssignmentCreate) -> Assignment {
        let assignment = input.into_assignment(create_id());
        self.dispatch(DataAction::AddAssignment(assignment.clone()));
        assignment
    }

    pub fn update_assignment(&self, id: &str, patch: AssignmentUpdate) {
        self.dispatch(DataAction::UpdateAssignment { id: id.to_string(), patch });
    }

    pub fn delete_assignment(&self, id: &str) {
        self.dispatch(DataAction::DeleteAssignment { id: id.to_string() });
    }

    /// Records a submission. Repeated submits for the same assignment each
    /// create a new record.
    pub fn add_submission(&self, assignment_id: &str, student_id: &str) -> Submission {
        let submission = Submission {
            id: create_id(),
            assignment_id: assignment_id.to_string(),
            student_id: student_id.to_string(),
            status: SubmissionStatus::Submitted,
            grade: None,
            submitted_at: Some(now_rfc3339()),
        };
        self.dispatch(DataAction::AddSubmission(submission.clone()));
        submission
    }

    // Fire-and-forget: a failed write keeps the in-memory snapshot authoritative.
    fn persist(&self, state: &DataState) {
        let key = &self.inner.data_key;
        if let Err(err) = storage::write_json(self.inner.storage.as_ref(), key, state) {
            tracing::warn!(error = %err, key = %key, "Failed to persist data");
        }
    }
}

fn restore(storage: &dyn SlotStorage, key: &str) -> Result<Option<DataState>, StorageError> {
    storage::read_json(storage, key)
}
