//! Create inputs and partial update patches for the store's mutators.
//!
//! Create inputs carry `validator` rules mirroring the required form fields.
//! The store itself never runs them: validating is the caller's job.

pub mod assignment;
pub mod course;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Lets `Option<Option<T>>` patch fields tell "absent" (keep) from `null` (clear).
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Blank optional form fields are stored as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|item| !item.trim().is_empty())
}
