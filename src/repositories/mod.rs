//! By-id reads over a snapshot. References between entities are plain ids,
//! so every lookup may come back empty.

pub mod assignments;
pub mod courses;
pub mod submissions;
pub mod users;
