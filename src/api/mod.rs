pub mod errors;
pub mod guards;
pub mod router;
