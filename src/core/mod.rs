pub mod config;
pub mod ids;
pub mod state;
pub mod telemetry;
pub mod time;
