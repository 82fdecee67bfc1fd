pub mod config;
pub mod error;
pub mod readiness;
pub mod telemetry;
