pub mod config;
pub mod error;
pub mod graduation;
pub mod telemetry;
