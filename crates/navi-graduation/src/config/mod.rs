use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::graduation::{EvaluationConfig, GpaCeiling, InputBounds};

const DEFAULT_STORE_PATH: &str = ".navi/store.json";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub store: StoreConfig,
    pub evaluation: EvaluationConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let store_path = env::var("NAVI_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH));

        let gpa_ceiling = match env::var("NAVI_GPA_CEILING") {
            Ok(raw) => GpaCeiling::parse(&raw).ok_or(ConfigError::InvalidGpaCeiling(raw))?,
            Err(_) => GpaCeiling::default(),
        };

        let input_bounds = match env::var("NAVI_INPUT_BOUNDS") {
            Ok(raw) => InputBounds::parse(&raw).ok_or(ConfigError::InvalidInputBounds(raw))?,
            Err(_) => InputBounds::default(),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            store: StoreConfig { path: store_path },
            evaluation: EvaluationConfig {
                input_bounds,
                gpa_ceiling,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Location of the local key-value store file.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidGpaCeiling(String),
    InvalidInputBounds(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGpaCeiling(value) => write!(
                f,
                "NAVI_GPA_CEILING must be 'scale' or 'uncapped' (found '{value}')"
            ),
            ConfigError::InvalidInputBounds(value) => write!(
                f,
                "NAVI_INPUT_BOUNDS must be 'ceilings' or 'allocation' (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
