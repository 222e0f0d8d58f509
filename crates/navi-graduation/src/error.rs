use crate::config::ConfigError;
use crate::graduation::{GraduationServiceError, StoreError, UnknownVariant};
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Input(UnknownVariant),
    Graduation(GraduationServiceError),
}

impl AppError {
    /// True when the user can fix the failure by correcting their input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::Json(_)
                | AppError::Input(_)
                | AppError::Graduation(GraduationServiceError::Validation(_))
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "invalid credit sheet json: {}", err),
            AppError::Input(err) => write!(f, "invalid input: {}", err),
            AppError::Graduation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Graduation(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<UnknownVariant> for AppError {
    fn from(value: UnknownVariant) -> Self {
        Self::Input(value)
    }
}

impl From<GraduationServiceError> for AppError {
    fn from(value: GraduationServiceError) -> Self {
        Self::Graduation(value)
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Graduation(GraduationServiceError::Store(value))
    }
}
