use std::sync::Arc;

use tracing::warn;

use super::domain::GraduationResult;

/// Storage key holding the confirmed credit sheet.
pub const GRADUATION_RESULT_KEY: &str = "navi_graduation_result";

/// String key-value storage so the service can run against any backing store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    fn clear(&self, key: &str) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("stored value under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads and writes the single persisted [`GraduationResult`].
pub struct GraduationResultRepository<S> {
    store: Arc<S>,
}

impl<S> Clone for GraduationResultRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> GraduationResultRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<Option<GraduationResult>, StoreError> {
        let Some(raw) = self.store.get(GRADUATION_RESULT_KEY)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw).map(Some).map_err(|source| {
            warn!(
                key = GRADUATION_RESULT_KEY,
                error = %source,
                "stored graduation result is unreadable"
            );
            StoreError::Corrupt {
                key: GRADUATION_RESULT_KEY.to_string(),
                source,
            }
        })
    }

    pub fn save(&self, result: &GraduationResult) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(result).map_err(|source| StoreError::Encode {
            key: GRADUATION_RESULT_KEY.to_string(),
            source,
        })?;
        self.store.set(GRADUATION_RESULT_KEY, encoded)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.clear(GRADUATION_RESULT_KEY)
    }
}
