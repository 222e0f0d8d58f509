use navi_graduation::graduation::{
    CreditRecord, KeyValueStore, MajorType, RequirementKey, StoreError,
};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Process-local store used by the demo walk-through.
#[derive(Default)]
pub(crate) struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let guard = self.entries.lock().map_err(poisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().map_err(poisoned)?;
        guard.insert(key.to_string(), value);
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().map_err(poisoned)?;
        guard.remove(key);
        Ok(())
    }
}

/// Key-value store persisted as a flat JSON object on disk.
///
/// Writes go to a sibling temp file that is renamed over the target, so a crash mid-write
/// leaves the previous contents intact.
pub(crate) struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_entries(&self, key: &str) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })
    }

    fn write_entries(
        &self,
        key: &str,
        entries: &BTreeMap<String, String>,
    ) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_string_pretty(entries).map_err(|source| StoreError::Encode {
                key: key.to_string(),
                source,
            })?;

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, encoded)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        Ok(self.read_entries(key)?.remove(key))
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let mut entries = self.read_entries(key)?;
        entries.insert(key.to_string(), value);
        self.write_entries(key, &entries)
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let mut entries = self.read_entries(key)?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(key, &entries)
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Unavailable("store lock poisoned".to_string())
}

/// Reads a `{ "<key>": value }` credit sheet. Numbers are accepted and kept in their JSON
/// spelling; keys left out stay blank.
pub(crate) fn parse_credit_sheet(raw: &str) -> Result<CreditRecord, serde_json::Error> {
    let entries: BTreeMap<RequirementKey, Value> = serde_json::from_str(raw)?;

    let mut credits = CreditRecord::blank();
    for (key, value) in entries {
        let text = match value {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Null => String::new(),
            other => {
                return Err(serde::de::Error::custom(format!(
                    "credit '{key}' must be a string or number, found {other}"
                )))
            }
        };
        credits.set(key, text);
    }
    Ok(credits)
}

pub(crate) fn parse_major(raw: &str) -> Result<MajorType, String> {
    raw.parse::<MajorType>().map_err(|err| err.to_string())
}

pub(crate) fn parse_key(raw: &str) -> Result<RequirementKey, String> {
    raw.trim()
        .parse::<RequirementKey>()
        .map_err(|err| err.to_string())
}

/// Parses a `key=value` override; the value may be empty.
pub(crate) fn parse_assignment(raw: &str) -> Result<(RequirementKey, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    Ok((parse_key(key)?, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use navi_graduation::graduation::GRADUATION_RESULT_KEY;

    #[test]
    fn file_store_round_trips_and_clears() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("nested").join("store.json"));

        assert_eq!(store.get(GRADUATION_RESULT_KEY).expect("readable"), None);
        store
            .set(GRADUATION_RESULT_KEY, r#"{"type":"BASIC"}"#.to_string())
            .expect("writable");
        store
            .set("other", "kept".to_string())
            .expect("writable");

        assert_eq!(
            store.get(GRADUATION_RESULT_KEY).expect("readable").as_deref(),
            Some(r#"{"type":"BASIC"}"#)
        );
        assert!(!store.path().with_extension("json.tmp").exists());

        store.clear(GRADUATION_RESULT_KEY).expect("clearable");
        assert_eq!(store.get(GRADUATION_RESULT_KEY).expect("readable"), None);
        assert_eq!(store.get("other").expect("readable").as_deref(), Some("kept"));
    }

    #[test]
    fn file_store_reports_corrupt_contents() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2").expect("fixture written");

        let err = JsonFileStore::new(&path)
            .get(GRADUATION_RESULT_KEY)
            .expect_err("corrupt file rejected");
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn clearing_a_missing_file_is_a_no_op() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("store.json"));

        store.clear(GRADUATION_RESULT_KEY).expect("clearable");
        assert!(!store.path().exists());
    }

    #[test]
    fn credit_sheet_accepts_strings_and_numbers() {
        let credits =
            parse_credit_sheet(r#"{"graduation": 140, "graduationGpa": "3.9", "thesis": null}"#)
                .expect("sheet parses");

        assert_eq!(credits.get(RequirementKey::Graduation), "140");
        assert_eq!(credits.get(RequirementKey::GraduationGpa), "3.9");
        assert_eq!(credits.get(RequirementKey::Thesis), "");
        assert_eq!(credits.iter().count(), RequirementKey::ALL.len());
    }

    #[test]
    fn credit_sheet_rejects_unknown_keys_and_nested_values() {
        assert!(parse_credit_sheet(r#"{"gpa": "3.9"}"#).is_err());
        assert!(parse_credit_sheet(r#"{"major": [75]}"#).is_err());
    }

    #[test]
    fn assignments_split_on_first_equals() {
        assert_eq!(
            parse_assignment("secondMajor=36(0)"),
            Ok((RequirementKey::SecondMajor, "36(0)".to_string()))
        );
        assert_eq!(
            parse_assignment("thesis="),
            Ok((RequirementKey::Thesis, String::new()))
        );
        assert!(parse_assignment("thesis").is_err());
        assert!(parse_assignment("nope=1").is_err());
    }
}
