use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::graduation::domain::{CreditRecord, MajorType, RequirementKey};
use crate::graduation::evaluation::EvaluationConfig;
use crate::graduation::repository::{KeyValueStore, StoreError};
use crate::graduation::service::GraduationService;

/// Fully satisfied BASIC sheet: every value sits exactly on its allocation.
pub(super) fn basic_credits() -> CreditRecord {
    use RequirementKey::*;

    [
        (Graduation, "140"),
        (Major, "75"),
        (CoreMajor, "36"),
        (AdvancedMajor, "30"),
        (IndustryCooperation, "6"),
        (GeneralElective, "10"),
        (Prerequisite, "Y"),
        (Uncompleted, "Y"),
        (Thesis, "Y"),
        (EnglishOnly, "2"),
        (GraduationGpa, "1.75"),
        (SocialService, "1"),
        (Pbl, "4"),
        (MajorIcPbl, "1"),
    ]
    .into_iter()
    .collect()
}

pub(super) fn double_credits() -> CreditRecord {
    use RequirementKey::*;

    let mut credits = basic_credits();
    credits.set(Major, "45");
    credits.set(CoreMajor, "34");
    credits.set(AdvancedMajor, "0");
    credits.set(GraduationGpa, "1.25");
    credits.set(SecondMajor, "36(0)");
    credits.set(SecondCoreMajor, "18");
    credits.set(SecondPrerequisite, "Y");
    credits.set(SecondUncompleted, "Y");
    credits
}

pub(super) fn micro_credits() -> CreditRecord {
    let mut credits = basic_credits();
    credits.set(RequirementKey::Enrollment, "Y");
    credits.set(RequirementKey::MicroMajor, "Y");
    credits
}

pub(super) fn credits_for(major: MajorType) -> CreditRecord {
    match major {
        MajorType::Basic => basic_credits(),
        MajorType::Double => double_credits(),
        MajorType::Micro => micro_credits(),
    }
}

#[derive(Default)]
pub(super) struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    pub(super) fn unavailable() -> Self {
        Self {
            entries: Mutex::default(),
            unavailable: true,
        }
    }

    pub(super) fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned()
    }

    pub(super) fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable {
            Err(StoreError::Unavailable("storage disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check()?;
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.check()?;
        self.put_raw(key, &value);
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.check()?;
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .remove(key);
        Ok(())
    }
}

pub(super) fn service() -> (Arc<MemoryStore>, GraduationService<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = GraduationService::new(store.clone(), EvaluationConfig::default());
    (store, service)
}
