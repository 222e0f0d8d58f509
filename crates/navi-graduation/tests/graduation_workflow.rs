//! Integration scenarios for the credit sheet lifecycle.
//!
//! Scenarios drive the public service facade end to end: typing values into a draft,
//! submitting it, reading the completion table back, and editing the saved sheet.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use navi_graduation::graduation::{
        EvaluationConfig, GraduationService, KeyValueStore, MajorType, RequirementKey,
        StoreError,
    };

    #[derive(Default)]
    pub(super) struct SharedStore {
        entries: Mutex<HashMap<String, String>>,
    }

    impl SharedStore {
        pub(super) fn raw(&self, key: &str) -> Option<String> {
            self.entries
                .lock()
                .expect("store mutex poisoned")
                .get(key)
                .cloned()
        }
    }

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.raw(key))
        }

        fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
            self.entries
                .lock()
                .expect("store mutex poisoned")
                .insert(key.to_string(), value);
            Ok(())
        }

        fn clear(&self, key: &str) -> Result<(), StoreError> {
            self.entries
                .lock()
                .expect("store mutex poisoned")
                .remove(key);
            Ok(())
        }
    }

    pub(super) fn service(store: &Arc<SharedStore>) -> GraduationService<SharedStore> {
        GraduationService::new(Arc::clone(store), EvaluationConfig::default())
    }

    /// Keystrokes a student would type for a sheet that meets every BASIC requirement.
    pub(super) fn basic_keystrokes() -> Vec<(RequirementKey, &'static str)> {
        use RequirementKey::*;

        vec![
            (Graduation, "140"),
            (Major, "75"),
            (CoreMajor, "36"),
            (AdvancedMajor, "30"),
            (IndustryCooperation, "6"),
            (GeneralElective, "10"),
            (Prerequisite, "y"),
            (Uncompleted, "y"),
            (Thesis, "y"),
            (EnglishOnly, "2"),
            (GraduationGpa, "3.12"),
            (SocialService, "1"),
            (Pbl, "4"),
            (MajorIcPbl, "1"),
        ]
    }

    pub(super) fn double_keystrokes() -> Vec<(RequirementKey, &'static str)> {
        use RequirementKey::*;

        let mut strokes = basic_keystrokes();
        strokes.extend([
            (SecondMajor, "36(0)"),
            (SecondCoreMajor, "18"),
            (SecondPrerequisite, "Y"),
            (SecondUncompleted, "n"),
        ]);
        strokes
    }

    pub(super) fn keystrokes_for(major: MajorType) -> Vec<(RequirementKey, &'static str)> {
        match major {
            MajorType::Double => double_keystrokes(),
            _ => basic_keystrokes(),
        }
    }
}

use std::sync::Arc;

use navi_graduation::graduation::{
    Completion, GraduationServiceError, MajorType, ReportSection, RequirementKey,
    GRADUATION_RESULT_KEY,
};
use serde_json::Value;

use common::*;

#[test]
fn typed_sheet_is_saved_and_reported_complete() {
    let store = Arc::new(SharedStore::default());
    let service = service(&store);

    let mut draft = service.start_draft(MajorType::Basic);
    for (key, raw) in basic_keystrokes() {
        service.input(&mut draft, key, raw);
    }

    let report = service.submit(&draft).expect("sheet submits");
    assert!(report.all_complete());

    let stored: Value = serde_json::from_str(
        &store
            .raw(GRADUATION_RESULT_KEY)
            .expect("result persisted under its key"),
    )
    .expect("persisted result is json");
    assert_eq!(stored["type"], "BASIC");
    assert_eq!(stored["credits"]["thesis"], "Y");
    assert_eq!(stored["credits"]["graduationGpa"], "3.12");
}

#[test]
fn double_major_sheet_flags_the_failed_second_major_row() {
    let store = Arc::new(SharedStore::default());
    let service = service(&store);

    let mut draft = service.start_draft(MajorType::Double);
    for (key, raw) in keystrokes_for(MajorType::Double) {
        service.input(&mut draft, key, raw);
    }
    service.submit(&draft).expect("sheet submits");

    let report = service
        .report()
        .expect("store readable")
        .expect("saved report present");

    assert_eq!(report.sections.len(), 3);
    let second = report
        .sections
        .iter()
        .find(|section| section.section == ReportSection::SecondMajor)
        .expect("second major section present");
    let uncompleted = second
        .rows
        .iter()
        .find(|row| row.key == RequirementKey::SecondUncompleted)
        .expect("second uncompleted row present");
    assert_eq!(uncompleted.acquired, "N");
    assert_eq!(uncompleted.completion, Completion::Incomplete);
    assert_eq!(
        report.incomplete_keys(),
        vec![RequirementKey::SecondUncompleted]
    );
}

#[test]
fn over_ceiling_keystrokes_never_reach_storage() {
    let store = Arc::new(SharedStore::default());
    let service = service(&store);

    let mut draft = service.start_draft(MajorType::Basic);
    for (key, raw) in basic_keystrokes() {
        service.input(&mut draft, key, raw);
    }
    assert!(!service.input(&mut draft, RequirementKey::EnglishOnly, "12"));
    assert!(!service.input(&mut draft, RequirementKey::GraduationGpa, "4.8"));
    service.submit(&draft).expect("sheet submits");

    let saved = service
        .saved()
        .expect("store readable")
        .expect("saved sheet present");
    assert_eq!(saved.credits.get(RequirementKey::EnglishOnly), "2");
    assert_eq!(saved.credits.get(RequirementKey::GraduationGpa), "3.12");
}

#[test]
fn editing_a_saved_sheet_keeps_its_major_type() {
    let store = Arc::new(SharedStore::default());
    let service = service(&store);

    let mut draft = service.start_draft(MajorType::Double);
    for (key, raw) in double_keystrokes() {
        service.input(&mut draft, key, raw);
    }
    service.submit(&draft).expect("sheet submits");

    let mut edit = service
        .resume_draft(MajorType::Basic)
        .expect("store readable")
        .expect("saved sheet present");
    assert_eq!(edit.major, MajorType::Double);

    service.input(&mut edit, RequirementKey::SecondUncompleted, "Y");
    let report = service.submit(&edit).expect("edited sheet submits");
    assert!(report.all_complete());
}

#[test]
fn incomplete_sheet_is_rejected_with_field_prompt() {
    let store = Arc::new(SharedStore::default());
    let service = service(&store);

    let mut draft = service.start_draft(MajorType::Micro);
    for (key, raw) in basic_keystrokes() {
        service.input(&mut draft, key, raw);
    }

    let err = service.submit(&draft).expect_err("micro fields are required");
    assert!(matches!(err, GraduationServiceError::Validation(_)));
    assert_eq!(
        err.to_string(),
        "재학(졸업직전) 및 수업연한 충족, 마이크로전공 이수여부을(를) 입력해주세요."
    );
    assert!(store.raw(GRADUATION_RESULT_KEY).is_none());

    service.clear().expect("clearing an empty store succeeds");
    assert!(service.report().expect("store readable").is_none());
}
