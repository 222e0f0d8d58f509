use super::common::*;
use crate::graduation::domain::{CreditRecord, MajorType, RequirementKey};
use crate::graduation::validation::{required_keys, validate_inputs, ValidationError};

#[test]
fn required_keys_grow_with_major_type() {
    assert_eq!(required_keys(MajorType::Basic).len(), 14);
    assert_eq!(required_keys(MajorType::Micro).len(), 16);
    assert_eq!(required_keys(MajorType::Double).len(), 18);
    assert!(!required_keys(MajorType::Basic).contains(&RequirementKey::Enrollment));
}

#[test]
fn filled_sheets_pass() {
    for major in MajorType::ALL {
        let report = validate_inputs(major, &credits_for(major));
        assert!(report.ok, "{major} fixture should validate");
        assert!(report.empty_field_labels.is_empty());
        assert_eq!(report.message(), None);
    }
}

#[test]
fn missing_second_core_major_is_reported_by_label() {
    let mut credits = double_credits();
    credits.set(RequirementKey::SecondCoreMajor, "");

    let report = validate_inputs(MajorType::Double, &credits);

    assert!(!report.ok);
    assert_eq!(report.empty_field_labels, vec!["제2전공 전공핵심"]);
    assert_eq!(
        report.message().as_deref(),
        Some("제2전공 전공핵심을(를) 입력해주세요.")
    );
}

#[test]
fn whitespace_only_values_count_as_empty() {
    let mut credits = basic_credits();
    credits.set(RequirementKey::Thesis, "   ");

    let report = validate_inputs(MajorType::Basic, &credits);

    assert_eq!(report.empty_field_labels, vec!["졸업논문/시험/작품"]);
}

#[test]
fn labels_follow_prompt_order() {
    let mut credits = basic_credits();
    credits.set(RequirementKey::Pbl, "");
    credits.set(RequirementKey::Graduation, "");
    credits.set(RequirementKey::GraduationGpa, "");

    let report = validate_inputs(MajorType::Basic, &credits);

    assert_eq!(
        report.empty_field_labels,
        vec!["졸업학점", "졸업평점", "PBL강좌수"]
    );
    assert_eq!(
        report.message().as_deref(),
        Some("졸업학점, 졸업평점, PBL강좌수을(를) 입력해주세요.")
    );
}

#[test]
fn micro_sheet_requires_enrollment_and_micro_major() {
    let report = validate_inputs(MajorType::Micro, &basic_credits());

    assert_eq!(
        report.empty_field_labels,
        vec!["재학(졸업직전) 및 수업연한 충족", "마이크로전공 이수여부"]
    );
}

#[test]
fn inactive_keys_are_not_required() {
    let mut credits = basic_credits();
    credits.set(RequirementKey::SecondMajor, "");
    credits.set(RequirementKey::Enrollment, "");

    assert!(validate_inputs(MajorType::Basic, &credits).ok);
}

#[test]
fn blank_sheet_converts_into_missing_fields_error() {
    let report = validate_inputs(MajorType::Basic, &CreditRecord::blank());
    assert_eq!(report.empty_field_labels.len(), 14);

    let err = report.into_result().expect_err("blank sheet is rejected");
    let ValidationError::MissingFields { labels } = &err;
    assert_eq!(labels.first(), Some(&"졸업학점"));
    assert!(err.to_string().ends_with("전공IC-PBL강좌수을(를) 입력해주세요."));
}
