use serde::Serialize;

use super::domain::{CreditRecord, MajorType, RequirementKey};

/// Keys that must be filled before a sheet for `major` can be saved, in prompt order.
pub fn required_keys(major: MajorType) -> Vec<RequirementKey> {
    RequirementKey::active_for(major)
}

/// Outcome of the pre-submission check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    pub empty_field_labels: Vec<&'static str>,
}

impl ValidationReport {
    /// Prompt shown to the user, `None` when nothing is missing.
    pub fn message(&self) -> Option<String> {
        if self.ok {
            None
        } else {
            Some(missing_fields_message(&self.empty_field_labels))
        }
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.ok {
            Ok(())
        } else {
            Err(ValidationError::MissingFields {
                labels: self.empty_field_labels,
            })
        }
    }
}

/// Blocking submission error; recoverable by filling in the listed fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", missing_fields_message(.labels))]
    MissingFields { labels: Vec<&'static str> },
}

fn missing_fields_message(labels: &[&'static str]) -> String {
    format!("{}을(를) 입력해주세요.", labels.join(", "))
}

/// Check that every required field for `major` holds a non-blank value.
pub fn validate_inputs(major: MajorType, credits: &CreditRecord) -> ValidationReport {
    let empty_field_labels: Vec<&'static str> = required_keys(major)
        .into_iter()
        .filter(|key| credits.is_blank(*key))
        .map(RequirementKey::label)
        .collect();

    ValidationReport {
        ok: empty_field_labels.is_empty(),
        empty_field_labels,
    }
}
