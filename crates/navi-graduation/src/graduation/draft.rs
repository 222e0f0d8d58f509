use serde::{Deserialize, Serialize};

use super::domain::{CreditRecord, GraduationResult, MajorType, RequirementKey};
use super::input::InputGuard;
use super::validation::{validate_inputs, ValidationReport};

/// Credit sheet being filled in, either from a fresh scan or from a saved result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditDraft {
    #[serde(rename = "type")]
    pub major: MajorType,
    pub credits: CreditRecord,
}

impl CreditDraft {
    pub fn blank(major: MajorType) -> Self {
        Self {
            major,
            credits: CreditRecord::blank(),
        }
    }

    pub fn from_result(result: GraduationResult) -> Self {
        Self {
            major: result.major,
            credits: result.credits,
        }
    }

    /// Apply one keystroke to `key`; returns whether the stored value changed.
    pub fn input(&mut self, guard: &InputGuard, key: RequirementKey, raw: &str) -> bool {
        let current = self.credits.get(key);
        let next = guard.apply(self.major, key, raw, current);
        if next == current {
            return false;
        }
        self.credits.set(key, next);
        true
    }

    pub fn validate(&self) -> ValidationReport {
        validate_inputs(self.major, &self.credits)
    }

    pub fn to_result(&self) -> GraduationResult {
        GraduationResult {
            major: self.major,
            credits: self.credits.clone(),
        }
    }
}
