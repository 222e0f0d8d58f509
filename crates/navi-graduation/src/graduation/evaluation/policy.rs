use serde::{Deserialize, Serialize};

use super::super::domain::RequirementKey;

/// Top of the GPA scale. Distinct from the per-major GPA minimum in the allocation table.
pub const GPA_SCALE_MAX: f64 = 4.5;

/// Upper bound applied to GPA input.
///
/// The GPA allocation is a minimum to reach, never a cap, so the only meaningful bound is
/// the scale maximum. Whether to enforce it is a policy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpaCeiling {
    /// Reject GPA input above [`GPA_SCALE_MAX`].
    #[default]
    Scale,
    /// Accept any non-negative GPA.
    Uncapped,
}

impl GpaCeiling {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "scale" | "4.5" => Some(Self::Scale),
            "uncapped" | "none" => Some(Self::Uncapped),
            _ => None,
        }
    }

    pub fn limit(self) -> Option<f64> {
        match self {
            GpaCeiling::Scale => Some(GPA_SCALE_MAX),
            GpaCeiling::Uncapped => None,
        }
    }
}

/// Source of the upper bound for numeric credit fields while typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputBounds {
    /// Fixed per-field input ceilings (a transcript can exceed its allocation).
    #[default]
    Ceilings,
    /// The major type's allocation for the field.
    Allocation,
}

impl InputBounds {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ceilings" | "ceiling" => Some(Self::Ceilings),
            "allocation" | "allocations" => Some(Self::Allocation),
            _ => None,
        }
    }
}

/// Largest value accepted while typing into a numeric credit field.
pub fn input_ceiling(key: RequirementKey) -> Option<f64> {
    use RequirementKey::*;

    match key {
        Graduation | SecondMajor | SecondCoreMajor => Some(180.0),
        Major | CoreMajor | AdvancedMajor => Some(150.0),
        IndustryCooperation | GeneralElective | Pbl | MajorIcPbl => Some(50.0),
        EnglishOnly | SocialService => Some(10.0),
        GraduationGpa => Some(GPA_SCALE_MAX),
        Enrollment | MicroMajor | SecondPrerequisite | SecondUncompleted | Prerequisite
        | Uncompleted | Thesis => None,
    }
}
