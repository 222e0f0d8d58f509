//! Graduation credit tracking: allocation tables, completion verdicts, keystroke
//! sanitizers, required-field validation, and persistence of the confirmed sheet.

pub mod allocation;
pub mod domain;
pub mod draft;
pub mod evaluation;
pub mod input;
pub mod repository;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use allocation::{allocation_for, Allocation, AllocationTable};
pub use domain::{CreditRecord, GraduationResult, MajorType, RequirementKey, UnknownVariant};
pub use draft::CreditDraft;
pub use evaluation::{
    calculate_completion, evaluate, extract_number, Completion, EvaluationConfig, GpaCeiling,
    GraduationReport, InputBounds, ReportSection, RequirementRow, SectionReport, GPA_SCALE_MAX,
};
pub use input::{sanitize_flag, sanitize_gpa, sanitize_numeric, InputGuard, InputKind};
pub use repository::{
    GraduationResultRepository, KeyValueStore, StoreError, GRADUATION_RESULT_KEY,
};
pub use service::{GraduationService, GraduationServiceError};
pub use validation::{required_keys, validate_inputs, ValidationError, ValidationReport};
