mod config;
pub(crate) mod policy;
pub(crate) mod rules;

pub use config::EvaluationConfig;
pub use policy::{input_ceiling, GpaCeiling, InputBounds, GPA_SCALE_MAX};
pub use rules::{calculate_completion, extract_number, parse_float};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::allocation::allocation_for;
use super::domain::{CreditRecord, MajorType, RequirementKey};

/// Binary completion verdict, rendered as `Y` / `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Completion {
    #[serde(rename = "Y")]
    Complete,
    #[serde(rename = "N")]
    Incomplete,
}

impl Completion {
    pub fn as_str(self) -> &'static str {
        match self {
            Completion::Complete => "Y",
            Completion::Incomplete => "N",
        }
    }

    pub fn is_complete(self) -> bool {
        self == Completion::Complete
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table group on the result sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSection {
    PrimaryMajor,
    SecondMajor,
    Requirements,
}

impl ReportSection {
    pub fn title(self) -> &'static str {
        match self {
            ReportSection::PrimaryMajor => "주전공(제1전공) 학점 현황",
            ReportSection::SecondMajor => "제2전공 현황",
            ReportSection::Requirements => "필수 요건",
        }
    }

    /// Rows of this section for `major`, in display order. Empty when the section is hidden.
    pub fn rows_for(self, major: MajorType) -> Vec<RequirementKey> {
        use RequirementKey::*;

        match self {
            ReportSection::PrimaryMajor => {
                let mut rows = vec![
                    Graduation,
                    Major,
                    CoreMajor,
                    AdvancedMajor,
                    IndustryCooperation,
                    GeneralElective,
                ];
                if major == MajorType::Micro {
                    rows.insert(0, Enrollment);
                    rows.push(MicroMajor);
                }
                rows
            }
            ReportSection::SecondMajor if major == MajorType::Double => {
                RequirementKey::DOUBLE_ONLY.to_vec()
            }
            ReportSection::SecondMajor => Vec::new(),
            ReportSection::Requirements => vec![
                Prerequisite,
                Uncompleted,
                Thesis,
                EnglishOnly,
                GraduationGpa,
                SocialService,
                Pbl,
                MajorIcPbl,
            ],
        }
    }
}

/// One rendered row: label, allocation, acquired value, and verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementRow {
    pub key: RequirementKey,
    pub label: &'static str,
    pub allocation: String,
    pub acquired: String,
    pub completion: Completion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub section: ReportSection,
    pub title: &'static str,
    pub rows: Vec<RequirementRow>,
}

/// Completion table for a credit sheet, grouped as on the result page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraduationReport {
    #[serde(rename = "type")]
    pub major: MajorType,
    pub sections: Vec<SectionReport>,
}

impl GraduationReport {
    pub fn rows(&self) -> impl Iterator<Item = &RequirementRow> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }

    pub fn row(&self, key: RequirementKey) -> Option<&RequirementRow> {
        self.rows().find(|row| row.key == key)
    }

    pub fn completion(&self, key: RequirementKey) -> Option<Completion> {
        self.row(key).map(|row| row.completion)
    }

    pub fn incomplete_keys(&self) -> Vec<RequirementKey> {
        self.rows()
            .filter(|row| !row.completion.is_complete())
            .map(|row| row.key)
            .collect()
    }

    pub fn all_complete(&self) -> bool {
        self.rows().all(|row| row.completion.is_complete())
    }
}

/// Build the completion table for `credits` under `major`.
pub fn evaluate(major: MajorType, credits: &CreditRecord) -> GraduationReport {
    let sections: Vec<SectionReport> = [
        ReportSection::PrimaryMajor,
        ReportSection::SecondMajor,
        ReportSection::Requirements,
    ]
    .into_iter()
    .filter_map(|section| {
        let keys = section.rows_for(major);
        if keys.is_empty() {
            return None;
        }
        let rows = keys
            .into_iter()
            .map(|key| evaluate_row(major, key, credits.get(key)))
            .collect();
        Some(SectionReport {
            section,
            title: section.title(),
            rows,
        })
    })
    .collect();

    let report = GraduationReport { major, sections };
    debug!(
        major = %major,
        incomplete = report.incomplete_keys().len(),
        "evaluated credit sheet"
    );
    report
}

fn evaluate_row(major: MajorType, key: RequirementKey, value: &str) -> RequirementRow {
    let allocation = allocation_for(major, key);
    let completion = calculate_completion(value, &allocation);
    RequirementRow {
        key,
        label: key.row_label(),
        allocation: allocation.to_string(),
        acquired: if value.is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        },
        completion,
    }
}
