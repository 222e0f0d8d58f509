use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Degree track selected at upload time; decides the active rows and allocation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MajorType {
    Basic,
    Double,
    Micro,
}

impl MajorType {
    pub const ALL: [MajorType; 3] = [MajorType::Basic, MajorType::Double, MajorType::Micro];

    pub fn as_str(self) -> &'static str {
        match self {
            MajorType::Basic => "BASIC",
            MajorType::Double => "DOUBLE",
            MajorType::Micro => "MICRO",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MajorType::Basic => "제1전공",
            MajorType::Double => "제1전공 + 제2전공",
            MajorType::Micro => "제1전공 + 마이크로전공",
        }
    }
}

impl fmt::Display for MajorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MajorType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "BASIC" => Ok(MajorType::Basic),
            "DOUBLE" => Ok(MajorType::Double),
            "MICRO" => Ok(MajorType::Micro),
            _ => Err(UnknownVariant {
                kind: "major type",
                value: value.to_string(),
            }),
        }
    }
}

/// Raised when a textual major type or requirement key does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Symbolic name of one graduation requirement row.
///
/// Variant order is the order rows are listed on the credit sheet, which is also the
/// iteration order of [`CreditRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequirementKey {
    Enrollment,
    Graduation,
    Major,
    CoreMajor,
    AdvancedMajor,
    IndustryCooperation,
    GeneralElective,
    MicroMajor,
    SecondMajor,
    SecondCoreMajor,
    SecondPrerequisite,
    SecondUncompleted,
    Prerequisite,
    Uncompleted,
    Thesis,
    EnglishOnly,
    GraduationGpa,
    SocialService,
    Pbl,
    MajorIcPbl,
}

impl RequirementKey {
    pub const ALL: [RequirementKey; 20] = [
        RequirementKey::Enrollment,
        RequirementKey::Graduation,
        RequirementKey::Major,
        RequirementKey::CoreMajor,
        RequirementKey::AdvancedMajor,
        RequirementKey::IndustryCooperation,
        RequirementKey::GeneralElective,
        RequirementKey::MicroMajor,
        RequirementKey::SecondMajor,
        RequirementKey::SecondCoreMajor,
        RequirementKey::SecondPrerequisite,
        RequirementKey::SecondUncompleted,
        RequirementKey::Prerequisite,
        RequirementKey::Uncompleted,
        RequirementKey::Thesis,
        RequirementKey::EnglishOnly,
        RequirementKey::GraduationGpa,
        RequirementKey::SocialService,
        RequirementKey::Pbl,
        RequirementKey::MajorIcPbl,
    ];

    /// Keys shared by every major type.
    pub const BASE: [RequirementKey; 14] = [
        RequirementKey::Graduation,
        RequirementKey::Major,
        RequirementKey::CoreMajor,
        RequirementKey::AdvancedMajor,
        RequirementKey::IndustryCooperation,
        RequirementKey::GeneralElective,
        RequirementKey::Prerequisite,
        RequirementKey::Uncompleted,
        RequirementKey::Thesis,
        RequirementKey::EnglishOnly,
        RequirementKey::GraduationGpa,
        RequirementKey::SocialService,
        RequirementKey::Pbl,
        RequirementKey::MajorIcPbl,
    ];

    pub const MICRO_ONLY: [RequirementKey; 2] =
        [RequirementKey::Enrollment, RequirementKey::MicroMajor];

    pub const DOUBLE_ONLY: [RequirementKey; 4] = [
        RequirementKey::SecondMajor,
        RequirementKey::SecondCoreMajor,
        RequirementKey::SecondPrerequisite,
        RequirementKey::SecondUncompleted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequirementKey::Enrollment => "enrollment",
            RequirementKey::Graduation => "graduation",
            RequirementKey::Major => "major",
            RequirementKey::CoreMajor => "coreMajor",
            RequirementKey::AdvancedMajor => "advancedMajor",
            RequirementKey::IndustryCooperation => "industryCooperation",
            RequirementKey::GeneralElective => "generalElective",
            RequirementKey::MicroMajor => "microMajor",
            RequirementKey::SecondMajor => "secondMajor",
            RequirementKey::SecondCoreMajor => "secondCoreMajor",
            RequirementKey::SecondPrerequisite => "secondPrerequisite",
            RequirementKey::SecondUncompleted => "secondUncompleted",
            RequirementKey::Prerequisite => "prerequisite",
            RequirementKey::Uncompleted => "uncompleted",
            RequirementKey::Thesis => "thesis",
            RequirementKey::EnglishOnly => "englishOnly",
            RequirementKey::GraduationGpa => "graduationGpa",
            RequirementKey::SocialService => "socialService",
            RequirementKey::Pbl => "pbl",
            RequirementKey::MajorIcPbl => "majorIcPbl",
        }
    }

    /// Human readable field name used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            RequirementKey::Enrollment => "재학(졸업직전) 및 수업연한 충족",
            RequirementKey::Graduation => "졸업학점",
            RequirementKey::Major => "전공학점",
            RequirementKey::CoreMajor => "전공핵심",
            RequirementKey::AdvancedMajor => "전공심화",
            RequirementKey::IndustryCooperation => "산학협력영역",
            RequirementKey::GeneralElective => "교양선택",
            RequirementKey::MicroMajor => "마이크로전공 이수여부",
            RequirementKey::SecondMajor => "제2전공 전공학점",
            RequirementKey::SecondCoreMajor => "제2전공 전공핵심",
            RequirementKey::SecondPrerequisite => "제2전공 선수강이수여부",
            RequirementKey::SecondUncompleted => "제2전공 미필과목이수여부",
            RequirementKey::Prerequisite => "선수강이수여부",
            RequirementKey::Uncompleted => "미필과목이수여부",
            RequirementKey::Thesis => "졸업논문/시험/작품",
            RequirementKey::EnglishOnly => "영어전용강좌수",
            RequirementKey::GraduationGpa => "졸업평점",
            RequirementKey::SocialService => "사회봉사",
            RequirementKey::Pbl => "PBL강좌수",
            RequirementKey::MajorIcPbl => "전공IC-PBL강좌수",
        }
    }

    /// Label shown in a result table row. Second-major rows sit under their own
    /// heading, so they drop the "제2전공" prefix.
    pub fn row_label(self) -> &'static str {
        match self {
            RequirementKey::SecondMajor => RequirementKey::Major.label(),
            RequirementKey::SecondCoreMajor => RequirementKey::CoreMajor.label(),
            RequirementKey::SecondPrerequisite => RequirementKey::Prerequisite.label(),
            RequirementKey::SecondUncompleted => RequirementKey::Uncompleted.label(),
            other => other.label(),
        }
    }

    /// Keys a sheet for `major` carries: the shared keys, then the major's own, in prompt
    /// order. Validation and the result table both read from this list.
    pub fn active_for(major: MajorType) -> Vec<RequirementKey> {
        let mut keys = Self::BASE.to_vec();
        match major {
            MajorType::Basic => {}
            MajorType::Micro => keys.extend(Self::MICRO_ONLY),
            MajorType::Double => keys.extend(Self::DOUBLE_ONLY),
        }
        keys
    }
}

impl fmt::Display for RequirementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequirementKey {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == trimmed)
            .ok_or_else(|| UnknownVariant {
                kind: "requirement key",
                value: value.to_string(),
            })
    }
}

/// Raw acquired values keyed by requirement, exactly as typed or scanned.
///
/// Values are kept as strings: `"Y"`/`"N"` flags, GPA decimals, or credit counts that may
/// carry a remainder annotation such as `"95(45)"`. An empty string means "not entered".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CreditRecord(BTreeMap<RequirementKey, String>);

impl Default for CreditRecord {
    fn default() -> Self {
        Self::blank()
    }
}

/// Stored sheets may predate some keys; whatever is missing reads as blank.
impl<'de> Deserialize<'de> for CreditRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<RequirementKey, String>::deserialize(deserializer)?;
        let mut record = Self::blank();
        record.0.extend(entries);
        Ok(record)
    }
}

impl CreditRecord {
    /// Record with every key present and empty.
    pub fn blank() -> Self {
        Self(
            RequirementKey::ALL
                .into_iter()
                .map(|key| (key, String::new()))
                .collect(),
        )
    }

    pub fn get(&self, key: RequirementKey) -> &str {
        self.0.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: RequirementKey, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    pub fn is_blank(&self, key: RequirementKey) -> bool {
        self.get(key).trim().is_empty()
    }

    /// Overlays every entry of `other` onto this record.
    pub fn merge(&mut self, other: CreditRecord) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (RequirementKey, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

impl<V: Into<String>> FromIterator<(RequirementKey, V)> for CreditRecord {
    fn from_iter<T: IntoIterator<Item = (RequirementKey, V)>>(iter: T) -> Self {
        let mut record = Self::blank();
        for (key, value) in iter {
            record.set(key, value);
        }
        record
    }
}

/// Confirmed credit sheet, persisted as `{ "type": ..., "credits": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraduationResult {
    #[serde(rename = "type")]
    pub major: MajorType,
    pub credits: CreditRecord,
}
