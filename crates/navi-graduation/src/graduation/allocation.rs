use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::domain::{MajorType, RequirementKey};
use super::evaluation::rules::parse_float;

/// Requirement attached to a row of the credit sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Allocation {
    /// No requirement; the row is always satisfied.
    Unassigned,
    /// Yes/no gate that is met only by an explicit `"Y"`.
    Gate,
    /// Minimum numeric amount (credits or course count).
    Credits(f64),
    /// Minimum kept in its textual form, such as a GPA of `"1.75"`.
    Literal(Cow<'static, str>),
}

impl Allocation {
    /// Empty, zero, or NaN allocations carry no requirement.
    pub fn is_vacant(&self) -> bool {
        match self {
            Allocation::Unassigned => true,
            Allocation::Gate => false,
            Allocation::Credits(amount) => *amount == 0.0 || amount.is_nan(),
            Allocation::Literal(text) => text.is_empty(),
        }
    }

    pub fn is_gate(&self) -> bool {
        matches!(self, Allocation::Gate)
    }

    /// Numeric reading of the allocation, or `None` when it has no numeric meaning.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Allocation::Unassigned | Allocation::Gate => None,
            Allocation::Credits(amount) if amount.is_nan() => None,
            Allocation::Credits(amount) => Some(*amount),
            Allocation::Literal(text) => parse_float(text),
        }
    }
}

impl From<&str> for Allocation {
    fn from(value: &str) -> Self {
        match value {
            "" => Allocation::Unassigned,
            "Y" => Allocation::Gate,
            other => Allocation::Literal(Cow::Owned(other.to_string())),
        }
    }
}

impl From<f64> for Allocation {
    fn from(value: f64) -> Self {
        Allocation::Credits(value)
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allocation::Unassigned => Ok(()),
            Allocation::Gate => f.write_str("Y"),
            Allocation::Credits(amount) => write!(f, "{amount}"),
            Allocation::Literal(text) => f.write_str(text),
        }
    }
}

impl Serialize for Allocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Allocation::Credits(amount) if amount.fract() == 0.0 && amount.abs() < 1e15 => {
                serializer.serialize_i64(*amount as i64)
            }
            Allocation::Credits(amount) => serializer.serialize_f64(*amount),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Allocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAllocation {
            Number(f64),
            Text(String),
        }

        Ok(match RawAllocation::deserialize(deserializer)? {
            RawAllocation::Number(amount) => Allocation::Credits(amount),
            RawAllocation::Text(text) => Allocation::from(text.as_str()),
        })
    }
}

/// Static allocation table for one family of major types.
#[derive(Debug)]
pub struct AllocationTable {
    entries: &'static [(RequirementKey, Allocation)],
}

static SINGLE_MAJOR: AllocationTable = AllocationTable {
    entries: &[
        (RequirementKey::Graduation, Allocation::Credits(140.0)),
        (RequirementKey::Major, Allocation::Credits(75.0)),
        (RequirementKey::CoreMajor, Allocation::Credits(36.0)),
        (RequirementKey::AdvancedMajor, Allocation::Credits(30.0)),
        (RequirementKey::IndustryCooperation, Allocation::Credits(6.0)),
        (RequirementKey::GeneralElective, Allocation::Credits(10.0)),
        (RequirementKey::Prerequisite, Allocation::Gate),
        (RequirementKey::Uncompleted, Allocation::Gate),
        (RequirementKey::Thesis, Allocation::Gate),
        (RequirementKey::EnglishOnly, Allocation::Credits(2.0)),
        (
            RequirementKey::GraduationGpa,
            Allocation::Literal(Cow::Borrowed("1.75")),
        ),
        (RequirementKey::SocialService, Allocation::Credits(1.0)),
        (RequirementKey::Pbl, Allocation::Credits(4.0)),
        (RequirementKey::MajorIcPbl, Allocation::Credits(1.0)),
        (RequirementKey::Enrollment, Allocation::Gate),
        (RequirementKey::MicroMajor, Allocation::Gate),
    ],
};

static DOUBLE_MAJOR: AllocationTable = AllocationTable {
    entries: &[
        (RequirementKey::Graduation, Allocation::Credits(140.0)),
        (RequirementKey::Major, Allocation::Credits(45.0)),
        (RequirementKey::CoreMajor, Allocation::Credits(34.0)),
        (RequirementKey::AdvancedMajor, Allocation::Unassigned),
        (RequirementKey::IndustryCooperation, Allocation::Credits(6.0)),
        (RequirementKey::GeneralElective, Allocation::Credits(10.0)),
        (RequirementKey::Prerequisite, Allocation::Gate),
        (RequirementKey::Uncompleted, Allocation::Gate),
        (RequirementKey::Thesis, Allocation::Gate),
        (RequirementKey::EnglishOnly, Allocation::Credits(2.0)),
        (
            RequirementKey::GraduationGpa,
            Allocation::Literal(Cow::Borrowed("1.25")),
        ),
        (RequirementKey::SocialService, Allocation::Credits(1.0)),
        (RequirementKey::Pbl, Allocation::Credits(4.0)),
        (RequirementKey::MajorIcPbl, Allocation::Credits(1.0)),
        (RequirementKey::SecondMajor, Allocation::Credits(36.0)),
        (RequirementKey::SecondCoreMajor, Allocation::Credits(18.0)),
        (RequirementKey::SecondPrerequisite, Allocation::Gate),
        (RequirementKey::SecondUncompleted, Allocation::Gate),
    ],
};

impl AllocationTable {
    /// BASIC and MICRO share one table; DOUBLE has its own.
    pub fn for_major(major: MajorType) -> &'static AllocationTable {
        match major {
            MajorType::Basic | MajorType::Micro => &SINGLE_MAJOR,
            MajorType::Double => &DOUBLE_MAJOR,
        }
    }

    pub fn get(&self, key: RequirementKey) -> Allocation {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == key)
            .map(|(_, allocation)| allocation.clone())
            .unwrap_or(Allocation::Unassigned)
    }
}

/// Allocation for `key` under `major`, [`Allocation::Unassigned`] when the table has none.
pub fn allocation_for(major: MajorType, key: RequirementKey) -> Allocation {
    AllocationTable::for_major(major).get(key)
}
