//! Keystroke-level filters for credit sheet fields.
//!
//! Every sanitizer returns the value to store. A keystroke that would break a constraint is
//! rejected by handing back the current value unchanged; nothing here fails.

use tracing::debug;

use super::allocation::{allocation_for, Allocation};
use super::domain::{MajorType, RequirementKey};
use super::evaluation::policy::{input_ceiling, GpaCeiling, InputBounds};
use super::evaluation::rules::{extract_number, parse_float};
use super::evaluation::EvaluationConfig;

/// Editor behaviour of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Single `Y` / `N` character.
    Flag,
    /// Decimal grade point average.
    Gpa,
    /// Credit or course count, optionally with a `(remaining)` annotation.
    Numeric,
}

impl InputKind {
    pub fn of(key: RequirementKey) -> Self {
        use RequirementKey::*;

        match key {
            Prerequisite | Uncompleted | Thesis | Enrollment | MicroMajor | SecondPrerequisite
            | SecondUncompleted => InputKind::Flag,
            GraduationGpa => InputKind::Gpa,
            Graduation | Major | CoreMajor | AdvancedMajor | IndustryCooperation
            | GeneralElective | EnglishOnly | SocialService | Pbl | MajorIcPbl | SecondMajor
            | SecondCoreMajor => InputKind::Numeric,
        }
    }
}

/// Filter a credit count keystroke.
///
/// Keeps digits, parentheses, and dots. Text without a leading number is accepted as typed
/// so intermediate states such as `"("` stay editable. A negative entry is rejected, as is a
/// leading number above a numeric `bound`, except for the GPA field whose allocation is a
/// minimum.
pub fn sanitize_numeric(
    raw: &str,
    bound: &Allocation,
    key: RequirementKey,
    current: &str,
) -> String {
    let filtered: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '(' | ')' | '.'))
        .collect();

    if filtered.is_empty() {
        return filtered;
    }

    let Some(amount) = extract_number(&filtered) else {
        return filtered;
    };

    if is_negative_entry(raw) {
        return current.to_string();
    }

    if key != RequirementKey::GraduationGpa {
        if let Some(limit) = bound.as_number() {
            if amount > limit {
                return current.to_string();
            }
        }
    }

    filtered
}

/// Filter a yes/no keystroke down to at most one upper-case `Y` or `N`.
pub fn sanitize_flag(raw: &str) -> String {
    raw.chars()
        .filter(|ch| matches!(ch, 'Y' | 'y' | 'N' | 'n'))
        .map(|ch| ch.to_ascii_uppercase())
        .take(1)
        .collect()
}

/// Filter a GPA keystroke: digits and a single decimal point, capped by a numeric `bound`.
pub fn sanitize_gpa(raw: &str, bound: &Allocation, current: &str) -> String {
    let mut seen_dot = false;
    let filtered: String = raw
        .chars()
        .filter(|ch| match ch {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        })
        .collect();

    if filtered.is_empty() {
        return filtered;
    }

    let Some(value) = parse_float(&filtered) else {
        return current.to_string();
    };

    if value < 0.0 || is_negative_entry(raw) {
        return current.to_string();
    }

    if let Some(limit) = bound.as_number() {
        if value > limit {
            return current.to_string();
        }
    }

    filtered
}

/// The sign is stripped by filtering, so a negative entry is recognised on the raw text.
fn is_negative_entry(raw: &str) -> bool {
    raw.trim_start().starts_with('-')
}

/// Routes a keystroke to the sanitizer and bound that fit the field.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputGuard {
    bounds: InputBounds,
    gpa_ceiling: GpaCeiling,
}

impl InputGuard {
    pub fn new(bounds: InputBounds, gpa_ceiling: GpaCeiling) -> Self {
        Self {
            bounds,
            gpa_ceiling,
        }
    }

    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self::new(config.input_bounds, config.gpa_ceiling)
    }

    /// Upper bound the guard enforces for `key` while typing.
    pub fn bound_for(&self, major: MajorType, key: RequirementKey) -> Allocation {
        match InputKind::of(key) {
            InputKind::Flag => Allocation::Unassigned,
            InputKind::Gpa => self
                .gpa_ceiling
                .limit()
                .map(Allocation::Credits)
                .unwrap_or(Allocation::Unassigned),
            InputKind::Numeric => match self.bounds {
                InputBounds::Ceilings => input_ceiling(key)
                    .map(Allocation::Credits)
                    .unwrap_or(Allocation::Unassigned),
                InputBounds::Allocation => allocation_for(major, key),
            },
        }
    }

    /// Value to store after `raw` is typed into `key` holding `current`.
    pub fn apply(&self, major: MajorType, key: RequirementKey, raw: &str, current: &str) -> String {
        let bound = self.bound_for(major, key);
        let next = match InputKind::of(key) {
            InputKind::Flag => sanitize_flag(raw),
            InputKind::Gpa => sanitize_gpa(raw, &bound, current),
            InputKind::Numeric => sanitize_numeric(raw, &bound, key, current),
        };

        if next == current && raw != current {
            debug!(%major, %key, "keystroke left field unchanged");
        }
        next
    }
}
