use crate::infra::{parse_major, InMemoryStore};
use crate::render::{render_report, render_validation, OutputFormat};
use clap::Args;
use navi_graduation::error::AppError;
use navi_graduation::graduation::{
    CreditDraft, EvaluationConfig, GraduationService, KeyValueStore, MajorType, RequirementKey,
};
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Major type to walk through: BASIC, DOUBLE, or MICRO
    #[arg(long = "type", value_parser = parse_major, default_value = "BASIC")]
    pub(crate) major: MajorType,
}

/// Keystrokes for the first pass. Some are deliberately out of range or misspelled.
fn first_pass(major: MajorType) -> Vec<(RequirementKey, &'static str)> {
    use RequirementKey::*;

    let mut strokes = vec![
        (Graduation, "200"),
        (Graduation, "1a38"),
        (Major, "80"),
        (CoreMajor, "36"),
        (AdvancedMajor, "30"),
        (IndustryCooperation, "6"),
        (GeneralElective, "12(2)"),
        (Prerequisite, "yes"),
        (Uncompleted, "y"),
        (Thesis, "Y"),
        (EnglishOnly, "11"),
        (EnglishOnly, "3"),
        (GraduationGpa, "3..85"),
    ];
    match major {
        MajorType::Basic => {}
        MajorType::Micro => strokes.push((Enrollment, "y")),
        MajorType::Double => strokes.extend([(SecondMajor, "30(6)"), (SecondCoreMajor, "-18")]),
    }
    strokes
}

/// Keystrokes that complete the sheet after the first submission is refused.
fn second_pass(major: MajorType) -> Vec<(RequirementKey, &'static str)> {
    use RequirementKey::*;

    let mut strokes = vec![(SocialService, "1"), (Pbl, "5"), (MajorIcPbl, "2")];
    match major {
        MajorType::Basic => {}
        MajorType::Micro => strokes.push((MicroMajor, "Y")),
        MajorType::Double => strokes.extend([
            (SecondCoreMajor, "18"),
            (SecondPrerequisite, "Y"),
            (SecondUncompleted, "Y"),
        ]),
    }
    strokes
}

pub(crate) fn run_demo<W: Write>(
    args: DemoArgs,
    config: EvaluationConfig,
    out: &mut W,
) -> Result<(), AppError> {
    let major = args.major;
    let service = GraduationService::new(Arc::new(InMemoryStore::default()), config);

    writeln!(out, "졸업사정조회 데모: {} ({})", major.label(), major)?;
    let mut draft = service.start_draft(major);

    writeln!(out, "\n입력")?;
    for (key, raw) in first_pass(major) {
        type_into(&service, &mut draft, key, raw, out)?;
    }

    writeln!(out, "\n제출 시도")?;
    match service.submit(&draft) {
        Ok(_) => writeln!(out, "- 제출 완료")?,
        Err(err) => {
            writeln!(out, "- 제출 거부")?;
            render_validation(out, &draft.validate())?;
            debug!(error = %err, "demo submission refused");
        }
    }

    writeln!(out, "\n나머지 입력")?;
    for (key, raw) in second_pass(major) {
        type_into(&service, &mut draft, key, raw, out)?;
    }

    let report = service.submit(&draft)?;
    writeln!(out, "\n제출 완료\n")?;
    render_report(out, &report, OutputFormat::Table)?;

    let saved = service.saved()?.map(|saved| saved.major);
    writeln!(
        out,
        "\n저장된 결과: {}",
        saved.map(MajorType::as_str).unwrap_or("-")
    )?;
    Ok(())
}

fn type_into<S, W>(
    service: &GraduationService<S>,
    draft: &mut CreditDraft,
    key: RequirementKey,
    raw: &str,
    out: &mut W,
) -> Result<(), AppError>
where
    S: KeyValueStore + 'static,
    W: Write,
{
    let changed = service.input(draft, key, raw);
    let stored = draft.credits.get(key);
    let note = if changed && stored == raw {
        ""
    } else if changed {
        " (정리됨)"
    } else {
        " (거부됨)"
    };
    writeln!(out, "- {}: '{}' -> '{}'{}", key.label(), raw, stored, note)?;
    Ok(())
}
