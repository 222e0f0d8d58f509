use crate::infra::{parse_assignment, parse_credit_sheet, parse_key, parse_major};
use crate::render::{render_report, render_validation, OutputFormat, EMPTY_RESULT_MESSAGE};
use clap::Args;
use navi_graduation::error::AppError;
use navi_graduation::graduation::{
    CreditDraft, GraduationService, KeyValueStore, MajorType, RequirementKey,
};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct SheetArgs {
    /// Major type: BASIC, DOUBLE, or MICRO
    #[arg(long = "type", value_parser = parse_major)]
    pub(crate) major: MajorType,
    /// Credit sheet as a JSON object keyed by requirement name
    #[arg(long, conflicts_with = "file")]
    pub(crate) credits: Option<String>,
    /// Read the credit sheet JSON from a file
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Type a value into one field (key=value); repeatable, applied after the sheet
    #[arg(long = "set", value_parser = parse_assignment)]
    pub(crate) set: Vec<(RequirementKey, String)>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    #[command(flatten)]
    pub(crate) sheet: SheetArgs,
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct SubmitArgs {
    #[command(flatten)]
    pub(crate) sheet: SheetArgs,
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct InputArgs {
    /// Major type: BASIC, DOUBLE, or MICRO
    #[arg(long = "type", value_parser = parse_major)]
    pub(crate) major: MajorType,
    /// Requirement key, e.g. coreMajor
    #[arg(long, value_parser = parse_key)]
    pub(crate) key: RequirementKey,
    /// Raw text as typed
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) value: String,
    /// Value currently held by the field
    #[arg(long, default_value = "")]
    pub(crate) current: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ShowArgs {
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
}

/// Builds a draft from the sheet, then types each `--set` override through the guard.
fn build_draft<S>(
    service: &GraduationService<S>,
    sheet: SheetArgs,
) -> Result<CreditDraft, AppError>
where
    S: KeyValueStore + 'static,
{
    let SheetArgs {
        major,
        credits,
        file,
        set,
    } = sheet;

    let raw = match (credits, file) {
        (Some(json), _) => Some(json),
        (None, Some(path)) => Some(fs::read_to_string(path)?),
        (None, None) => None,
    };

    let mut draft = service.start_draft(major);
    if let Some(raw) = raw {
        draft.credits.merge(parse_credit_sheet(&raw)?);
    }

    for (key, typed) in set {
        service.input(&mut draft, key, &typed);
        let stored = draft.credits.get(key);
        if stored != typed {
            warn!(%key, typed = %typed, stored = %stored, "override adjusted by input guard");
        }
    }
    Ok(draft)
}

pub(crate) fn evaluate<S, W>(
    service: &GraduationService<S>,
    args: EvaluateArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    S: KeyValueStore + 'static,
    W: Write,
{
    let EvaluateArgs { sheet, format } = args;
    let draft = build_draft(service, sheet)?;

    let report = service.preview(draft.major, &draft.credits);
    render_report(out, &report, format)?;

    let validation = draft.validate();
    if format == OutputFormat::Table && !validation.ok {
        writeln!(out)?;
        render_validation(out, &validation)?;
    }
    Ok(())
}

pub(crate) fn submit<S, W>(
    service: &GraduationService<S>,
    args: SubmitArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    S: KeyValueStore + 'static,
    W: Write,
{
    let SubmitArgs { sheet, format } = args;
    let draft = build_draft(service, sheet)?;

    let report = service.submit(&draft)?;
    render_report(out, &report, format)?;
    Ok(())
}

pub(crate) fn input<S, W>(
    service: &GraduationService<S>,
    args: InputArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    S: KeyValueStore + 'static,
    W: Write,
{
    let InputArgs {
        major,
        key,
        value,
        current,
    } = args;

    let stored = service.guard().apply(major, key, &value, &current);
    writeln!(out, "{stored}")?;
    Ok(())
}

pub(crate) fn show<S, W>(
    service: &GraduationService<S>,
    args: ShowArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    S: KeyValueStore + 'static,
    W: Write,
{
    match service.report()? {
        Some(report) => render_report(out, &report, args.format)?,
        None => writeln!(out, "{EMPTY_RESULT_MESSAGE}")?,
    }
    Ok(())
}

pub(crate) fn clear<S, W>(service: &GraduationService<S>, out: &mut W) -> Result<(), AppError>
where
    S: KeyValueStore + 'static,
    W: Write,
{
    service.clear()?;
    writeln!(out, "저장된 졸업사정조회 결과를 삭제했습니다.")?;
    Ok(())
}
