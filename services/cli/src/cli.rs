use crate::commands::{self, EvaluateArgs, InputArgs, ShowArgs, SubmitArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::JsonFileStore;
use clap::{Parser, Subcommand};
use navi_graduation::config::AppConfig;
use navi_graduation::error::AppError;
use navi_graduation::graduation::GraduationService;
use navi_graduation::telemetry;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "navi",
    about = "Check graduation credit requirements and keep the confirmed credit sheet",
    version
)]
struct Cli {
    /// Override the store file (defaults to NAVI_STORE_PATH or .navi/store.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the completion table for a credit sheet without saving it
    Evaluate(EvaluateArgs),
    /// Run one keystroke through the input guard and print the value that would be stored
    Input(InputArgs),
    /// Validate and save a credit sheet, then print its completion table
    Submit(SubmitArgs),
    /// Print the completion table of the saved credit sheet
    Show(ShowArgs),
    /// Remove the saved credit sheet
    Clear,
    /// Walk through typing, validating, and submitting a sheet against an in-memory store
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(path) = cli.store {
        config.store.path = path;
    }
    telemetry::init(&config.telemetry)?;
    debug!(
        ?config.environment,
        store = %config.store.path.display(),
        "configuration loaded"
    );

    let evaluation = config.evaluation;
    let store_path = config.store.path;
    let file_service = || {
        GraduationService::new(Arc::new(JsonFileStore::new(store_path.clone())), evaluation)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Evaluate(args) => commands::evaluate(&file_service(), args, &mut out),
        Command::Input(args) => commands::input(&file_service(), args, &mut out),
        Command::Submit(args) => commands::submit(&file_service(), args, &mut out),
        Command::Show(args) => commands::show(&file_service(), args, &mut out),
        Command::Clear => commands::clear(&file_service(), &mut out),
        Command::Demo(args) => run_demo(args, evaluation, &mut out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::OutputFormat;
    use clap::CommandFactory;
    use navi_graduation::graduation::{MajorType, RequirementKey};

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_evaluate_with_overrides() {
        let cli = Cli::try_parse_from([
            "navi",
            "evaluate",
            "--type",
            "double",
            "--credits",
            "{}",
            "--set",
            "secondMajor=36(0)",
            "--set",
            "thesis=Y",
            "--format",
            "csv",
        ])
        .expect("arguments parse");

        let Command::Evaluate(args) = cli.command else {
            panic!("expected evaluate command");
        };
        assert_eq!(args.sheet.major, MajorType::Double);
        assert_eq!(args.sheet.credits.as_deref(), Some("{}"));
        assert_eq!(
            args.sheet.set,
            vec![
                (RequirementKey::SecondMajor, "36(0)".to_string()),
                (RequirementKey::Thesis, "Y".to_string()),
            ]
        );
        assert_eq!(args.format, OutputFormat::Csv);
    }

    #[test]
    fn credits_and_file_are_exclusive() {
        let result = Cli::try_parse_from([
            "navi", "submit", "--type", "BASIC", "--credits", "{}", "--file", "sheet.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn store_override_is_global() {
        let cli = Cli::try_parse_from(["navi", "show", "--store", "/tmp/navi.json"])
            .expect("arguments parse");
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/navi.json")));
        assert!(matches!(cli.command, Command::Show(_)));
    }

    #[test]
    fn input_accepts_negative_looking_values() {
        let cli = Cli::try_parse_from([
            "navi", "input", "--type", "BASIC", "--key", "coreMajor", "--value", "-5",
        ])
        .expect("arguments parse");
        let Command::Input(args) = cli.command else {
            panic!("expected input command");
        };
        assert_eq!(args.value, "-5");
        assert_eq!(args.current, "");
    }

    #[test]
    fn unknown_major_type_is_rejected() {
        assert!(Cli::try_parse_from(["navi", "demo", "--type", "TRIPLE"]).is_err());
    }
}
