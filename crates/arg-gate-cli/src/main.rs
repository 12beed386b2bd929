// crates/arg-gate-cli/src/main.rs
// ============================================================================
// Module: arg-gate CLI Entry Point
// Description: Argument check harness reporting SUCCESS or FAILURE.
// Purpose: Provide a localized CLI around the arg-gate core check.
// Dependencies: arg-gate-core, clap, thiserror.
// ============================================================================

//! ## Overview
//! The arg-gate CLI echoes its positional arguments, checks whether the first
//! one is the expected greeting, and reports the outcome as a status line.
//! The exit code mirrors the outcome: `0` on success, `1` on failure. All
//! user-facing strings are routed through the i18n catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use arg_gate_cli::i18n::Locale;
use arg_gate_cli::i18n::set_locale;
use arg_gate_cli::output::JsonSink;
use arg_gate_cli::output::TextSink;
use arg_gate_cli::output::output_error;
use arg_gate_cli::t;
use arg_gate_core::CheckOutcome;
use arg_gate_core::InputArguments;
use arg_gate_core::ReportError;
use arg_gate_core::run_report;
use clap::ArgAction;
use clap::Parser;
use clap::ValueEnum;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "ARG_GATE_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "arg-gate", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Preferred output language (overrides `ARG_GATE_LANG`).
    #[arg(long, value_enum, value_name = "LANG")]
    lang: Option<LangArg>,
    /// Report format.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Arguments to check; only the first one decides the outcome.
    #[arg(
        value_name = "ARGS",
        value_parser = clap::value_parser!(OsString),
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<OsString>,
}

/// Supported CLI output languages.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

/// Report output formats.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One localized line per diagnostic.
    Text,
    /// One JSON object per diagnostic.
    Json,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

impl From<ReportError> for CliError {
    fn from(err: ReportError) -> Self {
        let ReportError::Sink(reason) = err;
        Self::new(t!("report.failed", error = reason))
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Parses arguments, configures the locale, and runs the check.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = command_check(input_arguments(&cli.args), cli.format)?;
    Ok(exit_code_for(outcome))
}

// ============================================================================
// SECTION: Check Command
// ============================================================================

/// Runs the check against `args`, reporting in `format` on stdout.
fn command_check(args: InputArguments, format: OutputFormat) -> CliResult<CheckOutcome> {
    let stdout = std::io::stdout().lock();
    let outcome = match format {
        OutputFormat::Text => run_report(&args, TextSink::new(stdout, "stdout"))?,
        OutputFormat::Json => run_report(&args, JsonSink::new(stdout, "stdout"))?,
    };
    Ok(outcome)
}

/// Converts raw process arguments for the check.
///
/// Invalid UTF-8 is replaced with U+FFFD, so such an argument never matches
/// the expected greeting.
fn input_arguments(raw: &[OsString]) -> InputArguments {
    raw.iter().map(|arg| arg.to_string_lossy().into_owned()).collect()
}

/// Maps a check outcome to the process exit code.
fn exit_code_for(outcome: CheckOutcome) -> ExitCode {
    match outcome {
        CheckOutcome::Success => ExitCode::SUCCESS,
        CheckOutcome::Failure => ExitCode::FAILURE,
    }
}

// ============================================================================
// SECTION: Locale Helpers
// ============================================================================

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
