// crates/arg-gate-core/src/checker.rs
// ============================================================================
// Module: Argument Checker
// Description: First-argument greeting check and its reporting wrapper.
// Purpose: Decide success or failure from the invocation arguments.
// Dependencies: crate::report, serde
// ============================================================================

//! ## Overview
//! [`check`] is the pure decision: success when the first argument is exactly
//! [`EXPECTED_FIRST_ARGUMENT`], failure otherwise (including no arguments).
//! [`ArgumentChecker`] wraps the decision with its two diagnostics and
//! [`run_report`] adds the wrapper echo and the final status line.
//!
//! ## Invariants
//! - The outcome depends only on the first argument.
//! - Comparison is exact and case-sensitive.
//! - The status line conditions on `return_code == SUCCESS_CODE`, never on
//!   the raw value of the code.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::report::Diagnostic;
use crate::report::ReportError;
use crate::report::ReportSink;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// First argument that makes a check succeed.
pub const EXPECTED_FIRST_ARGUMENT: &str = "hello";
/// Function status reported for a successful check.
pub const SUCCESS_CODE: i32 = 0;
/// Function status reported for a failed check.
pub const FAILURE_CODE: i32 = 1;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Ordered arguments supplied to a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputArguments(Vec<String>);

impl InputArguments {
    /// Wraps an ordered argument list.
    #[must_use]
    pub const fn new(arguments: Vec<String>) -> Self {
        Self(arguments)
    }

    /// Returns the arguments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the first argument, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Returns true when no arguments were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the arguments joined with single spaces.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }
}

impl From<Vec<String>> for InputArguments {
    fn from(arguments: Vec<String>) -> Self {
        Self(arguments)
    }
}

impl<S: Into<String>> FromIterator<S> for InputArguments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Binary result of an argument check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    /// First argument matched the expected greeting.
    Success,
    /// First argument was missing or different.
    Failure,
}

impl CheckOutcome {
    /// Returns the shell-style function status for this outcome.
    #[must_use]
    pub const fn return_code(self) -> i32 {
        match self {
            Self::Success => SUCCESS_CODE,
            Self::Failure => FAILURE_CODE,
        }
    }

    /// Maps a function status back to an outcome; only `SUCCESS_CODE` succeeds.
    #[must_use]
    pub const fn from_return_code(code: i32) -> Self {
        if code == SUCCESS_CODE { Self::Success } else { Self::Failure }
    }

    /// Returns true for [`CheckOutcome::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Decision
// ============================================================================

/// Checks whether the first argument is exactly [`EXPECTED_FIRST_ARGUMENT`].
#[must_use]
pub fn check<S: AsRef<str>>(args: &[S]) -> CheckOutcome {
    match args.first() {
        Some(first) if first.as_ref() == EXPECTED_FIRST_ARGUMENT => CheckOutcome::Success,
        _ => CheckOutcome::Failure,
    }
}

// ============================================================================
// SECTION: Checker
// ============================================================================

/// Runs [`check`] while echoing its input and announcing its status.
pub struct ArgumentChecker<S> {
    /// Destination for check diagnostics.
    sink: S,
}

impl<S: ReportSink> ArgumentChecker<S> {
    /// Creates a checker that reports into `sink`.
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
        }
    }

    /// Checks `args`, emitting the argument echo and the function status.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when the sink rejects a diagnostic.
    pub fn check_with_report(
        &mut self,
        args: &InputArguments,
    ) -> Result<CheckOutcome, ReportError> {
        self.sink.emit(&Diagnostic::CheckArguments {
            joined: args.joined(),
        })?;
        let outcome = check(args.as_slice());
        self.sink.emit(&Diagnostic::FunctionReturn {
            code: outcome.return_code(),
        })?;
        Ok(outcome)
    }

    /// Returns the underlying sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Echoes `args`, delegates to [`ArgumentChecker`], and emits the status line.
///
/// # Errors
///
/// Returns [`ReportError`] when the sink rejects a diagnostic.
pub fn run_report<S: ReportSink>(
    args: &InputArguments,
    mut sink: S,
) -> Result<CheckOutcome, ReportError> {
    sink.emit(&Diagnostic::ScriptArguments {
        joined: args.joined(),
    })?;
    let mut checker = ArgumentChecker::new(&mut sink);
    let code = checker.check_with_report(args)?.return_code();
    let outcome = CheckOutcome::from_return_code(code);
    sink.emit(&Diagnostic::Status {
        outcome,
    })?;
    Ok(outcome)
}
