// crates/arg-gate-core/tests/report.rs
// ============================================================================
// Module: Check Reporting Tests
// Description: Emission order and sink failure handling for check runs.
// Purpose: Ensure the wrapper emits the echo, function status, and status line.
// Dependencies: arg_gate_core, serde_json
// ============================================================================

//! ## Overview
//! Validates [`arg_gate_core::run_report`] emits diagnostics in run order and
//! stops at the first sink failure.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use arg_gate_core::ArgumentChecker;
use arg_gate_core::CheckOutcome;
use arg_gate_core::Diagnostic;
use arg_gate_core::InputArguments;
use arg_gate_core::MemorySink;
use arg_gate_core::ReportError;
use arg_gate_core::ReportSink;
use arg_gate_core::run_report;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Sink that fails once it has accepted `limit` diagnostics.
struct FailingSink {
    /// Number of diagnostics accepted before failing.
    limit: usize,
    /// Diagnostics accepted so far.
    accepted: Vec<Diagnostic>,
}

impl ReportSink for FailingSink {
    fn emit(&mut self, diagnostic: &Diagnostic) -> Result<(), ReportError> {
        if self.accepted.len() >= self.limit {
            return Err(ReportError::Sink("closed".to_string()));
        }
        self.accepted.push(diagnostic.clone());
        Ok(())
    }
}

fn args(values: &[&str]) -> InputArguments {
    values.iter().copied().collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn run_report_emits_diagnostics_in_order_on_success() {
    let mut sink = MemorySink::new();
    let outcome = run_report(&args(&["hello", "extra"]), &mut sink).unwrap();
    assert_eq!(outcome, CheckOutcome::Success);
    assert_eq!(
        sink.into_diagnostics(),
        vec![
            Diagnostic::ScriptArguments {
                joined: "hello extra".to_string(),
            },
            Diagnostic::CheckArguments {
                joined: "hello extra".to_string(),
            },
            Diagnostic::FunctionReturn {
                code: 0,
            },
            Diagnostic::Status {
                outcome: CheckOutcome::Success,
            },
        ]
    );
}

#[test]
fn run_report_reports_failure_for_empty_arguments() {
    let mut sink = MemorySink::new();
    let outcome = run_report(&InputArguments::default(), &mut sink).unwrap();
    assert_eq!(outcome, CheckOutcome::Failure);
    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 4);
    assert_eq!(
        diagnostics[2],
        Diagnostic::FunctionReturn {
            code: 1,
        }
    );
    assert_eq!(
        diagnostics[3],
        Diagnostic::Status {
            outcome: CheckOutcome::Failure,
        }
    );
}

#[test]
fn checker_emits_only_check_diagnostics() {
    let mut checker = ArgumentChecker::new(MemorySink::new());
    let outcome = checker.check_with_report(&args(&["world"])).unwrap();
    assert_eq!(outcome, CheckOutcome::Failure);
    let diagnostics = checker.into_sink().into_diagnostics();
    assert_eq!(
        diagnostics,
        vec![
            Diagnostic::CheckArguments {
                joined: "world".to_string(),
            },
            Diagnostic::FunctionReturn {
                code: 1,
            },
        ]
    );
}

#[test]
fn run_report_stops_at_first_sink_failure() {
    let mut sink = FailingSink {
        limit: 2,
        accepted: Vec::new(),
    };
    let err = run_report(&args(&["hello"]), &mut sink).unwrap_err();
    assert!(err.to_string().contains("closed"));
    assert_eq!(sink.accepted.len(), 2);
    assert!(matches!(sink.accepted[1], Diagnostic::CheckArguments { .. }));
}

#[test]
fn diagnostics_serialize_with_event_tag() {
    let status = serde_json::to_value(Diagnostic::Status {
        outcome: CheckOutcome::Success,
    })
    .unwrap();
    assert_eq!(status, json!({"event": "status", "outcome": "success"}));

    let code = serde_json::to_value(Diagnostic::FunctionReturn {
        code: 1,
    })
    .unwrap();
    assert_eq!(code, json!({"event": "function_return", "code": 1}));

    let echo = serde_json::to_value(Diagnostic::ScriptArguments {
        joined: "a b".to_string(),
    })
    .unwrap();
    assert_eq!(echo, json!({"event": "script_arguments", "joined": "a b"}));
}
