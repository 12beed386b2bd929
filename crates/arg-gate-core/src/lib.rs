// crates/arg-gate-core/src/lib.rs
// ============================================================================
// Module: arg-gate Core Library
// Description: Public API surface for the argument checker.
// Purpose: Expose the check decision, its outcome, and report emission seams.
// Dependencies: crate::{checker, report}
// ============================================================================

//! ## Overview
//! arg-gate core decides whether an invocation's first argument is the
//! expected greeting and reports the decision through a [`ReportSink`]. The
//! decision itself is pure; only emission touches I/O, and it does so through
//! the sink supplied by the caller.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod checker;
pub mod report;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use checker::ArgumentChecker;
pub use checker::CheckOutcome;
pub use checker::EXPECTED_FIRST_ARGUMENT;
pub use checker::FAILURE_CODE;
pub use checker::InputArguments;
pub use checker::SUCCESS_CODE;
pub use checker::check;
pub use checker::run_report;
pub use report::Diagnostic;
pub use report::MemorySink;
pub use report::ReportError;
pub use report::ReportSink;
