// crates/arg-gate-core/src/report.rs
// ============================================================================
// Module: Check Reporting
// Description: Diagnostic events and the sink interface that renders them.
// Purpose: Keep the check decision free of I/O while preserving emission order.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Every observable effect of a check run is a [`Diagnostic`] handed to a
//! [`ReportSink`]. Sinks decide how events are rendered (text lines, JSON,
//! or an in-memory buffer) and may fail; the decision itself never does.
//!
//! ## Invariants
//! - Diagnostics are emitted in run order and never reordered by the core.
//! - A sink failure aborts the run before any later diagnostic is emitted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::checker::CheckOutcome;

// ============================================================================
// SECTION: Diagnostics
// ============================================================================

/// A single report event emitted while checking arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Arguments received by the reporting wrapper, echoed before delegation.
    ScriptArguments {
        /// Space-joined arguments.
        joined: String,
    },
    /// Arguments received by the check function.
    CheckArguments {
        /// Space-joined arguments.
        joined: String,
    },
    /// Status code the check function is about to return.
    FunctionReturn {
        /// Shell-style status code (`0` on success).
        code: i32,
    },
    /// Final status line for the run.
    Status {
        /// Outcome derived from the function status.
        outcome: CheckOutcome,
    },
}

// ============================================================================
// SECTION: Sink Interface
// ============================================================================

/// Report sink errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Report sink reported an error.
    #[error("report error: {0}")]
    Sink(String),
}

/// Destination for check diagnostics.
pub trait ReportSink {
    /// Emits a single diagnostic.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when the diagnostic cannot be written.
    fn emit(&mut self, diagnostic: &Diagnostic) -> Result<(), ReportError>;
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, diagnostic: &Diagnostic) -> Result<(), ReportError> {
        (**self).emit(diagnostic)
    }
}

// ============================================================================
// SECTION: In-Memory Sink
// ============================================================================

/// Sink that buffers diagnostics in emission order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    /// Diagnostics captured so far.
    diagnostics: Vec<Diagnostic>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Returns the captured diagnostics.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the sink and returns the captured diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl ReportSink for MemorySink {
    fn emit(&mut self, diagnostic: &Diagnostic) -> Result<(), ReportError> {
        self.diagnostics.push(diagnostic.clone());
        Ok(())
    }
}
