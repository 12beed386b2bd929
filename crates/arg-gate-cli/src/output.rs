// crates/arg-gate-cli/src/output.rs
// ============================================================================
// Module: CLI Report Sinks
// Description: Renders check diagnostics as localized text or JSON lines.
// Purpose: Connect the core report seam to the process output streams.
// Dependencies: arg-gate-core, serde_json
// ============================================================================

//! ## Overview
//! [`TextSink`] writes one localized line per diagnostic and [`JsonSink`]
//! writes one JSON object per diagnostic. Both are generic over
//! [`std::io::Write`] so the binary hands them stdout and tests hand them a
//! byte buffer. Write failures surface as [`ReportError`] with a localized
//! message naming the stream.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use arg_gate_core::CheckOutcome;
use arg_gate_core::Diagnostic;
use arg_gate_core::ReportError;
use arg_gate_core::ReportSink;

use crate::t;

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders a diagnostic as a single localized line (without newline).
#[must_use]
pub fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    match diagnostic {
        Diagnostic::ScriptArguments {
            joined,
        } => t!("report.script_arguments", args = joined),
        Diagnostic::CheckArguments {
            joined,
        } => t!("report.check_arguments", args = joined),
        Diagnostic::FunctionReturn {
            code,
        } => t!("report.function_return", code = code),
        Diagnostic::Status {
            outcome: CheckOutcome::Success,
        } => t!("report.status.success"),
        Diagnostic::Status {
            outcome: CheckOutcome::Failure,
        } => t!("report.status.failure"),
    }
}

/// Formats a localized output error message.
#[must_use]
pub fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

// ============================================================================
// SECTION: Text Sink
// ============================================================================

/// Sink writing one localized line per diagnostic.
pub struct TextSink<W> {
    /// Output stream.
    writer: W,
    /// Stream label used in error messages.
    stream: &'static str,
}

impl<W: Write> TextSink<W> {
    /// Creates a text sink over `writer`, labelled `stream` in errors.
    pub const fn new(writer: W, stream: &'static str) -> Self {
        Self {
            writer,
            stream,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> Result<(), ReportError> {
        let line = render_diagnostic(diagnostic);
        writeln!(self.writer, "{line}")
            .and_then(|()| self.writer.flush())
            .map_err(|err| ReportError::Sink(output_error(self.stream, &err)))
    }
}

// ============================================================================
// SECTION: JSON Sink
// ============================================================================

/// Sink writing one JSON object per diagnostic (JSON Lines).
pub struct JsonSink<W> {
    /// Output stream.
    writer: W,
    /// Stream label used in error messages.
    stream: &'static str,
}

impl<W: Write> JsonSink<W> {
    /// Creates a JSON sink over `writer`, labelled `stream` in errors.
    pub const fn new(writer: W, stream: &'static str) -> Self {
        Self {
            writer,
            stream,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> Result<(), ReportError> {
        let mut bytes = serde_json::to_vec(diagnostic)
            .map_err(|err| ReportError::Sink(t!("report.encode_failed", error = err)))?;
        bytes.push(b'\n');
        self.writer
            .write_all(&bytes)
            .and_then(|()| self.writer.flush())
            .map_err(|err| ReportError::Sink(output_error(self.stream, &err)))
    }
}
