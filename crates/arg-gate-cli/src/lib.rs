// crates/arg-gate-cli/src/lib.rs
// ============================================================================
// Module: arg-gate CLI Library
// Description: Shared helpers for the arg-gate command-line interface.
// Purpose: Provide reusable components (i18n, report sinks) for the binary and tests.
// Dependencies: arg-gate-core, serde_json
// ============================================================================

//! ## Overview
//! This library houses the CLI's internationalized message catalog and the
//! report sinks that render check diagnostics to stdout. The binary entry
//! point (`src/main.rs`) imports these helpers to keep all user-facing output
//! consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;
/// Report sinks rendering check diagnostics as text or JSON lines.
pub mod output;
