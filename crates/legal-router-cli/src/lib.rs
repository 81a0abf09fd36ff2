// crates/legal-router-cli/src/lib.rs
// ============================================================================
// Module: Legal Router CLI Library
// Description: Shared helpers for the Legal Router command-line interface.
// Purpose: Provide reusable components for the CLI binary and tests.
// Dependencies: legal-router-core, serde_json
// ============================================================================

//! ## Overview
//! This library houses the CLI's input loading, text rendering, and the
//! JSON-lines decision log. The binary entry point (`src/main.rs`) wires them
//! to the command dispatcher.
//!
//! CLI inputs are untrusted: every file is read with a size cap.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// JSON-lines decision log.
pub mod audit;
/// Bounded input reads and document decoding.
pub mod input;
/// Plain-text report rendering.
pub mod render;
