// crates/legal-router-config/src/lib.rs
// ============================================================================
// Module: Legal Router Config Library
// Description: Canonical config model and validation for legal-router.toml.
// Purpose: Single source of truth for Legal Router configuration semantics.
// Dependencies: legal-router-core, serde, toml
// ============================================================================

//! ## Overview
//! `legal-router-config` defines the configuration model for Legal Router,
//! validates it fail-closed, and converts it into the core engine types so the
//! core crate never reads files.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
