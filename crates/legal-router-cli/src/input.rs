// crates/legal-router-cli/src/input.rs
// ============================================================================
// Module: Legal Router CLI Inputs
// Description: Bounded file reads and JSON decoding for CLI input documents.
// Purpose: Load rule snapshots and extracted-info records from disk safely.
// Dependencies: legal-router-core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! CLI inputs are untrusted. Files are read with a hard size cap before any
//! parsing happens. Rule files hold either a bare array of rules or an object
//! with a `rules` array; info files hold one extracted-info record.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::path::Path;

use legal_router_core::ExtractedInfo;
use legal_router_core::Rule;
use legal_router_core::RuleSet;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors returned by bounded file reads.
#[derive(Debug, Error)]
pub enum ReadLimitError {
    /// File I/O failure.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// File size exceeds the configured limit.
    #[error("file size {size} exceeds limit {limit}")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Errors returned while loading an input document.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read within the size limit.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Display form of the input path.
        path: String,
        /// Underlying read failure.
        source: ReadLimitError,
    },
    /// The file is not valid JSON of the expected shape.
    #[error("invalid {kind} document {path}: {error}")]
    Decode {
        /// Document kind (`rules` or `info`).
        kind: &'static str,
        /// Display form of the input path.
        path: String,
        /// Decoder message.
        error: String,
    },
}

// ============================================================================
// SECTION: Bounded Reads
// ============================================================================

/// Reads a file from disk while enforcing a hard size limit.
///
/// # Errors
///
/// Returns [`ReadLimitError`] when the file cannot be read or is too large.
pub fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let mut limited = file.take(limit.saturating_add(1));
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Documents
// ============================================================================

/// Accepted shapes of a rules file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RulesDocument {
    /// Bare array of rules.
    Bare(Vec<Rule>),
    /// Object wrapping the rule array.
    Wrapped {
        /// Rules in store order.
        rules: Vec<Rule>,
    },
}

impl RulesDocument {
    /// Returns the contained rules as a snapshot.
    #[must_use]
    pub fn into_rule_set(self) -> RuleSet {
        match self {
            Self::Bare(rules)
            | Self::Wrapped {
                rules,
            } => RuleSet::new(rules),
        }
    }
}

/// Decodes a rules document from JSON bytes.
///
/// # Errors
///
/// Returns the decoder message when the bytes are not a rules document.
pub fn parse_rules(bytes: &[u8]) -> Result<RuleSet, String> {
    serde_json::from_slice::<RulesDocument>(bytes)
        .map(RulesDocument::into_rule_set)
        .map_err(|err| err.to_string())
}

/// Decodes an extracted-info record from JSON bytes.
///
/// # Errors
///
/// Returns the decoder message when the bytes are not an info record.
pub fn parse_info(bytes: &[u8]) -> Result<ExtractedInfo, String> {
    serde_json::from_slice(bytes).map_err(|err| err.to_string())
}

/// Loads a rules file with a size cap.
///
/// # Errors
///
/// Returns [`InputError`] when reading or decoding fails.
pub fn load_rules(path: &Path, max_bytes: usize) -> Result<RuleSet, InputError> {
    let bytes = read_input(path, max_bytes)?;
    parse_rules(&bytes).map_err(|error| InputError::Decode {
        kind: "rules",
        path: path.display().to_string(),
        error,
    })
}

/// Loads an extracted-info file with a size cap.
///
/// # Errors
///
/// Returns [`InputError`] when reading or decoding fails.
pub fn load_info(path: &Path, max_bytes: usize) -> Result<ExtractedInfo, InputError> {
    let bytes = read_input(path, max_bytes)?;
    parse_info(&bytes).map_err(|error| InputError::Decode {
        kind: "info",
        path: path.display().to_string(),
        error,
    })
}

/// Reads an input file, tagging failures with the path.
fn read_input(path: &Path, max_bytes: usize) -> Result<Vec<u8>, InputError> {
    read_bytes_with_limit(path, max_bytes).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })
}
