// crates/legal-router-core/src/core/hashing.rs
// ============================================================================
// Module: Legal Router Canonical Hashing
// Description: RFC 8785 JSON canonicalization and SHA-256 digests.
// Purpose: Fingerprint rule snapshots so audit records name the exact rules used.
// Dependencies: serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! Rule snapshots are hashed over their RFC 8785 (JCS) canonical JSON form, so
//! two snapshots with the same content always share a digest regardless of
//! key order or whitespace in the source file.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::fmt::Write as _;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

// ============================================================================
// SECTION: Hash Digest
// ============================================================================

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// SHA-256.
    Sha256,
}

impl HashAlgorithm {
    /// Returns the stable label for the algorithm.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

/// Content digest of a canonical JSON document.
///
/// # Invariants
/// - `value` is lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashDigest {
    /// Algorithm that produced the digest.
    pub algorithm: HashAlgorithm,
    /// Lowercase hex digest.
    pub value: String,
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm.as_str(), self.value)
    }
}

/// Errors raised while computing canonical digests.
#[derive(Debug, Error)]
pub enum HashError {
    /// The value could not be rendered as canonical JSON.
    #[error("failed to canonicalize json: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Hashing Helpers
// ============================================================================

/// Returns the RFC 8785 canonical JSON bytes for `value`.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when serialization fails.
pub fn canonical_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, HashError> {
    serde_jcs::to_vec(value).map_err(|err| HashError::Canonicalization(err.to_string()))
}

/// Hashes the canonical JSON form of `value` with SHA-256.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when serialization fails.
pub fn digest_canonical_json<T: Serialize + ?Sized>(value: &T) -> Result<HashDigest, HashError> {
    let bytes = canonical_json_bytes(value)?;
    let digest = Sha256::digest(&bytes);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        // Writing into a String cannot fail.
        let _ = write!(hex, "{byte:02x}");
    }
    Ok(HashDigest {
        algorithm: HashAlgorithm::Sha256,
        value: hex,
    })
}
