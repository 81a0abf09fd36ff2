// crates/legal-router-cli/src/audit.rs
// ============================================================================
// Module: Legal Router Decision Log
// Description: JSON-lines decision sink backed by an append-only file.
// Purpose: Persist routing and coverage audit events from CLI runs.
// Dependencies: legal-router-core, serde_json
// ============================================================================

//! ## Overview
//! Each event is serialized to one JSON object per line. Writes are guarded by
//! a mutex so a shared engine can log from several threads. Write failures
//! are returned to the engine, which hands them to the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use legal_router_core::CoverageAuditEvent;
use legal_router_core::DecisionSink;
use legal_router_core::RoutingAuditEvent;
use legal_router_core::SinkError;
use serde::Serialize;

// ============================================================================
// SECTION: JSONL Sink
// ============================================================================

/// Decision sink that appends JSON lines to a file.
pub struct JsonlDecisionLog {
    /// File handle used for append-only logging.
    file: Mutex<File>,
}

impl JsonlDecisionLog {
    /// Opens the decision log in append mode, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Serializes and appends one event.
    fn append<T: Serialize>(&self, event: &T) -> Result<(), SinkError> {
        let payload = serde_json::to_string(event).map_err(|err| SinkError::Write(err.to_string()))?;
        let mut file =
            self.file.lock().map_err(|_| SinkError::Write("decision log lock poisoned".to_string()))?;
        writeln!(file, "{payload}").map_err(|err| SinkError::Write(err.to_string()))?;
        file.flush().map_err(|err| SinkError::Write(err.to_string()))
    }
}

impl DecisionSink for JsonlDecisionLog {
    fn record_routing(&self, event: &RoutingAuditEvent) -> Result<(), SinkError> {
        self.append(event)
    }

    fn record_coverage(&self, event: &CoverageAuditEvent) -> Result<(), SinkError> {
        self.append(event)
    }
}
