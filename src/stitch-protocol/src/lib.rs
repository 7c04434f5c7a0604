//! Stitch Protocol - wire types for the edit service boundary.
//!
//! One edit request corresponds to one request/response cycle over a pipe:
//! the caller writes a single JSON object to the service's input stream and
//! closes it, then reads the full updated document from the output stream
//! on success or a diagnostic from the error stream on failure. There is no
//! pipelining and no cancellation; concurrent edits are independent
//! processes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur while reading a request off the wire.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The input stream could not be read.
    #[error("failed to read edit request: {0}")]
    Io(#[from] std::io::Error),

    /// The payload was not a well-formed edit request.
    #[error("malformed edit request: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A single edit request.
///
/// `replaceAll` may be omitted by the caller and defaults to replacing a
/// single occurrence. Unknown keys are rejected so a typo'd field fails
/// loudly instead of being silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EditRequest {
    /// Full text of the document to edit.
    pub content: String,
    /// The fragment to locate.
    pub old_string: String,
    /// The fragment to substitute.
    pub new_string: String,
    /// Whether every occurrence is replaced instead of exactly one.
    #[serde(default)]
    pub replace_all: bool,
}

impl EditRequest {
    /// Parses a request from a JSON payload.
    pub fn from_json_slice(bytes: &[u8]) -> ProtocolResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Reads a request from an input stream until EOF and parses it.
    /// Trailing whitespace after the JSON object is tolerated.
    pub fn from_reader(reader: impl std::io::Read) -> ProtocolResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the request to its wire form.
    pub fn to_json(&self) -> ProtocolResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
