//! Error types for keyring construction.
//!
//! Every failure carries enough context (index, path) to tell which key
//! record stopped the run.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for keyring operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum KeyringError {
    /// The record count argument is not a valid non-negative integer.
    #[error("invalid key count '{input}': {reason}")]
    InvalidCount { input: String, reason: String },

    /// A key record could not be opened or read.
    #[error("key record {index} ({}): {source}", .path.display())]
    ReadRecord {
        index: usize,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A key record is not a JSON object.
    #[error("malformed key record {index} ({}): {source}", .path.display())]
    MalformedRecord {
        index: usize,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A key record has no `pubkey` field.
    #[error("key record {index} ({}) has no pubkey field", .path.display())]
    MissingPubkey { index: usize, path: PathBuf },

    /// An existing keyring file could not be read.
    #[error("failed to read keyring {}: {source}", .path.display())]
    ReadKeyring {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The keyring file could not be written.
    #[error("failed to write keyring {}: {source}", .path.display())]
    WriteKeyring {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A keyring document is not an index-to-key JSON object.
    #[error("malformed keyring: {0}")]
    MalformedKeyring(#[source] serde_json::Error),

    /// A keyring's indices do not run from 0 to len - 1.
    #[error("keyring is missing index {missing} (has {len} entries)")]
    NonContiguousKeyring { missing: usize, len: usize },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for keyring operations.
pub type Result<T> = std::result::Result<T, KeyringError>;
