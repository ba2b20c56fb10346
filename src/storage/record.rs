//! Per-identity key records.
//!
//! A key record is a JSON object produced by an external key generator.
//! Only its `pubkey` field is consumed here; every other field (private
//! key, address, ...) is dropped on extraction and never copied out.

use crate::error::{KeyringError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Name of the field holding the public key.
pub const PUBKEY_FIELD: &str = "pubkey";

/// One parsed key record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct KeyRecord {
    fields: Map<String, Value>,
}

impl KeyRecord {
    /// Parse a record from its raw file contents.
    ///
    /// Fails if the bytes are not UTF-8 JSON or the top level is not an object.
    pub fn from_slice(contents: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(contents)
    }

    /// Consume the record and keep only its public key.
    ///
    /// The value is returned as-is; no decoding or validation is applied.
    pub fn into_pubkey(mut self) -> Option<Value> {
        self.fields.remove(PUBKEY_FIELD)
    }
}

/// Read and parse the key record for `index` from `path`.
///
/// The file is opened, read in full and closed before returning. Failing to
/// read is an I/O error; contents that are not a UTF-8 JSON object are a
/// format error.
pub fn read_record(path: &Path, index: usize) -> Result<KeyRecord> {
    let contents = fs::read(path).map_err(|source| KeyringError::ReadRecord {
        index,
        path: path.to_path_buf(),
        source,
    })?;

    KeyRecord::from_slice(&contents).map_err(|source| KeyringError::MalformedRecord {
        index,
        path: path.to_path_buf(),
        source,
    })
}
