//! The aggregate public keyring.
//!
//! A keyring maps each record index to that record's public key. On disk
//! it is a JSON object keyed by the decimal index (`{"0": ..., "1": ...}`),
//! with entries in ascending numeric order.

use crate::error::{KeyringError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Ordered mapping from record index to public key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyring {
    // Integer keys keep numeric order ("9" before "10"); serde_json
    // writes and reads them as decimal strings.
    keys: BTreeMap<usize, Value>,
}

impl Keyring {
    /// Create an empty keyring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the public key for `index`, returning any previous value.
    pub fn insert(&mut self, index: usize, pubkey: Value) -> Option<Value> {
        self.keys.insert(index, pubkey)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.keys.iter().map(|(index, pubkey)| (*index, pubkey))
    }

    /// Serialize to compact JSON. Non-ASCII text is written verbatim.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a keyring document.
    ///
    /// Consumers look keys up as `"0"`, `"1"`, ... up to the entry count,
    /// so the indices must be exactly `0..len`.
    pub fn from_json(contents: &str) -> Result<Self> {
        let keyring: Keyring =
            serde_json::from_str(contents).map_err(KeyringError::MalformedKeyring)?;
        keyring.check_contiguous()?;
        Ok(keyring)
    }

    /// Write the keyring to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        fs::write(path, json).map_err(|source| KeyringError::WriteKeyring {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Load a keyring previously written with [`Keyring::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| KeyringError::ReadKeyring {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents)
    }

    fn check_contiguous(&self) -> Result<()> {
        // Keys are sorted and unique, so the first gap is the first
        // position whose key differs from it.
        match self
            .keys
            .keys()
            .enumerate()
            .find(|(position, index)| position != *index)
        {
            Some((missing, _)) => Err(KeyringError::NonContiguousKeyring {
                missing,
                len: self.len(),
            }),
            None => Ok(()),
        }
    }
}

impl FromIterator<(usize, Value)> for Keyring {
    fn from_iter<I: IntoIterator<Item = (usize, Value)>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Keyring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample(count: usize) -> Keyring {
        (0..count).map(|i| (i, json!(format!("key-{}", i)))).collect()
    }

    #[test]
    fn test_empty_keyring() {
        let keyring = Keyring::new();
        assert!(keyring.is_empty());
        assert_eq!(keyring.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_to_json_string_keys() {
        let keyring: Keyring = [(0, json!("A")), (1, json!("B")), (2, json!("C"))]
            .into_iter()
            .collect();

        assert_eq!(keyring.to_json().unwrap(), r#"{"0":"A","1":"B","2":"C"}"#);
        assert_eq!(keyring.to_string(), r#"{"0":"A","1":"B","2":"C"}"#);
    }

    #[test]
    fn test_numeric_order() {
        let keyring = sample(12);
        let json = keyring.to_json().unwrap();

        let nine = json.find(r#""9""#).unwrap();
        let ten = json.find(r#""10""#).unwrap();
        assert!(nine < ten);

        let indices: Vec<usize> = keyring.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_non_ascii_written_verbatim() {
        let keyring: Keyring = [(0, json!("ключ"))].into_iter().collect();
        assert_eq!(keyring.to_json().unwrap(), r#"{"0":"ключ"}"#);
    }

    #[test]
    fn test_from_json_round_trip() {
        let keyring = sample(11);
        let parsed = Keyring::from_json(&keyring.to_json().unwrap()).unwrap();
        assert_eq!(parsed, keyring);
    }

    #[test]
    fn test_from_json_gap_rejected() {
        let result = Keyring::from_json(r#"{"0": "A", "2": "C"}"#);

        match result {
            Err(KeyringError::NonContiguousKeyring { missing, len }) => {
                assert_eq!(missing, 1);
                assert_eq!(len, 2);
            }
            other => panic!("Expected NonContiguousKeyring, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_not_starting_at_zero() {
        let result = Keyring::from_json(r#"{"1": "B"}"#);

        match result {
            Err(KeyringError::NonContiguousKeyring { missing, .. }) => assert_eq!(missing, 0),
            other => panic!("Expected NonContiguousKeyring, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_non_numeric_key() {
        let result = Keyring::from_json(r#"{"alice": "A"}"#);

        match result {
            Err(KeyringError::MalformedKeyring(_)) => {}
            other => panic!("Expected MalformedKeyring, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pubkeyring_5.keys");

        let keyring = sample(5);
        keyring.save(&path).unwrap();

        let loaded = Keyring::load(&path).unwrap();
        assert_eq!(loaded, keyring);
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pubkeyring_1.keys");
        fs::write(&path, "stale contents that are much longer than the keyring").unwrap();

        let keyring = sample(1);
        keyring.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"0":"key-0"}"#);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Keyring::load(&temp_dir.path().join("nope.keys"));

        match result {
            Err(KeyringError::ReadKeyring { .. }) => {}
            other => panic!("Expected ReadKeyring, got {:?}", other),
        }
    }
}
