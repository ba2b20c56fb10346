//! Keyring construction.
//!
//! Reads `count` key records named by index from a keys directory and
//! collects their public keys into a [`Keyring`], then writes the keyring
//! to a file whose name encodes the count.
//!
//! # Example
//!
//! ```rust,no_run
//! use pubkeyring::builder::{build_keyring, write_keyring, KeyringLayout};
//!
//! # fn example() -> pubkeyring::Result<()> {
//! let layout = KeyringLayout::default();
//! let keyring = build_keyring(&layout, 3)?;
//! let path = write_keyring(&layout, 3, &keyring)?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

use crate::error::{KeyringError, Result};
use crate::storage::keyring::Keyring;
use crate::storage::record::read_record;
use std::path::PathBuf;
use tracing::{debug, info};

/// Default directory holding the per-identity key records.
pub const DEFAULT_KEYS_DIR: &str = "all_keys";

/// Extension of a key record file.
const RECORD_EXTENSION: &str = "key";

/// Where key records are read from and where the keyring is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyringLayout {
    keys_dir: PathBuf,
    output_dir: PathBuf,
}

impl Default for KeyringLayout {
    fn default() -> Self {
        Self::new(DEFAULT_KEYS_DIR, ".")
    }
}

impl KeyringLayout {
    pub fn new(keys_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            keys_dir: keys_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Path of the key record for `index`: `<keys_dir>/<index>.key`.
    pub fn record_path(&self, index: usize) -> PathBuf {
        self.keys_dir.join(format!("{}.{}", index, RECORD_EXTENSION))
    }

    /// Path of the keyring for `count` records: `<output_dir>/pubkeyring_<count>.keys`.
    pub fn keyring_path(&self, count: usize) -> PathBuf {
        self.output_dir.join(format!("pubkeyring_{}.keys", count))
    }
}

/// Parse the record count given on the command line.
///
/// # Example
///
/// ```
/// use pubkeyring::builder::parse_count;
///
/// assert_eq!(parse_count("3").unwrap(), 3);
/// assert!(parse_count("three").is_err());
/// ```
pub fn parse_count(input: &str) -> Result<usize> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|e| KeyringError::InvalidCount {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// Read records `0..count` and collect their public keys.
///
/// Stops at the first record that is missing, unreadable, malformed or has
/// no `pubkey`; nothing past that index is read. With `count == 0` no file
/// is touched and the keys directory need not exist.
pub fn build_keyring(layout: &KeyringLayout, count: usize) -> Result<Keyring> {
    let mut keyring = Keyring::new();

    for index in 0..count {
        let path = layout.record_path(index);
        debug!(index, path = %path.display(), "reading key record");

        let pubkey = read_record(&path, index)?
            .into_pubkey()
            .ok_or_else(|| KeyringError::MissingPubkey {
                index,
                path: path.clone(),
            })?;

        keyring.insert(index, pubkey);
    }

    Ok(keyring)
}

/// Write `keyring` to the layout's keyring path for `count`, overwriting
/// any existing file. Returns the path written.
pub fn write_keyring(layout: &KeyringLayout, count: usize, keyring: &Keyring) -> Result<PathBuf> {
    let path = layout.keyring_path(count);
    keyring.save(&path)?;

    info!(entries = keyring.len(), path = %path.display(), "wrote keyring");
    Ok(path)
}
