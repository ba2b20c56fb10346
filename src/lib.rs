//! pubkeyring: consolidate per-identity key files into one public keyring.
//!
//! An external key generator writes one JSON key record per identity,
//! `all_keys/0.key`, `all_keys/1.key`, ... Each record holds at least a
//! `pubkey` field. This crate reads the first N records and writes a single
//! `pubkeyring_<N>.keys` document mapping each index (as a decimal string)
//! to that record's public key:
//!
//! ```text
//! {"0":"02dcdb96...","1":"02b266b2...","2":"031ea759..."}
//! ```
//!
//! Public keys are copied verbatim; nothing is decoded or verified.
//!
//! # Example
//!
//! ```rust,no_run
//! use pubkeyring::builder::{build_keyring, KeyringLayout};
//! use pubkeyring::Result;
//!
//! fn example() -> Result<()> {
//!     let keyring = build_keyring(&KeyringLayout::default(), 3)?;
//!     println!("{}", keyring);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use builder::{build_keyring, write_keyring, KeyringLayout};
pub use error::{KeyringError, Result};
pub use storage::keyring::Keyring;
pub use storage::record::KeyRecord;
