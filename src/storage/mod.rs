//! On-disk key documents.
//!
//! This module covers the per-identity key records read as input and the
//! aggregate keyring written as output.

pub mod keyring;
pub mod record;
