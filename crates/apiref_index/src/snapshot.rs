//! Index snapshots using `MessagePack`.
//!
//! A snapshot stores the records in walk order. Decoding rebuilds the index,
//! so primary overloads and the id map are recomputed rather than stored.

use apiref_foundation::{Error, ErrorKind, Result};
use apiref_walker::RawRecord;

use crate::index::ModelIndex;

/// Serializes the records of an index to `MessagePack` bytes.
///
/// Uses named serialization so field names survive schema additions.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(index: &ModelIndex) -> Result<Vec<u8>> {
    let records: Vec<&RawRecord> = index.iter().collect();
    rmp_serde::to_vec_named(&records)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Rebuilds an index from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes cannot be decoded or repeat an id.
pub fn from_bytes(bytes: &[u8]) -> Result<ModelIndex> {
    let records: Vec<RawRecord> = rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))?;
    ModelIndex::try_from_records(records)
}
