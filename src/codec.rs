//! Codecs - serialize any [`Record`] for transport or storage.
//!
//! JSON (feature `json`) is the readable form: ids are bare integers and
//! timestamps are RFC 3339 strings. The binary form (feature `binary`) uses
//! bitcode and is meant for compact storage where the record type is known on
//! both ends. Joined reservation references are never encoded.

#[cfg(any(feature = "json", feature = "binary"))]
use crate::error::{RecordError, RecordResult};
#[cfg(any(feature = "json", feature = "binary"))]
use crate::model::Record;

#[cfg(feature = "json")]
pub fn to_json<R: Record>(record: &R) -> RecordResult<Vec<u8>> {
    let bytes = serde_json::to_vec(record).map_err(|e| RecordError::Encode {
        collection: R::COLLECTION,
        message: e.to_string(),
    })?;
    tracing::debug!(collection = R::COLLECTION, len = bytes.len(), "encoded record as json");
    Ok(bytes)
}

#[cfg(feature = "json")]
pub fn from_json<R: Record>(bytes: &[u8]) -> RecordResult<R> {
    tracing::debug!(collection = R::COLLECTION, len = bytes.len(), "decoding json record");
    serde_json::from_slice(bytes).map_err(|e| RecordError::Decode {
        collection: R::COLLECTION,
        message: e.to_string(),
    })
}

#[cfg(feature = "binary")]
pub fn to_bytes<R: Record>(record: &R) -> RecordResult<Vec<u8>> {
    let bytes = bitcode::serialize(record).map_err(|e| RecordError::Encode {
        collection: R::COLLECTION,
        message: e.to_string(),
    })?;
    tracing::debug!(collection = R::COLLECTION, len = bytes.len(), "encoded record as bitcode");
    Ok(bytes)
}

#[cfg(feature = "binary")]
pub fn from_bytes<R: Record>(bytes: &[u8]) -> RecordResult<R> {
    tracing::debug!(collection = R::COLLECTION, len = bytes.len(), "decoding bitcode record");
    bitcode::deserialize(bytes).map_err(|e| RecordError::Decode {
        collection: R::COLLECTION,
        message: e.to_string(),
    })
}
