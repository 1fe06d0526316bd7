//! # Domain Errors
//!
//! Error types for the Governor Directory subsystem.
//!
//! ## Design Principles
//!
//! - Validation errors name the offending field and its bounds
//! - Absence is `Ok(None)`, never an error
//! - No panics in domain logic (use Result instead)

use shared_types::AddressError;
use thiserror::Error;

/// Errors that can occur during directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A description field exceeded its maximum length.
    #[error("invalid {field} length: got {got}, max {max}")]
    DescriptionTooLong {
        field: &'static str,
        got: usize,
        max: usize,
    },

    /// A status name outside the recognized table.
    #[error("unrecognized governor status: {0}")]
    UnrecognizedStatus(String),

    /// A stored address (power-index value) failed to decode.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// The underlying key-value store failed.
    #[error("store error: {0}")]
    Store(#[from] KvStoreError),

    /// A stored record failed to encode or decode. Stored bytes are
    /// validated before write, so a decode failure means store corruption;
    /// the surrounding operation aborts instead of recovering partially.
    #[error("codec error: {0}")]
    Codec(#[from] SerializationError),
}

/// Key-value store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KvStoreError {
    /// I/O error during read/write.
    #[error("key-value store I/O error: {message}")]
    Io { message: String },

    /// Data corruption in the store.
    #[error("key-value store corruption: {message}")]
    Corruption { message: String },
}

/// Serialization/deserialization errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("serialization error: {message}")]
pub struct SerializationError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_error_names_field_and_bounds() {
        let err = DirectoryError::DescriptionTooLong {
            field: "moniker",
            got: 99,
            max: 70,
        };
        let msg = err.to_string();
        assert!(msg.contains("moniker"));
        assert!(msg.contains("99"));
        assert!(msg.contains("70"));
    }

    #[test]
    fn test_kv_error_conversion() {
        let kv_err = KvStoreError::Io {
            message: "disk failure".to_string(),
        };
        let dir_err: DirectoryError = kv_err.into();

        match dir_err {
            DirectoryError::Store(inner) => {
                assert!(inner.to_string().contains("disk failure"));
            }
            other => panic!("expected Store error, got {other:?}"),
        }
    }
}
