//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the Governor Directory service: the ordered
//! key-value store, the governor record codec, and the parameter store.
//! These are the interfaces the host application implements; the adapters
//! module provides the in-process implementations.

use crate::domain::entities::Governor;
use crate::domain::errors::{KvStoreError, SerializationError};

/// Direction of a prefix scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Ascending byte-lexicographic key order.
    Ascending,
    /// Descending byte-lexicographic key order.
    Descending,
}

/// Abstract interface for ordered key-value store operations.
///
/// The directory's two indexes live side by side in one keyspace,
/// namespaced by prefix. Beyond point operations the store must support
/// prefix-ordered scans in both directions; the ranked index depends on
/// byte-lexicographic key order being honored exactly.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KvStoreError>;

    /// Put a single key-value pair, overwriting any existing entry.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KvStoreError>;

    /// Delete a key. Deleting a nonexistent key succeeds (idempotent).
    fn delete(&mut self, key: &[u8]) -> Result<(), KvStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KvStoreError>;

    /// Execute an atomic batch write: either every operation in the batch
    /// is applied, or none is.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KvStoreError>;

    /// Scan all entries whose key starts with `prefix`, in the given
    /// direction.
    ///
    /// The returned iterator is the open cursor: callers may stop early by
    /// dropping it, which releases the underlying resource on every exit
    /// path. Entries are yielded lazily; a bounded consumer never loads
    /// the full range.
    fn scan_prefix<'a>(
        &'a self,
        prefix: &[u8],
        direction: ScanDirection,
    ) -> Result<Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a>, KvStoreError>;
}

/// Batch operation for atomic writes.
#[derive(Debug, Clone)]
pub enum BatchOperation {
    /// Put a key-value pair.
    Put { key: Vec<u8>, value: Vec<u8> },
    /// Delete a key.
    Delete { key: Vec<u8> },
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a Delete operation.
    pub fn delete(key: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Delete { key: key.into() }
    }
}

/// Abstract interface for governor record serialization.
///
/// The pair must be injective: `unmarshal(marshal(g)) == g` for every
/// valid governor, no field excluded.
pub trait GovernorCodec: Send + Sync {
    /// Serialize a governor to bytes.
    fn marshal(&self, governor: &Governor) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize bytes to a governor.
    fn unmarshal(&self, data: &[u8]) -> Result<Governor, SerializationError>;
}

/// Abstract interface to the host's parameter store.
pub trait ParamsProvider: Send + Sync {
    /// Maximum number of active governors yielded by ranked iteration.
    fn max_governors(&self) -> u64;
}
