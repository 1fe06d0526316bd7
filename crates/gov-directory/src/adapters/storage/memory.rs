//! # In-Memory Key-Value Store
//!
//! BTreeMap-backed store for unit tests and light embedding. The tree
//! keeps keys in byte-lexicographic order, which is exactly the contract
//! the directory's prefix scans depend on.

use std::collections::BTreeMap;

use crate::domain::errors::KvStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore, ScanDirection};

use super::scan_map_prefix;

/// In-memory ordered key-value store.
///
/// Batch writes are trivially atomic under the single-writer model: the
/// store is only ever mutated through an exclusive borrow.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, across all prefixes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl KeyValueStore for InMemoryKvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KvStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KvStoreError> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KvStoreError> {
        self.data.remove(key);
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KvStoreError> {
        Ok(self.data.contains_key(key))
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KvStoreError> {
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.data.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    self.data.remove(&key);
                }
            }
        }
        Ok(())
    }

    fn scan_prefix<'a>(
        &'a self,
        prefix: &[u8],
        direction: ScanDirection,
    ) -> Result<Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a>, KvStoreError> {
        Ok(scan_map_prefix(&self.data, prefix, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_delete() {
        let mut store = InMemoryKvStore::new();
        assert!(store.is_empty());

        store.put(b"key1", b"value1").unwrap();
        store.put(b"key2", b"value2").unwrap();
        assert_eq!(store.len(), 2);

        assert_eq!(store.get(b"key1").unwrap(), Some(b"value1".to_vec()));
        assert_eq!(store.get(b"key3").unwrap(), None);
        assert!(store.exists(b"key1").unwrap());

        store.delete(b"key1").unwrap();
        assert_eq!(store.get(b"key1").unwrap(), None);
    }

    #[test]
    fn test_delete_missing_key_is_idempotent() {
        let mut store = InMemoryKvStore::new();
        assert!(store.delete(b"missing").is_ok());
    }

    #[test]
    fn test_batch_write_applies_all_operations() {
        let mut store = InMemoryKvStore::new();
        store.put(b"stale", b"x").unwrap();

        let ops = vec![
            BatchOperation::delete(b"stale"),
            BatchOperation::put(b"a", b"1"),
            BatchOperation::put(b"b", b"2"),
        ];
        store.atomic_batch_write(ops).unwrap();

        assert_eq!(store.get(b"stale").unwrap(), None);
        assert_eq!(store.get(b"a").unwrap(), Some(b"1".to_vec()));
        assert_eq!(store.get(b"b").unwrap(), Some(b"2".to_vec()));
    }

    #[test]
    fn test_scan_prefix_ascending_order() {
        let mut store = InMemoryKvStore::new();
        store.put(b"g:c", b"3").unwrap();
        store.put(b"g:a", b"1").unwrap();
        store.put(b"g:b", b"2").unwrap();
        store.put(b"p:z", b"other-prefix").unwrap();

        let keys: Vec<_> = store
            .scan_prefix(b"g:", ScanDirection::Ascending)
            .unwrap()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec![b"g:a".to_vec(), b"g:b".to_vec(), b"g:c".to_vec()]);
    }

    #[test]
    fn test_scan_prefix_descending_order() {
        let mut store = InMemoryKvStore::new();
        store.put(b"p:a", b"1").unwrap();
        store.put(b"p:b", b"2").unwrap();

        let keys: Vec<_> = store
            .scan_prefix(b"p:", ScanDirection::Descending)
            .unwrap()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec![b"p:b".to_vec(), b"p:a".to_vec()]);
    }

    #[test]
    fn test_scan_prefix_excludes_other_prefixes() {
        let mut store = InMemoryKvStore::new();
        store.put(b"g:a", b"1").unwrap();
        store.put(b"h:a", b"2").unwrap();

        let entries: Vec<_> = store
            .scan_prefix(b"g:", ScanDirection::Ascending)
            .unwrap()
            .collect();
        assert_eq!(entries.len(), 1);
    }
}
